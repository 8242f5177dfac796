//! Module descriptor (`.iml`) parsing and source-root resolution.
//!
//! Descriptors are IntelliJ-style XML. Parsing is lenient: only the fields
//! needed for source-root resolution are extracted, and no schema validation
//! happens beyond well-formedness. A `<module>` element carries one or more
//! sibling `<component>` elements; the source folders live under the one
//! named `NewModuleRootManager`, so components are selected by name rather
//! than by declaration order.

use crate::core::{ModuleDescriptor, SourceFolder};
use crate::errors::{Result, ScanError};
use roxmltree::{Document, Node};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const ROOT_MANAGER_COMPONENT: &str = "NewModuleRootManager";

/// Reads and parses one descriptor file.
///
/// An unreadable file or malformed XML is fatal for the whole scan. A
/// descriptor that parses but declares no source folders is a valid, empty
/// descriptor.
pub fn parse_descriptor_file(path: &Path) -> Result<ModuleDescriptor> {
    let content = fs::read_to_string(path).map_err(|source| ScanError::DescriptorRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_descriptor(&content).map_err(|source| ScanError::DescriptorXml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses descriptor XML into a `ModuleDescriptor`.
pub fn parse_descriptor(content: &str) -> std::result::Result<ModuleDescriptor, roxmltree::Error> {
    let document = Document::parse(content)?;
    let module = document.root_element();
    let name = module.attribute("name").unwrap_or_default().to_string();

    let source_folders = module
        .children()
        .filter(|node| node.is_element() && node.has_tag_name("component"))
        .find(|component| component.attribute("name") == Some(ROOT_MANAGER_COMPONENT))
        .map(|component| parse_source_folders(&component))
        .unwrap_or_default();

    Ok(ModuleDescriptor {
        name,
        source_folders,
    })
}

fn parse_source_folders(component: &Node<'_, '_>) -> Vec<SourceFolder> {
    component
        .children()
        .filter(|node| node.is_element() && node.has_tag_name("content"))
        .flat_map(|content| {
            content
                .children()
                .filter(|node| node.is_element() && node.has_tag_name("sourceFolder"))
                .map(|folder| SourceFolder {
                    url: folder.attribute("url").unwrap_or_default().to_string(),
                    is_test: bool_attribute(&folder, "isTestSource"),
                    generated: bool_attribute(&folder, "generated"),
                    kind: folder.attribute("type").unwrap_or_default().to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn bool_attribute(node: &Node<'_, '_>, name: &str) -> bool {
    node.attribute(name) == Some("true")
}

/// Resolves the primary source root for a descriptor on disk.
///
/// The source-folder URL's trailing segment is joined onto the descriptor's
/// parent directory; URL schemes and variable prefixes are discarded. Returns
/// `None` when the module has no eligible source folder — an expected
/// absence, not an error.
pub fn resolve_source_root(descriptor_path: &Path, descriptor: &ModuleDescriptor) -> Option<PathBuf> {
    let url = descriptor.primary_source_url()?;
    let base = url.rsplit('/').next().unwrap_or(url);
    let parent = descriptor_path.parent().unwrap_or_else(|| Path::new(""));
    Some(parent.join(base))
}

/// Parses every located descriptor and maps each resolved source root to its
/// owning module path. Modules without an eligible source folder contribute
/// nothing.
pub fn resolve_source_roots(module_paths: &[PathBuf]) -> Result<HashMap<PathBuf, PathBuf>> {
    let mut roots = HashMap::with_capacity(module_paths.len());
    for module_path in module_paths {
        let descriptor = parse_descriptor_file(module_path)?;
        match resolve_source_root(module_path, &descriptor) {
            Some(src_dir) => {
                roots.insert(src_dir, module_path.clone());
            }
            None => {
                log::debug!(
                    "skipping {}: no eligible source folder",
                    module_path.display()
                );
            }
        }
    }
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const SIMPLE_IML: &str = indoc! {r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <module type="JAVA_MODULE" version="4">
          <component name="NewModuleRootManager" inherit-compiler-output="true">
            <content url="file://$MODULE_DIR$">
              <sourceFolder url="file://$MODULE_DIR$/src" isTestSource="false" />
              <sourceFolder url="file://$MODULE_DIR$/testSrc" isTestSource="true" />
            </content>
          </component>
        </module>
    "#};

    #[test]
    fn parses_source_folders_from_root_manager_component() {
        let descriptor = parse_descriptor(SIMPLE_IML).unwrap();
        assert_eq!(descriptor.source_folders.len(), 2);
        assert_eq!(
            descriptor.primary_source_url(),
            Some("file://$MODULE_DIR$/src")
        );
    }

    #[test]
    fn selects_root_manager_among_sibling_components() {
        // Component order must not matter: the folders live under the
        // component selected by name, not the first one declared.
        let content = indoc! {r#"
            <module type="GENERAL_MODULE" version="4">
              <component name="DevKit.ModuleBuildProperties" url="something" />
              <component name="NewModuleRootManager">
                <content url="file://$MODULE_DIR$">
                  <sourceFolder url="file://$MODULE_DIR$/src" />
                </content>
              </component>
            </module>
        "#};
        let descriptor = parse_descriptor(content).unwrap();
        assert_eq!(
            descriptor.primary_source_url(),
            Some("file://$MODULE_DIR$/src")
        );
    }

    #[test]
    fn missing_root_manager_component_yields_no_folders() {
        let content = indoc! {r#"
            <module type="WEB_MODULE" version="4">
              <component name="SomethingElse" />
            </module>
        "#};
        let descriptor = parse_descriptor(content).unwrap();
        assert!(descriptor.source_folders.is_empty());
        assert_eq!(descriptor.primary_source_url(), None);
    }

    #[test]
    fn generated_and_resource_folders_are_passed_through_with_flags() {
        let content = indoc! {r#"
            <module type="JAVA_MODULE" version="4">
              <component name="NewModuleRootManager">
                <content url="file://$MODULE_DIR$">
                  <sourceFolder url="file://$MODULE_DIR$/gen" generated="true" />
                  <sourceFolder url="file://$MODULE_DIR$/res" type="java-resource" />
                  <sourceFolder url="file://$MODULE_DIR$/src" />
                </content>
              </component>
            </module>
        "#};
        let descriptor = parse_descriptor(content).unwrap();
        assert!(descriptor.source_folders[0].generated);
        assert!(descriptor.source_folders[1].is_resource());
        assert_eq!(
            descriptor.primary_source_url(),
            Some("file://$MODULE_DIR$/src")
        );
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(parse_descriptor("<module><component").is_err());
    }

    #[test]
    fn source_root_joins_descriptor_dir_with_url_basename() {
        let descriptor = parse_descriptor(SIMPLE_IML).unwrap();
        let root = resolve_source_root(
            Path::new("platform/util/intellij.platform.util.iml"),
            &descriptor,
        );
        assert_eq!(root, Some(PathBuf::from("platform/util/src")));
    }

    #[test]
    fn test_only_descriptor_resolves_to_no_root() {
        let content = indoc! {r#"
            <module type="JAVA_MODULE" version="4">
              <component name="NewModuleRootManager">
                <content url="file://$MODULE_DIR$">
                  <sourceFolder url="file://$MODULE_DIR$/src" isTestSource="true" />
                </content>
              </component>
            </module>
        "#};
        let descriptor = parse_descriptor(content).unwrap();
        assert_eq!(
            resolve_source_root(Path::new("a/b.iml"), &descriptor),
            None
        );
    }
}
