pub mod modules;
pub mod scan;
