pub mod ast;
pub mod check;
pub mod params;
pub mod run_common;
pub mod template_loader;
