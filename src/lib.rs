// logdiff - lib.rs
//
// Library entry point, exposing the pipeline for integration testing and
// programmatic use. The binary in `main.rs` wires the CLI and the save
// prompt (`app::prompt`) onto the driver.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
