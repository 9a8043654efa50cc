// logdiff - platform/mod.rs
//
// Platform layer: file reading/writing and config file loading.

pub mod config;
pub mod fs;
