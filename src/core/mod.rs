// logdiff - core/mod.rs
//
// Core business logic layer: extraction, pairing, diffing, reporting.
// Must NOT depend on: app or platform.

pub mod diff;
pub mod export;
pub mod filter;
pub mod model;
pub mod pairing;
pub mod parser;
pub mod report;
