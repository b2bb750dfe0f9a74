// Library target exists for integration tests and criterion benchmarks.
// The binary entry point is main.rs; this file re-declares the module tree so
// that harnesses can import types via `dblab::quiz::*` / `dblab::content::*`.
// Most code is only exercised through the binary, so suppress dead_code
// warnings.
#![allow(dead_code)]

// Public: used directly by integration tests and benchmarks
pub mod content;
pub mod quiz;
pub mod store;

// Private: required transitively (won't compile without them)
mod app;
mod config;
mod event;
mod ui;
