// Library target exists for the criterion benches and the integration tests.
// The binary entry point is main.rs; this file re-declares the module tree so
// harnesses can import types via `hskdr::engine::*` / `hskdr::session::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by benches and tests/
pub mod dataset;
pub mod engine;
pub mod session;

// Private: compiled here too so the whole tree is checked by the lib target
mod app;
mod config;
mod event;
mod ui;
