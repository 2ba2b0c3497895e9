// logslice - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform, app, or the filesystem directly.
// Core code performs no logging; callers log around it.

pub mod filter;
pub mod model;
pub mod parser;
pub mod render;
pub mod slice;
