// logslice - app/mod.rs
//
// Application layer: orchestration of a single slice invocation.
// Dependencies: core and platform layers.

pub mod slice;
