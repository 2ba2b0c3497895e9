// logslice - platform/mod.rs
//
// Platform layer: filesystem access and configuration.

pub mod config;
pub mod fs;
