//! Configuration management.

mod r#impl;
mod structs;

pub use structs::*;
