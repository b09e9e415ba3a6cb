//! Shared utilities for integration tests
#![allow(dead_code)]

pub mod source;

pub use source::*;
