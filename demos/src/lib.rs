//! Shared setup for the coinscope runnable examples.

pub mod common;
pub mod file_store;
