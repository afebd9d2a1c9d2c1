//! Core adapter trait definitions

mod adapter;

pub use adapter::CompletionAdapter;
