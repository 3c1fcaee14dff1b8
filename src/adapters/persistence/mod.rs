//! Filesystem adapters.

pub mod context_file;

pub use context_file::load_business_context;
