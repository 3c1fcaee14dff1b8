//! Infrastructure adapters. Implement ports.
//!
//! Gemini, filesystem, HTTP server. Map errors to DomainError.

pub mod ai;
pub mod http;
pub mod persistence;
