//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    BusinessContext, ChatReply, ChatRequest, Prompt, QUICK_REPLIES_MARKER, QUICK_REPLIES_SUFFIX,
    apply_quick_replies,
};
pub use errors::DomainError;
