//! Application use cases. Orchestrate domain logic via ports.

pub mod chat_service;

pub use chat_service::ChatService;
