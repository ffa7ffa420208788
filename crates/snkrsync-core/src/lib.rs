//! Domain layer of the SnkrSync re-scrape client.
//!
//! This crate owns the batch re-scrape workflow's state: the bounded
//! selection of shoes, the channel session that submits a batch and routes
//! streamed per-article responses, and the per-article status store the
//! rendering layer observes. All I/O (REST plan lookup, WebSocket
//! transport, toast notifications) sits behind trait seams implemented in
//! `snkrsync-infrastructure`.

pub mod channel;
pub mod config;
pub mod entity;
pub mod error;
pub mod id;
pub mod notify;
pub mod plan;
pub mod selection;
pub mod status;

// Re-export common error type
pub use error::SnkrError;
