//! Collaborator implementations for the SnkrSync client core.
//!
//! Everything here implements a trait seam from `snkrsync-core`:
//! the reqwest-backed plan lookup, the tokio-tungstenite scrape channel
//! transport, and the mpsc-backed notifier the UI drains.

pub mod channel_notifier;
pub mod http_plan_service;
pub mod ws_transport;

pub use crate::channel_notifier::ChannelNotifier;
pub use crate::http_plan_service::HttpPlanService;
pub use crate::ws_transport::WsTransport;
