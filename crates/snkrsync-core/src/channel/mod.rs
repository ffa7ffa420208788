//! Scrape channel domain module.
//!
//! One channel session lives as long as the re-scrape modal that opened it.
//! The session serializes the user's selection into a single batch request,
//! then demultiplexes the streamed per-article responses into the status
//! store.
//!
//! # Module Structure
//!
//! - `message`: wire codec (`ScrapeRequestItem`, `InboundMessage`)
//! - `transport`: connection seam (`ChannelTransport`, `TransportEvent`)
//! - `session`: lifecycle state machine (`ChannelSession`, `SessionState`)

pub mod message;
mod session;
mod transport;

pub use message::{InboundMessage, ScrapeRequestItem};
pub use session::{ChannelSession, SessionState};
pub use transport::{ChannelTransport, TransportEvent};
