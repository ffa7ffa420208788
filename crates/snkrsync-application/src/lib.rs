//! Application layer of the SnkrSync re-scrape client.
//!
//! Wires the domain core (`snkrsync-core`) to the production collaborators
//! (`snkrsync-infrastructure`) and exposes the use case the rendering layer
//! drives.

pub mod rescrape;

pub use rescrape::RescrapeUsecase;

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use snkrsync_core::config::{ApiConfig, ChannelConfig};
use snkrsync_core::error::Result;
use snkrsync_core::id::UuidRequestIdProvider;
use snkrsync_core::notify::Notification;
use snkrsync_infrastructure::{ChannelNotifier, HttpPlanService, WsTransport};

/// Builds a production `RescrapeUsecase` from endpoint configuration.
///
/// Returns the use case together with the notification receiver the UI
/// drains into toasts.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed. A failing
/// plan lookup is not an error here; the use case falls back to the free
/// tier.
pub async fn begin_rescrape(
    api: ApiConfig,
    channel: ChannelConfig,
) -> Result<(RescrapeUsecase, UnboundedReceiver<Notification>)> {
    let plan_service = Arc::new(HttpPlanService::new(api)?);
    let transport = Box::new(WsTransport::new(channel));
    let (notifier, notifications) = ChannelNotifier::new(Arc::new(UuidRequestIdProvider));

    let usecase = RescrapeUsecase::begin(plan_service, transport, Arc::new(notifier)).await;
    Ok((usecase, notifications))
}
