//! Re-scrape use case implementation.
//!
//! This module provides the `RescrapeUsecase` which wires the plan lookup,
//! the bounded selection, and one channel session into the flow the modal
//! drives: open, select, submit, observe per-article progress, close.

use std::sync::Arc;

use tracing::warn;

use snkrsync_core::channel::{ChannelSession, ChannelTransport, SessionState};
use snkrsync_core::entity::Shoe;
use snkrsync_core::error::{Result, SnkrError};
use snkrsync_core::notify::Notifier;
use snkrsync_core::plan::{PlanService, SubscriptionPlan};
use snkrsync_core::selection::SelectionManager;
use snkrsync_core::status::ScrapeStatus;

/// Orchestrates one batch re-scrape, scoped to one modal lifetime.
///
/// # Responsibilities
///
/// - Resolving the selection bound from the subscription plan (fail closed
///   to the free tier when the lookup fails)
/// - Exposing the selection mutations the modal offers (toggle,
///   select-latest, reset)
/// - Driving the channel session: open once, submit once, pump responses
/// - Guaranteed teardown of the channel on every exit path
pub struct RescrapeUsecase {
    plan: SubscriptionPlan,
    selection: SelectionManager,
    session: ChannelSession,
}

impl RescrapeUsecase {
    /// Starts a new modal lifetime: resolves the plan and builds an empty
    /// bounded selection.
    ///
    /// A failed plan lookup falls back to the free tier (the most
    /// restrictive bound) rather than an unbounded one.
    pub async fn begin(
        plan_service: Arc<dyn PlanService>,
        transport: Box<dyn ChannelTransport>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let plan = match plan_service.fetch_plan().await {
            Ok(plan) => plan,
            Err(e) => {
                warn!("plan lookup failed, falling back to free tier: {e}");
                notifier.notify_error("Failed to load subscription plan");
                SubscriptionPlan::fallback()
            }
        };

        let selection = SelectionManager::new(plan.tier.max_selectable());
        let session = ChannelSession::new(transport, notifier);

        Self {
            plan,
            selection,
            session,
        }
    }

    /// The resolved subscription plan, for display.
    pub fn plan(&self) -> &SubscriptionPlan {
        &self.plan
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Per-article status for the rendering layer.
    pub fn status(&self, article: &str) -> Option<&ScrapeStatus> {
        self.session.store().get(article)
    }

    pub fn toggle(&mut self, shoe: &Shoe) {
        self.selection.toggle(shoe);
    }

    pub fn select_latest(&mut self, candidates: &[Shoe]) {
        self.selection.select_latest(candidates);
    }

    pub fn reset(&mut self) {
        self.selection.reset();
    }

    /// Opens the channel (if not already open) and submits the current
    /// selection as one batch request.
    ///
    /// # Errors
    ///
    /// Returns `EmptySelection` when nothing is selected (the modal
    /// disables the button, but the invariant is enforced here too), and
    /// propagates connect/send failures.
    pub async fn submit(&mut self) -> Result<()> {
        if self.selection.is_empty() {
            return Err(SnkrError::EmptySelection);
        }
        self.session.open().await?;
        self.session.submit(&self.selection).await
    }

    /// Drains streamed responses until the channel ends.
    pub async fn pump(&mut self) {
        self.session.pump().await;
    }

    /// Tears the channel down. Called on modal close, cancel, navigation
    /// and unmount alike; safe to call multiple times.
    pub async fn close(&mut self) {
        self.session.close().await;
    }
}
