//! Subscription plan tiers and the plan lookup seam.
//!
//! The number of shoes a user may batch into one re-scrape depends on their
//! subscription plan. The tier is looked up once per modal-open from the
//! REST API; a failed lookup falls back to the most restrictive tier rather
//! than an unbounded one.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Subscription tier controlling how many shoes can be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Premium,
}

impl PlanTier {
    /// Maps a subscription name from the API to a tier.
    ///
    /// Anything that is not exactly `"premium"` maps to `Free` - unknown
    /// plan names get the restrictive bound, not the generous one.
    pub fn from_subscription(name: &str) -> Self {
        if name == "premium" {
            Self::Premium
        } else {
            Self::Free
        }
    }

    /// Maximum number of shoes selectable for one batch re-scrape.
    pub fn max_selectable(&self) -> usize {
        match self {
            Self::Free => 5,
            Self::Premium => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Premium => "premium",
        }
    }
}

impl Default for PlanTier {
    fn default() -> Self {
        PlanTier::Free
    }
}

/// A resolved subscription plan.
///
/// Keeps the raw subscription name from the API alongside the mapped tier
/// so the UI can display it verbatim ("Your current subscription is: ...").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    /// Subscription name exactly as the API reported it
    pub name: String,
    /// Tier the name was mapped to
    pub tier: PlanTier,
}

impl SubscriptionPlan {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let tier = PlanTier::from_subscription(&name);
        Self { name, tier }
    }

    /// The fallback plan used when the lookup fails (fail closed).
    pub fn fallback() -> Self {
        Self {
            name: "free".to_string(),
            tier: PlanTier::Free,
        }
    }
}

/// Lookup seam for the user's subscription plan.
///
/// Implementations query the tracking API; tests supply mocks.
#[async_trait::async_trait]
pub trait PlanService: Send + Sync {
    /// Fetches the current user's subscription plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the API is unreachable or the response cannot be
    /// interpreted. Callers are expected to fall back to
    /// [`SubscriptionPlan::fallback`].
    async fn fetch_plan(&self) -> Result<SubscriptionPlan>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premium_maps_to_ten() {
        assert_eq!(PlanTier::from_subscription("premium"), PlanTier::Premium);
        assert_eq!(PlanTier::Premium.max_selectable(), 10);
    }

    #[test]
    fn test_everything_else_maps_to_five() {
        assert_eq!(PlanTier::from_subscription("free").max_selectable(), 5);
        assert_eq!(PlanTier::from_subscription("trial").max_selectable(), 5);
        assert_eq!(PlanTier::from_subscription("").max_selectable(), 5);
    }

    #[test]
    fn test_fallback_is_free() {
        let plan = SubscriptionPlan::fallback();
        assert_eq!(plan.tier, PlanTier::Free);
        assert_eq!(plan.tier.max_selectable(), 5);
    }

    #[test]
    fn test_unknown_name_is_kept_verbatim() {
        let plan = SubscriptionPlan::new("enterprise");
        assert_eq!(plan.name, "enterprise");
        assert_eq!(plan.tier, PlanTier::Free);
    }
}
