use serde::{Deserialize, Serialize};

/// Tier 1 is the free default tier and never gets a marker, so marker slot 0 maps to tier 2
pub const FIRST_MARKED_TIER: u32 = 2;

/// Translate a 0-based marker slot into the 1-based tier it activates
pub fn tier_for_slot(slot: usize) -> u32 {
    slot as u32 + FIRST_MARKED_TIER
}

/// A pricing tier as drawn on the progress track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    /// 1-based tier identifier
    pub tier: u32,
    /// Price in whole dollars
    pub price: u32,
    /// Horizontal shift of the price label relative to its marker
    pub label_offset: f64,
}

impl PricingTier {
    /// Price label, e.g. "$99"
    pub fn label(&self) -> String {
        format!("${}", self.price)
    }

    /// Marker ladder shown on the pricing page
    pub fn default_ladder() -> Vec<PricingTier> {
        [(0, -8.0), (99, 12.0), (499, 32.0)]
            .into_iter()
            .enumerate()
            .map(|(slot, (price, label_offset))| PricingTier {
                tier: tier_for_slot(slot),
                price,
                label_offset,
            })
            .collect()
    }
}

/// Pricing card content for one plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub tier: u32,
    pub price: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

impl PricingPlan {
    pub fn default_ladder() -> Vec<PricingPlan> {
        vec![
            PricingPlan {
                name: "Community".to_string(),
                tier: 1,
                price: 0,
                features: vec!["Public projects".to_string(), "Community support".to_string()],
            },
            PricingPlan {
                name: "Starter".to_string(),
                tier: 2,
                price: 0,
                features: vec!["Private projects".to_string(), "One seat".to_string()],
            },
            PricingPlan {
                name: "Team".to_string(),
                tier: 3,
                price: 99,
                features: vec!["Ten seats".to_string(), "Email support".to_string()],
            },
            PricingPlan {
                name: "Business".to_string(),
                tier: 4,
                price: 499,
                features: vec!["Unlimited seats".to_string(), "Priority support".to_string()],
            },
        ]
    }

    /// Number of achieved markers once this plan is selected
    pub fn achieved_ticks(&self) -> u32 {
        self.tier.saturating_sub(1)
    }
}
