use serde::{Deserialize, Serialize};

use crate::pricing::{tier_for_slot, PricingTier};
use crate::tick_layout::{clamp_ticks, sanitize_width, TickPlacement, POTENTIAL_TICKS};

/// Right offset of the fixed marker pinned to the end of the track
pub const END_MARKER_RIGHT: f64 = -8.0;

/// Sanitized inputs of the progress display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressInput {
    /// How far the fill bar is translated, in pixels
    pub px: f64,
    /// Number of achieved markers
    pub tick: u32,
    /// Track width in pixels (0 before layout)
    pub full_width: f64,
}

impl ProgressInput {
    pub fn new(px: f64, tick: i64, full_width: f64) -> Self {
        Self {
            px: if px.is_finite() { px } else { 0.0 },
            tick: clamp_ticks(tick),
            full_width: sanitize_width(full_width),
        }
    }
}

/// Marker for a tier that is already reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievedMarker {
    pub left: f64,
    /// Tier emitted when the marker is clicked
    pub tier: u32,
}

/// Greyed marker for a tier not yet selected, with its price label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialMarker {
    pub left: f64,
    pub tier: u32,
    /// Bare price of the tier, `None` when the ladder has no tier for the slot
    pub price: Option<u32>,
    pub label: String,
    pub label_margin: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressLayout {
    pub fill_offset: f64,
    pub achieved: Vec<AchievedMarker>,
    pub potential: Vec<PotentialMarker>,
    /// Right offset of the trailing fixed marker
    pub end_marker_right: f64,
}

impl ProgressLayout {
    /// Lay out every marker of one render pass.
    ///
    /// Potential markers always number `POTENTIAL_TICKS`; their labels come from
    /// `tiers` by slot and fall back to an empty label with no margin when the
    /// ladder is shorter.
    pub fn compute(input: &ProgressInput, placement: &TickPlacement, tiers: &[PricingTier]) -> Self {
        let achieved = placement
            .offsets(input.tick, input.full_width)
            .into_iter()
            .enumerate()
            .map(|(slot, left)| AchievedMarker {
                left,
                tier: tier_for_slot(slot),
            })
            .collect();

        let potential = placement
            .offsets(POTENTIAL_TICKS, input.full_width)
            .into_iter()
            .enumerate()
            .map(|(slot, left)| {
                let tier = tiers.get(slot);
                PotentialMarker {
                    left,
                    tier: tier_for_slot(slot),
                    price: tier.map(|t| t.price),
                    label: tier.map(PricingTier::label).unwrap_or_default(),
                    label_margin: tier.map(|t| t.label_offset).unwrap_or(0.0),
                }
            })
            .collect();

        Self {
            fill_offset: input.px,
            achieved,
            potential,
            end_marker_right: END_MARKER_RIGHT,
        }
    }
}

/// Fill translation that brings the bar up to the last achieved marker
pub fn fill_offset_for(tick: u32, full_width: f64) -> f64 {
    clamp_ticks(tick as i64) as f64 * sanitize_width(full_width) / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(tick: i64, full_width: f64) -> ProgressLayout {
        ProgressLayout::compute(
            &ProgressInput::new(0.0, tick, full_width),
            &TickPlacement::default(),
            &PricingTier::default_ladder(),
        )
    }

    #[test]
    fn test_zero_ticks_still_shows_potential_and_end_markers() {
        let layout = layout(0, 884.0);
        assert!(layout.achieved.is_empty());
        assert_eq!(layout.potential.len(), 3);
        assert_eq!(layout.end_marker_right, -8.0);
    }

    #[test]
    fn test_achieved_markers_follow_tick_count() {
        let layout = layout(2, 884.0);
        let lefts: Vec<f64> = layout.achieved.iter().map(|m| m.left).collect();
        assert_eq!(lefts, vec![218.0, 412.0]);
    }

    #[test]
    fn test_tick_count_is_clamped() {
        assert_eq!(layout(7, 884.0).achieved.len(), 3);
        assert!(layout(-1, 884.0).achieved.is_empty());
    }

    #[test]
    fn test_both_marker_kinds_emit_slot_plus_two() {
        let layout = layout(3, 884.0);
        let achieved: Vec<u32> = layout.achieved.iter().map(|m| m.tier).collect();
        let potential: Vec<u32> = layout.potential.iter().map(|m| m.tier).collect();
        assert_eq!(achieved, vec![2, 3, 4]);
        assert_eq!(potential, vec![2, 3, 4]);
    }

    #[test]
    fn test_label_margins_independent_of_width() {
        for width in [0.0, 300.0, 884.0, 1440.0] {
            let margins: Vec<f64> = layout(1, width).potential.iter().map(|m| m.label_margin).collect();
            assert_eq!(margins, vec![-8.0, 12.0, 32.0]);
        }
    }

    #[test]
    fn test_potential_labels() {
        let labels: Vec<String> = layout(0, 884.0).potential.into_iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["$0", "$99", "$499"]);
    }

    #[test]
    fn test_potential_prices() {
        let prices: Vec<Option<u32>> = layout(0, 884.0).potential.iter().map(|m| m.price).collect();
        assert_eq!(prices, vec![Some(0), Some(99), Some(499)]);
    }

    #[test]
    fn test_short_ladder_leaves_labels_empty() {
        let layout = ProgressLayout::compute(
            &ProgressInput::new(0.0, 0, 884.0),
            &TickPlacement::Legacy,
            &PricingTier::default_ladder()[..1],
        );
        assert_eq!(layout.potential.len(), 3);
        assert_eq!(layout.potential[2].label, "");
        assert_eq!(layout.potential[2].price, None);
        assert_eq!(layout.potential[2].label_margin, 0.0);
    }

    #[test]
    fn test_input_sanitizes_px() {
        assert_eq!(ProgressInput::new(f64::NAN, 1, 100.0).px, 0.0);
        assert_eq!(ProgressInput::new(42.5, 1, 100.0).px, 42.5);
    }

    #[test]
    fn test_fill_offset_for() {
        assert_eq!(fill_offset_for(0, 800.0), 0.0);
        assert_eq!(fill_offset_for(2, 800.0), 400.0);
        assert_eq!(fill_offset_for(9, 800.0), 600.0);
        assert_eq!(fill_offset_for(2, -1.0), 0.0);
    }
}
