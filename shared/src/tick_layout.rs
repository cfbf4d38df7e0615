use serde::{Deserialize, Serialize};
use tracing::debug;

/// Highest number of achieved ticks the progress track can show
pub const MAX_TICKS: u32 = 3;

/// Number of potential (not yet selected) tier markers on the track
pub const POTENTIAL_TICKS: u32 = 3;

/// Treat negative or non-finite widths as an un-laid-out track (0px)
pub fn sanitize_width(full_width: f64) -> f64 {
    if full_width.is_finite() && full_width > 0.0 {
        full_width
    } else {
        if full_width != 0.0 {
            debug!(full_width, "track width is not a usable pixel value, using 0");
        }
        0.0
    }
}

/// Clamp an externally supplied achieved-tick count to `[0, MAX_TICKS]`
pub fn clamp_ticks(tick: i64) -> u32 {
    let clamped = tick.clamp(0, MAX_TICKS as i64) as u32;
    if clamped as i64 != tick {
        debug!(tick, clamped, "achieved tick count out of range");
    }
    clamped
}

/// Original hand-tuned placement polynomial.
///
/// `dx = W / 4`, `delta = 2i` for even `i` (else 0),
/// `offset = i - delta + i*dx - 4i² - (i-1)*12`.
/// Kept for pixel parity with the deployed widget.
pub fn legacy_offset(index: u32, full_width: f64) -> f64 {
    let i = index as f64;
    let dx = full_width / 4.0;
    let delta = if index % 2 == 0 { i + i } else { 0.0 };
    i - delta + i * dx - 4.0 * (i * i) - (i - 1.0) * 12.0
}

/// Explicit linear layout for markers drawn as inline, relatively positioned icons.
///
/// Marker `i` sits on the `i`-th division of the track, pulled back by a fixed
/// inset and by the horizontal space every earlier inline marker already takes up.
/// With the default values it agrees with [`legacy_offset`] for markers 1..=3 up
/// to floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickGeometry {
    /// Number of equal divisions of the track
    pub segments: u32,
    /// Pixels every marker is shifted left by
    pub inset: f64,
    /// Inline advance of one preceding marker (icon width plus spacing)
    pub flow_advance: f64,
}

impl Default for TickGeometry {
    fn default() -> Self {
        Self {
            segments: 4,
            inset: 3.0,
            flow_advance: 27.0,
        }
    }
}

impl TickGeometry {
    /// Width of one track division
    pub fn segment_width(&self, full_width: f64) -> f64 {
        if self.segments == 0 {
            return 0.0;
        }
        full_width / self.segments as f64
    }

    /// Fixed correction applied to marker `index` regardless of track width
    pub fn correction(&self, index: u32) -> f64 {
        -self.inset - index.saturating_sub(1) as f64 * self.flow_advance
    }

    pub fn offset(&self, index: u32, full_width: f64) -> f64 {
        index as f64 * self.segment_width(full_width) + self.correction(index)
    }
}

/// How marker offsets are derived from the track width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TickPlacement {
    Geometric(TickGeometry),
    Legacy,
}

impl Default for TickPlacement {
    fn default() -> Self {
        TickPlacement::Geometric(TickGeometry::default())
    }
}

impl TickPlacement {
    /// Horizontal pixel offset of the 1-based marker `index` on a track `full_width` wide.
    /// Widths are sanitized first, so a track that has not laid out yet behaves as 0px.
    pub fn offset(&self, index: u32, full_width: f64) -> f64 {
        let width = sanitize_width(full_width);
        match self {
            TickPlacement::Geometric(geometry) => geometry.offset(index, width),
            TickPlacement::Legacy => legacy_offset(index, width),
        }
    }

    /// Offsets for markers `1..=count`
    pub fn offsets(&self, count: u32, full_width: f64) -> Vec<f64> {
        (1..=count).map(|i| self.offset(i, full_width)).collect()
    }
}
