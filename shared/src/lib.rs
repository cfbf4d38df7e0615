pub mod config;
pub mod content;
pub mod dates;
pub mod error;
pub mod pricing;
pub mod progress;
pub mod rich_text;
pub mod theme;
pub mod tick_layout;

pub use config::SiteConfig;
pub use content::{Author, ImageRef, Post, Tag};
pub use error::{ContentError, ContentResult};
pub use pricing::{PricingPlan, PricingTier};
pub use progress::{AchievedMarker, PotentialMarker, ProgressInput, ProgressLayout};
pub use rich_text::{Document, Node};
pub use theme::Theme;
pub use tick_layout::{TickGeometry, TickPlacement};
