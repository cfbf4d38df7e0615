use serde::{Deserialize, Serialize};

/// Colours and sizes shared by the rendered components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub green: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub light_gray: String,
    /// Colour of the not-yet-reached part of the progress track
    pub track_inactive: String,
    pub error_background: String,
    pub error_text: String,
    /// Width and height of a progress marker icon
    pub marker_size: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            green: "#3ecf8e".to_string(),
            text_primary: "#333".to_string(),
            text_secondary: "#8a8a8a".to_string(),
            light_gray: "#e6e6e6".to_string(),
            track_inactive: "#ccc".to_string(),
            error_background: "red".to_string(),
            error_text: "white".to_string(),
            marker_size: 20.0,
        }
    }
}

impl Theme {
    /// Inline style of the banner shown for content that cannot be rendered
    pub fn error_banner_style(&self) -> String {
        format!("background-color: {}; color: {};", self.error_background, self.error_text)
    }
}
