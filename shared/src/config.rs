use serde::{Deserialize, Serialize};

/// Site-wide settings the templates build links and read localized fields with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Locale key used for localized content fields
    pub locale: String,
    /// Root path of the blog section
    pub blog_path: String,
    /// Target of call-to-action links
    pub cta_href: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            blog_path: "/blog".to_string(),
            cta_href: "/pricing".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_blog_path(mut self, blog_path: impl Into<String>) -> Self {
        self.blog_path = blog_path.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_cta_href(mut self, cta_href: impl Into<String>) -> Self {
        self.cta_href = cta_href.into();
        self
    }

    pub fn post_path(&self, slug: &str) -> String {
        format!("{}/{}", self.blog_path, slug)
    }

    pub fn author_path(&self, slug: &str) -> String {
        format!("{}/authors/{}", self.blog_path, slug)
    }

    pub fn tag_path(&self, slug: &str) -> String {
        format!("{}/tags/{}", self.blog_path, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = SiteConfig::default();
        assert_eq!(config.post_path("hello-world"), "/blog/hello-world");
        assert_eq!(config.author_path("jane"), "/blog/authors/jane");
        assert_eq!(config.tag_path("rust"), "/blog/tags/rust");
    }

    #[test]
    fn test_custom_blog_path_drops_trailing_slash() {
        let config = SiteConfig::default().with_blog_path("/community/");
        assert_eq!(config.blog_path, "/community");
        assert_eq!(config.author_path("jane"), "/community/authors/jane");
    }

    #[test]
    fn test_with_cta_href() {
        let config = SiteConfig::default().with_cta_href("/signup");
        assert_eq!(config.cta_href, "/signup");
        assert_eq!(SiteConfig::default().cta_href, "/pricing");
    }

    #[test]
    fn test_with_locale() {
        assert_eq!(SiteConfig::default().with_locale("de-DE").locale, "de-DE");
    }
}
