use serde::{Deserialize, Serialize};

use crate::dates::format_publish_date;
use crate::error::{ContentError, ContentResult};
use crate::rich_text::{Document, RawNode};

/// Reading speed used for the "N min read" estimate
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl ImageRef {
    /// Absolute URL; the CMS serves protocol-relative `//host/path` sources
    pub fn absolute_url(&self) -> String {
        if self.src.starts_with("//") {
            format!("https:{}", self.src)
        } else {
            self.src.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub avatar: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// A blog post as resolved by the content source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    /// Rich-text body as delivered by the CMS
    pub content: RawNode,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub header_image: Option<ImageRef>,
    pub created_at: String,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub cta_text: Option<String>,
}

impl Post {
    pub fn from_json(json: &str) -> ContentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn primary_author(&self) -> ContentResult<&Author> {
        self.authors
            .first()
            .ok_or_else(|| ContentError::MissingAuthor(self.slug.clone()))
    }

    /// Publish date when set, creation date otherwise, e.g. "June 27th, 2025"
    pub fn display_date(&self) -> String {
        format_publish_date(self.publish_date.as_deref().unwrap_or(&self.created_at))
    }

    pub fn share_image_url(&self) -> Option<String> {
        self.header_image.as_ref().map(ImageRef::absolute_url)
    }

    pub fn document(&self, locale: &str) -> Document {
        Document::from_raw(&self.content, locale)
    }

    pub fn reading_minutes(&self, locale: &str) -> usize {
        (self.document(locale).word_count() / WORDS_PER_MINUTE).max(1)
    }
}
