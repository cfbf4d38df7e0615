//! Rich-text documents from the headless CMS.
//!
//! The CMS delivers a loosely typed JSON tree (`nodeType`, `data`, `content`,
//! `value`, `marks`). It is deserialized into [`RawNode`] and then converted
//! into the closed [`Node`] union the templates match on. Node kinds the
//! renderer does not know become [`Node::Unsupported`]; known kinds with
//! broken payloads become [`Node::Invalid`]. Both render as a visible banner.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ContentError, ContentResult};

/// Locale tried when the configured locale has no value
pub const FALLBACK_LOCALE: &str = "en-US";

const VIMEO_MARKER: &str = "player.vimeo.com/video";
const YOUTUBE_MARKER: &str = "youtube.com/embed";
const YOUTUBE_ALLOW: &str = "accelerometer; encrypted-media; gyroscope; picture-in-picture";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub node_type: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub content: Vec<RawNode>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub marks: Vec<RawMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMark {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
}

impl Mark {
    fn parse(kind: &str) -> Option<Self> {
        match kind {
            "bold" => Some(Mark::Bold),
            "italic" => Some(Mark::Italic),
            "underline" => Some(Mark::Underline),
            "code" => Some(Mark::Code),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub value: String,
    pub marks: Vec<Mark>,
}

impl TextRun {
    pub fn has_mark(&self, mark: Mark) -> bool {
        self.marks.contains(&mark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoProvider {
    Vimeo,
    YouTube,
}

impl VideoProvider {
    pub fn detect(uri: &str) -> Option<Self> {
        if uri.contains(VIMEO_MARKER) {
            Some(VideoProvider::Vimeo)
        } else if uri.contains(YOUTUBE_MARKER) {
            Some(VideoProvider::YouTube)
        } else {
            None
        }
    }

    /// Value of the iframe `allow` attribute
    pub fn allow(&self) -> Option<&'static str> {
        match self {
            VideoProvider::Vimeo => None,
            VideoProvider::YouTube => Some(YOUTUBE_ALLOW),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Hyperlink {
    /// Player URL rendered as an embedded iframe
    Video {
        provider: VideoProvider,
        uri: String,
        title: String,
    },
    Link {
        uri: String,
        children: Vec<Node>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Application,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedAsset {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub content_type: String,
    pub file_name: Option<String>,
}

impl EmbeddedAsset {
    fn from_data(data: &Value, locale: &str) -> ContentResult<Self> {
        const NODE: &str = "embedded-asset-block";
        let fields = data
            .pointer("/target/fields")
            .ok_or_else(|| ContentError::missing(NODE, "target.fields"))?;
        let file = fields
            .get("file")
            .and_then(|f| localized(f, locale))
            .ok_or_else(|| ContentError::missing(NODE, "file"))?;

        Ok(Self {
            title: localized_str(fields.get("title"), locale),
            description: localized_str(fields.get("description"), locale),
            url: required_str(file, "url", NODE)?,
            content_type: required_str(file, "contentType", NODE)?,
            file_name: file
                .pointer("/details/fileName")
                .or_else(|| file.get("fileName"))
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }

    /// Classify by the MIME group (the part before `/`)
    pub fn kind(&self) -> AssetKind {
        match self.content_type.split('/').next() {
            Some("image") => AssetKind::Image,
            Some("application") => AssetKind::Application,
            _ => AssetKind::Other,
        }
    }

    /// Text of a download link: title, then file name, then the URL itself
    pub fn link_text(&self) -> &str {
        self.title
            .as_deref()
            .or(self.file_name.as_deref())
            .unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeSnippet {
    pub title: String,
    pub language: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddedEntry {
    CodeSnippet(CodeSnippet),
    Other { content_type: String },
}

impl EmbeddedEntry {
    fn from_data(data: &Value, locale: &str) -> ContentResult<Self> {
        const NODE: &str = "embedded-entry-block";
        let target = data
            .get("target")
            .ok_or_else(|| ContentError::missing(NODE, "target"))?;
        let content_type = target
            .pointer("/sys/contentType/sys/id")
            .and_then(Value::as_str)
            .ok_or_else(|| ContentError::missing(NODE, "sys.contentType.sys.id"))?;

        match content_type {
            "codeSnippet" => {
                let fields = target
                    .get("fields")
                    .ok_or_else(|| ContentError::missing(NODE, "fields"))?;
                let code = localized_str(fields.get("code"), locale)
                    .ok_or_else(|| ContentError::missing(NODE, "code"))?;
                Ok(EmbeddedEntry::CodeSnippet(CodeSnippet {
                    title: localized_str(fields.get("title"), locale).unwrap_or_default(),
                    language: localized_str(fields.get("language"), locale).unwrap_or_default(),
                    code,
                }))
            }
            other => Ok(EmbeddedEntry::Other {
                content_type: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Document(Vec<Node>),
    Paragraph(Vec<Node>),
    Heading { level: u8, children: Vec<Node> },
    Text(TextRun),
    UnorderedList(Vec<Node>),
    OrderedList(Vec<Node>),
    ListItem(Vec<Node>),
    Quote(Vec<Node>),
    Rule,
    Hyperlink(Hyperlink),
    EmbeddedAsset(EmbeddedAsset),
    EmbeddedEntry(EmbeddedEntry),
    /// A node kind the renderer has no mapping for
    Unsupported { node_type: String },
    /// A known node kind whose payload is missing required fields
    Invalid { node_type: String, reason: String },
}

impl Node {
    pub fn from_raw(raw: &RawNode, locale: &str) -> Node {
        let children = || convert_all(&raw.content, locale);

        match raw.node_type.as_str() {
            "document" => Node::Document(children()),
            "paragraph" => Node::Paragraph(children()),
            "text" => Node::Text(text_run(raw)),
            "unordered-list" => Node::UnorderedList(children()),
            "ordered-list" => Node::OrderedList(children()),
            "list-item" => Node::ListItem(children()),
            "blockquote" => Node::Quote(children()),
            "hr" => Node::Rule,
            "hyperlink" => match raw.data.get("uri").and_then(Value::as_str) {
                Some(uri) => Node::Hyperlink(hyperlink(uri, raw, locale)),
                None => invalid(raw, ContentError::missing("hyperlink", "uri")),
            },
            "embedded-asset-block" => match EmbeddedAsset::from_data(&raw.data, locale) {
                Ok(asset) => Node::EmbeddedAsset(asset),
                Err(e) => invalid(raw, e),
            },
            "embedded-entry-block" => match EmbeddedEntry::from_data(&raw.data, locale) {
                Ok(entry) => Node::EmbeddedEntry(entry),
                Err(e) => invalid(raw, e),
            },
            other => match heading_level(other) {
                Some(level) => Node::Heading {
                    level,
                    children: children(),
                },
                None => {
                    debug!(node_type = other, "no renderer for rich-text node");
                    Node::Unsupported {
                        node_type: other.to_string(),
                    }
                }
            },
        }
    }

    fn is_block(&self) -> bool {
        !matches!(self, Node::Text(_) | Node::Hyperlink(_))
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(run) => out.push_str(&run.value),
            Node::Hyperlink(Hyperlink::Link { children, .. }) => {
                children.iter().for_each(|child| child.collect_text(out))
            }
            Node::Document(children)
            | Node::Paragraph(children)
            | Node::Heading { children, .. }
            | Node::UnorderedList(children)
            | Node::OrderedList(children)
            | Node::ListItem(children)
            | Node::Quote(children) => children.iter().for_each(|child| child.collect_text(out)),
            _ => {}
        }
        if self.is_block() && !out.ends_with('\n') && !out.is_empty() {
            out.push('\n');
        }
    }
}

/// A converted rich-text tree, ready to render
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub content: Vec<Node>,
}

impl Document {
    pub fn from_raw(raw: &RawNode, locale: &str) -> Self {
        match Node::from_raw(raw, locale) {
            Node::Document(content) => Self { content },
            node => Self { content: vec![node] },
        }
    }

    pub fn from_json(json: &str, locale: &str) -> ContentResult<Self> {
        let raw: RawNode = serde_json::from_str(json)?;
        Ok(Self::from_raw(&raw, locale))
    }

    /// Text content with one line per block
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.content {
            node.collect_text(&mut out);
        }
        out.trim_end().to_string()
    }

    pub fn word_count(&self) -> usize {
        self.plain_text().split_whitespace().count()
    }
}

fn convert_all(nodes: &[RawNode], locale: &str) -> Vec<Node> {
    nodes.iter().map(|node| Node::from_raw(node, locale)).collect()
}

fn invalid(raw: &RawNode, error: ContentError) -> Node {
    warn!(node_type = %raw.node_type, error = %error, "rich-text node cannot be rendered");
    Node::Invalid {
        node_type: raw.node_type.clone(),
        reason: error.to_string(),
    }
}

fn heading_level(node_type: &str) -> Option<u8> {
    node_type
        .strip_prefix("heading-")
        .and_then(|level| level.parse::<u8>().ok())
        .filter(|level| (1..=6).contains(level))
}

fn text_run(raw: &RawNode) -> TextRun {
    let marks = raw
        .marks
        .iter()
        .filter_map(|mark| {
            let parsed = Mark::parse(&mark.kind);
            if parsed.is_none() {
                debug!(mark = %mark.kind, "ignoring unknown text mark");
            }
            parsed
        })
        .collect();

    TextRun {
        value: raw.value.clone().unwrap_or_default(),
        marks,
    }
}

fn hyperlink(uri: &str, raw: &RawNode, locale: &str) -> Hyperlink {
    match VideoProvider::detect(uri) {
        Some(provider) => Hyperlink::Video {
            provider,
            uri: uri.to_string(),
            title: raw
                .content
                .first()
                .and_then(|child| child.value.clone())
                .unwrap_or_default(),
        },
        None => Hyperlink::Link {
            uri: uri.to_string(),
            children: convert_all(&raw.content, locale),
        },
    }
}

/// Pick the value for `locale` out of a localized field map, falling back to
/// `FALLBACK_LOCALE` and then to the field itself for unlocalized payloads.
pub fn localized<'a>(field: &'a Value, locale: &str) -> Option<&'a Value> {
    if field.is_null() {
        return None;
    }
    field
        .get(locale)
        .or_else(|| field.get(FALLBACK_LOCALE))
        .or(Some(field))
}

fn localized_str(field: Option<&Value>, locale: &str) -> Option<String> {
    field
        .and_then(|f| localized(f, locale))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn required_str(value: &Value, key: &str, node: &str) -> ContentResult<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ContentError::missing(node, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(value: Value) -> Node {
        let raw: RawNode = serde_json::from_value(value).unwrap();
        Node::from_raw(&raw, "en-US")
    }

    fn asset_node(content_type: &str) -> Value {
        json!({
            "nodeType": "embedded-asset-block",
            "data": { "target": { "fields": {
                "title": { "en-US": "Diagram" },
                "description": { "en-US": "Architecture overview" },
                "file": { "en-US": {
                    "url": "//images.example.com/diagram",
                    "contentType": content_type,
                    "details": { "fileName": "diagram.bin" }
                }}
            }}},
            "content": []
        })
    }

    #[test]
    fn test_paragraph_with_marked_text() {
        let node = convert(json!({
            "nodeType": "paragraph",
            "content": [
                { "nodeType": "text", "value": "let x = 1;", "marks": [{ "type": "code" }, { "type": "sparkle" }] }
            ]
        }));

        let Node::Paragraph(children) = node else { panic!("expected paragraph") };
        let Node::Text(run) = &children[0] else { panic!("expected text") };
        assert_eq!(run.value, "let x = 1;");
        assert_eq!(run.marks, vec![Mark::Code]);
        assert!(run.has_mark(Mark::Code));
    }

    #[test]
    fn test_headings() {
        assert!(matches!(
            convert(json!({ "nodeType": "heading-2", "content": [] })),
            Node::Heading { level: 2, .. }
        ));
        assert_eq!(
            convert(json!({ "nodeType": "heading-9", "content": [] })),
            Node::Unsupported { node_type: "heading-9".to_string() }
        );
    }

    #[test]
    fn test_image_asset() {
        let Node::EmbeddedAsset(asset) = convert(asset_node("image/png")) else { panic!("expected asset") };
        assert_eq!(asset.kind(), AssetKind::Image);
        assert_eq!(asset.title.as_deref(), Some("Diagram"));
        assert_eq!(asset.description.as_deref(), Some("Architecture overview"));
        assert_eq!(asset.url, "//images.example.com/diagram");
    }

    #[test]
    fn test_application_asset_link_text() {
        let Node::EmbeddedAsset(mut asset) = convert(asset_node("application/pdf")) else { panic!("expected asset") };
        assert_eq!(asset.kind(), AssetKind::Application);
        assert_eq!(asset.link_text(), "Diagram");

        asset.title = None;
        assert_eq!(asset.link_text(), "diagram.bin");
    }

    #[test]
    fn test_other_asset_kind() {
        let Node::EmbeddedAsset(asset) = convert(asset_node("video/mp4")) else { panic!("expected asset") };
        assert_eq!(asset.kind(), AssetKind::Other);
        assert_eq!(asset.content_type, "video/mp4");
    }

    #[test]
    fn test_asset_without_file_is_invalid() {
        let node = convert(json!({
            "nodeType": "embedded-asset-block",
            "data": { "target": { "fields": { "title": { "en-US": "Broken" } } } }
        }));
        let Node::Invalid { node_type, reason } = node else { panic!("expected invalid") };
        assert_eq!(node_type, "embedded-asset-block");
        assert!(reason.contains("file"));
    }

    #[test]
    fn test_code_snippet_entry() {
        let node = convert(json!({
            "nodeType": "embedded-entry-block",
            "data": { "target": {
                "sys": { "contentType": { "sys": { "id": "codeSnippet" } } },
                "fields": {
                    "title": { "en-US": "main.rs" },
                    "language": { "en-US": "rust" },
                    "code": { "en-US": "fn main() {}" }
                }
            }}
        }));
        assert_eq!(
            node,
            Node::EmbeddedEntry(EmbeddedEntry::CodeSnippet(CodeSnippet {
                title: "main.rs".to_string(),
                language: "rust".to_string(),
                code: "fn main() {}".to_string(),
            }))
        );
    }

    #[test]
    fn test_other_entry_type() {
        let node = convert(json!({
            "nodeType": "embedded-entry-block",
            "data": { "target": { "sys": { "contentType": { "sys": { "id": "callout" } } } } }
        }));
        assert_eq!(
            node,
            Node::EmbeddedEntry(EmbeddedEntry::Other { content_type: "callout".to_string() })
        );
    }

    #[test]
    fn test_video_hyperlinks() {
        let vimeo = convert(json!({
            "nodeType": "hyperlink",
            "data": { "uri": "https://player.vimeo.com/video/12345" },
            "content": [{ "nodeType": "text", "value": "Launch demo", "marks": [] }]
        }));
        let Node::Hyperlink(Hyperlink::Video { provider, title, .. }) = vimeo else { panic!("expected video") };
        assert_eq!(provider, VideoProvider::Vimeo);
        assert_eq!(title, "Launch demo");
        assert_eq!(provider.allow(), None);

        let youtube = convert(json!({
            "nodeType": "hyperlink",
            "data": { "uri": "https://www.youtube.com/embed/abc" },
            "content": []
        }));
        let Node::Hyperlink(Hyperlink::Video { provider, title, .. }) = youtube else { panic!("expected video") };
        assert_eq!(provider, VideoProvider::YouTube);
        assert_eq!(title, "");
        assert!(provider.allow().is_some());
    }

    #[test]
    fn test_plain_hyperlink() {
        let node = convert(json!({
            "nodeType": "hyperlink",
            "data": { "uri": "https://example.com" },
            "content": [{ "nodeType": "text", "value": "docs", "marks": [] }]
        }));
        let Node::Hyperlink(Hyperlink::Link { uri, children }) = node else { panic!("expected link") };
        assert_eq!(uri, "https://example.com");
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn test_hyperlink_without_uri_is_invalid() {
        assert!(matches!(
            convert(json!({ "nodeType": "hyperlink", "content": [] })),
            Node::Invalid { .. }
        ));
    }

    #[test]
    fn test_unknown_node_type() {
        assert_eq!(
            convert(json!({ "nodeType": "table", "content": [] })),
            Node::Unsupported { node_type: "table".to_string() }
        );
    }

    #[test]
    fn test_localized_fallbacks() {
        let field = json!({ "en-US": "Hello", "de-DE": "Hallo" });
        assert_eq!(localized(&field, "de-DE"), Some(&json!("Hallo")));
        assert_eq!(localized(&field, "fr-FR"), Some(&json!("Hello")));
        assert_eq!(localized(&json!("plain"), "de-DE"), Some(&json!("plain")));
        assert_eq!(localized(&Value::Null, "en-US"), None);
    }

    #[test]
    fn test_document_plain_text_and_word_count() {
        let json = r#"{
            "nodeType": "document",
            "content": [
                { "nodeType": "heading-1", "content": [{ "nodeType": "text", "value": "Intro", "marks": [] }] },
                { "nodeType": "paragraph", "content": [
                    { "nodeType": "text", "value": "Read the ", "marks": [] },
                    { "nodeType": "hyperlink", "data": { "uri": "https://example.com" },
                      "content": [{ "nodeType": "text", "value": "guide", "marks": [] }] },
                    { "nodeType": "text", "value": " first.", "marks": [] }
                ]},
                { "nodeType": "hr", "content": [] }
            ]
        }"#;

        let document = Document::from_json(json, "en-US").unwrap();
        assert_eq!(document.content.len(), 3);
        assert_eq!(document.plain_text(), "Intro\nRead the guide first.");
        assert_eq!(document.word_count(), 5);
    }

    #[test]
    fn test_document_from_bad_json() {
        assert!(matches!(
            Document::from_json("{ not json", "en-US"),
            Err(ContentError::Json(_))
        ));
    }

    #[test]
    fn test_non_document_root_is_wrapped() {
        let raw: RawNode = serde_json::from_value(json!({ "nodeType": "paragraph", "content": [] })).unwrap();
        let document = Document::from_raw(&raw, "en-US");
        assert_eq!(document.content, vec![Node::Paragraph(vec![])]);
    }
}
