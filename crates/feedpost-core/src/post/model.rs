//! Post data models

use crate::error::{FeedError, Result};
use crate::types::PostId;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// A post in the feed
///
/// Supplied by the caller and never mutated by the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post identifier
    pub id: PostId,
    /// Who wrote the post
    pub author: Author,
    /// Publication time, rendered in its own offset
    #[serde(deserialize_with = "deserialize_published_at")]
    pub published_at: DateTime<FixedOffset>,
    /// Body lines in display order
    pub content: Vec<ContentLine>,
}

impl Post {
    /// Parse a post from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a post from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FeedError::PostNotFound(path.to_path_buf())
            } else {
                FeedError::Io(e)
            }
        })?;
        Self::from_json(&json)
            .map_err(|e| e.with_context(format!("Failed to parse {}", path.display())))
    }
}

/// Parse an RFC 3339 timestamp, or a local wall-clock time without offset
pub fn parse_published_at(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Some(at);
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;

    // A wall time skipped by a DST jump has no local instant; read it as UTC
    let at = Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|at| at.fixed_offset())
        .unwrap_or_else(|| naive.and_utc().fixed_offset());
    Some(at)
}

fn deserialize_published_at<'de, D>(
    deserializer: D,
) -> std::result::Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_published_at(&value).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid publishedAt timestamp: {}", value))
    })
}

/// Author metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

/// One line of post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawContentLine", into = "RawContentLine")]
pub enum ContentLine {
    /// Plain text block
    Paragraph(String),
    /// Hyperlink displaying the text
    Link(String),
    /// Any other `type`; kept so the post still loads, rendered as nothing
    Unsupported { kind: String, text: String },
}

impl ContentLine {
    /// Text carried by the line, whatever its kind
    pub fn text(&self) -> &str {
        match self {
            ContentLine::Paragraph(text) | ContentLine::Link(text) => text,
            ContentLine::Unsupported { text, .. } => text,
        }
    }

    /// Wire name of the line kind
    pub fn kind(&self) -> &str {
        match self {
            ContentLine::Paragraph(_) => "paragraph",
            ContentLine::Link(_) => "link",
            ContentLine::Unsupported { kind, .. } => kind,
        }
    }
}

/// Wire form: `{ "type": "paragraph" | "link", "content": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawContentLine {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: String,
}

impl From<RawContentLine> for ContentLine {
    fn from(raw: RawContentLine) -> Self {
        match raw.kind.as_str() {
            "paragraph" => ContentLine::Paragraph(raw.content),
            "link" => ContentLine::Link(raw.content),
            _ => ContentLine::Unsupported {
                kind: raw.kind,
                text: raw.content,
            },
        }
    }
}

impl From<ContentLine> for RawContentLine {
    fn from(line: ContentLine) -> Self {
        match line {
            ContentLine::Paragraph(content) => RawContentLine {
                kind: "paragraph".to_string(),
                content,
            },
            ContentLine::Link(content) => RawContentLine {
                kind: "link".to_string(),
                content,
            },
            ContentLine::Unsupported { kind, text } => RawContentLine {
                kind,
                content: text,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const POST_JSON: &str = r#"{
        "id": 1,
        "author": {
            "name": "Diego Fernandes",
            "role": "CTO @Rocketseat",
            "avatarUrl": "https://github.com/diego3g.png"
        },
        "publishedAt": "2024-01-10T15:30:00-03:00",
        "content": [
            { "type": "paragraph", "content": "Fala galeraa 👋" },
            { "type": "link", "content": "jane.design/doctorcare" },
            { "type": "video", "content": "clip.mp4" }
        ]
    }"#;

    #[test]
    fn test_parse_post() {
        let post = Post::from_json(POST_JSON).unwrap();
        assert_eq!(post.id, PostId(1));
        assert_eq!(post.author.avatar_url, "https://github.com/diego3g.png");
        assert_eq!(
            post.content,
            vec![
                ContentLine::Paragraph("Fala galeraa 👋".to_string()),
                ContentLine::Link("jane.design/doctorcare".to_string()),
                ContentLine::Unsupported {
                    kind: "video".to_string(),
                    text: "clip.mp4".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_published_at_without_offset_is_local_time() {
        let json = POST_JSON.replace("2024-01-10T15:30:00-03:00", "2024-01-10T15:30:00");
        let post = Post::from_json(&json).unwrap();

        let expected = NaiveDateTime::parse_from_str("2024-01-10 15:30:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(post.published_at.naive_local(), expected);
        assert_eq!(
            crate::post::format_absolute(&post.published_at),
            "10 de janeiro às 15:30h"
        );
    }

    #[test]
    fn test_parse_published_at_forms() {
        let at = parse_published_at("2024-01-10T15:30:00-03:00").unwrap();
        assert_eq!(at.offset().local_minus_utc(), -3 * 3600);
        assert!(parse_published_at("2024-01-10T15:30:00.250").is_some());
        assert!(parse_published_at("2024-01-10 15:30:00").is_some());
        assert!(parse_published_at("10/01/2024").is_none());
    }

    #[test]
    fn test_invalid_published_at() {
        let json = POST_JSON.replace("2024-01-10T15:30:00-03:00", "ontem");
        assert!(matches!(Post::from_json(&json), Err(FeedError::Serde(_))));
    }

    #[test]
    fn test_content_line_wire_form() {
        let json = serde_json::to_string(&ContentLine::Link("x".to_string())).unwrap();
        assert_eq!(json, r#"{"type":"link","content":"x"}"#);
    }

    #[test]
    fn test_content_line_accessors() {
        let line = ContentLine::Paragraph("Hello".to_string());
        assert_eq!(line.text(), "Hello");
        assert_eq!(line.kind(), "paragraph");
    }

    #[test]
    fn test_missing_post_file() {
        let err = Post::from_file(Path::new("/nonexistent/post.json")).unwrap_err();
        assert!(matches!(err, FeedError::PostNotFound(_)));
    }

    #[test]
    fn test_invalid_post_json() {
        assert!(matches!(Post::from_json("{}"), Err(FeedError::Serde(_))));
    }
}
