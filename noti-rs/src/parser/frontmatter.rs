//! YAML frontmatter encoding and decoding.

use crate::error::{NotiError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Opening and closing delimiter of a frontmatter block.
pub const DELIMITER: &str = "---";

/// The decoded metadata header of a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// `tags:` with no value is valid YAML for "no tags".
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// How a raw note splits around its frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterSplit<'a> {
    /// The input does not open with a delimiter line.
    Absent,
    /// An opening delimiter line with no closing one.
    Unterminated,
    /// A complete block.
    Present {
        /// Raw YAML between the delimiter lines.
        yaml: &'a str,
        /// Everything after the closing delimiter line, untrimmed.
        body: &'a str,
    },
}

/// Split raw note text into its frontmatter block and body.
///
/// The closing delimiter must be a line of its own, so `---` inside a YAML
/// value or in the middle of a line never ends the block.
pub fn split_frontmatter(raw: &str) -> FrontmatterSplit<'_> {
    let rest = match raw
        .strip_prefix("---\n")
        .or_else(|| raw.strip_prefix("---\r\n"))
    {
        Some(rest) => rest,
        None => return FrontmatterSplit::Absent,
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == DELIMITER {
            return FrontmatterSplit::Present {
                yaml: &rest[..offset],
                body: &rest[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    FrontmatterSplit::Unterminated
}

/// Decode raw note text into its header and content.
///
/// Text without a complete frontmatter block is returned verbatim as content
/// with no header. Content following a header is trimmed.
pub fn decode(raw: &str) -> Result<(Option<Frontmatter>, String)> {
    decode_with_path(raw, Path::new("<unknown>"))
}

/// Like [`decode`], naming `path` in error messages.
pub fn decode_with_path(raw: &str, path: &Path) -> Result<(Option<Frontmatter>, String)> {
    match split_frontmatter(raw) {
        FrontmatterSplit::Absent | FrontmatterSplit::Unterminated => Ok((None, raw.to_string())),
        FrontmatterSplit::Present { yaml, body } => {
            let header = parse_header(yaml, path)?;
            Ok((Some(header), body.trim().to_string()))
        }
    }
}

fn parse_header(yaml: &str, path: &Path) -> Result<Frontmatter> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }

    serde_yaml::from_str(yaml).map_err(|e| NotiError::InvalidFrontmatter {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Encode a header and content into the on-disk note format.
pub fn encode(header: &Frontmatter, content: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(header)?;
    Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n\n{content}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn sample_header() -> Frontmatter {
        Frontmatter {
            title: "Weekly Review".to_string(),
            tags: vec!["work".to_string(), "urgent".to_string(), "work".to_string()],
            created: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()),
        }
    }

    #[test]
    fn test_split_no_frontmatter() {
        assert_eq!(split_frontmatter("Just some content"), FrontmatterSplit::Absent);
        assert_eq!(split_frontmatter("---no newline"), FrontmatterSplit::Absent);
        assert_eq!(split_frontmatter(""), FrontmatterSplit::Absent);
    }

    #[test]
    fn test_split_with_frontmatter() {
        let raw = "---\ntitle: Test\ntags: [a, b]\n---\n\nContent here";
        assert_eq!(
            split_frontmatter(raw),
            FrontmatterSplit::Present {
                yaml: "title: Test\ntags: [a, b]\n",
                body: "\nContent here",
            }
        );
    }

    #[test]
    fn test_split_crlf() {
        let raw = "---\r\ntitle: Test\r\n---\r\nBody";
        assert_eq!(
            split_frontmatter(raw),
            FrontmatterSplit::Present {
                yaml: "title: Test\r\n",
                body: "Body",
            }
        );
    }

    #[test]
    fn test_split_frontmatter_at_eof() {
        let raw = "---\ntitle: Test\n---";
        assert_eq!(
            split_frontmatter(raw),
            FrontmatterSplit::Present {
                yaml: "title: Test\n",
                body: "",
            }
        );
    }

    #[test]
    fn test_split_empty_header() {
        assert_eq!(
            split_frontmatter("---\n---\nBody"),
            FrontmatterSplit::Present { yaml: "", body: "Body" }
        );
    }

    #[test]
    fn test_no_closing_delimiter() {
        let raw = "---\ntitle: Test\n\nContent without closing";
        assert_eq!(split_frontmatter(raw), FrontmatterSplit::Unterminated);
    }

    #[test]
    fn test_delimiter_inside_value_does_not_close() {
        let raw = "---\ntitle: a---b\n---\nBody";
        let (header, content) = decode(raw).unwrap();
        assert_eq!(header.unwrap().title, "a---b");
        assert_eq!(content, "Body");
    }

    #[test]
    fn test_triple_dash_in_content() {
        let raw = "---\ntitle: Test\n---\n\n---\n\nThis has triple dashes in content";
        let (header, content) = decode(raw).unwrap();
        assert_eq!(header.unwrap().title, "Test");
        assert_eq!(content, "---\n\nThis has triple dashes in content");
    }

    #[test]
    fn test_decode_passthrough_without_header() {
        let raw = "  # Heading\n\nbody text\n\n";
        let (header, content) = decode(raw).unwrap();
        assert!(header.is_none());
        assert_eq!(content, raw);
    }

    #[test]
    fn test_decode_unterminated_is_lenient() {
        let raw = "---\ntitle: Test\nbody";
        let (header, content) = decode(raw).unwrap();
        assert!(header.is_none());
        assert_eq!(content, raw);
    }

    #[test]
    fn test_decode_fields() {
        let raw = "---\ntitle: My Note\ntags:\n  - rust\n  - cli\ncreated: 2024-01-15T09:30:00+02:00\nauthor: me\n---\n\n  Content\n\n";
        let (header, content) = decode(raw).unwrap();
        let header = header.unwrap();

        assert_eq!(header.title, "My Note");
        assert_eq!(header.tags, vec!["rust", "cli"]);
        assert_eq!(
            header.created,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 7, 30, 0).unwrap())
        );
        assert_eq!(content, "Content");
    }

    #[test]
    fn test_decode_missing_and_null_keys() {
        let (header, _) = decode("---\ntags:\n---\nBody").unwrap();
        assert_eq!(header, Some(Frontmatter::default()));
    }

    #[test]
    fn test_invalid_frontmatter() {
        let raw = "---\ninvalid: yaml: syntax:\n---\nContent";
        let result = decode_with_path(raw, Path::new("bad.md"));
        match result {
            Err(NotiError::InvalidFrontmatter { path, .. }) => {
                assert_eq!(path, Path::new("bad.md"));
            }
            other => panic!("expected invalid frontmatter, got {:?}", other),
        }
    }

    #[test]
    fn test_header_of_wrong_shape_is_invalid() {
        assert!(decode("---\njust a sentence\n---\nBody").is_err());
        assert!(decode("---\ntags: not-a-list\n---\nBody").is_err());
    }

    #[test]
    fn test_encode_layout() {
        let header = Frontmatter {
            title: "Hello".to_string(),
            tags: vec!["a".to_string()],
            created: None,
        };
        let encoded = encode(&header, "Body text").unwrap();
        assert!(encoded.starts_with("---\ntitle: Hello\n"));
        assert!(encoded.ends_with("---\n\nBody text"));
        assert!(!encoded.contains("created"));
    }

    #[test]
    fn test_round_trip() {
        let header = sample_header();
        let cases = [
            "",
            "single line",
            "line one\nurgent line\nline three",
            "\n\n  padded  \n\n",
            "---\nlooks like a header\n---",
            "title: not a header",
        ];

        for content in cases {
            let encoded = encode(&header, content).unwrap();
            let (decoded, body) = decode(&encoded).unwrap();
            assert_eq!(decoded.as_ref(), Some(&header), "header for {:?}", content);
            assert_eq!(body, content.trim(), "content for {:?}", content);
        }
    }

    #[test]
    fn test_round_trip_awkward_title() {
        let header = Frontmatter {
            title: "---".to_string(),
            tags: vec!["".to_string(), "a: b".to_string()],
            created: None,
        };
        let encoded = encode(&header, "x").unwrap();
        let (decoded, body) = decode(&encoded).unwrap();
        assert_eq!(decoded, Some(header));
        assert_eq!(body, "x");
    }
}
