//! Directive table loading
//!
//! One row per label: `Label Name`, `URL`, `Tag Path`, and optionally
//! `Class Name` / `Class Tag`. A leading UTF-8 byte-order mark is tolerated.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ScrapeError};

pub const COL_LABEL: &str = "Label Name";
pub const COL_URL: &str = "URL";
pub const COL_TAG_PATH: &str = "Tag Path";
pub const COL_CLASS_NAME: &str = "Class Name";
pub const COL_CLASS_TAG: &str = "Class Tag";

const REQUIRED_COLUMNS: [&str; 3] = [COL_LABEL, COL_URL, COL_TAG_PATH];

/// `>`-delimited sequence of tag names, e.g. `div>h3>a`.
/// Never empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPath {
    tags: Vec<String>,
}

impl TagPath {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(ScrapeError::InvalidPath(raw.to_string()));
        }

        let mut tags = Vec::new();
        for segment in raw.split('>') {
            let tag = segment.trim();
            if tag.is_empty() {
                return Err(ScrapeError::InvalidPath(raw.to_string()));
            }
            tags.push(tag.to_ascii_lowercase());
        }

        Ok(Self { tags })
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Narrows every occurrence of `tag` in a path to elements carrying `class_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRestriction {
    pub tag: String,
    pub class_name: String,
}

impl ClassRestriction {
    pub fn new(tag: impl AsRef<str>, class_name: impl Into<String>) -> Self {
        Self {
            tag: tag.as_ref().trim().to_ascii_lowercase(),
            class_name: class_name.into(),
        }
    }

    pub fn applies_to(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

/// One row of the directive table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeDirective {
    pub label: String,
    pub url: String,
    /// Unparsed so a bad path fails only this directive
    pub raw_path: String,
    pub class_name: Option<String>,
    pub class_tag: Option<String>,
}

impl ScrapeDirective {
    pub fn tag_path(&self) -> Result<TagPath> {
        TagPath::parse(&self.raw_path)
    }

    /// Present only when both the class name and the tag it applies to are set.
    pub fn class_restriction(&self) -> Option<ClassRestriction> {
        match (&self.class_tag, &self.class_name) {
            (Some(tag), Some(class_name)) => Some(ClassRestriction::new(tag, class_name.clone())),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DirectiveRow {
    #[serde(rename = "Label Name", default)]
    label: String,
    #[serde(rename = "URL", default)]
    url: Option<String>,
    #[serde(rename = "Tag Path", default)]
    tag_path: Option<String>,
    #[serde(rename = "Class Name", default)]
    class_name: Option<String>,
    #[serde(rename = "Class Tag", default)]
    class_tag: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<DirectiveRow> for ScrapeDirective {
    fn from(row: DirectiveRow) -> Self {
        Self {
            label: row.label,
            url: row.url.unwrap_or_default().trim().to_string(),
            raw_path: row.tag_path.unwrap_or_default(),
            class_name: non_blank(row.class_name),
            class_tag: non_blank(row.class_tag),
        }
    }
}

/// Load directives from a file on disk.
pub fn load_directives(path: &Path) -> Result<Vec<ScrapeDirective>> {
    let bytes = fs::read(path)?;
    read_directives(bytes.as_slice())
}

/// Parse directives from any reader, in table order.
pub fn read_directives<R: Read>(mut reader: R) -> Result<Vec<ScrapeDirective>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ScrapeError::MissingColumn(column.to_string()));
        }
    }

    // Short or long rows are squared up so a ragged row fails only its own
    // directive (an empty URL or tag path), not the whole table.
    let mut directives = Vec::new();
    for record in csv_reader.records() {
        let mut record = record?;
        record.truncate(headers.len());
        while record.len() < headers.len() {
            record.push_field("");
        }
        let row: DirectiveRow = record.deserialize(Some(&headers))?;
        directives.push(ScrapeDirective::from(row));
    }

    Ok(directives)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_path() {
        let path = TagPath::parse("div>h3>a").unwrap();
        assert_eq!(path.tags(), ["div", "h3", "a"]);

        let spaced = TagPath::parse(" DIV > h3 ").unwrap();
        assert_eq!(spaced.tags(), ["div", "h3"]);
    }

    #[test]
    fn test_invalid_tag_paths() {
        for raw in ["", "   ", "div>>a", ">a", "div>"] {
            assert!(
                matches!(TagPath::parse(raw), Err(ScrapeError::InvalidPath(_))),
                "expected InvalidPath for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_read_directives_with_bom() {
        let data = "\u{feff}Label Name,URL,Tag Path,Class Name,Class Tag\n\
                    Warp,https://warp.net/artists,div>h3>a,artist,h3\n\
                    Ninja,https://ninjatune.net/artists,ul>li,,\n";

        let directives = read_directives(data.as_bytes()).unwrap();
        assert_eq!(directives.len(), 2);

        let warp = &directives[0];
        assert_eq!(warp.label, "Warp");
        assert_eq!(warp.url, "https://warp.net/artists");
        assert_eq!(warp.tag_path().unwrap().tags(), ["div", "h3", "a"]);
        assert_eq!(
            warp.class_restriction(),
            Some(ClassRestriction::new("h3", "artist"))
        );

        let ninja = &directives[1];
        assert_eq!(ninja.class_name, None);
        assert_eq!(ninja.class_tag, None);
        assert_eq!(ninja.class_restriction(), None);
    }

    #[test]
    fn test_optional_columns_absent() {
        let data = "Label Name,URL,Tag Path\nHyperdub,https://hyperdub.net,div>a\n";
        let directives = read_directives(data.as_bytes()).unwrap();
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].class_restriction(), None);
    }

    #[test]
    fn test_class_name_without_tag_is_ignored() {
        let data = "Label Name,URL,Tag Path,Class Name,Class Tag\nA,https://a.example,div>a,x,\n";
        let directives = read_directives(data.as_bytes()).unwrap();
        assert_eq!(directives[0].class_name.as_deref(), Some("x"));
        assert_eq!(directives[0].class_restriction(), None);
    }

    #[test]
    fn test_missing_required_column() {
        let data = "Label Name,Tag Path\nA,div>a\n";
        let err = read_directives(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingColumn(ref c) if c == "URL"));
    }

    #[test]
    fn test_short_row_does_not_sink_the_table() {
        let data = "Label Name,URL,Tag Path\n\
                    A,https://a.example,ul>li\n\
                    B\n\
                    C,https://c.example,ul>li,extra\n";

        let directives = read_directives(data.as_bytes()).unwrap();
        assert_eq!(directives.len(), 3);
        assert_eq!(directives[0].url, "https://a.example");

        let short = &directives[1];
        assert_eq!(short.label, "B");
        assert_eq!(short.url, "");
        assert!(matches!(short.tag_path(), Err(ScrapeError::InvalidPath(_))));

        assert_eq!(directives[2].label, "C");
        assert_eq!(directives[2].tag_path().unwrap().tags(), ["ul", "li"]);
    }

    #[test]
    fn test_empty_tag_path_fails_only_on_use() {
        let data = "Label Name,URL,Tag Path\nA,https://a.example,\n";
        let directives = read_directives(data.as_bytes()).unwrap();
        assert!(matches!(
            directives[0].tag_path(),
            Err(ScrapeError::InvalidPath(_))
        ));
    }
}
