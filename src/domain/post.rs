//! Blog post model: front-matter parsing, dates, reading time.
//!
//! Posts are markdown files with an optional leading YAML block.
//! Parsing is permissive by design: content authoring is manual and
//! trusted, so missing or malformed metadata defaults field-by-field
//! instead of erroring.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Reading speed used when no site or global override is configured.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Author-supplied metadata from the front-matter block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub tags: Vec<String>,
}

/// Post metadata, constructed fresh on every content query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMeta {
    /// Routing key, derived from the file name.
    pub slug: String,
    pub title: String,
    /// Raw date string as authored; parsed only for ordering.
    pub date: String,
    pub excerpt: String,
    /// Display order preserved; duplicates allowed.
    pub tags: Vec<String>,
    /// Derived from the body word count, e.g. "4 min read".
    pub reading_time: String,
}

impl PostMeta {
    /// Builds metadata for a file, defaulting missing fields.
    pub fn from_parts(slug: &str, front: FrontMatter, body: &str, words_per_minute: u32) -> Self {
        Self {
            slug: slug.to_string(),
            title: front.title.unwrap_or_else(|| slug.to_string()),
            date: front.date.unwrap_or_default(),
            excerpt: front.excerpt.unwrap_or_default(),
            tags: front.tags,
            reading_time: reading_time(body, words_per_minute),
        }
    }

    /// Ordering key for reverse-chronological listings. Unparseable
    /// dates collapse to the epoch and sort oldest.
    pub fn sort_key(&self) -> DateTime<Utc> {
        parse_date(&self.date)
    }
}

/// A full post: metadata plus the raw body markup.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    #[serde(flatten)]
    pub meta: PostMeta,
    pub content: String,
}

/// Splits a raw file into its front-matter YAML and body, if the file
/// opens with a `---` fence closed on its own line.
pub fn split_front_matter(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix("---")?;
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    let rest = rest.strip_prefix('\n')?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let body = &rest[offset + line.len()..];
            return Some((&rest[..offset], body));
        }
        offset += line.len();
    }

    None
}

/// Parses front matter permissively: no fence, an unclosed fence, or
/// malformed YAML all yield defaults, and the body is whatever
/// follows the fence (or the whole file).
pub fn parse_front_matter(raw: &str) -> (FrontMatter, &str) {
    match split_front_matter(raw) {
        Some((yaml, body)) => {
            let front = serde_yaml::from_str(yaml).unwrap_or_default();
            (front, body)
        }
        None => (FrontMatter::default(), raw),
    }
}

/// Parses an ISO-ish date string; anything unrecognized maps to the
/// Unix epoch so it sorts as oldest.
pub fn parse_date(raw: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_time(NaiveTime::MIN).and_utc();
        }
    }

    DateTime::UNIX_EPOCH
}

/// Estimated reading time for a body of markup, as a display string.
///
/// Words are whitespace-separated runs of the raw source; the result
/// is floored at one minute so even a stub reads as "1 min read".
pub fn reading_time(body: &str, words_per_minute: u32) -> String {
    let words = body.split_whitespace().count();
    let wpm = words_per_minute.max(1) as usize;
    let minutes = words.div_ceil(wpm).max(1);
    format!("{} min read", minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_front_matter_fence() {
        let raw = "---\ntitle: Hello\n---\n\nBody text.\n";
        let (yaml, body) = split_front_matter(raw).unwrap();

        assert_eq!(yaml, "title: Hello\n");
        assert_eq!(body, "\nBody text.\n");
    }

    #[test]
    fn no_fence_is_all_body() {
        let raw = "Just some prose.";
        let (front, body) = parse_front_matter(raw);

        assert!(front.title.is_none());
        assert_eq!(body, raw);
    }

    #[test]
    fn unclosed_fence_is_all_body() {
        let raw = "---\ntitle: Oops\nno closing fence";
        let (front, body) = parse_front_matter(raw);

        assert!(front.title.is_none());
        assert_eq!(body, raw);
    }

    #[test]
    fn malformed_yaml_defaults_every_field() {
        let raw = "---\ntitle: [unterminated\n---\nBody.";
        let (front, body) = parse_front_matter(raw);

        assert!(front.title.is_none());
        assert!(front.tags.is_empty());
        assert_eq!(body, "Body.");
    }

    #[test]
    fn meta_defaults_missing_fields_to_slug_and_empty() {
        let meta = PostMeta::from_parts("first-post", FrontMatter::default(), "hello world", 200);

        assert_eq!(meta.title, "first-post");
        assert_eq!(meta.date, "");
        assert_eq!(meta.excerpt, "");
        assert!(meta.tags.is_empty());
        assert_eq!(meta.reading_time, "1 min read");
    }

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        assert_eq!(
            parse_date("2024-03-01"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_time(NaiveTime::MIN)
                .and_utc()
        );
        assert_eq!(parse_date("2024/03/01"), parse_date("2024-03-01"));
        assert!(parse_date("2024-03-01T12:30:00Z") > parse_date("2024-03-01"));
    }

    #[test]
    fn invalid_dates_sort_as_epoch() {
        assert_eq!(parse_date(""), DateTime::UNIX_EPOCH);
        assert_eq!(parse_date("sometime in march"), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn reading_time_rounds_up_with_a_floor_of_one() {
        assert_eq!(reading_time("", 200), "1 min read");

        let short: String = vec!["word"; 199].join(" ");
        assert_eq!(reading_time(&short, 200), "1 min read");

        let longer: String = vec!["word"; 201].join(" ");
        assert_eq!(reading_time(&longer, 200), "2 min read");

        let essay: String = vec!["word"; 800].join(" ");
        assert_eq!(reading_time(&essay, 200), "4 min read");
    }

    #[test]
    fn tags_preserve_order_and_duplicates() {
        let raw = "---\ntags: [sat, complexity, sat]\n---\n";
        let (front, _) = parse_front_matter(raw);

        assert_eq!(front.tags, vec!["sat", "complexity", "sat"]);
    }
}
