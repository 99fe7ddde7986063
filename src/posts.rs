//! Post discovery and ordering.
//!
//! Every `*.md` file directly inside the posts directory is a post. Display
//! metadata comes from front matter, with fallbacks when a key is missing or
//! empty:
//!
//! | Field         | Front matter    | Fallback                             |
//! |---------------|-----------------|--------------------------------------|
//! | `title`       | `title:`        | slug (file name without `.md`)       |
//! | `date`        | `date:`         | file modification time, `YYYY-MM-DD` |
//! | `description` | `description:`  | empty                                |
//!
//! ## Ordering
//!
//! Posts are sorted newest first by their *calendar* date, so `2024-1-5` and
//! `2024-01-05` are the same day. Posts sharing a date keep discovery order
//! (file name order). Posts whose date can't be parsed go after every dated
//! post, also in discovery order.

use crate::front_matter::{self, FrontMatter};
use crate::naming;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostError {
    #[error("failed to list posts in {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read post {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read modification time of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A blog post with resolved display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// File name without `.md`; names the output file.
    pub slug: String,
    pub title: String,
    /// Date as written in front matter, or the mtime fallback.
    pub date: String,
    pub description: String,
    pub front_matter: FrontMatter,
    /// Markdown body, front matter removed.
    pub body: String,
}

impl Post {
    /// Build a post from its source file name, raw contents, and mtime.
    pub fn from_source(file_name: &str, raw: &str, modified: SystemTime) -> Self {
        let slug = naming::stem(file_name).to_string();
        let doc = front_matter::parse(raw);

        let title = doc.field("title").unwrap_or(slug.as_str()).to_string();
        let date = doc
            .field("date")
            .map(str::to_string)
            .unwrap_or_else(|| format_mtime(modified));
        let description = doc.field("description").unwrap_or_default().to_string();

        Post {
            slug,
            title,
            date,
            description,
            front_matter: doc.front_matter,
            body: doc.body,
        }
    }

    /// Sort key for `date`; `None` when the date is unparseable.
    pub fn sort_date(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }
}

/// Discover, parse, and sort all posts in `dir`.
///
/// A missing directory yields no posts. Any other I/O failure is an error.
pub fn collect(dir: &Path) -> Result<Vec<Post>, PostError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut posts = Vec::new();
    for path in markdown_files(dir).map_err(|source| PostError::List {
        path: dir.to_path_buf(),
        source,
    })? {
        let raw = fs::read_to_string(&path).map_err(|source| PostError::Read {
            path: path.clone(),
            source,
        })?;
        let modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(|source| PostError::Metadata {
                path: path.clone(),
                source,
            })?;
        posts.push(Post::from_source(&naming::file_name(&path), &raw, modified));
    }

    sort_newest_first(&mut posts);
    Ok(posts)
}

/// List regular `*.md` files directly inside `dir`, sorted by file name.
pub fn markdown_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && naming::is_markdown(&naming::file_name(&path)) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Stable sort: dated posts newest first, then undated posts.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by_key(|p| match p.sort_date() {
        Some(d) => (false, Reverse(Some(d))),
        None => (true, Reverse(None)),
    });
}

/// Parse a front-matter date leniently.
///
/// Accepts `YYYY-M-D` and `YYYY/M/D` (padding optional), RFC 3339
/// timestamps, `YYYY-MM-DD HH:MM[:SS]` with a space or `T` separator,
/// `January 5, 2024` / `Jan 5, 2024`, and the partial forms `YYYY-MM` and
/// `YYYY`, which fall on the first day of the month or year.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| parse_partial_date(s))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `YYYY-MM` → first of the month, `YYYY` → January 1st.
fn parse_partial_date(s: &str) -> Option<NaiveDate> {
    let (year, month) = match s.split_once('-') {
        Some((year, month)) => (year, month.parse::<u32>().ok()?),
        None => (s, 1),
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

/// Format a modification time as a UTC `YYYY-MM-DD` date.
pub fn format_mtime(modified: SystemTime) -> String {
    DateTime::<Utc>::from(modified)
        .format("%Y-%m-%d")
        .to_string()
}
