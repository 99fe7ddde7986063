//! Filename conventions shared by pages and posts.
//!
//! Source documents are recognized by a `.md` suffix on the file name. The
//! name with that suffix removed is the document's stem: a post's slug, and
//! the base of a page's output file.
//!
//! - `first-post.md` → slug `first-post`, output `first-post.html`
//! - `about.md` → output `about.html`
//! - `notes.txt` → not a document

use std::path::Path;

pub const SOURCE_EXT: &str = ".md";
pub const OUTPUT_EXT: &str = ".html";

/// True if `file_name` names a Markdown source document.
pub fn is_markdown(file_name: &str) -> bool {
    file_name.ends_with(SOURCE_EXT)
}

/// Strip the `.md` suffix. Names without it are returned unchanged.
pub fn stem(file_name: &str) -> &str {
    file_name.strip_suffix(SOURCE_EXT).unwrap_or(file_name)
}

/// Map a source file name to its output file name (`.md` → `.html`).
pub fn output_file_name(file_name: &str) -> String {
    format!("{}{}", stem(file_name), OUTPUT_EXT)
}

/// The file name component of `path` as UTF-8, lossily converted.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
