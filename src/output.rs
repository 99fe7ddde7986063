//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability, plus a thin `print_*` wrapper that writes the lines to stdout.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Found 2 posts
//! ✓ Built posts/second-post.html
//! ✓ Built posts/hello-world.html
//! ✓ Built about.html
//! ✓ Built index.html
//!
//! Build complete! 4 pages generated (2 posts, 2 pages)
//! ```
//!
//! ## Check
//!
//! ```text
//! Posts
//! 001 Second Post (2024-3-1) → posts/second-post.html
//! 002 Hello, World (2024-01-01) → posts/hello-world.html
//!
//! Pages
//! 001 About → about.html
//! 002 Home → index.html (+ post list)
//! ```

use crate::config::BuildConfig;
use crate::naming;
use crate::site::{BuildEvent, BuildSummary, SiteInventory};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format a single build progress event as display lines.
pub fn format_build_event(event: &BuildEvent) -> Vec<String> {
    match event {
        BuildEvent::PostsFound { count } => vec![format!("Found {}", plural(*count, "post"))],
        BuildEvent::ContentDirMissing { path } => vec![format!(
            "Content directory '{}' not found, no pages to build",
            path.display()
        )],
        BuildEvent::PageBuilt { display_path } => {
            vec![format!("\u{2713} Built {}", display_path)]
        }
    }
}

/// Format the end-of-build summary.
pub fn format_build_summary(summary: &BuildSummary) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "Build complete! {} generated ({}, {})",
            plural(summary.total_pages, "page"),
            plural(summary.post_count, "post"),
            plural(summary.page_count, "page"),
        ),
    ]
}

pub fn print_build_event(event: &BuildEvent) {
    for line in format_build_event(event) {
        println!("{}", line);
    }
}

pub fn print_build_summary(summary: &BuildSummary) {
    for line in format_build_summary(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the site inventory: each post and page with its output path.
pub fn format_check_output(inventory: &SiteInventory, config: &BuildConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Posts".to_string());
    if inventory.posts.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, post) in inventory.posts.iter().enumerate() {
        lines.push(format!(
            "{} {} ({}) \u{2192} {}/{}",
            format_index(i + 1),
            post.title,
            post.date,
            config.posts_dir,
            naming::output_file_name(&post.slug)
        ));
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    if inventory.pages.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, page) in inventory.pages.iter().enumerate() {
        let marker = if page.file_name == config.index_page {
            " (+ post list)"
        } else {
            ""
        };
        lines.push(format!(
            "{} {} \u{2192} {}{}",
            format_index(i + 1),
            page.doc.field("title").unwrap_or("Untitled"),
            naming::output_file_name(&page.file_name),
            marker
        ));
    }

    lines
}

pub fn print_check_output(inventory: &SiteInventory, config: &BuildConfig) {
    for line in format_check_output(inventory, config) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::front_matter;
    use crate::posts::Post;
    use crate::site::SourcePage;
    use std::path::{Path, PathBuf};
    use std::time::UNIX_EPOCH;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(0, "post"), "0 posts");
        assert_eq!(plural(1, "post"), "1 post");
        assert_eq!(plural(2, "page"), "2 pages");
    }

    #[test]
    fn posts_found_line() {
        let lines = format_build_event(&BuildEvent::PostsFound { count: 3 });
        assert_eq!(lines, vec!["Found 3 posts"]);
    }

    #[test]
    fn page_built_line() {
        let lines = format_build_event(&BuildEvent::PageBuilt {
            display_path: "posts/first.html".into(),
        });
        assert_eq!(lines, vec!["\u{2713} Built posts/first.html"]);
    }

    #[test]
    fn content_dir_missing_line() {
        let lines = format_build_event(&BuildEvent::ContentDirMissing {
            path: PathBuf::from("content"),
        });
        assert_eq!(lines, vec!["Content directory 'content' not found, no pages to build"]);
    }

    #[test]
    fn summary_line() {
        let lines = format_build_summary(&BuildSummary {
            total_pages: 3,
            post_count: 1,
            page_count: 2,
        });
        assert_eq!(
            lines,
            vec!["", "Build complete! 3 pages generated (1 post, 2 pages)"]
        );
    }

    #[test]
    fn check_output_lists_posts_and_pages() {
        let config = BuildConfig::resolve(Path::new("/site"), &SiteConfig::default(), 2024);
        let inventory = SiteInventory {
            posts: vec![Post::from_source(
                "first.md",
                "---\ntitle: Hello\ndate: 2024-01-01\n---\n",
                UNIX_EPOCH,
            )],
            pages: vec![
                SourcePage {
                    file_name: "about.md".into(),
                    doc: front_matter::parse("no title"),
                },
                SourcePage {
                    file_name: "index.md".into(),
                    doc: front_matter::parse("---\ntitle: Home\n---\n"),
                },
            ],
        };

        let lines = format_check_output(&inventory, &config);
        assert_eq!(
            lines,
            vec![
                "Posts",
                "001 Hello (2024-01-01) \u{2192} posts/first.html",
                "",
                "Pages",
                "001 Untitled \u{2192} about.html",
                "002 Home \u{2192} index.html (+ post list)",
            ]
        );
    }

    #[test]
    fn check_output_empty_site() {
        let config = BuildConfig::resolve(Path::new("/site"), &SiteConfig::default(), 2024);
        let inventory = SiteInventory {
            posts: vec![],
            pages: vec![],
        };
        let lines = format_check_output(&inventory, &config);
        assert_eq!(lines, vec!["Posts", "    (none)", "", "Pages", "    (none)"]);
    }
}
