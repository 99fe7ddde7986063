//! Shared test utilities for the simple-blog test suite.
//!
//! Provides fixture setup, config construction, and lookup helpers that work
//! with build results (`BuildEvent`, `Post`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let config = fixture_config(tmp.path());
//! build(&config, |_| {}).unwrap();
//!
//! let index = read_output(&config, "index.html");
//! assert!(index.contains("Recent Posts"));
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::{BuildConfig, SiteConfig};
use crate::posts::Post;
use crate::site::BuildEvent;

/// Year used by every fixture build, so output is stable across runs.
pub const FIXTURE_YEAR: i32 = 2024;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Default-layout build config rooted at `root`, pinned to [`FIXTURE_YEAR`].
pub fn fixture_config(root: &Path) -> BuildConfig {
    BuildConfig::resolve(root, &SiteConfig::default(), FIXTURE_YEAR)
}

/// Write a minimal template at the default location under `root`.
pub fn write_template(root: &Path) {
    std::fs::write(
        root.join("template.html"),
        "<title>{{title}}</title>{{#if subtitle}}<p>{{subtitle}}</p>{{/if}}<main>{{content}}</main><footer>{{year}}</footer>",
    )
    .unwrap();
}

// =========================================================================
// Lookups — panic with a clear message on miss
// =========================================================================

/// Read a generated file relative to the output root. Panics if missing.
pub fn read_output(config: &BuildConfig, rel: &str) -> String {
    let path = config.output_dir.join(rel);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("output '{}' not readable: {e}", path.display()))
}

/// Find a post by slug. Panics if not found.
pub fn find_post<'a>(posts: &'a [Post], slug: &str) -> &'a Post {
    posts.iter().find(|p| p.slug == slug).unwrap_or_else(|| {
        let slugs = post_slugs(posts);
        panic!("post '{slug}' not found. Available: {slugs:?}")
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All post slugs in order.
pub fn post_slugs(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.slug.as_str()).collect()
}

/// Display paths of every `PageBuilt` event, in report order.
pub fn built_paths(events: &[BuildEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| match e {
            BuildEvent::PageBuilt { display_path } => Some(display_path.as_str()),
            _ => None,
        })
        .collect()
}
