//! Whole-site build.
//!
//! The driver behind `simple-blog build`. One call regenerates everything:
//!
//! 1. Create the output directory and its posts subdirectory.
//! 2. Load the template (once; every page borrows it).
//! 3. Collect posts, newest first.
//! 4. Render and write each post.
//! 5. Render and write each standalone page directly under the content
//!    directory, appending the post list to the index page.
//!
//! There is no skip-and-continue: the first I/O failure aborts the build and
//! leaves whatever was already written in place. Missing content or posts
//! directories are not failures; they just contribute no pages.
//!
//! Progress is reported through a callback so the library never prints. The
//! binary formats events with [`crate::output`].

use crate::config::BuildConfig;
use crate::front_matter::{self, ParsedDocument};
use crate::naming;
use crate::page::{self, BuiltPage};
use crate::posts::{self, Post, PostError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Posts(#[from] PostError),
    #[error("failed to read template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Counts reported at the end of a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub total_pages: usize,
    pub post_count: usize,
    pub page_count: usize,
}

/// Progress notifications emitted during a build.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// Posts were collected (possibly zero).
    PostsFound { count: usize },
    /// The content directory doesn't exist; no standalone pages.
    ContentDirMissing { path: PathBuf },
    /// A page was written. `display_path` is relative to the output root.
    PageBuilt { display_path: String },
}

/// A standalone page found in the content directory.
#[derive(Debug, Clone)]
pub struct SourcePage {
    pub file_name: String,
    pub doc: ParsedDocument,
}

/// Everything a build would produce, without writing it.
#[derive(Debug, Clone)]
pub struct SiteInventory {
    pub posts: Vec<Post>,
    pub pages: Vec<SourcePage>,
}

/// Build the site described by `config`.
pub fn build(
    config: &BuildConfig,
    mut report: impl FnMut(&BuildEvent),
) -> Result<BuildSummary, BuildError> {
    create_dir(&config.output_dir)?;
    create_dir(&config.posts_output_dir())?;

    let template = load_template(&config.template_path)?;

    let posts = posts::collect(&config.posts_source_dir())?;
    report(&BuildEvent::PostsFound { count: posts.len() });

    let mut summary = BuildSummary::default();

    for post in &posts {
        let built = page::build_post(post, &template, config);
        write_page(&built)?;
        report(&BuildEvent::PageBuilt {
            display_path: built.display_path,
        });
        summary.post_count += 1;
    }

    let pages = match read_pages(&config.content_dir)? {
        Some(pages) => pages,
        None => {
            report(&BuildEvent::ContentDirMissing {
                path: config.content_dir.clone(),
            });
            Vec::new()
        }
    };

    for source in &pages {
        let built = page::build_page(&source.file_name, &source.doc, &template, config, &posts);
        write_page(&built)?;
        report(&BuildEvent::PageBuilt {
            display_path: built.display_path,
        });
        summary.page_count += 1;
    }

    summary.total_pages = summary.post_count + summary.page_count;
    Ok(summary)
}

/// Read and parse every input without writing output.
///
/// Fails on the same conditions as [`build`] except those caused by writing.
pub fn check(config: &BuildConfig) -> Result<SiteInventory, BuildError> {
    load_template(&config.template_path)?;
    let posts = posts::collect(&config.posts_source_dir())?;
    let pages = read_pages(&config.content_dir)?.unwrap_or_default();
    Ok(SiteInventory { posts, pages })
}

fn load_template(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::Template {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the `*.md` files directly inside `dir`, in file name order.
///
/// Returns `None` if `dir` doesn't exist.
fn read_pages(dir: &Path) -> Result<Option<Vec<SourcePage>>, BuildError> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let files = posts::markdown_files(dir).map_err(|source| BuildError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut pages = Vec::with_capacity(files.len());
    for path in files {
        let raw = fs::read_to_string(&path).map_err(|source| BuildError::Read {
            path: path.clone(),
            source,
        })?;
        pages.push(SourcePage {
            file_name: naming::file_name(&path),
            doc: front_matter::parse(&raw),
        });
    }
    Ok(Some(pages))
}

fn write_page(built: &BuiltPage) -> Result<(), BuildError> {
    fs::write(&built.output_path, &built.html).map_err(|source| BuildError::Write {
        path: built.output_path.clone(),
        source,
    })
}

fn create_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|source| BuildError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
