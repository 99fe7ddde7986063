//! # Simple Blog
//!
//! A minimal static site generator for Markdown blogs. Write pages and posts
//! as Markdown, supply one HTML template, and get a directory of static HTML.
//!
//! # Pipeline
//!
//! ```text
//! content/*.md, content/posts/*.md
//!        │
//!        ▼
//! front_matter::parse  →  {metadata, body}
//!        │
//!        ▼
//! page::render_markdown  →  HTML fragment
//!        │
//!        ▼
//! template::render  →  final HTML  →  public/
//! ```
//!
//! Every build is a full, stateless regeneration: nothing is cached between
//! runs and nothing is skipped.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`front_matter`] | Splits a document into `key: value` metadata and a Markdown body |
//! | [`template`] | `{{name}}` substitution and the `{{#if subtitle}}` block |
//! | [`naming`] | `.md` detection, slugs, `.md` → `.html` mapping |
//! | [`posts`] | Post discovery, metadata fallbacks, newest-first ordering |
//! | [`page`] | Renders one post or page; builds the "Recent Posts" list |
//! | [`site`] | Whole-site build and check |
//! | [`config`] | `config.toml` loading and the resolved [`config::BuildConfig`] |
//! | [`output`] | CLI output formatting |
//!
//! # Content Layout
//!
//! ```text
//! my-blog/
//! ├── config.toml          # Optional
//! ├── template.html        # {{title}} {{subtitle}} {{description}} {{content}} {{year}}
//! └── content/
//!     ├── index.md         # → public/index.html (+ Recent Posts)
//!     ├── about.md         # → public/about.html
//!     └── posts/
//!         └── first.md     # → public/posts/first.html
//! ```
//!
//! # Forgiving Input, Strict I/O
//!
//! Malformed input degrades quietly: a broken front-matter block is treated
//! as body text, unknown template placeholders pass through, and an
//! unparseable post date just sorts last. I/O is the opposite: a missing
//! template or an unwritable output file stops the build immediately.

pub mod config;
pub mod front_matter;
pub mod naming;
pub mod output;
pub mod page;
pub mod posts;
pub mod site;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;
