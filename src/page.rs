//! Single-page rendering.
//!
//! Turns one source document into final HTML plus the path it belongs at:
//!
//! ```text
//! markdown body ──pulldown-cmark──▶ HTML fragment ──┐
//! front matter  ──fallbacks──────▶ title, subtitle ├──▶ template ──▶ BuiltPage
//! config        ──────────────────▶ year ───────────┘
//! ```
//!
//! ## Output Paths
//!
//! ```text
//! public/
//! ├── index.html          # content/index.md (+ Recent Posts list)
//! ├── about.html          # content/about.md
//! └── posts/
//!     └── first.html      # content/posts/first.md
//! ```
//!
//! ## Index Augmentation
//!
//! The configured index page (`index.md` by default) gets a "Recent Posts"
//! section appended after its own content. The list is rendered with maud,
//! so titles and descriptions are HTML-escaped.

use crate::config::BuildConfig;
use crate::front_matter::ParsedDocument;
use crate::naming;
use crate::posts::Post;
use crate::template::{self, Vars};
use maud::html;
use pulldown_cmark::{Options, Parser, html as md_html};
use std::path::PathBuf;

/// Shown in place of the post list when there are no posts.
pub const NO_POSTS_NOTICE: &str = "<p>No posts yet. Add markdown files to <code>content/posts/</code> to get started!</p>";

const RECENT_POSTS_HEADING: &str = "\n<h2>Recent Posts</h2>\n";

/// Values substituted into the template for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub content: String,
    pub year: i32,
}

impl PageContext {
    pub fn vars(&self) -> Vars {
        Vars::from([
            ("title".to_string(), self.title.clone()),
            ("subtitle".to_string(), self.subtitle.clone()),
            ("description".to_string(), self.description.clone()),
            ("content".to_string(), self.content.clone()),
            ("year".to_string(), self.year.to_string()),
        ])
    }
}

/// A rendered page ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPage {
    pub html: String,
    pub output_path: PathBuf,
    /// Output path relative to the output root, `/`-separated, for display.
    pub display_path: String,
}

/// Convert Markdown to an HTML fragment.
///
/// Tables, strikethrough, task lists, and footnotes are enabled.
pub fn render_markdown(body: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(body, options);
    let mut out = String::with_capacity(body.len() * 3 / 2);
    md_html::push_html(&mut out, parser);
    out
}

/// Template values for a post: the date doubles as the subtitle.
pub fn post_context(post: &Post, content: String, year: i32) -> PageContext {
    PageContext {
        title: post.title.clone(),
        subtitle: post.date.clone(),
        description: post.description.clone(),
        content,
        year,
    }
}

/// Template values for a standalone page.
pub fn page_context(doc: &ParsedDocument, content: String, year: i32) -> PageContext {
    PageContext {
        title: doc.field("title").unwrap_or("Untitled").to_string(),
        subtitle: doc.field("subtitle").unwrap_or_default().to_string(),
        description: doc.field("description").unwrap_or_default().to_string(),
        content,
        year,
    }
}

/// Render the post list shown on the index page.
///
/// Links are relative to the output root: `<posts_dir>/<slug>.html`.
pub fn render_post_list(posts: &[Post], posts_dir: &str) -> String {
    if posts.is_empty() {
        return NO_POSTS_NOTICE.to_string();
    }

    html! {
        div.post-list {
            @for post in posts {
                article.post-preview {
                    h3 {
                        a href=(post_href(posts_dir, &post.slug)) { (post.title) }
                    }
                    time.post-date { (post.date) }
                    @if !post.description.is_empty() {
                        p { (post.description) }
                    }
                }
            }
        }
    }
    .into_string()
}

fn post_href(posts_dir: &str, slug: &str) -> String {
    format!("{}/{}", posts_dir, naming::output_file_name(slug))
}

/// Append the "Recent Posts" section to an index page's content.
pub fn augment_index(content: &str, posts: &[Post], posts_dir: &str) -> String {
    format!(
        "{}{}{}",
        content,
        RECENT_POSTS_HEADING,
        render_post_list(posts, posts_dir)
    )
}

/// Render a post to `<output>/<posts_dir>/<slug>.html`.
pub fn build_post(post: &Post, template: &str, config: &BuildConfig) -> BuiltPage {
    let content = render_markdown(&post.body);
    let context = post_context(post, content, config.year);
    let file_name = naming::output_file_name(&post.slug);

    BuiltPage {
        html: template::render(template, &context.vars()),
        output_path: config.posts_output_dir().join(&file_name),
        display_path: format!("{}/{}", config.posts_dir, file_name),
    }
}

/// Render a standalone page to `<output>/<name>.html`.
///
/// `file_name` is the source file name; when it matches the configured index
/// page, the post list is appended to the content.
pub fn build_page(
    file_name: &str,
    doc: &ParsedDocument,
    template: &str,
    config: &BuildConfig,
    posts: &[Post],
) -> BuiltPage {
    let mut content = render_markdown(&doc.body);
    if file_name == config.index_page {
        content = augment_index(&content, posts, &config.posts_dir);
    }
    let context = page_context(doc, content, config.year);
    let output_name = naming::output_file_name(file_name);

    BuiltPage {
        html: template::render(template, &context.vars()),
        output_path: config.output_dir.join(&output_name),
        display_path: output_name,
    }
}
