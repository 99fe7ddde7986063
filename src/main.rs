use clap::{Parser, Subcommand};
use simple_blog::config::{self, BuildConfig};
use simple_blog::{output, site};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-blog")]
#[command(about = "Static site generator for Markdown blogs")]
#[command(long_about = "\
Static site generator for Markdown blogs

Pages and posts are Markdown files with optional front matter. Every page is
rendered through a single HTML template.

Site structure:

  my-blog/
  ├── config.toml            # Optional settings (see gen-config)
  ├── template.html          # {{title}} {{subtitle}} {{description}} {{content}} {{year}}
  └── content/
      ├── index.md           # Home page; gets a \"Recent Posts\" list
      ├── about.md           # Any other page → about.html
      └── posts/
          └── first-post.md  # → posts/first-post.html

Front matter (optional):

  ---
  title: Hello
  date: 2024-01-01
  description: Shown in the post list
  ---

Run 'simple-blog gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site root: holds config.toml; relative paths resolve against it
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Content directory (overrides config.toml)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory (overrides config.toml)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Template file (overrides config.toml)
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate the whole site
    Build,
    /// Parse all content and list what would be built, without writing
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = resolve_config(&cli)?;
            println!("==> Building {}", config.output_dir.display());
            let summary = site::build(&config, output::print_build_event)?;
            output::print_build_summary(&summary);
        }
        Command::Check => {
            let config = resolve_config(&cli)?;
            println!("==> Checking {}", config.content_dir.display());
            let inventory = site::check(&config)?;
            output::print_check_output(&inventory, &config);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load `config.toml` from the site root and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<BuildConfig, config::ConfigError> {
    let site_config = config::load_config(&cli.root)?;
    let mut build_config = BuildConfig::resolve(&cli.root, &site_config, config::current_year());
    if let Some(source) = &cli.source {
        build_config.content_dir = source.clone();
    }
    if let Some(output) = &cli.output {
        build_config.output_dir = output.clone();
    }
    if let Some(template) = &cli.template {
        build_config.template_path = template.clone();
    }
    Ok(build_config)
}
