//! CLI entry point for blog-scaffold

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-scaffold")]
#[command(version)]
#[command(about = "Prepares new posts for a static blog", long_about = None)]
struct Cli {
    /// Blog root directory [default: the crate directory this tool was built
    /// from, or the executable's directory once that no longer exists]
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new draft post
    New {
        /// Title of the new post (prompted for when omitted)
        title: Option<String>,
    },

    /// Run one of the example snippets from the blog
    Snippet {
        #[command(subcommand)]
        snippet: Snippets,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum Snippets {
    /// Print the paragraphs of an HTML file
    Paragraphs {
        /// HTML file to read
        file: PathBuf,
    },

    /// Show both representations of a movie
    Movie {
        #[arg(default_value = "The Revenant")]
        name: String,

        #[arg(default_value = "2015")]
        release_year: u16,
    },

    /// Check whether a word is an isogram
    Isogram {
        word: String,
    },
}

/// Ask for the title on stdin
fn prompt_title() -> Result<String> {
    print!("New post title: ");
    io::stdout().flush()?;

    blog_scaffold::content::read_title(io::stdin().lock()).context("Failed to read post title")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_scaffold=debug,info"
    } else {
        "blog_scaffold=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Anchor output at the tool's own location unless told otherwise
    let base_dir = cli.root.unwrap_or_else(blog_scaffold::default_root);

    match cli.command {
        Commands::New { title } => {
            let title = match title {
                Some(title) => title,
                None => prompt_title()?,
            };
            let blog = blog_scaffold::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let path = blog.new_post(&title)?;
            println!("{}", blog_scaffold::commands::new::confirmation(&path));
        }

        Commands::Snippet { snippet } => match snippet {
            Snippets::Paragraphs { file } => {
                blog_scaffold::commands::snippet::paragraphs(&file)?;
            }
            Snippets::Movie { name, release_year } => {
                blog_scaffold::commands::snippet::movie(&name, release_year);
            }
            Snippets::Isogram { word } => {
                blog_scaffold::commands::snippet::isogram(&word);
            }
        },

        Commands::Version => {
            println!("blog-scaffold version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
