//! blog-scaffold: prepares new posts for a static blog
//!
//! Derives a post directory from its title and writes a draft front-matter
//! stub for the site generator to pick up. Also carries the small example
//! programs the blog posts are built around.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod snippets;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::PostRequest;

/// Default blog root: the directory this tool lives in.
///
/// The crate directory recorded at build time wins while it still exists (a
/// checkout inside the blog). An installed binary falls back to the
/// directory holding the executable, then to the working directory.
pub fn default_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    if manifest_dir.is_dir() {
        return manifest_dir.to_path_buf();
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match exe_dir {
        Some(dir) => {
            tracing::debug!("{:?} is gone, anchoring at {:?}", manifest_dir, dir);
            dir
        }
        None => PathBuf::from("."),
    }
}

/// The blog a post is created in
#[derive(Debug, Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory every output path is anchored at
    pub base_dir: PathBuf,
    /// Directory holding one sub-directory per post
    pub content_dir: PathBuf,
}

impl Blog {
    /// Open the blog rooted at `base_dir`, reading `blog.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::BlogConfig::load_or_default(&base_dir)?;
        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Location of the post file for a request
    pub fn post_path(&self, request: &PostRequest) -> PathBuf {
        content::post_path_in(&self.content_dir, &request.slug, &self.config.index_file)
    }

    /// Create a new post, returning the absolute path of its file
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::run(self, title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_root_is_crate_dir() {
        assert_eq!(default_root(), PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        assert!(default_root().join("Cargo.toml").is_file());
    }

    #[test]
    fn test_post_path_defaults() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let request = PostRequest::new("Hello World").unwrap();

        assert_eq!(
            blog.post_path(&request),
            dir.path().join("content/blog/hello-world/index.md")
        );
    }

    #[test]
    fn test_post_path_from_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(config::CONFIG_FILE),
            "content_dir: posts\nindex_file: README.md\n",
        )
        .unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let request = PostRequest::new("Hello World").unwrap();

        assert_eq!(
            blog.post_path(&request),
            dir.path().join("posts/hello-world/README.md")
        );
    }

    #[test]
    fn test_new_post_twice() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        blog.new_post("Twice").unwrap();
        let err = blog.new_post("Twice").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<error::ScaffoldError>(),
            Some(error::ScaffoldError::AlreadyExists { .. })
        ));
    }
}
