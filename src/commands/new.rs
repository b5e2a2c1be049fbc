//! Create a new post

use anyhow::Result;
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::content::{FrontMatter, PostRequest};
use crate::error::ScaffoldError;
use crate::Blog;

/// Create the post directory and write a draft front-matter stub dated today
pub fn create_post(title: &str, path: &Path) -> crate::error::Result<()> {
    create_post_dated(title, path, chrono::Local::now().date_naive())
}

/// Create the post directory and write a draft front-matter stub.
///
/// The post's own directory must not exist yet; its ancestors are created
/// as needed. Nothing is cleaned up if the write fails.
pub fn create_post_dated(title: &str, path: &Path, date: NaiveDate) -> crate::error::Result<()> {
    let post_dir = path.parent().unwrap_or_else(|| Path::new(""));

    if let Some(ancestor) = post_dir.parent() {
        fs::create_dir_all(ancestor).map_err(|e| ScaffoldError::io(ancestor, e))?;
    }

    fs::create_dir(post_dir).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => ScaffoldError::AlreadyExists {
            path: post_dir.to_path_buf(),
        },
        _ => ScaffoldError::io(post_dir, e),
    })?;
    tracing::debug!("Created directory {:?}", post_dir);

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| ScaffoldError::io(path, e))?;

    let content = FrontMatter::draft(title, date).render();
    file.write_all(content.as_bytes())
        .map_err(|e| ScaffoldError::io(path, e))?;

    tracing::info!("Wrote front-matter for {:?} to {:?}", title, path);
    Ok(())
}

/// Line reported to the user once the post file exists
pub fn confirmation(path: &Path) -> String {
    format!("Prepared file: {}", path.display())
}

/// Run the new command, returning the absolute path of the created file
pub fn run(blog: &Blog, title: &str) -> Result<PathBuf> {
    let request = PostRequest::new(title)?;
    let path = blog.post_path(&request);
    tracing::debug!(
        "Derived path {:?} from title {:?} under {:?}",
        path,
        title,
        blog.base_dir
    );

    create_post(&request.title, &path)?;

    Ok(fs::canonicalize(&path)?)
}
