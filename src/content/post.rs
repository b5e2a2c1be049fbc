//! New post requests and their on-disk location

use std::io::BufRead;
use std::path::{self, Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Default directory holding one sub-directory per post
pub const CONTENT_DIR: &str = "content/blog";

/// Default file name of a post inside its directory
pub const INDEX_FILE: &str = "index.md";

/// Turn a title into a directory name.
///
/// Lower-cases the text and replaces each space with a hyphen. Everything
/// else, punctuation and non-ASCII included, passes through unchanged.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Relative path of the post for `title`: `content/blog/<slug>/index.md`
pub fn derive_path(title: &str) -> PathBuf {
    post_path_in(Path::new(CONTENT_DIR), &slugify(title), INDEX_FILE)
}

pub(crate) fn post_path_in(content_dir: &Path, slug: &str, index_file: &str) -> PathBuf {
    content_dir.join(slug).join(index_file)
}

/// A validated request for a new post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub title: String,
    pub slug: String,
}

impl PostRequest {
    /// Validate `title` and derive its slug
    pub fn new(title: &str) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(ScaffoldError::EmptyTitle);
        }

        // A line break would end the title line of the front-matter early
        if title.contains(['\n', '\r']) {
            return Err(ScaffoldError::InvalidTitle {
                title: title.to_string(),
            });
        }

        let slug = slugify(title);
        if slug == "." || slug == ".." || slug.chars().any(path::is_separator) {
            return Err(ScaffoldError::InvalidSlug { slug });
        }

        Ok(Self {
            title: title.to_string(),
            slug,
        })
    }
}

/// Read one title line, dropping only the trailing line ending
pub fn read_title<R: BufRead>(mut reader: R) -> std::io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let title = line.strip_suffix('\n').unwrap_or(&line);
    let title = title.strip_suffix('\r').unwrap_or(title);
    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_path() {
        assert_eq!(
            derive_path("Hello World"),
            PathBuf::from("content/blog/hello-world/index.md")
        );
        assert_eq!(
            derive_path("My First Post"),
            PathBuf::from("content/blog/my-first-post/index.md")
        );
    }

    #[test]
    fn test_slugify_letters_and_spaces() {
        for (title, slug) in [
            ("Rust", "rust"),
            ("The Main Function In Python", "the-main-function-in-python"),
            ("a B c", "a-b-c"),
        ] {
            assert_eq!(slugify(title), slug);
        }
    }

    #[test]
    fn test_slugify_passes_other_characters_through() {
        assert_eq!(
            slugify("Python's repr and str methods"),
            "python's-repr-and-str-methods"
        );
        assert_eq!(slugify("Café Crème!"), "café-crème!");
        assert_eq!(slugify("two  spaces "), "two--spaces-");
    }

    #[test]
    fn test_request_keeps_title_verbatim() {
        let req = PostRequest::new("Intro to Regex with Python").unwrap();
        assert_eq!(req.title, "Intro to Regex with Python");
        assert_eq!(req.slug, "intro-to-regex-with-python");
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(matches!(PostRequest::new(""), Err(ScaffoldError::EmptyTitle)));
        assert!(matches!(
            PostRequest::new("   "),
            Err(ScaffoldError::EmptyTitle)
        ));
    }

    #[test]
    fn test_multiline_title_rejected() {
        for title in ["x\ndraft: false", "line\r\nbreak", "trailing\r"] {
            assert!(matches!(
                PostRequest::new(title),
                Err(ScaffoldError::InvalidTitle { .. })
            ));
        }
    }

    #[test]
    fn test_separator_in_slug_rejected() {
        assert!(matches!(
            PostRequest::new("either/or"),
            Err(ScaffoldError::InvalidSlug { .. })
        ));
        assert!(matches!(
            PostRequest::new(".."),
            Err(ScaffoldError::InvalidSlug { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_backslash_is_a_plain_character_on_unix() {
        let req = PostRequest::new("A\\B").unwrap();
        assert_eq!(req.slug, "a\\b");
        assert_eq!(
            derive_path("A\\B"),
            PathBuf::from("content/blog/a\\b/index.md")
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_backslash_is_a_separator_on_windows() {
        assert!(matches!(
            PostRequest::new("A\\B"),
            Err(ScaffoldError::InvalidSlug { .. })
        ));
    }

    #[test]
    fn test_read_title_strips_line_ending() {
        assert_eq!(read_title("My First Post\n".as_bytes()).unwrap(), "My First Post");
        assert_eq!(read_title("Title\r\n".as_bytes()).unwrap(), "Title");
        assert_eq!(read_title("  Spaced  \n".as_bytes()).unwrap(), "  Spaced  ");
    }

    #[test]
    fn test_read_title_at_eof() {
        assert_eq!(read_title("Title".as_bytes()).unwrap(), "Title");
        assert_eq!(read_title("".as_bytes()).unwrap(), "");
    }

    #[test]
    fn test_read_title_takes_first_line_only() {
        assert_eq!(read_title("first\nsecond\n".as_bytes()).unwrap(), "first");
    }
}
