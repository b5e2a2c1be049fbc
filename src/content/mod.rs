//! Content module - post requests and front-matter

mod frontmatter;
mod post;

pub use frontmatter::FrontMatter;
pub use post::{derive_path, read_title, slugify, PostRequest, CONTENT_DIR, INDEX_FILE};
pub(crate) use post::post_path_in;
