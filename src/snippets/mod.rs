//! Example code from the blog posts
//!
//! Each snippet is a small pure function illustrating one idea.

pub mod isogram;
pub mod movie;
pub mod paragraphs;

pub use isogram::is_isogram;
pub use movie::Movie;
pub use paragraphs::get_paragraphs;
