//! Run the example snippets from the blog posts

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::snippets::{get_paragraphs, is_isogram, Movie};

/// Print every paragraph of an HTML file, each followed by a blank line
pub fn paragraphs(file: &Path) -> Result<()> {
    let html = fs::read_to_string(file)?;
    let found = get_paragraphs(&html);
    tracing::debug!("Found {} paragraphs in {:?}", found.len(), file);

    for p in found {
        println!("{}\n", p);
    }
    Ok(())
}

/// Print both representations of a movie
pub fn movie(name: &str, release_year: u16) {
    let movie = Movie::new(name, release_year);
    println!("{}", movie);
    println!("{:?}", movie);
}

/// Report whether `word` is an isogram
pub fn isogram(word: &str) {
    if is_isogram(word) {
        println!("'{}' is an isogram", word);
    } else {
        println!("Not an isogram");
    }
}
