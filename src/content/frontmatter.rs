//! Front-matter for new posts

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Delimiter line around the front-matter block
const DELIMITER: &str = "---";

/// Front-matter of a blog post, in the field order the site generator expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub date: NaiveDate,
    pub draft: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Double-quoted YAML scalar
fn yaml_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl FrontMatter {
    /// Front-matter of a freshly created draft
    pub fn draft(title: &str, date: NaiveDate) -> Self {
        Self {
            title: title.to_string(),
            date,
            draft: true,
            description: String::new(),
            tags: Vec::new(),
        }
    }

    /// Render the block as literal lines followed by a blank line.
    ///
    /// The title is written verbatim; no YAML quoting is applied.
    pub fn render(&self) -> String {
        let tags = self
            .tags
            .iter()
            .map(|t| yaml_quote(t))
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = String::new();
        out.push_str(DELIMITER);
        out.push('\n');
        out.push_str(&format!("title: {}\n", self.title));
        out.push_str(&format!("date: {}\n", self.date.format("%Y-%m-%d")));
        out.push_str(&format!("draft: {}\n", self.draft));
        out.push_str(&format!("description: {}\n", yaml_quote(&self.description)));
        out.push_str(&format!("tags: [{}]\n", tags));
        out.push_str(DELIMITER);
        out.push_str("\n\n");
        out
    }

    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let rest = content
            .strip_prefix(DELIMITER)
            .ok_or_else(|| anyhow!("Missing opening {}", DELIMITER))?;
        let rest = rest.trim_start_matches(['\n', '\r']);

        // Empty block: closing delimiter right away
        let (yaml_content, remaining) = if let Some(after) = rest.strip_prefix(DELIMITER) {
            ("", after)
        } else {
            let end_pos = rest
                .find("\n---")
                .ok_or_else(|| anyhow!("Missing closing {}", DELIMITER))?;
            (&rest[..end_pos], &rest[end_pos + 4..])
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        let fm: FrontMatter = serde_yaml::from_str(yaml_content)
            .map_err(|e| anyhow!("Failed to parse YAML front-matter: {}", e))?;

        Ok((fm, remaining))
    }
}
