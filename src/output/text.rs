//! Plain-text report.
//!
//! One line per group, groups ordered by hash:
//!
//! ```text
//! [docs/a.txt docs/b.txt] are duplicate files
//! ```
//!
//! An empty result prints `No duplicates found`.

use std::io::{self, Write};

use crate::duplicates::DuplicateGroups;

/// Message printed when the search found nothing.
pub const NO_DUPLICATES: &str = "No duplicates found";

/// Plain-text output formatter.
pub struct TextOutput<'a> {
    groups: &'a DuplicateGroups,
}

impl<'a> TextOutput<'a> {
    /// Create a new text formatter.
    #[must_use]
    pub fn new(groups: &'a DuplicateGroups) -> Self {
        Self { groups }
    }

    /// Write the report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if self.groups.is_empty() {
            return writeln!(writer, "{NO_DUPLICATES}");
        }

        for group in self.groups.sorted() {
            let paths: Vec<_> = group
                .paths
                .iter()
                .map(|p| p.to_string_lossy())
                .collect();
            writeln!(writer, "[{}] are duplicate files", paths.join(" "))?;
        }
        Ok(())
    }

    /// Render the report as a string.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
