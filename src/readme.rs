//! README marker patching.
//!
//! The README owns a managed region delimited by two sentinel comments.
//! Everything between the markers belongs to this tool; everything outside
//! them is never touched. The marker text is part of the external contract
//! and must match verbatim (modulo surrounding whitespace on the line).

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Opens the managed projects region.
pub const START_MARKER: &str = "<!--START_SECTION:projects-->";
/// Closes the managed projects region. Absent on the very first run.
pub const END_MARKER: &str = "<!--END_SECTION:projects-->";

/// Fake shell prompt rendered above the listing inside the `<pre>` block.
const LISTING_HEADER: &str = "~ root# ls -o work/";

/// What a patch did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// Both markers were present and the interior block was replaced.
    Updated,
    /// The end marker was absent; the block and the end marker were
    /// inserted after the start marker (first-run bootstrap).
    Bootstrapped,
    /// The fresh block matches the existing one; nothing was written.
    Unchanged,
}

/// README contents as an ordered sequence of lines, mutated in memory and
/// written back as a whole.
#[derive(Debug)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Read the README from disk.
    ///
    /// # Errors
    /// Returns an error (with the resolved path in the message) if the
    /// file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("README not found: {}", path.display()))?;
        Ok(Self {
            lines: txt.split('\n').map(str::to_string).collect(),
        })
    }

    /// Write the README back, overwriting the whole file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.lines.join("\n"))
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Splice `rendered` (the formatted listing rows) into the managed
    /// region, wrapped in the `<pre>` block.
    ///
    /// With only the start marker present, the block plus a new end marker
    /// is inserted right after it. With both markers present, the interior
    /// span is replaced wholesale — unless the existing content already
    /// equals the fresh block after trimming, in which case the document
    /// is left untouched and [`PatchOutcome::Unchanged`] is returned.
    ///
    /// The marker lines themselves are never moved, duplicated, or removed.
    ///
    /// # Errors
    /// Fails without mutating anything if the start marker is missing, or
    /// if the end marker appears before the start marker.
    pub fn patch_projects(&mut self, rendered: &[String]) -> Result<PatchOutcome> {
        let Some(start) = find_marker(&self.lines, START_MARKER) else {
            bail!("couldn't find the {} comment in the README", START_MARKER);
        };

        let block = build_block(rendered);

        match find_marker(&self.lines, END_MARKER) {
            None => {
                let mut insert = block;
                insert.push(END_MARKER.to_string());
                self.lines.splice(start + 1..start + 1, insert);
                Ok(PatchOutcome::Bootstrapped)
            }
            Some(end) if end < start => {
                bail!(
                    "{} appears before {} in the README",
                    END_MARKER,
                    START_MARKER
                );
            }
            Some(end) => {
                let old = self.lines[start + 1..end].join("\n");
                let new = block.join("\n");
                if old.trim() == new.trim() {
                    return Ok(PatchOutcome::Unchanged);
                }
                self.lines.splice(start + 1..end, block);
                Ok(PatchOutcome::Updated)
            }
        }
    }
}

/// Linear scan for a marker line. Markers match on the trimmed line so an
/// indented marker (e.g. inside a formatted README) still counts.
fn find_marker(lines: &[String], marker: &str) -> Option<usize> {
    lines.iter().position(|l| l.trim() == marker)
}

/// Wrap the listing rows in the `<pre>` block: open tag, fake prompt,
/// `total <n>` line, the rows, close tag.
fn build_block(rendered: &[String]) -> Vec<String> {
    let mut block = Vec::with_capacity(rendered.len() + 4);
    block.push("<pre>".to_string());
    block.push(LISTING_HEADER.to_string());
    block.push(format!("total {}", rendered.len()));
    block.extend(rendered.iter().cloned());
    block.push("</pre>".to_string());
    block
}
