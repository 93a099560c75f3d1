//! Result table assembly and CSV output
//!
//! Labels become the header row; each label's names run down its column.
//! Shorter columns are padded with empty cells.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, ScrapeError};

/// Label -> names, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    columns: Vec<(String, Vec<String>)>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty `names` are dropped. A repeated label replaces the earlier
    /// values but keeps the earlier column position.
    pub fn insert(&mut self, label: impl Into<String>, names: Vec<String>) {
        if names.is_empty() {
            return;
        }

        let label = label.into();
        match self.columns.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = names,
            None => self.columns.push((label, names)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, names)| names.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Longest column.
    pub fn depth(&self) -> usize {
        self.columns
            .iter()
            .map(|(_, names)| names.len())
            .max()
            .unwrap_or(0)
    }

    /// Header row followed by `depth()` padded data rows.
    pub fn to_rows(&self) -> Result<Vec<Vec<String>>> {
        if self.columns.is_empty() {
            return Err(ScrapeError::EmptyResultSet);
        }

        let depth = self.depth();
        let mut rows = Vec::with_capacity(depth + 1);
        rows.push(self.labels().map(String::from).collect());

        for i in 0..depth {
            rows.push(
                self.columns
                    .iter()
                    .map(|(_, names)| names.get(i).cloned().unwrap_or_default())
                    .collect(),
            );
        }

        Ok(rows)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let rows = self.to_rows()?;

        let mut out = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);
        for row in &rows {
            out.write_record(row)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Writes to `path`, creating parent directories as needed. Nothing is
    /// created when the table is empty.
    pub fn write_csv_file(&self, path: &Path) -> Result<()> {
        if self.columns.is_empty() {
            return Err(ScrapeError::EmptyResultSet);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        self.write_csv(File::create(path)?)
    }
}
