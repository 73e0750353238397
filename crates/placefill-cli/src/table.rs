//! In-memory CSV table of places.
//!
//! Rows keep their original order and are addressed by their 0-based index
//! (header excluded). Enrichment results are merged back by that index after
//! the lookup pass; no row is ever added or removed.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use placefill_core::{EnrichedPlace, ENRICHMENT_COLUMNS, LOCATION_COLUMN, NAME_COLUMN};

#[derive(Debug, Clone)]
pub(crate) struct PlaceTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl PlaceTable {
    /// Reads a comma-separated table with a header row from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, is not valid CSV, has
    /// no `Name` column, or has a row with more fields than the header.
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .map_err(|e| anyhow::anyhow!("failed to open input table {}: {e}", path.display()))?;
        Self::from_reader(file)
            .map_err(|e| anyhow::anyhow!("failed to read input table {}: {e}", path.display()))
    }

    pub(crate) fn from_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if !headers.iter().any(|h| h == NAME_COLUMN) {
            anyhow::bail!("table has no '{NAME_COLUMN}' column");
        }

        let mut rows = Vec::new();
        for (index, record) in rdr.records().enumerate() {
            let record = record?;
            if record.len() > headers.len() {
                anyhow::bail!(
                    "row {index} has {} fields but the header has {}",
                    record.len(),
                    headers.len()
                );
            }
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub(crate) fn headers(&self) -> &[String] {
        &self.headers
    }

    pub(crate) fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    #[cfg(test)]
    pub(crate) fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }

    /// Appends every column in `columns` that is not already present, filling
    /// existing rows with empty cells. Existing columns keep their position
    /// and contents.
    pub(crate) fn ensure_columns(&mut self, columns: &[&str]) {
        for column in columns {
            if self.column_index(column).is_none() {
                self.headers.push((*column).to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
            }
        }
    }

    /// Yields `(row index, name, location)` for every row in table order.
    /// `location` is `None` when the table has no `Location` column.
    pub(crate) fn place_inputs(&self) -> impl Iterator<Item = (usize, &str, Option<&str>)> + '_ {
        let name_col = self.column_index(NAME_COLUMN);
        let location_col = self.column_index(LOCATION_COLUMN);
        self.rows.iter().enumerate().map(move |(index, row)| {
            let name = name_col.map_or("", |c| row[c].as_str());
            let location = location_col.map(|c| row[c].as_str());
            (index, name, location)
        })
    }

    /// Writes enrichment results into their rows. Indices past the end of
    /// the table are ignored.
    pub(crate) fn merge(&mut self, updates: &BTreeMap<usize, EnrichedPlace>) {
        self.ensure_columns(&ENRICHMENT_COLUMNS);
        for (&index, place) in updates {
            let Some(row) = self.rows.get_mut(index) else {
                continue;
            };
            for (column, value) in place.column_values() {
                if let Some(col) = self.headers.iter().position(|h| h == column) {
                    row[col] = value.to_string();
                }
            }
        }
    }

    /// Writes the table to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub(crate) fn save(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .map_err(|e| anyhow::anyhow!("failed to create output table {}: {e}", path.display()))?;
        self.to_writer(file)
            .map_err(|e| anyhow::anyhow!("failed to write output table {}: {e}", path.display()))
    }

    pub(crate) fn to_writer<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
