use crate::shared::Result;

/// In-memory tabular data read from, and written back to, the spreadsheet.
///
/// Every row holds exactly `headers.len()` cells; short rows are padded
/// with empty cells on construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpreadsheetTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SpreadsheetTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let width = headers.len();
        let mut normalized = Vec::with_capacity(rows.len());
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                anyhow::bail!(
                    "Row {} has {} cells but the header row only has {} columns",
                    i + 1,
                    row.len(),
                    width
                );
            }
            row.resize(width, String::new());
            normalized.push(row);
        }
        Ok(Self {
            headers,
            rows: normalized,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Returns the cells of column `name`, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Creates column `name` at the end of the table, or overwrites it in place.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            anyhow::bail!(
                "Column '{}' has {} values but the table has {} rows",
                name,
                values.len(),
                self.rows.len()
            );
        }

        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }
}
