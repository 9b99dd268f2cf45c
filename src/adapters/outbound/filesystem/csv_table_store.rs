use crate::advisory_scan::domain::SpreadsheetTable;
use crate::ports::outbound::TableStore;
use crate::shared::error::PsirtError;
use crate::shared::security::{validate_input_file, validate_output_file};
use crate::shared::Result;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::path::{Path, PathBuf};

/// CsvTableStore adapter reading and writing the inventory as CSV
///
/// The first record is the header row. Rows may be shorter than the header
/// (trailing empty cells are often dropped by spreadsheet exports); they are
/// padded on read. By default the table is written back to the file it was
/// read from, replacing it.
pub struct CsvTableStore {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl CsvTableStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            output_path: path.clone(),
            input_path: path,
        }
    }

    /// Writes to `output_path` instead of overwriting the input file
    pub fn with_output(mut self, output_path: PathBuf) -> Self {
        self.output_path = output_path;
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn read_error(&self, details: impl ToString) -> anyhow::Error {
        PsirtError::FileReadError {
            path: self.input_path.clone(),
            details: details.to_string(),
        }
        .into()
    }

    fn write_error(&self, details: impl ToString) -> anyhow::Error {
        PsirtError::FileWriteError {
            path: self.output_path.clone(),
            details: details.to_string(),
        }
        .into()
    }
}

fn record_to_cells(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

impl TableStore for CsvTableStore {
    fn read_table(&self) -> Result<SpreadsheetTable> {
        validate_input_file(&self.input_path)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.input_path)
            .map_err(|e| self.read_error(e))?;

        let mut headers = record_to_cells(reader.headers().map_err(|e| self.read_error(e))?);
        if let Some(first) = headers.first_mut() {
            *first = first.trim_start_matches('\u{feff}').to_string();
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| self.read_error(e))?;
            rows.push(record_to_cells(&record));
        }

        SpreadsheetTable::new(headers, rows).map_err(|e| self.read_error(e))
    }

    fn write_table(&self, table: &SpreadsheetTable) -> Result<()> {
        validate_output_file(&self.output_path)?;

        let mut writer = WriterBuilder::new()
            .from_path(&self.output_path)
            .map_err(|e| self.write_error(e))?;

        writer
            .write_record(table.headers())
            .map_err(|e| self.write_error(e))?;
        for row in table.rows() {
            writer.write_record(row).map_err(|e| self.write_error(e))?;
        }
        writer.flush().map_err(|e| self.write_error(e))?;

        Ok(())
    }

    fn location(&self) -> String {
        if self.input_path == self.output_path {
            self.input_path.display().to_string()
        } else {
            format!(
                "{} -> {}",
                self.input_path.display(),
                self.output_path.display()
            )
        }
    }
}
