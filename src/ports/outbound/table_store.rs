use crate::advisory_scan::domain::SpreadsheetTable;
use crate::shared::Result;

/// TableStore port for the spreadsheet being annotated
///
/// The store reads the whole table once at start and writes the augmented
/// table back at the end. Writing replaces the stored content.
pub trait TableStore {
    /// Reads the full table, header row included
    fn read_table(&self) -> Result<SpreadsheetTable>;

    /// Writes the table, overwriting any previous content
    fn write_table(&self, table: &SpreadsheetTable) -> Result<()>;

    /// Human-readable location for progress messages
    fn location(&self) -> String;
}

impl<S: TableStore + ?Sized> TableStore for &S {
    fn read_table(&self) -> Result<SpreadsheetTable> {
        (**self).read_table()
    }

    fn write_table(&self, table: &SpreadsheetTable) -> Result<()> {
        (**self).write_table(table)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
