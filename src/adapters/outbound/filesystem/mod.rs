/// Filesystem adapters for spreadsheet I/O
mod csv_table_store;

pub use csv_table_store::CsvTableStore;
