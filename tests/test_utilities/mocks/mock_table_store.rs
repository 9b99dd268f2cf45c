use psirt_annotate::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock TableStore keeping the spreadsheet in memory and capturing writes
#[derive(Clone)]
pub struct MockTableStore {
    table: SpreadsheetTable,
    written: Arc<Mutex<Option<SpreadsheetTable>>>,
}

#[allow(dead_code)]
impl MockTableStore {
    pub fn new(table: SpreadsheetTable) -> Self {
        Self {
            table,
            written: Arc::new(Mutex::new(None)),
        }
    }

    /// Table with a single `software_version` column holding `versions`
    pub fn with_versions(versions: &[&str]) -> Self {
        let rows = versions.iter().map(|v| vec![v.to_string()]).collect();
        Self::new(SpreadsheetTable::new(vec!["software_version".to_string()], rows).unwrap())
    }

    pub fn written(&self) -> Option<SpreadsheetTable> {
        self.written.lock().unwrap().clone()
    }
}

impl TableStore for MockTableStore {
    fn read_table(&self) -> Result<SpreadsheetTable> {
        Ok(self.table.clone())
    }

    fn write_table(&self, table: &SpreadsheetTable) -> Result<()> {
        *self.written.lock().unwrap() = Some(table.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
