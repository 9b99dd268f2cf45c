use crate::advisory_scan::domain::{AdvisoryResult, SoftwareVersion, SpreadsheetTable};
use crate::application::dto::{AnnotateRequest, AnnotateResponse};
use crate::ports::inbound::AdvisoryLookupPort;
use crate::ports::outbound::{ProgressReporter, TableStore};
use crate::shared::error::PsirtError;
use crate::shared::Result;
use anyhow::Context;
use std::collections::HashSet;
use std::path::PathBuf;

/// Column receiving the High advisory count
pub const PSIRT_HIGH_COLUMN: &str = "psirt_high";
/// Column receiving the Critical advisory count
pub const PSIRT_CRITICAL_COLUMN: &str = "psirt_critical";

/// AnnotateSpreadsheetUseCase - annotates every row with advisory counts
///
/// Reads the table, resolves each row's trimmed version through the
/// injected lookup, and writes `psirt_high` / `psirt_critical` back to the
/// same store. Blank versions get the "Error" sentinel without a lookup.
/// Each distinct version reaches the lookup at most once per run; pass a
/// [`CachingAdvisoryLookup`](crate::application::services::CachingAdvisoryLookup)
/// so repeated rows are not re-queried.
///
/// # Type Parameters
/// * `S` - TableStore implementation
/// * `L` - AdvisoryLookupPort implementation
/// * `PR` - ProgressReporter implementation
pub struct AnnotateSpreadsheetUseCase<S, L, PR> {
    table_store: S,
    advisory_lookup: L,
    progress_reporter: PR,
}

impl<S, L, PR> AnnotateSpreadsheetUseCase<S, L, PR>
where
    S: TableStore,
    L: AdvisoryLookupPort,
    PR: ProgressReporter,
{
    pub fn new(table_store: S, advisory_lookup: L, progress_reporter: PR) -> Self {
        Self {
            table_store,
            advisory_lookup,
            progress_reporter,
        }
    }

    /// Executes the annotation use case
    ///
    /// # Errors
    /// Returns an error if the spreadsheet cannot be read or written, the
    /// version column is missing, or (unless `continue_on_error` is set)
    /// any advisory lookup fails. A failed run leaves the spreadsheet
    /// untouched.
    pub fn execute(&self, request: AnnotateRequest) -> Result<AnnotateResponse> {
        // Step 1: Read the table and extract versions
        let mut table = self.read_table()?;
        let versions = self.extract_versions(&table, &request.version_column)?;

        let distinct: HashSet<&SoftwareVersion> = versions.iter().flatten().collect();
        let mut response = AnnotateResponse {
            rows: table.row_count(),
            distinct_versions: distinct.len(),
            blank_versions: versions.iter().filter(|v| v.is_none()).count(),
            ..AnnotateResponse::default()
        };
        self.progress_reporter.report(&format!(
            "✅ Detected {} row(s) with {} distinct software version(s)",
            response.rows, response.distinct_versions
        ));

        // Early return for dry-run mode (validation only)
        if request.dry_run {
            self.progress_reporter.report_completion(&format!(
                "Success: Spreadsheet validated. {} advisory lookup(s) would be performed.",
                response.distinct_versions
            ));
            return Ok(response);
        }

        // Step 2: Resolve every row
        let results = self.resolve_rows(&versions, &request, &mut response)?;
        response.error_rows = results.iter().filter(|r| r.is_error()).count();

        // Step 3: Write the new columns back
        table.set_column(
            PSIRT_HIGH_COLUMN,
            results.iter().map(AdvisoryResult::high_cell).collect(),
        )?;
        table.set_column(
            PSIRT_CRITICAL_COLUMN,
            results.iter().map(AdvisoryResult::critical_cell).collect(),
        )?;
        self.table_store.write_table(&table)?;
        response.written = true;

        self.progress_reporter.report_completion(&format!(
            "✅ Updated spreadsheet saved successfully: {}\n   {} row(s), {} lookup(s), {} row(s) marked Error",
            self.table_store.location(),
            response.rows,
            response.lookups,
            response.error_rows
        ));

        Ok(response)
    }

    fn read_table(&self) -> Result<SpreadsheetTable> {
        self.progress_reporter.report(&format!(
            "📖 Loading spreadsheet from: {}",
            self.table_store.location()
        ));
        self.table_store.read_table()
    }

    /// Trimmed version per row; `None` marks a blank cell
    fn extract_versions(
        &self,
        table: &SpreadsheetTable,
        column: &str,
    ) -> Result<Vec<Option<SoftwareVersion>>> {
        let cells = table.column(column).ok_or_else(|| PsirtError::MissingColumn {
            path: PathBuf::from(self.table_store.location()),
            column: column.to_string(),
        })?;
        Ok(cells.into_iter().map(SoftwareVersion::parse).collect())
    }

    fn resolve_rows(
        &self,
        versions: &[Option<SoftwareVersion>],
        request: &AnnotateRequest,
        response: &mut AnnotateResponse,
    ) -> Result<Vec<AdvisoryResult>> {
        let total = versions.len();
        let mut seen: HashSet<&SoftwareVersion> = HashSet::new();
        let mut failed: HashSet<&SoftwareVersion> = HashSet::new();
        let mut results = Vec::with_capacity(total);

        for (i, version) in versions.iter().enumerate() {
            let Some(version) = version else {
                results.push(AdvisoryResult::Error);
                self.progress_reporter
                    .report_progress(i + 1, total, Some("blank version"));
                continue;
            };

            self.progress_reporter
                .report_progress(i + 1, total, Some(version.as_str()));

            if failed.contains(version) {
                results.push(AdvisoryResult::Error);
                continue;
            }
            if seen.insert(version) {
                response.lookups += 1;
            }

            match self.advisory_lookup.lookup(version) {
                Ok(result) => results.push(result),
                Err(e) if request.continue_on_error => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Advisory lookup failed for version {}: {:#}",
                        version, e
                    ));
                    failed.insert(version);
                    response.failed_lookups += 1;
                    results.push(AdvisoryResult::Error);
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Advisory lookup failed for software version {}", version)
                    });
                }
            }
        }

        Ok(results)
    }
}
