mod cli;

use cli::Args;
use psirt_annotate::config::{discover_config, load_config_from_path, Settings};
use psirt_annotate::prelude::*;
use psirt_annotate::shared::error::ExitCode;
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Credentials may live in a .env file next to the spreadsheet
    dotenvy::dotenv().ok();

    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = args.resolve_settings(config.as_ref())?;
    let progress_reporter = StderrProgressReporter::new();

    if args.dry_run {
        return validate_spreadsheet(&settings, &progress_reporter);
    }

    // Credentials are required before any request is attempted
    let credentials = Credentials::from_env()?;
    let client = OpenVulnClient::new(credentials, settings.rate_limit)?;

    if args.check_token {
        VerifyCredentialsUseCase::new(&client, &progress_reporter).execute()?;
        return Ok(());
    }

    let poller = AdvisoryPoller::new(&client, &client, &progress_reporter)
        .with_os_types(settings.os_types.clone());
    let advisory_lookup = CachingAdvisoryLookup::new(poller);

    let use_case = AnnotateSpreadsheetUseCase::new(
        table_store(&settings),
        &advisory_lookup,
        &progress_reporter,
    );
    let request = AnnotateRequest::new(
        settings.version_column.clone(),
        settings.continue_on_error,
        false,
    );
    let response = use_case.execute(request)?;

    let waited = client.rate_limit_wait();
    if !waited.is_zero() {
        progress_reporter.report(&format!(
            "⏱️  Waited {:.1}s in total to stay within openVuln rate limits ({} lookup(s))",
            waited.as_secs_f64(),
            response.lookups
        ));
    }

    Ok(())
}

/// Reads and checks the spreadsheet without touching the network or the file
fn validate_spreadsheet(
    settings: &Settings,
    progress_reporter: &StderrProgressReporter,
) -> Result<()> {
    let use_case =
        AnnotateSpreadsheetUseCase::new(table_store(settings), OfflineLookup, progress_reporter);
    let request = AnnotateRequest::new(settings.version_column.clone(), false, true);
    use_case.execute(request)?;
    Ok(())
}

fn table_store(settings: &Settings) -> CsvTableStore {
    let store = CsvTableStore::new(settings.spreadsheet.clone());
    match &settings.output {
        Some(output) => store.with_output(output.clone()),
        None => store,
    }
}
