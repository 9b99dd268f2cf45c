use clap::Parser;
use psirt_annotate::advisory_scan::domain::OsType;
use psirt_annotate::config::{ConfigFile, Settings};
use psirt_annotate::shared::Result;
use std::path::PathBuf;

/// Annotate a device inventory with Cisco PSIRT high/critical advisory counts
///
/// Every option is optional: without arguments the tool annotates
/// `Baseline_albr_extract.csv` in the current directory in place.
#[derive(Parser, Debug)]
#[command(name = "psirt-annotate")]
#[command(version)]
#[command(about = "Annotate device software versions with Cisco PSIRT advisory counts", long_about = None)]
pub struct Args {
    /// Spreadsheet (CSV) to annotate; must contain a software_version column
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Write the annotated spreadsheet here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to psirt-annotate.config.yml in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Device families to query, in priority order (e.g. "ios,iosxe")
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub os_types: Option<Vec<OsType>>,

    /// Record "Error" for a version whose lookup fails and keep going
    #[arg(long)]
    pub continue_on_error: bool,

    /// Validate the spreadsheet without calling the API or writing anything
    #[arg(long, conflicts_with = "check_token")]
    pub dry_run: bool,

    /// Request one access token to verify the credentials, then exit
    #[arg(long)]
    pub check_token: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolves settings with precedence CLI > config file > defaults
    pub fn resolve_settings(&self, config: Option<&ConfigFile>) -> Result<Settings> {
        let mut settings = Settings::from_config(config)?;

        if let Some(path) = &self.path {
            settings.spreadsheet = path.clone();
        }
        if let Some(output) = &self.output {
            settings.output = Some(output.clone());
        }
        if let Some(os_types) = &self.os_types {
            let mut ordered: Vec<OsType> = Vec::with_capacity(os_types.len());
            for os_type in os_types {
                if !ordered.contains(os_type) {
                    ordered.push(*os_type);
                }
            }
            settings.os_types = ordered;
        }
        if self.continue_on_error {
            settings.continue_on_error = true;
        }

        Ok(settings)
    }
}
