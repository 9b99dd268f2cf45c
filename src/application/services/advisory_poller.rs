use crate::advisory_scan::domain::{AdvisoryResult, OsType, SoftwareVersion};
use crate::advisory_scan::services::SeverityCounter;
use crate::ports::inbound::AdvisoryLookupPort;
use crate::ports::outbound::{AccessTokenProvider, AdvisoryApi, AdvisoryQueryOutcome, ProgressReporter};
use crate::shared::error::PsirtError;
use crate::shared::Result;

/// AdvisoryPoller - queries device families in priority order for one version
///
/// For every lookup a fresh access token is requested, then each device
/// family is queried in turn. The first family whose 200 response holds at
/// least one High or Critical advisory decides the result; a family that
/// answers 200 with no such advisory is skipped like a non-200 one. When
/// every family has been tried the result is [`AdvisoryResult::Error`].
///
/// # Type Parameters
/// * `T` - AccessTokenProvider implementation
/// * `A` - AdvisoryApi implementation
/// * `PR` - ProgressReporter implementation
pub struct AdvisoryPoller<T, A, PR> {
    token_provider: T,
    advisory_api: A,
    progress_reporter: PR,
    os_types: Vec<OsType>,
}

impl<T, A, PR> AdvisoryPoller<T, A, PR>
where
    T: AccessTokenProvider,
    A: AdvisoryApi,
    PR: ProgressReporter,
{
    /// Creates a poller using [`OsType::DEFAULT_ORDER`]
    pub fn new(token_provider: T, advisory_api: A, progress_reporter: PR) -> Self {
        Self {
            token_provider,
            advisory_api,
            progress_reporter,
            os_types: OsType::DEFAULT_ORDER.to_vec(),
        }
    }

    /// Replaces the device family priority list
    pub fn with_os_types(mut self, os_types: Vec<OsType>) -> Self {
        self.os_types = os_types;
        self
    }

    pub fn os_types(&self) -> &[OsType] {
        &self.os_types
    }
}

impl<T, A, PR> AdvisoryLookupPort for AdvisoryPoller<T, A, PR>
where
    T: AccessTokenProvider,
    A: AdvisoryApi,
    PR: ProgressReporter,
{
    fn lookup(&self, version: &SoftwareVersion) -> Result<AdvisoryResult> {
        let token = self
            .token_provider
            .fetch_token()?
            .ok_or(PsirtError::MissingAccessToken)?;

        for &os_type in &self.os_types {
            let outcome = self
                .advisory_api
                .query_advisories(os_type, version, &token)?;

            self.progress_reporter.report(&format!(
                "   Checking {} for version {} - Status Code: {}",
                os_type,
                version,
                outcome.status()
            ));

            if let AdvisoryQueryOutcome::Advisories(advisories) = outcome {
                let counts = SeverityCounter::count(&advisories);
                if counts.has_matches() {
                    return Ok(AdvisoryResult::Counts(counts));
                }
            }
        }

        Ok(AdvisoryResult::Error)
    }
}
