use crate::ports::outbound::{AccessToken, AccessTokenProvider, ProgressReporter};
use crate::shared::error::PsirtError;
use crate::shared::Result;

/// Number of token characters shown on the console
const TOKEN_PREVIEW_LEN: usize = 20;

/// VerifyCredentialsUseCase - checks that the configured client credentials
/// can obtain an access token, without touching the spreadsheet.
pub struct VerifyCredentialsUseCase<T, PR> {
    token_provider: T,
    progress_reporter: PR,
}

impl<T, PR> VerifyCredentialsUseCase<T, PR>
where
    T: AccessTokenProvider,
    PR: ProgressReporter,
{
    pub fn new(token_provider: T, progress_reporter: PR) -> Self {
        Self {
            token_provider,
            progress_reporter,
        }
    }

    /// Requests one token and prints a truncated preview of it
    pub fn execute(&self) -> Result<AccessToken> {
        self.progress_reporter
            .report("🔑 Requesting access token from the identity provider...");

        let token = self
            .token_provider
            .fetch_token()?
            .ok_or(PsirtError::MissingAccessToken)?;

        self.progress_reporter
            .report_completion("✅ Token generated successfully!");
        self.progress_reporter.report(&format!(
            "🔹 ACCESS TOKEN: {}",
            token.preview(TOKEN_PREVIEW_LEN)
        ));

        Ok(token)
    }
}
