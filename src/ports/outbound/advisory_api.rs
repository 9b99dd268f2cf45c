use crate::advisory_scan::domain::{Advisory, OsType, SoftwareVersion};
use crate::ports::outbound::AccessToken;
use crate::shared::Result;

/// Result of one advisory query for a device family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisoryQueryOutcome {
    /// HTTP 200 with the parsed `advisories` list (empty when absent)
    Advisories(Vec<Advisory>),
    /// Any other HTTP status; the family is treated as not applicable
    Unavailable { status: u16 },
}

impl AdvisoryQueryOutcome {
    /// HTTP status code the outcome was derived from
    pub fn status(&self) -> u16 {
        match self {
            AdvisoryQueryOutcome::Advisories(_) => 200,
            AdvisoryQueryOutcome::Unavailable { status } => *status,
        }
    }
}

/// AdvisoryApi port for querying advisories of one device family
pub trait AdvisoryApi {
    /// Queries advisories affecting `version` on the `os_type` family
    ///
    /// A non-200 status is not an error; it is reported as
    /// [`AdvisoryQueryOutcome::Unavailable`].
    ///
    /// # Errors
    /// Returns an error if the request fails at the transport level or a
    /// 200 response cannot be parsed
    fn query_advisories(
        &self,
        os_type: OsType,
        version: &SoftwareVersion,
        token: &AccessToken,
    ) -> Result<AdvisoryQueryOutcome>;
}

impl<A: AdvisoryApi + ?Sized> AdvisoryApi for &A {
    fn query_advisories(
        &self,
        os_type: OsType,
        version: &SoftwareVersion,
        token: &AccessToken,
    ) -> Result<AdvisoryQueryOutcome> {
        (**self).query_advisories(os_type, version, token)
    }
}
