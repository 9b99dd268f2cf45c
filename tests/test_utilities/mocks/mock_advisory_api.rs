use psirt_annotate::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock AdvisoryApi scripted per device family
///
/// Families without a script answer with a 404. Every query is recorded.
#[derive(Default, Clone)]
pub struct MockAdvisoryApi {
    responses: HashMap<OsType, AdvisoryQueryOutcome>,
    queries: Arc<Mutex<Vec<(OsType, String)>>>,
}

#[allow(dead_code)]
impl MockAdvisoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `os_type` with a 200 carrying one advisory per SIR value
    pub fn with_advisories(mut self, os_type: OsType, sirs: &[&str]) -> Self {
        let advisories = sirs.iter().map(|sir| Advisory::with_sir(*sir)).collect();
        self.responses
            .insert(os_type, AdvisoryQueryOutcome::Advisories(advisories));
        self
    }

    pub fn with_status(mut self, os_type: OsType, status: u16) -> Self {
        self.responses
            .insert(os_type, AdvisoryQueryOutcome::Unavailable { status });
        self
    }

    pub fn queries(&self) -> Vec<(OsType, String)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn queried_families(&self) -> Vec<OsType> {
        self.queries().into_iter().map(|(os, _)| os).collect()
    }
}

impl AdvisoryApi for MockAdvisoryApi {
    fn query_advisories(
        &self,
        os_type: OsType,
        version: &SoftwareVersion,
        _token: &AccessToken,
    ) -> Result<AdvisoryQueryOutcome> {
        self.queries
            .lock()
            .unwrap()
            .push((os_type, version.as_str().to_string()));
        Ok(self
            .responses
            .get(&os_type)
            .cloned()
            .unwrap_or(AdvisoryQueryOutcome::Unavailable { status: 404 }))
    }
}
