use psirt_annotate::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock AccessTokenProvider counting how many tokens were requested
#[derive(Clone)]
pub struct MockTokenProvider {
    token: Option<String>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockTokenProvider {
    pub fn new(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Provider whose token endpoint answers without an access_token
    pub fn without_token() -> Self {
        Self {
            token: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AccessTokenProvider for MockTokenProvider {
    fn fetch_token(&self) -> Result<Option<AccessToken>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.token.as_deref().map(AccessToken::new))
    }
}
