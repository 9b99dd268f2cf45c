use super::Credentials;
use crate::adapters::outbound::system::SystemClock;
use crate::advisory_scan::domain::{Advisory, OsType, SoftwareVersion};
use crate::advisory_scan::services::{RateLimitPolicy, RateLimiter};
use crate::ports::outbound::{
    AccessToken, AccessTokenProvider, AdvisoryApi, AdvisoryQueryOutcome, Clock,
};
use crate::shared::error::PsirtError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Deserialize;
use std::cell::Cell;
use std::time::Duration;

/// Cisco openVuln API client
///
/// Implements both the token and the advisory ports. Every outbound
/// request, token requests included, passes through the client's own
/// [`RateLimiter`] first.
///
/// # Behavior
/// - Timeout of 30 seconds per request
/// - No retries: transport failures are returned to the caller
/// - A non-200 advisory response is reported as
///   [`AdvisoryQueryOutcome::Unavailable`], not as an error
pub struct OpenVulnClient<C: Clock = SystemClock> {
    client: Client,
    credentials: Credentials,
    token_url: String,
    advisory_base_url: String,
    rate_limiter: RateLimiter<C>,
    rate_limit_wait: Cell<Duration>,
}

impl OpenVulnClient<SystemClock> {
    /// Creates a client against the production endpoints
    pub fn new(credentials: Credentials, policy: RateLimitPolicy) -> Result<Self> {
        Self::with_clock(credentials, policy, SystemClock::new())
    }
}

impl<C: Clock> OpenVulnClient<C> {
    const TOKEN_URL: &'static str = "https://id.cisco.com/oauth2/default/v1/token";
    const ADVISORY_BASE_URL: &'static str =
        "https://apix.cisco.com/security/advisories/v2/OSType";
    const TIMEOUT_SECONDS: u64 = 30;

    pub fn with_clock(credentials: Credentials, policy: RateLimitPolicy, clock: C) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("psirt-annotate/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            credentials,
            token_url: Self::TOKEN_URL.to_string(),
            advisory_base_url: Self::ADVISORY_BASE_URL.to_string(),
            rate_limiter: RateLimiter::new(clock, policy),
            rate_limit_wait: Cell::new(Duration::ZERO),
        })
    }

    /// Points the client at different token and advisory endpoints
    pub fn with_endpoints(
        mut self,
        token_url: impl Into<String>,
        advisory_base_url: impl Into<String>,
    ) -> Self {
        self.token_url = token_url.into();
        self.advisory_base_url = advisory_base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Total time spent blocked by the rate limiter so far
    pub fn rate_limit_wait(&self) -> Duration {
        self.rate_limit_wait.get()
    }

    fn throttle(&self) {
        let waited = self.rate_limiter.acquire();
        self.rate_limit_wait.set(self.rate_limit_wait.get() + waited);
    }

    fn advisory_url(&self, os_type: OsType, version: &SoftwareVersion) -> String {
        format!(
            "{}/{}?version={}",
            self.advisory_base_url,
            os_type.as_str(),
            urlencoding::encode(version.as_str())
        )
    }

    /// `application/x-www-form-urlencoded` body of the client-credentials grant
    fn token_request_body(&self) -> String {
        format!(
            "grant_type=client_credentials&client_id={}&client_secret={}",
            urlencoding::encode(self.credentials.client_id()),
            urlencoding::encode(self.credentials.client_secret())
        )
    }
}

impl<C: Clock> AccessTokenProvider for OpenVulnClient<C> {
    fn fetch_token(&self) -> Result<Option<AccessToken>> {
        self.throttle();

        let response = self
            .client
            .post(&self.token_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(self.token_request_body())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(PsirtError::TokenRequestFailed {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let token_response: TokenResponse = response.json()?;
        Ok(token_response
            .access_token
            .filter(|t| !t.is_empty())
            .map(AccessToken::new))
    }
}

impl<C: Clock> AdvisoryApi for OpenVulnClient<C> {
    fn query_advisories(
        &self,
        os_type: OsType,
        version: &SoftwareVersion,
        token: &AccessToken,
    ) -> Result<AdvisoryQueryOutcome> {
        self.throttle();

        let response = self
            .client
            .get(self.advisory_url(os_type, version))
            .bearer_auth(token.secret())
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(AdvisoryQueryOutcome::Unavailable {
                status: status.as_u16(),
            });
        }

        let body: AdvisoryListResponse = response.json()?;
        Ok(AdvisoryQueryOutcome::Advisories(body.advisories))
    }
}

// openVuln API response structures

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AdvisoryListResponse {
    #[serde(default)]
    advisories: Vec<Advisory>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    fn credentials() -> Credentials {
        Credentials::new("my id", "s3cr&t")
    }

    fn version(v: &str) -> SoftwareVersion {
        SoftwareVersion::parse(v).unwrap()
    }

    /// Serves one canned response per scripted entry, then stops.
    /// Received request heads (request line + headers) and bodies are sent
    /// back through the returned channel.
    fn serve(
        responses: Vec<(u16, &'static str)>,
    ) -> (String, mpsc::Receiver<(String, String)>, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let (stream, _) = listener.accept().unwrap();
                let mut reader = BufReader::new(stream);

                let mut head = String::new();
                let mut content_length = 0usize;
                loop {
                    let mut line = String::new();
                    reader.read_line(&mut line).unwrap();
                    if line == "\r\n" || line.is_empty() {
                        break;
                    }
                    if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                        content_length = value.trim().parse().unwrap_or(0);
                    }
                    head.push_str(&line);
                }
                let mut request_body = vec![0u8; content_length];
                reader.read_exact(&mut request_body).unwrap();
                tx.send((head, String::from_utf8_lossy(&request_body).to_string()))
                    .unwrap();

                let response = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let mut stream = reader.into_inner();
                stream.write_all(response.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
        });

        (base, rx, handle)
    }

    fn client_for(base: &str) -> OpenVulnClient {
        let mut client = OpenVulnClient::new(credentials(), RateLimitPolicy::default())
            .unwrap()
            .with_endpoints(format!("{}/oauth2/token", base), format!("{}/OSType/", base));
        // Loopback test servers must not be routed through a proxy from the environment
        client.client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        client
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenVulnClient::new(credentials(), RateLimitPolicy::default()).is_ok());
    }

    #[test]
    fn test_advisory_url_encodes_version() {
        let client = OpenVulnClient::new(credentials(), RateLimitPolicy::default()).unwrap();
        assert_eq!(
            client.advisory_url(OsType::Ios, &version("15.2(7)E3 beta")),
            "https://apix.cisco.com/security/advisories/v2/OSType/ios?version=15.2%287%29E3%20beta"
        );
    }

    #[test]
    fn test_token_request_body_is_form_encoded() {
        let client = OpenVulnClient::new(credentials(), RateLimitPolicy::default()).unwrap();
        assert_eq!(
            client.token_request_body(),
            "grant_type=client_credentials&client_id=my%20id&client_secret=s3cr%26t"
        );
    }

    #[test]
    fn test_token_response_without_access_token() {
        let parsed: TokenResponse = serde_json::from_str(r#"{"token_type": "Bearer"}"#).unwrap();
        assert!(parsed.access_token.is_none());
    }

    #[test]
    fn test_advisory_list_response_defaults_to_empty() {
        let parsed: AdvisoryListResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(parsed.advisories.is_empty());
    }

    #[test]
    fn test_fetch_token_success() {
        let (base, rx, handle) = serve(vec![(
            200,
            r#"{"access_token": "abc.def", "token_type": "Bearer", "expires_in": 3599}"#,
        )]);
        let client = client_for(&base);

        let token = client.fetch_token().unwrap().unwrap();
        handle.join().unwrap();

        assert_eq!(token.secret(), "abc.def");
        let (head, body) = rx.recv().unwrap();
        assert!(head.starts_with("POST /oauth2/token"));
        assert!(head
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(body.contains("grant_type=client_credentials"));
        assert!(body.contains("client_id=my%20id"));
    }

    #[test]
    fn test_fetch_token_missing_field_is_none() {
        let (base, _rx, handle) = serve(vec![(200, r#"{"token_type": "Bearer"}"#)]);
        let client = client_for(&base);

        let token = client.fetch_token().unwrap();
        handle.join().unwrap();

        assert!(token.is_none());
    }

    #[test]
    fn test_fetch_token_failure_status() {
        let (base, _rx, handle) = serve(vec![(401, r#"{"error": "invalid_client"}"#)]);
        let client = client_for(&base);

        let err = client.fetch_token().unwrap_err();
        handle.join().unwrap();

        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid_client"));
    }

    #[test]
    fn test_query_advisories_success() {
        let (base, rx, handle) = serve(vec![(
            200,
            r#"{"advisories": [{"advisoryId": "a", "sir": "High"}, {"advisoryId": "b", "sir": "Medium"}]}"#,
        )]);
        let client = client_for(&base);

        let outcome = client
            .query_advisories(OsType::Asa, &version("9.16.4"), &AccessToken::new("tok"))
            .unwrap();
        handle.join().unwrap();

        match outcome {
            AdvisoryQueryOutcome::Advisories(list) => {
                assert_eq!(list.len(), 2);
                assert_eq!(list[0].sir, "High");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        let (head, _) = rx.recv().unwrap();
        assert!(head.starts_with("GET /OSType/asa?version=9.16.4"));
        assert!(head.to_ascii_lowercase().contains("authorization: bearer tok"));
    }

    #[test]
    fn test_query_advisories_non_200_is_unavailable() {
        let (base, _rx, handle) = serve(vec![(404, r#"{"errorCode": "NO_DATA_FOUND"}"#)]);
        let client = client_for(&base);

        let outcome = client
            .query_advisories(OsType::Nxos, &version("1.0"), &AccessToken::new("tok"))
            .unwrap();
        handle.join().unwrap();

        assert_eq!(outcome, AdvisoryQueryOutcome::Unavailable { status: 404 });
    }

    #[test]
    fn test_connection_failure_propagates() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let client = client_for(&base);

        assert!(client.fetch_token().is_err());
    }

    #[test]
    fn test_every_request_is_rate_limited() {
        let (base, _rx, handle) = serve(vec![
            (200, r#"{"access_token": "t"}"#),
            (404, "{}"),
        ]);
        let client = client_for(&base);

        let token = client.fetch_token().unwrap().unwrap();
        client
            .query_advisories(OsType::Asa, &version("1.0"), &token)
            .unwrap();
        handle.join().unwrap();

        assert_eq!(client.rate_limiter.recorded(), 2);
        assert_eq!(client.rate_limit_wait(), Duration::ZERO);
    }
}
