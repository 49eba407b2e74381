use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::PhishingError;
use crate::types::ChangeRecord;

const SINKING_YACHTS_API: &str = "https://phish.sinking.yachts";

/// Header carrying the caller-supplied identity token.
const IDENTITY_HEADER: &str = "X-Identity";

/// Largest accepted recent-changes window, in seconds (7 days).
pub const MAX_RECENT_WINDOW: u64 = 604_800;

/// Async client for the SinkingYachts phishing database.
///
/// Every operation validates the identity before touching the network, sends
/// a single GET request with the `X-Identity` header, and parses the body
/// into a typed result. Operations are independent; the client is cheap to
/// clone and safe to share across tasks.
#[derive(Clone)]
pub struct PhishingClient {
    http: Client,
    base_url: Url,
    identity: String,
    timeout: Duration,
}

impl PhishingClient {
    /// Create a client for the production endpoint with default settings.
    pub fn new(identity: &str) -> Result<Self, PhishingError> {
        Self::builder().identity(identity).build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The identity token this client was built with.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Wrap this client in the legacy sentinel-on-failure contract.
    pub fn lenient(self) -> crate::compat::LenientClient {
        crate::compat::LenientClient::new(self)
    }

    /// Fetch every domain currently in the database.
    ///
    /// Server order is preserved and duplicates are not removed.
    pub async fn all_domains(&self) -> Result<Vec<String>, PhishingError> {
        self.ensure_identity()?;
        let url = self.endpoint(&["v2", "all"])?;
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| PhishingError::Parse(e.to_string()))
    }

    /// Check whether a single domain is in the database.
    ///
    /// The server answers with a plain-text boolean; the match is ASCII
    /// case-insensitive and anything other than `true` reads as `false`.
    pub async fn check_domain(&self, domain: &str) -> Result<bool, PhishingError> {
        self.ensure_identity()?;
        let url = self.endpoint(&["v2", "check", domain])?;
        let body = self.get_text(url).await?;
        Ok(body.trim().eq_ignore_ascii_case("true"))
    }

    /// Total number of domains in the database.
    pub async fn db_size(&self) -> Result<u64, PhishingError> {
        self.ensure_identity()?;
        let url = self.endpoint(&["v2", "dbsize"])?;
        let body = self.get_text(url).await?;
        body.trim()
            .parse()
            .map_err(|e| PhishingError::Parse(format!("invalid count {:?}: {}", body.trim(), e)))
    }

    /// Fetch the change feed for the last `seconds` seconds.
    ///
    /// `seconds` must not exceed [`MAX_RECENT_WINDOW`].
    pub async fn recent_changes(&self, seconds: u64) -> Result<Vec<ChangeRecord>, PhishingError> {
        self.ensure_identity()?;
        if seconds > MAX_RECENT_WINDOW {
            return Err(PhishingError::WindowTooLarge(seconds));
        }
        let url = self.endpoint(&["v2", "recent", &seconds.to_string()])?;
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| PhishingError::Parse(e.to_string()))
    }

    /// Domains added to the database in the last `seconds` seconds.
    ///
    /// Flattens the `add` records of [`recent_changes`](Self::recent_changes)
    /// in feed order, then within-record order, without deduplication.
    pub async fn recent_additions(&self, seconds: u64) -> Result<Vec<String>, PhishingError> {
        let changes = self.recent_changes(seconds).await?;
        Ok(collect_domains(&changes, ChangeRecord::is_addition))
    }

    /// Domains removed from the database in the last `seconds` seconds.
    pub async fn recent_removals(&self, seconds: u64) -> Result<Vec<String>, PhishingError> {
        let changes = self.recent_changes(seconds).await?;
        Ok(collect_domains(&changes, ChangeRecord::is_removal))
    }

    fn ensure_identity(&self) -> Result<(), PhishingError> {
        if self.identity.is_empty() {
            return Err(PhishingError::MissingIdentity);
        }
        Ok(())
    }

    /// Join path segments onto the base URL, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, PhishingError> {
        let mut url = self.base_url.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .map_err(|_| PhishingError::Config("base URL cannot be a base".to_string()))?;
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    async fn get_text(&self, url: Url) -> Result<String, PhishingError> {
        debug!(%url, "sending GET request");

        let request = self.http.get(url.clone()).header(IDENTITY_HEADER, &self.identity);
        let response = match tokio::time::timeout(self.timeout, request.send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(PhishingError::Http(e.to_string())),
            Err(_) => return Err(PhishingError::Timeout(self.timeout)),
        };

        let status = response.status();
        debug!(%url, %status, "received response");

        if !status.is_success() {
            return Err(PhishingError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| PhishingError::Http(e.to_string()))
    }
}

fn collect_domains(records: &[ChangeRecord], keep: impl Fn(&ChangeRecord) -> bool) -> Vec<String> {
    records
        .iter()
        .filter(|record| keep(record))
        .flat_map(|record| record.domains.iter().cloned())
        .collect()
}

/// Builder for [`PhishingClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    identity: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            identity: String::new(),
            base_url: SINKING_YACHTS_API.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("sy-phishing-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientBuilder {
    /// Identity token sent with every request. Validated per call, not here.
    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }

    /// Override the service base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<PhishingClient, PhishingError> {
        let base_url =
            Url::parse(&self.base_url).map_err(|e| PhishingError::Config(e.to_string()))?;

        let http = Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()
            .map_err(|e| PhishingError::Config(e.to_string()))?;

        Ok(PhishingClient { http, base_url, identity: self.identity, timeout: self.timeout })
    }
}
