use reqwest::{Response, Url};
use serde_json::Value;

use crate::client::error::ClientError;
use crate::models::{ActivityCatalog, MessageResponse, SignupRequest};

/// HTTP client for the activities API.
#[derive(Debug, Clone)]
pub struct ActivitiesClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ActivitiesClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::BaseUrl(format!("{}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::BaseUrl(base_url.to_string()));
        }
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base url, so an activity
    /// name like `Chess Club` becomes a single `Chess%20Club` segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `GET /activities`
    pub async fn fetch_activities(&self) -> Result<ActivityCatalog, ClientError> {
        let resp = self
            .http
            .get(self.endpoint(&["activities"]))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }
        Ok(resp.json::<ActivityCatalog>().await?)
    }

    /// `POST /activities/{name}/signup`. Returns the server's confirmation
    /// message.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        let resp = self
            .http
            .post(self.endpoint(&["activities", activity, "signup"]))
            .json(&SignupRequest {
                email: email.to_string(),
            })
            .send()
            .await?;
        read_message(resp).await
    }

    /// `DELETE /activities/{name}/signup?email=...`
    pub async fn cancel_signup(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        let resp = self
            .http
            .delete(self.endpoint(&["activities", activity, "signup"]))
            .query(&[("email", email)])
            .send()
            .await?;
        read_message(resp).await
    }
}

async fn read_message(resp: Response) -> Result<String, ClientError> {
    let status = resp.status();
    if status.is_success() {
        let body: MessageResponse = resp.json().await?;
        return Ok(body.message);
    }

    // An error body that is not JSON counts as a transport failure.
    let body: Value = resp.json().await?;
    Err(ClientError::Rejected {
        status,
        detail: detail_of(&body),
    })
}

async fn rejection(resp: Response) -> ClientError {
    let status = resp.status();
    let detail = resp
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| detail_of(&body));
    ClientError::Rejected { status, detail }
}

fn detail_of(body: &Value) -> Option<String> {
    body.get("detail")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
