//! Session annotation retrieval: token endpoint, then content endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::FetchError;

const OCP_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

#[derive(Debug, Clone)]
pub struct SessionCredentials {
    pub username: String,
    pub password: String,
    pub tenant: String,
}

/// Client for the session API. Holds the endpoints and subscription key;
/// per-session credentials are passed per call.
#[derive(Debug, Clone)]
pub struct SessionApi {
    client: Client,
    token_url: String,
    content_url: String,
    ocp_key: String,
}

impl SessionApi {
    pub fn new(token_url: &str, content_url: &str, ocp_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            token_url: token_url.to_string(),
            content_url: content_url.trim_end_matches('/').to_string(),
            ocp_key: ocp_key.to_string(),
        }
    }

    /// Retrieves the annotation document for one session. Makes two
    /// requests: authorization, then content retrieval. Failures are logged
    /// and returned as values.
    pub async fn get_session_content(
        &self,
        credentials: &SessionCredentials,
        session_id: &str,
    ) -> Result<Value, FetchError> {
        let token = self.authorize(credentials).await?;

        let url = format!("{}/{}", self.content_url, session_id);
        let response = self
            .client
            .get(&url)
            .header(OCP_KEY_HEADER, &self.ocp_key)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| content_error(session_id, e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(content_error(
                session_id,
                format!("status {}", response.status()),
            ));
        }

        let content = response
            .json::<Value>()
            .await
            .map_err(|e| content_error(session_id, e.to_string()))?;
        log::info!("Successful session content retrieval.");

        Ok(content)
    }

    async fn authorize(&self, credentials: &SessionCredentials) -> Result<String, FetchError> {
        let form = [
            ("UserName", credentials.username.as_str()),
            ("Password", credentials.password.as_str()),
            ("Subdomain", credentials.tenant.as_str()),
        ];

        let response = self
            .client
            .post(&self.token_url)
            .header(OCP_KEY_HEADER, &self.ocp_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| auth_error(e.to_string()))?;

        log::info!(
            "Response from token url {}: {}.",
            self.token_url,
            response.status()
        );
        if response.status() != StatusCode::OK {
            return Err(auth_error(format!("status {}", response.status())));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| auth_error(e.to_string()))?;
        let token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| auth_error("token response missing access_token".to_string()))?;
        log::info!("Successful authorization.");

        Ok(token.to_string())
    }
}

fn auth_error(reason: String) -> FetchError {
    let err = FetchError::Authorization(reason);
    log::error!("{err}");
    err
}

fn content_error(session_id: &str, reason: String) -> FetchError {
    let err = FetchError::ContentRetrieval {
        session_id: session_id.to_string(),
        reason,
    };
    log::error!("{err}");
    err
}
