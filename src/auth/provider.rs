/**
 * Identity Provider Boundary
 *
 * The third-party identity handshake is an opaque external collaborator:
 * the application hands the browser to the provider's authorize URL and
 * later exchanges the callback code for a verified profile. Everything
 * behind that exchange lives behind the `IdentityProvider` trait, so tests
 * can substitute a scripted provider.
 */

use async_trait::async_trait;
use thiserror::Error;

/// Verified profile returned by a provider after a successful exchange
#[derive(Debug, Clone)]
pub struct ProviderProfile {
    /// Provider-scoped subject id
    pub subject: String,
    /// Display name
    pub display_name: String,
    /// First email, when the provider supplied one
    pub email: Option<String>,
}

/// Identity provider failure
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider denied the login (user cancelled, bad code, ...)
    #[error("provider denied the login: {0}")]
    Denied(String),

    /// Transport failure while talking to the provider
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with something we cannot use
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

impl ProviderError {
    pub fn denied(reason: impl Into<String>) -> Self {
        Self::Denied(reason.into())
    }

    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed(detail.into())
    }
}

/// Boundary to the external identity provider
///
/// `exchange` runs to completion before the HTTP response begins; no
/// ordering between concurrent exchanges is required.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Provider name as it appears in the `/auth/{provider}` path
    fn name(&self) -> &str;

    /// URL the browser is redirected to for the provider handshake
    fn authorize_url(&self) -> String;

    /// Exchange a callback code for a verified profile
    async fn exchange(&self, code: &str) -> Result<ProviderProfile, ProviderError>;
}

/// Endpoint and credential settings for the HTTP provider
#[derive(Debug, Clone)]
pub struct OAuthSettings {
    /// Provider name used in routes ("google", "github", ...)
    pub provider: String,
    pub client_id: String,
    pub client_secret: String,
    /// Callback URL registered with the provider
    pub callback_url: String,
    pub authorize_endpoint: String,
    pub token_endpoint: String,
    pub profile_endpoint: String,
}

/// reqwest-backed identity provider
///
/// Implements the standard authorization-code exchange: POST the code to
/// the token endpoint, then fetch the profile with the returned access
/// token. A single attempt, no retries.
pub struct HttpIdentityProvider {
    settings: OAuthSettings,
    http: reqwest::Client,
}

impl HttpIdentityProvider {
    pub fn new(settings: OAuthSettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    fn name(&self) -> &str {
        &self.settings.provider
    }

    fn authorize_url(&self) -> String {
        format!(
            "{}?response_type=code&client_id={}&redirect_uri={}&scope=openid%20profile%20email",
            self.settings.authorize_endpoint, self.settings.client_id, self.settings.callback_url
        )
    }

    async fn exchange(&self, code: &str) -> Result<ProviderProfile, ProviderError> {
        let token_response: serde_json::Value = self
            .http
            .post(&self.settings.token_endpoint)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("client_id", self.settings.client_id.as_str()),
                ("client_secret", self.settings.client_secret.as_str()),
                ("redirect_uri", self.settings.callback_url.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        let access_token = token_response["access_token"]
            .as_str()
            .ok_or_else(|| ProviderError::denied("no access token in token response"))?;

        let profile: serde_json::Value = self
            .http
            .get(&self.settings.profile_endpoint)
            .bearer_auth(access_token)
            .send()
            .await?
            .json()
            .await?;

        // Providers disagree on field names; accept the common variants.
        let subject = profile["sub"]
            .as_str()
            .or_else(|| profile["id"].as_str())
            .ok_or_else(|| ProviderError::malformed("profile has no subject id"))?
            .to_string();
        let display_name = profile["name"]
            .as_str()
            .or_else(|| profile["login"].as_str())
            .unwrap_or(subject.as_str())
            .to_string();
        let email = profile["email"].as_str().map(str::to_string);

        Ok(ProviderProfile {
            subject,
            display_name,
            email,
        })
    }
}
