use http::Uri;
use rustls::ClientConfig;
use serde::{Deserialize, Serialize};
use stackctl::{
    constants::{DEFAULT_ACTION_TIMEOUT, DEFAULT_API_URI, DEFAULT_CHECK_FREQUENCY},
    infrastructure::pem_utils,
};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::StackCtlClientError;

/// Bearer token used to authenticate every API request.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccessToken {
    type Err = StackCtlClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(StackCtlClientError::AccessTokenMissing);
        }
        Ok(Self(token.to_string()))
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Client configuration with all fields ready to use.
#[derive(Clone)]
pub struct Config {
    pub api_uri: Uri,
    pub access_token: AccessToken,
    /// `None` means the bundled webpki root certificates are trusted.
    pub tls_config: Option<ClientConfig>,
    pub wait: WaitOptions,
}

impl Config {
    pub fn from_config_file(config: ConfigFile) -> Result<Self, StackCtlClientError> {
        Ok(Self {
            api_uri: Uri::from_str(config.api_uri.trim_end_matches('/'))?,
            access_token: AccessToken::from_str(&config.access_token)?,
            tls_config: config.tls_config()?,
            wait: config.wait,
        })
    }

    /// Base URI without a trailing slash, ready to have a path appended.
    pub(crate) fn api_base(&self) -> String {
        self.api_uri.to_string().trim_end_matches('/').to_string()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_uri", &self.api_uri)
            .field("access_token", &self.access_token)
            .field("tls_config", &"[Does not implement Debug]")
            .field("wait", &self.wait)
            .finish()
    }
}

/// How an async action is polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct WaitOptions {
    #[serde(default = "default_check_frequency", with = "humantime_serde")]
    pub check_frequency: Duration,
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            check_frequency: DEFAULT_CHECK_FREQUENCY,
            timeout: DEFAULT_ACTION_TIMEOUT,
        }
    }
}

fn default_check_frequency() -> Duration {
    DEFAULT_CHECK_FREQUENCY
}

fn default_timeout() -> Duration {
    DEFAULT_ACTION_TIMEOUT
}

fn default_api_uri() -> String {
    DEFAULT_API_URI.to_string()
}

/// Client configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct ConfigFile {
    #[serde(default = "default_api_uri")]
    pub api_uri: String,
    /// May be left out and supplied on the command line instead.
    #[serde(default)]
    pub access_token: String,
    /// PEM chain to trust instead of the bundled webpki root certificates.
    pub ca_chain: Option<PathBuf>,
    #[serde(default)]
    pub wait: WaitOptions,
}

impl ConfigFile {
    pub fn new(api_uri: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            api_uri: api_uri.into(),
            access_token: access_token.into(),
            ca_chain: None,
            wait: WaitOptions::default(),
        }
    }

    pub fn from_file(config_path: impl AsRef<Path>) -> Result<Self, StackCtlClientError> {
        let config_string = std::fs::read_to_string(&config_path)?;
        Self::from_str(&config_string)
    }

    pub fn tls_config(&self) -> Result<Option<ClientConfig>, StackCtlClientError> {
        let Some(ca_chain) = &self.ca_chain else {
            return Ok(None);
        };

        let root_store = pem_utils::read_root_store(ca_chain)?;
        let tls_config = ClientConfig::builder()
            .with_safe_defaults()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        Ok(Some(tls_config))
    }
}

impl FromStr for ConfigFile {
    type Err = StackCtlClientError;

    fn from_str(config_string: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(config_string)?)
    }
}
