use serde::Deserialize;
use std::env;

use crate::core::ExportError;

/// Port used when neither the config document nor `PORT` provides one.
pub const DEFAULT_PORT: u16 = 8083;

const ENV_INVESTMENTS_URL: &str = "INVESTMENTS_SERVICE_URL";
const ENV_COMPANIES_URL: &str = "FINANCIAL_COMPANIES_URL";
const ENV_PORT: &str = "PORT";

/// Addresses of the upstream services plus the port the admin API listens on.
///
/// Built once at startup and handed to [`ExportClient::from_config`](crate::ExportClient::from_config).
/// Nothing in this crate reads ambient configuration on its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    /// Base URL of the investments service (`/investments`, `/investments/export`).
    pub investments_service_url: String,
    /// Base URL of the financial companies service (`/companies`).
    pub financial_companies_url: String,
    /// Port for the admin HTTP layer.
    #[serde(default = "default_port")]
    pub port: u16,
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ServiceConfig {
    /// Parses a JSON config document such as
    /// `{"investmentsServiceUrl": "...", "financialCompaniesUrl": "...", "port": 8081}`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Config`] if the document is not valid JSON or lacks a required key.
    pub fn from_json_str(s: &str) -> Result<Self, ExportError> {
        serde_json::from_str(s).map_err(|e| ExportError::Config(format!("config json parse: {e}")))
    }

    /// Reads `INVESTMENTS_SERVICE_URL`, `FINANCIAL_COMPANIES_URL` and `PORT` from the environment.
    ///
    /// `PORT` is optional and defaults to [`DEFAULT_PORT`].
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Config`] if a URL variable is unset or `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ExportError> {
        let required = |key: &str| {
            env::var(key).map_err(|_| ExportError::Config(format!("{key} is not set")))
        };

        let port = match env::var(ENV_PORT) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|e| ExportError::Config(format!("{ENV_PORT}={raw:?}: {e}")))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            investments_service_url: required(ENV_INVESTMENTS_URL)?,
            financial_companies_url: required(ENV_COMPANIES_URL)?,
            port,
        })
    }
}
