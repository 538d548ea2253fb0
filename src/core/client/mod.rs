//! Public client surface + builder.
//! Endpoint paths and the UA live in `constants`.

mod constants;

use crate::core::{ExportError, ServiceConfig};
use constants::{COMPANIES_PATH, INVESTMENTS_EXPORT_PATH, INVESTMENTS_PATH, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client bound to the investments and financial companies services.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ExportClient {
    http: Client,
    companies_url: Url,
    investments_url: Url,
    export_url: Url,
}

impl ExportClient {
    /// Create a new builder.
    pub fn builder() -> ExportClientBuilder {
        ExportClientBuilder::default()
    }

    /// Builds a client from an already-resolved [`ServiceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Url`] if either service URL cannot be parsed.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ExportError> {
        Self::builder().config(config)?.build()
    }

    /// `{financialCompaniesUrl}/companies`
    pub fn companies_url(&self) -> &Url {
        &self.companies_url
    }

    /// `{investmentsServiceUrl}/investments`
    pub fn investments_url(&self) -> &Url {
        &self.investments_url
    }

    /// `{investmentsServiceUrl}/investments/export`
    pub fn export_url(&self) -> &Url {
        &self.export_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ExportClientBuilder {
    user_agent: Option<String>,
    investments_service_url: Option<Url>,
    financial_companies_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ExportClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Base URL of the investments service (e.g., `http://investments:8081`).
    pub fn investments_service_url(mut self, url: Url) -> Self {
        self.investments_service_url = Some(url);
        self
    }

    /// Base URL of the financial companies service (e.g., `http://financial-companies:8082`).
    pub fn financial_companies_url(mut self, url: Url) -> Self {
        self.financial_companies_url = Some(url);
        self
    }

    /// Take both service URLs from a [`ServiceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Url`] if either URL cannot be parsed.
    pub fn config(self, config: &ServiceConfig) -> Result<Self, ExportError> {
        Ok(self
            .investments_service_url(Url::parse(&config.investments_service_url)?)
            .financial_companies_url(Url::parse(&config.financial_companies_url)?))
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// # Errors
    ///
    /// Returns [`ExportError::Config`] if a service URL was never set, [`ExportError::Url`]
    /// if an endpoint cannot be derived from it, and [`ExportError::Http`] if the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<ExportClient, ExportError> {
        let investments = self
            .investments_service_url
            .map(as_base)
            .ok_or_else(|| ExportError::Config("investments service URL not set".into()))?;
        let companies = self
            .financial_companies_url
            .map(as_base)
            .ok_or_else(|| ExportError::Config("financial companies URL not set".into()))?;

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(ExportClient {
            http,
            companies_url: companies.join(COMPANIES_PATH)?,
            investments_url: investments.join(INVESTMENTS_PATH)?,
            export_url: investments.join(INVESTMENTS_EXPORT_PATH)?,
        })
    }
}

// `Url::join` drops the last path segment unless it ends in '/'.
fn as_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
