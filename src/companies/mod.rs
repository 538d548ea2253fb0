mod api;
mod model;

pub use model::{Company, CompanyIndex, get_company_names};

use crate::core::{ExportClient, ExportError};

/// A builder for reading the company collection from the financial companies service.
pub struct CompaniesBuilder<'a> {
    client: &'a ExportClient,
}

impl<'a> CompaniesBuilder<'a> {
    /// Creates a new `CompaniesBuilder`.
    pub fn new(client: &'a ExportClient) -> Self {
        Self { client }
    }

    /// Fetches every company from `{financialCompaniesUrl}/companies`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx responses, or a body that is not a list of companies.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(&self) -> Result<Vec<Company>, ExportError> {
        api::fetch_companies(self.client).await
    }

    /// Fetches the companies and builds the id → name index in one step.
    ///
    /// # Errors
    ///
    /// Same as [`fetch`](Self::fetch).
    pub async fn index(&self) -> Result<CompanyIndex, ExportError> {
        Ok(self.fetch().await?.into_iter().collect())
    }
}
