mod api;
mod model;

pub use model::{Holding, UserHoldings};

use crate::core::{ExportClient, ExportError};

/// A builder for reading user holdings from the investments service.
pub struct InvestmentsBuilder<'a> {
    client: &'a ExportClient,
}

impl<'a> InvestmentsBuilder<'a> {
    /// Creates a new `InvestmentsBuilder`.
    pub fn new(client: &'a ExportClient) -> Self {
        Self { client }
    }

    /// Fetches every user's holdings from `{investmentsServiceUrl}/investments`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-2xx responses, or records missing a required field.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(&self) -> Result<Vec<UserHoldings>, ExportError> {
        api::fetch_user_holdings(self.client).await
    }
}
