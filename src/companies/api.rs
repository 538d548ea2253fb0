use super::model::Company;
use crate::core::{ExportClient, ExportError, net};

pub(super) async fn fetch_companies(client: &ExportClient) -> Result<Vec<Company>, ExportError> {
    net::fetch_json(client, client.companies_url(), "companies").await
}
