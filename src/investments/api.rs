use super::model::UserHoldings;
use crate::core::{ExportClient, ExportError, net};

pub(super) async fn fetch_user_holdings(client: &ExportClient) -> Result<Vec<UserHoldings>, ExportError> {
    net::fetch_json(client, client.investments_url(), "investments").await
}
