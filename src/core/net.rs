use reqwest::Response;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use url::Url;

use crate::core::{ExportClient, ExportError};

/// GET `url` and parse the body as untyped JSON.
///
/// A non-2xx response fails with [`ExportError::Status`] carrying the URL; the body of such a
/// response is never read. Transport failures surface as [`ExportError::Http`] with the
/// original `reqwest::Error` as source. There is no retry and no caching.
///
/// # Errors
///
/// [`ExportError::Status`], [`ExportError::Http`], or [`ExportError::Data`] if the body is not JSON.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, url), err, fields(url = %url)))]
pub async fn fetch_and_parse(client: &ExportClient, url: &Url) -> Result<Value, ExportError> {
    let resp = client.http().get(url.clone()).send().await?;
    let resp = ensure_success(resp, url)?;
    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = text.len(), "fetched collection");

    serde_json::from_str(&text).map_err(|e| ExportError::Data(format!("json parse ({url}): {e}")))
}

/// Typed layer over [`fetch_and_parse`]: deserializes the JSON into `T`.
pub(crate) async fn fetch_json<T>(client: &ExportClient, url: &Url, caller: &str) -> Result<T, ExportError>
where
    T: DeserializeOwned,
{
    let value = fetch_and_parse(client, url).await?;
    serde_json::from_value(value).map_err(|e| ExportError::Data(format!("{caller} parse: {e}")))
}

/// POST `body` as JSON and discard the response body.
pub(crate) async fn post_json<B>(client: &ExportClient, url: &Url, body: &B) -> Result<(), ExportError>
where
    B: Serialize + ?Sized,
{
    let resp = client.http().post(url.clone()).json(body).send().await?;
    ensure_success(resp, url)?;
    Ok(())
}

fn ensure_success(resp: Response, url: &Url) -> Result<Response, ExportError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    #[cfg(feature = "tracing")]
    tracing::warn!(status = resp.status().as_u16(), %url, "upstream returned non-success status");

    Err(ExportError::Status {
        status: resp.status().as_u16(),
        url: url.to_string(),
    })
}
