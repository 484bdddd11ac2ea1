//! Response classification and decoding

use crate::error::{HutchError, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Read the full body and fail with [`HutchError::Api`] unless the status is 2xx
pub(crate) async fn read_success_body(response: Response) -> Result<Vec<u8>> {
    let status = response.status();
    let body = response.bytes().await?;
    check_status(status, &body)?;
    Ok(body.to_vec())
}

/// Decode a 2xx response into `T`
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = read_success_body(response).await?;
    decode_body(&body)
}

/// Discard the payload of a 2xx response
pub(crate) async fn expect_success(response: Response) -> Result<()> {
    read_success_body(response).await.map(|_| ())
}

pub(crate) fn check_status(status: StatusCode, body: &[u8]) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    Err(HutchError::Api {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
    })
}

pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| HutchError::Decode {
        source,
        body: String::from_utf8_lossy(body).into_owned(),
    })
}
