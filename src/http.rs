use crate::error::Error;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;

/// Error body shape shared by both services. The geolocation service sets
/// `message`; the weather service answers with a problem document whose
/// human-readable text is in `detail`.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: Option<String>,
    detail: Option<String>,
}

impl ApiMessage {
    fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.detail.filter(|d| !d.is_empty()))
    }
}

/// Reads the whole body and decodes it as `T` when the status is 200.
/// Anything else becomes `Error::Api` with the best message available.
pub(crate) async fn read_json<T: DeserializeOwned>(
    res: Response,
    context: &'static str,
) -> Result<T, Error> {
    let status = res.status();
    let body = res.bytes().await.map_err(Error::request(context))?;

    if status != StatusCode::OK {
        let message = serde_json::from_slice::<ApiMessage>(&body)
            .ok()
            .and_then(ApiMessage::into_message)
            .unwrap_or_else(|| format!("received {}", status.as_u16()));
        return Err(Error::Api {
            context,
            status,
            message,
        });
    }

    serde_json::from_slice(&body).map_err(|source| Error::Decode { context, source })
}
