use crate::error::Error;
use crate::http::read_json;
use crate::location::Location;
use reqwest::header::USER_AGENT;
use serde_derive::Deserialize;
use std::sync::Arc;
use tracing::debug;

pub const BASE_URL: &str = "https://api.freegeoip.app";
const CONTEXT: &str = "Failed to get current location";

#[derive(Debug, Deserialize)]
struct Response {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug)]
struct ClientState {
    api_key: String,
    base_url: String,
    ua: String,
    client: reqwest::Client,
}

/// Looks up the caller's approximate position from their public address.
#[derive(Clone, Debug)]
pub struct Client {
    state: Arc<ClientState>,
}

impl Client {
    pub fn with_base_url(base_url: &str, api_key: &str, ua: &str) -> Client {
        Client {
            state: Arc::new(ClientState {
                api_key: api_key.to_string(),
                base_url: base_url.trim_end_matches('/').to_string(),
                ua: ua.to_string(),
                client: reqwest::Client::new(),
            }),
        }
    }

    pub async fn get_location(&self) -> Result<Location, Error> {
        let url = format!("{}/json/", self.state.base_url);
        debug!("Fetching GeoIP data from {}", url);

        let res = self
            .state
            .client
            .get(&url)
            .query(&[("apikey", &self.state.api_key)])
            .header(USER_AGENT, &self.state.ua)
            .send()
            .await
            .map_err(|err| Error::Request {
                context: CONTEXT,
                source: err.without_url(),
            })?;
        let res: Response = read_json(res, CONTEXT).await?;
        Ok(Location::new(res.latitude, res.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/"))
            .and(query_param("apikey", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ip": "203.0.113.7",
                "latitude": 40.7,
                "longitude": -74.0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "secret", "test");
        let loc = client.get_location().await.unwrap();
        assert_eq!((loc.lat(), loc.lng()), (40.7, -74.0));
    }

    #[tokio::test]
    async fn reports_service_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/json/"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(serde_json::json!({ "message": "invalid key" })),
            )
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "bad", "test");
        let err = client.get_location().await.unwrap_err();
        assert!(matches!(err, Error::Api { status, .. } if status == 403));
        assert_eq!(
            err.to_string(),
            "Failed to get current location: invalid key"
        );
    }

    #[tokio::test]
    async fn falls_back_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "", "test");
        let err = client.get_location().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to get current location: received 500"
        );
    }

    #[tokio::test]
    async fn missing_coordinates_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ip": "x" })),
            )
            .mount(&server)
            .await;

        let client = Client::with_base_url(&server.uri(), "k", "test");
        let err = client.get_location().await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().contains("latitude"));
    }

    #[tokio::test]
    async fn connect_failure_keeps_cause_and_hides_key() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();

        let client = Client::with_base_url(&format!("http://{}", addr), "secret-key", "test");
        let err = client.get_location().await.unwrap_err();
        let text = err.display_chain();

        assert!(matches!(err, Error::Request { .. }));
        assert!(text.starts_with("Failed to get current location: "));
        assert!(text.contains("os error"), "{}", text);
        assert!(!text.contains("secret-key"), "{}", text);
    }
}
