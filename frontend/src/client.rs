//! HTTP client for the prediction API.

use thiserror::Error;

use crate::types::{PredictOutcome, TrafficRecord};

/// Where the backend listens unless `API_URL` says otherwise.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Could not connect to the prediction API. Please ensure the backend server is running.")]
    Connection(#[source] reqwest::Error),
    #[error("unexpected reply from the prediction API: {0}")]
    Decode(#[source] reqwest::Error),
}

pub struct ApiClient {
    client: reqwest::Client,
    predict_url: String,
}

impl ApiClient {
    /// `base_url` is like `http://127.0.0.1:8000` (trailing slash tolerated).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            predict_url: format!("{}/predict", base_url.trim_end_matches('/')),
        }
    }

    /// POST one record and decode the reply. Blocks on the library-default
    /// timeout; there is no retry.
    pub async fn predict(&self, record: &TrafficRecord) -> Result<PredictOutcome, ClientError> {
        let resp = self
            .client
            .post(&self.predict_url)
            .json(record)
            .send()
            .await
            .map_err(ClientError::Connection)?;

        resp.json().await.map_err(ClientError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FormInput;

    fn sample_record() -> TrafficRecord {
        let input = FormInput {
            holiday: "None".to_string(),
            temp_f: 75.0,
            weather_main: "Clouds".to_string(),
            rain_1h: 0.0,
            snow_1h: 0.0,
            clouds_all: 40,
            hour: 9,
            day_of_week: 1,
            month: 10,
        };
        input.into_record()
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.predict_url, "http://127.0.0.1:8000/predict");
    }

    #[actix_web::test]
    async fn unreachable_backend_maps_to_connection_error() {
        // Port 9 (discard) is not listening on loopback.
        let client = ApiClient::new("http://127.0.0.1:9");

        let err = client.predict(&sample_record()).await.unwrap_err();
        assert!(matches!(err, ClientError::Connection(_)));
        assert!(err.to_string().starts_with("Could not connect"));
    }
}
