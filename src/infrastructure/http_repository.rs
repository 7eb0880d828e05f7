// HTTP implementation of the status repository
use crate::application::status_repository::{FetchError, StatusRepository};
use crate::domain::zone::{AllReport, Zone, ZoneReport};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpStatusRepository {
    base_url: String,
    client: reqwest::Client,
}

fn zone_path(zone: Zone) -> &'static str {
    match zone {
        Zone::Hijau => "/api/data",
        Zone::Merah => "/api/merah",
    }
}

impl HttpStatusRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint(path);
        tracing::debug!("polling {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(FetchError::Transport)?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        response.json::<T>().await.map_err(FetchError::Malformed)
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch_zone(&self, zone: Zone) -> Result<ZoneReport, FetchError> {
        self.get_json(zone_path(zone)).await
    }

    async fn fetch_all(&self) -> Result<AllReport, FetchError> {
        self.get_json("/api/all").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let repo = HttpStatusRepository::new("http://localhost:5000/".to_string());
        assert_eq!(repo.endpoint("/api/data"), "http://localhost:5000/api/data");
    }

    #[test]
    fn zones_map_to_their_endpoints() {
        assert_eq!(zone_path(Zone::Hijau), "/api/data");
        assert_eq!(zone_path(Zone::Merah), "/api/merah");
    }
}
