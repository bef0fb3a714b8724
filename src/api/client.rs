use std::time::Duration;

use reqwest::{Client, Url};

use crate::api::error::FetchError;
use crate::api::wire::ProjectsResponse;
use crate::config::ApiConfig;
use crate::projects::{Category, ProjectItem};

pub const PROJECTS_PATH: &str = "/ps/projects";

/// HTTP client for `GET {base_url}/ps/projects?category={id}`.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ProjectsApi {
    client: Client,
    endpoint: Url,
}

impl ProjectsApi {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let endpoint = Self::endpoint_for(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self { client, endpoint })
    }

    /// Join the base URL and the projects path.
    pub fn endpoint_for(base_url: &str) -> Result<Url, FetchError> {
        let joined = format!("{}{}", base_url.trim_end_matches('/'), PROJECTS_PATH);
        Url::parse(&joined).map_err(|_| FetchError::InvalidUrl { url: joined })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn request_url(&self, category: Category) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("category", category.id());
        url
    }

    /// Fetch and normalize the projects for one category.
    ///
    /// Only a 2xx response is decoded. Any other status, a transport
    /// failure, or a malformed body is returned as an error.
    pub async fn fetch(&self, category: Category) -> Result<Vec<ProjectItem>, FetchError> {
        let url = self.request_url(category);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        let parsed: ProjectsResponse =
            serde_json::from_slice(&body).map_err(FetchError::Decode)?;
        Ok(parsed.into_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> ProjectsApi {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        ProjectsApi::new(&config).unwrap()
    }

    #[test]
    fn endpoint_joins_path_once() {
        assert_eq!(
            api("https://apis.ccbp.in/").endpoint().as_str(),
            "https://apis.ccbp.in/ps/projects"
        );
        assert_eq!(
            api("http://127.0.0.1:9000").endpoint().as_str(),
            "http://127.0.0.1:9000/ps/projects"
        );
    }

    #[test]
    fn request_url_carries_category_id() {
        let api = api("https://apis.ccbp.in");
        for category in Category::ALL {
            let url = api.request_url(category);
            let pairs: Vec<(String, String)> = url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            assert_eq!(pairs, vec![("category".to_string(), category.id().to_string())]);
        }
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ProjectsApi::endpoint_for("not a url").unwrap_err();
        assert_eq!(err.kind(), "invalid_url");
    }
}
