use crate::error::{PortfolioError, Result};
use crate::types::GitHubRepo;
use reqwest::Client;
use std::time::Duration;

const API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;
const API_VERSION: &str = "2022-11-28";

/// A source of repository listings for a user.
///
/// The GitHub client is the production implementation; the trait exists so
/// the cache layer can be exercised against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepoSource: Send + Sync {
    async fn list_repos(&self, username: &str) -> Result<Vec<GitHubRepo>>;
}

pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("gitfolio/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient { client })
    }
}

#[async_trait::async_trait]
impl RepoSource for GitHubClient {
    async fn list_repos(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=updated",
            API_BASE_URL, username, PER_PAGE
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let repos: Vec<GitHubRepo> = response.json().await?;
                Ok(repos)
            }
            reqwest::StatusCode::NOT_FOUND => Err(PortfolioError::NotFound(format!(
                "no such GitHub user: {}",
                username
            ))),
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(PortfolioError::ApiError {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

/// Link to the user's repository listing on github.com, used by the
/// fallback panel and the portfolio-level share action.
pub fn profile_url(username: &str) -> String {
    format!("https://github.com/{}?tab=repositories", username)
}
