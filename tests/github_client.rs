use gitfolio::error::PortfolioError;
use gitfolio::github::{profile_url, GitHubClient, RepoSource};

#[tokio::test]
async fn test_github_client_creation() {
    let client = GitHubClient::new();
    assert!(client.is_ok());
}

#[test]
fn test_profile_url() {
    assert_eq!(
        profile_url("someone"),
        "https://github.com/someone?tab=repositories"
    );
}

#[tokio::test]
#[ignore = "Requires network access to api.github.com"]
async fn test_list_repos() {
    let client = GitHubClient::new().expect("Failed to create client");

    // Test with a well-known account
    let repos = client
        .list_repos("octocat")
        .await
        .expect("Failed to list repos");

    assert!(!repos.is_empty(), "No repositories found");
    for repo in &repos {
        assert!(!repo.name.is_empty());
        assert!(!repo.html_url.is_empty());
    }
}

#[tokio::test]
#[ignore = "Requires network access to api.github.com"]
async fn test_unknown_user_is_not_found() {
    let client = GitHubClient::new().expect("Failed to create client");

    let result = client
        .list_repos("this-user-should-not-exist-a1b2c3d4e5")
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        PortfolioError::NotFound(_) => {} // Expected
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}
