//! End-to-end checks of the rank → filter → card pipeline and the on-disk
//! like store, using the same stores the binary uses.

use gitfolio::config::PortfolioConfig;
use gitfolio::filter::visible_cards;
use gitfolio::likes::LikeStore;
use gitfolio::rank::{rank_repos, sort_for_mode, ViewMode};
use gitfolio::render::{build_card, render_status};
use gitfolio::storage::JsonStore;
use gitfolio::types::GitHubRepo;

fn repo(name: &str, fork: bool, pushed: &str, stars: u32) -> GitHubRepo {
    GitHubRepo {
        name: name.to_string(),
        description: None,
        language: Some("Rust".to_string()),
        topics: vec![],
        stargazers_count: stars,
        pushed_at: Some(pushed.parse().unwrap()),
        homepage: None,
        html_url: format!("https://github.com/someone/{}", name),
        fork,
    }
}

fn listing() -> Vec<GitHubRepo> {
    vec![
        repo("forked-lib", true, "2024-09-01T00:00:00Z", 90),
        repo("old-experiment", false, "2022-01-01T00:00:00Z", 1),
        repo("showcase", false, "2023-05-01T00:00:00Z", 5),
        repo("active-app", false, "2024-08-01T00:00:00Z", 20),
        repo("secret", false, "2024-07-01T00:00:00Z", 0),
    ]
}

fn config() -> PortfolioConfig {
    PortfolioConfig {
        featured: vec!["Showcase".to_string()],
        excluded: vec!["SECRET".to_string()],
        ..Default::default()
    }
}

#[test]
fn ranking_never_yields_forks_or_excluded_names() {
    let ranked = rank_repos(listing(), &config());
    for r in &ranked {
        assert!(!r.repo.fork);
        assert!(!r.repo.name.eq_ignore_ascii_case("secret"));
    }
}

#[test]
fn featured_lead_and_partitions_stay_recency_ordered() {
    let ranked = rank_repos(listing(), &config());
    let names: Vec<&str> = ranked.iter().map(|r| r.repo.name.as_str()).collect();
    assert_eq!(names, vec!["showcase", "active-app", "old-experiment"]);

    // Once the first non-featured card appears, no featured card follows.
    let first_plain = ranked.iter().position(|r| !r.featured).unwrap();
    assert!(ranked[first_plain..].iter().all(|r| !r.featured));
}

#[test]
fn default_view_shows_every_ranked_card() {
    let ranked = rank_repos(listing(), &config());
    let visible = visible_cards(&ranked, "", ViewMode::All);
    assert_eq!(visible.len(), ranked.len());
    assert_eq!(render_status(visible.len()), "3 project(s) shown");
}

#[test]
fn stars_mode_resorts_without_hiding_anything() {
    let ranked = rank_repos(listing(), &config());
    let sorted = sort_for_mode(&ranked, ViewMode::Stars);
    let visible = visible_cards(&sorted, "", ViewMode::Stars);

    assert_eq!(visible.len(), ranked.len());
    assert_eq!(visible[0].repo.name, "active-app");
    assert_eq!(visible[1].repo.name, "showcase");
}

#[test]
fn cards_pick_up_persisted_likes() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path());
    let likes = LikeStore::new(&store);
    likes.increment("showcase").unwrap();
    likes.increment("showcase").unwrap();

    let ranked = rank_repos(listing(), &config());
    let cfg = config();
    let showcase = ranked.iter().find(|r| r.repo.name == "showcase").unwrap();
    let card = build_card(showcase, &cfg, likes.get(&showcase.repo.name));

    assert_eq!(card.likes, 2);
    assert!(card.featured);
}

#[test]
fn likes_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = JsonStore::new(dir.path());
        let likes = LikeStore::new(&store);
        assert_eq!(likes.increment("app").unwrap(), 1);
        assert_eq!(likes.increment("app").unwrap(), 2);
    }

    let store = JsonStore::new(dir.path());
    let likes = LikeStore::new(&store);
    assert_eq!(likes.get("app"), 2);
    assert_eq!(likes.get("never-liked"), 0);
}
