use crate::config::PortfolioConfig;
use crate::types::RankedRepo;
use chrono::{DateTime, Utc};
use colored::*;
use url::Url;

const MAX_TOPICS: usize = 4;
const PLACEHOLDER_DESCRIPTION: &str = "No description yet. Add one in the GitHub repo settings.";

/// Everything a card displays, resolved ahead of printing so the styling
/// layer stays trivial and the mapping stays testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub featured: bool,
    pub description: String,
    pub language: Option<String>,
    pub stars: u32,
    pub updated: Option<DateTime<Utc>>,
    pub topics: Vec<String>,
    pub repo_url: String,
    pub live_url: Option<String>,
    pub likes: u64,
}

/// Build the view model for one ranked repository. The live URL is the
/// operator's custom homepage when present, else the repo homepage when it
/// parses as an http(s) URL.
pub fn build_card(ranked: &RankedRepo, config: &PortfolioConfig, likes: u64) -> ProjectCard {
    let repo = &ranked.repo;

    let description = repo
        .description
        .clone()
        .or_else(|| config.custom_descriptions.get(&repo.name).cloned())
        .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string());

    let live_url = config
        .custom_homepages
        .get(&repo.name)
        .cloned()
        .or_else(|| repo.homepage.clone().filter(|h| is_http_url(h)));

    ProjectCard {
        name: repo.name.clone(),
        featured: ranked.featured,
        description,
        language: repo.language.clone(),
        stars: repo.stargazers_count,
        updated: repo.pushed_at,
        topics: repo.topics.iter().take(MAX_TOPICS).cloned().collect(),
        repo_url: repo.html_url.clone(),
        live_url,
        likes,
    }
}

fn is_http_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn fmt_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %e, %Y").to_string()
}

/// Render one card as terminal text.
pub fn render_card(card: &ProjectCard) -> String {
    let mut out = String::new();

    if card.featured {
        out.push_str(&format!(
            "{} {}\n",
            card.name.bold().green(),
            "[featured]".yellow()
        ));
    } else {
        out.push_str(&format!("{}\n", card.name.bold()));
    }
    out.push_str(&format!("  {}\n", card.description));

    let mut badges: Vec<String> = Vec::new();
    if let Some(lang) = &card.language {
        badges.push(lang.cyan().to_string());
    }
    badges.push(format!("★ {}", card.stars).yellow().to_string());
    if let Some(updated) = card.updated {
        badges.push(format!("Updated {}", fmt_date(updated)).dimmed().to_string());
    }
    for topic in &card.topics {
        badges.push(format!("#{}", topic).blue().to_string());
    }
    out.push_str(&format!("  {}\n", badges.join("  ")));

    out.push_str(&format!("  Repo: {}\n", card.repo_url.underline()));
    if let Some(live) = &card.live_url {
        out.push_str(&format!("  Live: {}\n", live.underline()));
    }
    out.push_str(&format!("  👍 {}\n", card.likes));

    out
}

pub fn render_status(visible: usize) -> String {
    format!("{} project(s) shown", visible)
}

pub fn render_empty() -> String {
    "No repos found. Make sure your repos are public.".to_string()
}

/// Static panel shown when the fetch fails; the portfolio degrades instead
/// of dying.
pub fn render_error_panel(message: &str, profile_url: &str) -> String {
    format!(
        "{}\n{}\n{}\nView repos on GitHub: {}\n",
        "Projects couldn't load".bold().red(),
        "No worries, the portfolio still works. Try --refresh or check again later.".dimmed(),
        message.dimmed(),
        profile_url.underline()
    )
}
