use crate::cache::{self, FetchOrigin};
use crate::config::PortfolioConfig;
use crate::error::{PortfolioError, Result};
use crate::filter;
use crate::github::{self, RepoSource};
use crate::likes::LikeStore;
use crate::rank::{self, ViewMode};
use crate::render;
use crate::share::{self, ShareOutcome, ShareTarget};
use crate::storage::JsonStore;
use colored::*;
use tracing::warn;

/// Application state threaded through every action: the curated config, the
/// on-disk store, and the repository source. No module-level mutability.
pub struct Portfolio {
    pub username: String,
    pub config: PortfolioConfig,
    pub store: JsonStore,
    pub source: Box<dyn RepoSource>,
}

impl Portfolio {
    /// Fetch (or load from cache), rank, filter, and print the cards.
    /// A fetch failure degrades to the static fallback panel.
    pub async fn list(&self, query: &str, mode: ViewMode, refresh: bool) -> Result<()> {
        let fetched = cache::fetch_repos(
            self.source.as_ref(),
            &self.store,
            &self.username,
            refresh,
        )
        .await;

        let (repos, origin) = match fetched {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!(error = %e, "repository fetch failed");
                println!(
                    "{}",
                    render::render_error_panel(&e.to_string(), &github::profile_url(&self.username))
                );
                return Ok(());
            }
        };

        match origin {
            FetchOrigin::Cache => println!("{}", "Loaded projects from cache.".dimmed()),
            FetchOrigin::Remote => {
                println!("{}", format!("Loaded {} repo(s) from GitHub.", repos.len()).dimmed())
            }
        }

        let ranked = rank::rank_repos(repos, &self.config);
        if ranked.is_empty() {
            println!("{}", render::render_empty());
            return Ok(());
        }

        let sorted = rank::sort_for_mode(&ranked, mode);
        let visible = filter::visible_cards(&sorted, query, mode);

        let likes = LikeStore::new(&self.store);
        for card in &visible {
            let model = render::build_card(card, &self.config, likes.get(&card.repo.name));
            println!("{}", render::render_card(&model));
        }
        println!("{}", render::render_status(visible.len()).bold());

        Ok(())
    }

    /// Record one like for a repository and report the new count.
    pub fn like(&self, repo_name: &str) -> Result<()> {
        let likes = LikeStore::new(&self.store);
        let count = likes.increment(repo_name)?;
        println!("👍 {} now has {} like(s)", repo_name.bold(), count);
        Ok(())
    }

    /// Share a repository's best link, or the profile listing when no repo
    /// is named. The repo must be present in the cached listing.
    pub async fn share(&self, target: &dyn ShareTarget, repo_name: Option<&str>) -> Result<()> {
        let (label, url) = match repo_name {
            None => ("portfolio".to_string(), github::profile_url(&self.username)),
            Some(name) => {
                let (repos, _) = cache::fetch_repos(
                    self.source.as_ref(),
                    &self.store,
                    &self.username,
                    false,
                )
                .await?;
                let ranked = rank::rank_repos(repos, &self.config);
                let found = ranked
                    .iter()
                    .find(|r| r.repo.name.eq_ignore_ascii_case(name))
                    .ok_or_else(|| {
                        PortfolioError::NotFound(format!("no repo named {} in the portfolio", name))
                    })?;
                let likes = LikeStore::new(&self.store);
                let card = render::build_card(found, &self.config, likes.get(&found.repo.name));
                // Prefer the live demo when one resolves, as the original page did.
                let url = card.live_url.unwrap_or(card.repo_url);
                (found.repo.name.clone(), url)
            }
        };

        match share::share_link(target, &label, &url) {
            ShareOutcome::Copied { label, url } => {
                println!("📋 Copied link for {} to the clipboard: {}", label.bold(), url);
            }
            ShareOutcome::Manual { label, url } => {
                println!("Couldn't reach the clipboard. Copy the {} link manually:", label.bold());
                println!("  {}", url.underline());
            }
        }
        Ok(())
    }
}
