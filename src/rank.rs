use crate::config::PortfolioConfig;
use crate::types::{GitHubRepo, RankedRepo};

/// Rank a raw listing for display: forks and excluded names are dropped,
/// featured repos are tagged and float to the top, and each group is ordered
/// by most recent push. The sort is stable, so ties keep API order.
pub fn rank_repos(repos: Vec<GitHubRepo>, config: &PortfolioConfig) -> Vec<RankedRepo> {
    let mut ranked: Vec<RankedRepo> = repos
        .into_iter()
        .filter(|r| !r.fork)
        .filter(|r| !config.is_excluded(&r.name))
        .map(|repo| {
            let featured = config.is_featured(&repo.name);
            RankedRepo { repo, featured }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| b.repo.pushed_at_or_epoch().cmp(&a.repo.pushed_at_or_epoch()))
    });

    ranked
}

/// Sort mode applied on top of the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[clap(rename_all = "lower")]
pub enum ViewMode {
    All,
    Recent,
    Stars,
    Featured,
}

/// Re-sort for the `recent` and `stars` modes. Both deliberately ignore the
/// featured grouping and order the whole list by the mode's key; `all` and
/// `featured` keep the ranked order untouched.
pub fn sort_for_mode(ranked: &[RankedRepo], mode: ViewMode) -> Vec<RankedRepo> {
    let mut sorted = ranked.to_vec();
    match mode {
        ViewMode::Recent => {
            sorted.sort_by(|a, b| b.repo.pushed_at_or_epoch().cmp(&a.repo.pushed_at_or_epoch()));
        }
        ViewMode::Stars => {
            sorted.sort_by(|a, b| b.repo.stargazers_count.cmp(&a.repo.stargazers_count));
        }
        ViewMode::All | ViewMode::Featured => {}
    }
    sorted
}
