use crate::rank::ViewMode;
use crate::types::RankedRepo;

/// True when the card matches the search text: an empty query matches
/// everything, otherwise the query must appear in the lowercased name,
/// language, or space-joined topics.
pub fn matches_search(ranked: &RankedRepo, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }

    let repo = &ranked.repo;
    if repo.name.to_lowercase().contains(&q) {
        return true;
    }
    if let Some(lang) = &repo.language {
        if lang.to_lowercase().contains(&q) {
            return true;
        }
    }
    repo.topics.join(" ").to_lowercase().contains(&q)
}

/// True when the card matches the view mode. Only `featured` restricts
/// visibility; `recent` and `stars` affect ordering, not the predicate.
pub fn matches_mode(ranked: &RankedRepo, mode: ViewMode) -> bool {
    match mode {
        ViewMode::Featured => ranked.featured,
        _ => true,
    }
}

/// Select the visible cards for the current search text and mode.
pub fn visible_cards<'a>(
    ranked: &'a [RankedRepo],
    query: &str,
    mode: ViewMode,
) -> Vec<&'a RankedRepo> {
    ranked
        .iter()
        .filter(|r| matches_search(r, query) && matches_mode(r, mode))
        .collect()
}
