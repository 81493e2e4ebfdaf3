use chrono::{DateTime, Utc};
use nd_core::{Article, RawArticle};
use tracing::debug;

use crate::featured::{select_featured, Featured, ScoringStrategy};
use crate::relevance::filter_and_score;

/// One ranked pass over a fetch's articles, ready to render.
#[derive(Debug, Clone, Default)]
pub struct FrontPage {
    pub featured: Featured,
    pub remaining: Vec<Article>,
}

impl FrontPage {
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.remaining.is_empty()
    }
}

/// Turn a raw fetch result into a front page. Pure and synchronous.
///
/// A non-empty query is a search: candidates are relevance-filtered and
/// the flat relevance weight drives the featured selection. An empty
/// query is topic browsing: the upstream order passes through and the
/// keyword buckets decide the featured cards. `now` anchors the recency
/// bonus.
pub fn build_front_page(raw: Vec<RawArticle>, query: &str, now: DateTime<Utc>) -> FrontPage {
    let searching = !query.trim().is_empty();
    let ranked = filter_and_score(raw, query);
    debug!(
        candidates = ranked.len(),
        searching, "ranked fetch results"
    );

    let strategy = if searching {
        ScoringStrategy::FlatRelevance
    } else {
        ScoringStrategy::KeywordBuckets
    };

    let (featured, remaining) = select_featured(ranked, strategy, now);
    FrontPage {
        featured,
        remaining,
    }
}
