use nd_core::{Article, RankedArticle, RawArticle};
use regex::Regex;

/// The pipeline never surfaces more than this many articles per pass.
pub const MAX_RESULTS: usize = 20;

const TITLE_WEIGHT: u32 = 3;
const DESCRIPTION_WEIGHT: u32 = 1;

/// Filter raw candidates against a query and order them by relevance.
///
/// Candidates missing title, description or url are dropped on every
/// path. With a non-empty query, each lowercase whitespace-separated term
/// adds 3 for a title substring match and 1 for a description substring
/// match; a candidate survives only if at least one term also matches as
/// a whole word somewhere in `title + " " + description` and its score is
/// at least 1. Survivors are stable-sorted by descending score and cut to
/// [`MAX_RESULTS`].
///
/// An empty query means topic browsing: scoring is skipped entirely and
/// the upstream order passes through, truncated to [`MAX_RESULTS`].
pub fn filter_and_score(candidates: Vec<RawArticle>, query: &str) -> Vec<RankedArticle> {
    let complete = candidates.into_iter().filter_map(Article::from_raw);

    let terms: Vec<String> = query
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();

    if terms.is_empty() {
        return complete
            .take(MAX_RESULTS)
            .map(|article| RankedArticle {
                article,
                relevance: 0,
            })
            .collect();
    }

    let word_patterns: Vec<Regex> = terms.iter().map(|t| whole_word_pattern(t)).collect();

    let mut ranked: Vec<RankedArticle> = complete
        .filter_map(|article| {
            let title = article.title.to_lowercase();
            let description = article.description.to_lowercase();
            let haystack = format!("{} {}", title, description);

            let mut relevance = 0u32;
            for term in &terms {
                if title.contains(term.as_str()) {
                    relevance += TITLE_WEIGHT;
                }
                if description.contains(term.as_str()) {
                    relevance += DESCRIPTION_WEIGHT;
                }
            }

            let whole_word_hit = word_patterns.iter().any(|p| p.is_match(&haystack));
            if !whole_word_hit || relevance < 1 {
                return None;
            }

            Some(RankedArticle { article, relevance })
        })
        .collect();

    // sort_by is stable, so equal scores keep their upstream order.
    ranked.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    ranked.truncate(MAX_RESULTS);
    ranked
}

fn whole_word_pattern(term: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(term)))
        .expect("escaped term is always a valid pattern")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::Source;

    fn raw(title: &str, description: &str, url: &str) -> RawArticle {
        RawArticle {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            url: Some(url.to_string()),
            url_to_image: None,
            published_at: None,
            source: Source::default(),
            content: None,
        }
    }

    #[test]
    fn incomplete_candidates_are_dropped_on_both_paths() {
        let mut broken = raw("Election news", "election coverage", "https://a");
        broken.url = None;

        let scored = filter_and_score(vec![broken.clone()], "election");
        assert!(scored.is_empty());

        let browsed = filter_and_score(vec![broken], "");
        assert!(browsed.is_empty());
    }

    #[test]
    fn empty_query_passes_upstream_order_through() {
        let candidates: Vec<RawArticle> = (0..25)
            .map(|i| raw(&format!("Title {}", i), "description", &format!("https://a/{}", i)))
            .collect();

        let ranked = filter_and_score(candidates, "   ");
        assert_eq!(ranked.len(), MAX_RESULTS);
        assert_eq!(ranked[0].article.title, "Title 0");
        assert_eq!(ranked[19].article.title, "Title 19");
        assert!(ranked.iter().all(|r| r.relevance == 0));
    }

    #[test]
    fn title_matches_outweigh_description_matches() {
        let candidates = vec![
            raw("Nothing relevant", "election results are in", "https://a/1"),
            raw("Election night special", "all the numbers", "https://a/2"),
        ];

        let ranked = filter_and_score(candidates, "election");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].article.url, "https://a/2");
        assert_eq!(ranked[0].relevance, 3);
        assert_eq!(ranked[1].relevance, 1);
    }

    #[test]
    fn substring_without_whole_word_is_rejected() {
        // "art" is a substring of "startup" but never a whole word.
        let candidates = vec![raw("Startup funding", "startups raised money", "https://a/1")];
        assert!(filter_and_score(candidates, "art").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let candidates = vec![raw("ELECTION Update", "The latest", "https://a/1")];
        let ranked = filter_and_score(candidates, "Election");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].relevance, 3);
    }

    #[test]
    fn five_article_election_example() {
        // Two with "election" in the title, one only in the description,
        // two with no match at all.
        let candidates = vec![
            raw("Election results live", "counting continues", "https://a/title-1"),
            raw("Cooking at home", "weeknight recipes", "https://a/miss-1"),
            raw("Election fallout", "what happens next", "https://a/title-2"),
            raw("Market wrap", "the election moved markets today", "https://a/desc-1"),
            raw("Travel tips", "pack light", "https://a/miss-2"),
        ];

        let ranked = filter_and_score(candidates, "election");
        assert_eq!(ranked.len(), 3);
        // Title matches (score 3) keep their relative order, then the
        // description-only match (score 1).
        assert_eq!(ranked[0].article.url, "https://a/title-1");
        assert_eq!(ranked[0].relevance, 3);
        assert_eq!(ranked[1].article.url, "https://a/title-2");
        assert_eq!(ranked[1].relevance, 3);
        assert_eq!(ranked[2].article.url, "https://a/desc-1");
        assert_eq!(ranked[2].relevance, 1);
    }

    #[test]
    fn multi_term_scores_accumulate() {
        let candidates = vec![raw(
            "Climate summit opens",
            "climate leaders meet at the summit",
            "https://a/1",
        )];

        // "climate" hits title (3) + description (1), "summit" hits both
        // as well: 8 total.
        let ranked = filter_and_score(candidates, "climate summit");
        assert_eq!(ranked[0].relevance, 8);
    }

    #[test]
    fn results_are_truncated_to_twenty() {
        let candidates: Vec<RawArticle> = (0..30)
            .map(|i| {
                raw(
                    &format!("Election update {}", i),
                    "more coverage",
                    &format!("https://a/{}", i),
                )
            })
            .collect();

        let ranked = filter_and_score(candidates, "election");
        assert_eq!(ranked.len(), MAX_RESULTS);
        // Equal scores: stable order preserved across the truncation.
        assert_eq!(ranked[0].article.url, "https://a/0");
        assert_eq!(ranked[19].article.url, "https://a/19");
    }
}
