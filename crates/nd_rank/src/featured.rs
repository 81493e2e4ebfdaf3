use chrono::{DateTime, Duration, Utc};
use nd_core::{Article, RankedArticle, RoleScores, ScoredArticle};

const KING_KEYWORDS: [&str; 10] = [
    "breaking",
    "urgent",
    "exclusive",
    "major",
    "critical",
    "emergency",
    "crisis",
    "disaster",
    "attack",
    "outbreak",
];

const QUEEN_KEYWORDS: [&str; 10] = [
    "analysis",
    "impact",
    "development",
    "breakthrough",
    "discovery",
    "innovation",
    "policy",
    "reform",
    "agreement",
    "summit",
];

const JACK_KEYWORDS: [&str; 10] = [
    "interesting",
    "trending",
    "viral",
    "popular",
    "feature",
    "spotlight",
    "highlight",
    "showcase",
    "review",
    "preview",
];

const REPUTABLE_SOURCES: [&str; 5] = ["reuters", "ap", "bbc", "cnn", "nyt"];

const KEYWORD_WEIGHT: u32 = 2;
const SOURCE_BONUS: u32 = 1;
const RECENCY_BONUS: u32 = 1;

/// How an article's King/Queen/Jack weights are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringStrategy {
    /// Search path: relevance stands in for all three roles.
    FlatRelevance,
    /// Topic-browsing path: independent keyword-bucket scoring.
    KeywordBuckets,
}

/// The featured card a selected article fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    King,
    Queen,
    Jack,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::King => "King",
            Role::Queen => "Queen",
            Role::Jack => "Jack",
        }
    }

    pub fn initial(&self) -> char {
        match self {
            Role::King => 'K',
            Role::Queen => 'Q',
            Role::Jack => 'J',
        }
    }
}

/// The up-to-three featured articles. Any slot may be empty when fewer
/// than three candidates were available; callers render what exists.
#[derive(Debug, Clone, Default)]
pub struct Featured {
    pub king: Option<Article>,
    pub queen: Option<Article>,
    pub jack: Option<Article>,
}

impl Featured {
    pub fn roles(&self) -> impl Iterator<Item = (Role, &Article)> {
        [
            (Role::King, self.king.as_ref()),
            (Role::Queen, self.queen.as_ref()),
            (Role::Jack, self.jack.as_ref()),
        ]
        .into_iter()
        .filter_map(|(role, article)| article.map(|a| (role, a)))
    }

    pub fn len(&self) -> usize {
        self.roles().count()
    }

    pub fn is_empty(&self) -> bool {
        self.king.is_none() && self.queen.is_none() && self.jack.is_none()
    }

    fn contains_url(&self, url: &str) -> bool {
        self.roles().any(|(_, a)| a.url == url)
    }
}

/// Compute an article's King/Queen/Jack weights under the given strategy.
///
/// Keyword buckets scan the lowercased `title + " " + description`: +2
/// per keyword hit. A reputable source adds +1 to king and queen, and
/// publication within the 24 hours before `now` adds +1 to king. `now`
/// is injected so scoring stays deterministic.
pub fn classify(
    candidate: &RankedArticle,
    strategy: ScoringStrategy,
    now: DateTime<Utc>,
) -> RoleScores {
    match strategy {
        ScoringStrategy::FlatRelevance => RoleScores::flat(candidate.relevance),
        ScoringStrategy::KeywordBuckets => {
            let article = &candidate.article;
            let haystack = format!(
                "{} {}",
                article.title.to_lowercase(),
                article.description.to_lowercase()
            );

            let bucket = |keywords: &[&str]| {
                keywords
                    .iter()
                    .filter(|k| haystack.contains(*k))
                    .count() as u32
                    * KEYWORD_WEIGHT
            };

            let source_bonus = if REPUTABLE_SOURCES
                .contains(&article.source.name.to_lowercase().as_str())
            {
                SOURCE_BONUS
            } else {
                0
            };

            let recency_bonus = match article.published_at {
                Some(ts) if ts > now - Duration::hours(24) => RECENCY_BONUS,
                _ => 0,
            };

            RoleScores {
                king: bucket(&KING_KEYWORDS) + source_bonus + recency_bonus,
                queen: bucket(&QUEEN_KEYWORDS) + source_bonus,
                jack: bucket(&JACK_KEYWORDS),
            }
        }
    }
}

/// Pick the King, Queen and Jack and split off the rest.
///
/// Candidates are stable-sorted by their highest role score; the King is
/// the first whose king weight dominates, the Queen the first unchosen
/// whose queen weight dominates, the Jack the first still unchosen.
/// Fallbacks always take the next unchosen element so the three are
/// pairwise distinct by url. The remaining list keeps the input order.
pub fn select_featured(
    candidates: Vec<RankedArticle>,
    strategy: ScoringStrategy,
    now: DateTime<Utc>,
) -> (Featured, Vec<Article>) {
    let scored: Vec<ScoredArticle> = candidates
        .into_iter()
        .map(|c| {
            let scores = classify(&c, strategy, now);
            ScoredArticle {
                article: c.article,
                relevance: c.relevance,
                scores,
            }
        })
        .collect();

    let mut sorted: Vec<&ScoredArticle> = scored.iter().collect();
    sorted.sort_by(|a, b| b.scores.max().cmp(&a.scores.max()));

    let mut chosen: Vec<usize> = Vec::with_capacity(3);

    let king = sorted
        .iter()
        .position(|a| a.scores.king >= a.scores.queen && a.scores.king >= a.scores.jack)
        .or(if sorted.is_empty() { None } else { Some(0) });
    if let Some(i) = king {
        chosen.push(i);
    }

    let queen = sorted
        .iter()
        .enumerate()
        .filter(|(i, _)| !chosen.contains(i))
        .find(|(_, a)| a.scores.queen >= a.scores.king && a.scores.queen >= a.scores.jack)
        .map(|(i, _)| i)
        .or_else(|| (0..sorted.len()).find(|i| !chosen.contains(i)));
    if let Some(i) = queen {
        chosen.push(i);
    }

    let jack = (0..sorted.len()).find(|i| !chosen.contains(i));
    if let Some(i) = jack {
        chosen.push(i);
    }

    let pick = |slot: Option<usize>| slot.map(|i| sorted[i].article.clone());
    let featured = Featured {
        king: pick(king),
        queen: pick(queen),
        jack: pick(jack),
    };

    let remaining = scored
        .into_iter()
        .map(|s| s.article)
        .filter(|a| !featured.contains_url(&a.url))
        .collect();

    (featured, remaining)
}
