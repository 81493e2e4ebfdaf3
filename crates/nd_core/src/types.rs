use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An article exactly as NewsAPI returns it. Everything the upstream can
/// omit or null out is optional here; validation happens in
/// [`Article::from_raw`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "urlToImage", default)]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt", default, with = "lenient_timestamp")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// A validated article: title, description and url are present and
/// non-empty. The url doubles as the identity/dedup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    pub source: Source,
    pub content: Option<String>,
}

impl Article {
    /// Validate a raw candidate. Articles missing title, description or
    /// url are dropped permanently and never re-enter the candidate pool.
    pub fn from_raw(raw: RawArticle) -> Option<Self> {
        let title = raw.title.filter(|s| !s.is_empty())?;
        let description = raw.description.filter(|s| !s.is_empty())?;
        let url = raw.url.filter(|s| !s.is_empty())?;
        Some(Self {
            title,
            description,
            url,
            url_to_image: raw.url_to_image,
            published_at: raw.published_at,
            source: raw.source,
            content: raw.content,
        })
    }
}

/// An article with its query relevance weight attached for one ranking
/// pass.
#[derive(Debug, Clone)]
pub struct RankedArticle {
    pub article: Article,
    pub relevance: u32,
}

/// King/Queen/Jack weights: breaking, analytical and engaging
/// respectively. Derived per pass, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleScores {
    pub king: u32,
    pub queen: u32,
    pub jack: u32,
}

impl RoleScores {
    /// The undifferentiated variant used when relevance stands in for all
    /// three roles.
    pub fn flat(weight: u32) -> Self {
        Self {
            king: weight,
            queen: weight,
            jack: weight,
        }
    }

    pub fn max(&self) -> u32 {
        self.king.max(self.queen).max(self.jack)
    }
}

#[derive(Debug, Clone)]
pub struct ScoredArticle {
    pub article: Article,
    pub relevance: u32,
    pub scores: RoleScores,
}

/// The upstream response envelope, passed through the proxy untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

/// RFC 3339 timestamps, but a missing or malformed value becomes `None`
/// instead of failing the whole response.
mod lenient_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|ts| ts.with_timezone(&Utc)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn from_raw_keeps_complete_articles() {
        let article = Article::from_raw(raw("Title", "Description", "https://example.com"));
        assert!(article.is_some());
        assert_eq!(article.unwrap().url, "https://example.com");
    }

    #[test]
    fn from_raw_drops_missing_or_empty_fields() {
        let mut missing_title = raw("t", "d", "u");
        missing_title.title = None;
        assert!(Article::from_raw(missing_title).is_none());

        let mut empty_description = raw("t", "d", "u");
        empty_description.description = Some(String::new());
        assert!(Article::from_raw(empty_description).is_none());

        let mut missing_url = raw("t", "d", "u");
        missing_url.url = None;
        assert!(Article::from_raw(missing_url).is_none());
    }

    #[test]
    fn response_deserializes_newsapi_shape() {
        let json = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": { "id": "bbc-news", "name": "BBC" },
                    "title": "Breaking story",
                    "description": "Something happened",
                    "url": "https://bbc.co.uk/1",
                    "urlToImage": "https://bbc.co.uk/1.jpg",
                    "publishedAt": "2024-03-01T12:00:00Z",
                    "content": "Full text"
                },
                {
                    "source": { "id": null, "name": "Blog" },
                    "title": null,
                    "description": "no title here",
                    "url": "https://blog.example/2",
                    "urlToImage": null,
                    "publishedAt": "not-a-date",
                    "content": null
                }
            ]
        }"#;

        let response: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "ok");
        assert_eq!(response.total_results, Some(2));
        assert_eq!(response.articles.len(), 2);
        assert!(response.articles[0].published_at.is_some());
        assert_eq!(response.articles[0].source.name, "BBC");
        // Malformed timestamp degrades to None instead of failing.
        assert!(response.articles[1].published_at.is_none());
    }

    #[test]
    fn role_scores_max_and_flat() {
        let scores = RoleScores {
            king: 2,
            queen: 5,
            jack: 3,
        };
        assert_eq!(scores.max(), 5);
        assert_eq!(RoleScores::flat(4).max(), 4);
        assert_eq!(RoleScores::flat(4).jack, 4);
    }
}
