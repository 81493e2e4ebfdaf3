//! Reader view state: selected topic, search text and the result of the
//! latest fetch.
//!
//! Every fetch carries a generation token. In-flight requests are never
//! cancelled; a completion whose token is stale is simply ignored, so
//! the displayed state always reflects the last-initiated fetch.

use nd_rank::FrontPage;

/// What a finished fetch produced.
#[derive(Debug)]
pub enum FetchOutcome {
    Results(FrontPage),
    /// Zero articles came back; the message may carry a spelling
    /// suggestion the user can accept.
    Empty {
        message: String,
        suggestion: Option<String>,
    },
    Failed(String),
}

#[derive(Debug, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Loaded(FrontPage),
    Empty {
        message: String,
        suggestion: Option<String>,
    },
    Failed(String),
}

/// Proof of which fetch a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

#[derive(Debug, Default)]
pub struct ReaderSession {
    topic: Option<String>,
    search: String,
    generation: u64,
    view: ViewState,
}

impl ReaderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a topic; selecting the current topic again clears it back
    /// to general browsing. Topics are tracked lowercased.
    pub fn select_topic(&mut self, topic: &str) {
        let lower = topic.to_lowercase();
        if self.topic.as_deref() == Some(lower.as_str()) {
            self.topic = None;
        } else {
            self.topic = Some(lower);
        }
    }

    pub fn submit_search(&mut self, text: &str) {
        self.search = text.trim().to_string();
    }

    pub fn is_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// The query sent upstream: search text, else the selected topic,
    /// else the default feed.
    pub fn upstream_query(&self) -> &str {
        if self.is_search() {
            &self.search
        } else {
            self.topic.as_deref().unwrap_or("news")
        }
    }

    /// The query the ranking pipeline sees. Topic browsing ranks with an
    /// empty query (pass-through plus keyword buckets).
    pub fn ranking_query(&self) -> &str {
        if self.is_search() {
            &self.search
        } else {
            ""
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Start a new fetch: bumps the generation and enters the loading
    /// state. The returned token must accompany the completion.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.generation += 1;
        self.view = ViewState::Loading;
        FetchToken(self.generation)
    }

    /// Apply a fetch outcome. Returns false (leaving the view untouched)
    /// when the token is stale, i.e. a newer fetch has started since.
    pub fn complete_fetch(&mut self, token: FetchToken, outcome: FetchOutcome) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.view = match outcome {
            FetchOutcome::Results(page) => ViewState::Loaded(page),
            FetchOutcome::Empty {
                message,
                suggestion,
            } => ViewState::Empty {
                message,
                suggestion,
            },
            FetchOutcome::Failed(message) => ViewState::Failed(message),
        };
        true
    }
}
