pub mod error;
pub mod topics;
pub mod types;

pub use error::Error;
pub use topics::TOPICS;
pub use types::{
    Article, NewsResponse, RankedArticle, RawArticle, RoleScores, ScoredArticle, Source,
};

pub type Result<T> = std::result::Result<T, Error>;
