//! The ranking pipeline: pure, synchronous, no I/O.
//!
//! Raw candidates go in together with the user's query; a front page
//! (featured King/Queen/Jack cards plus the remaining grid) comes out.

pub mod featured;
pub mod pipeline;
pub mod relevance;
pub mod suggest;

pub use featured::{Featured, Role, ScoringStrategy};
pub use pipeline::{build_front_page, FrontPage};
pub use relevance::{filter_and_score, MAX_RESULTS};
pub use suggest::{no_results_message, suggest_correction};
