//! Keyword and cosine-similarity candidate search.
//!
//! This crate scores a talent pool against a free-text query and a set of
//! structured filters, the way a recruiting dashboard's search box does. It
//! is a pure function of (candidates, query): no index, no cache, no I/O.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ tokenize.rs │────▶│  vector.rs   │────▶│  scoring/   │
//! │ (tokenize,  │     │ (TermVector, │     │ (keyword,   │
//! │  searchable │     │  cosine)     │     │  combined,  │
//! │  text)      │     │              │     │  ranking)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                                                 │
//!        ┌──────────────┐                         ▼
//!        │  filter.rs   │───────────────▶┌─────────────────┐
//!        │ (FilterSet,  │                │   search/       │
//!        │  FilterDraft)│                │ score → filter  │
//!        └──────────────┘                │ → rank → limit  │
//!                                        └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use hirescore::{search, Candidate, SearchQuery};
//!
//! let candidates = vec![Candidate {
//!     id: "1".into(),
//!     name: "Sarah Chen".into(),
//!     title: "Senior AI Engineer".into(),
//!     skills: vec!["Python".into(), "TensorFlow".into()],
//!     ..Candidate::default()
//! }];
//!
//! let results = search(&candidates, &SearchQuery::text("python engineer"));
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].keyword_score, 2.0);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod dataset;
mod error;
mod filter;
pub mod highlight;
pub mod scoring;
mod search;
pub mod testing;
mod tokenize;
mod types;
mod vector;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{ScorerConfig, MAX_CONFIG_VALUE};
pub use dataset::{load_candidates, parse_candidates, summarize, DatasetSummary};
pub use error::{Error, Result};
pub use filter::{FilterCategory, FilterDraft};
pub use highlight::{highlight, Segment};
pub use scoring::ranking::compare_results;
pub use scoring::{combined_score, keyword_score, score_candidate, PreparedQuery};
pub use search::{score_all, search, search_with_config};
pub use tokenize::{candidate_tokens, searchable_text, tokenize, MIN_TOKEN_LEN};
pub use types::{
    Candidate, CandidateScore, FilterSet, ScoredResult, SearchMode, SearchQuery,
};
pub use vector::{cosine_similarity, TermVector};

#[cfg(feature = "parallel")]
pub use search::PARALLEL_THRESHOLD;
