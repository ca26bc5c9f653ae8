//! WebAssembly bindings for the dashboard.
//!
//! The dashboard keeps its candidate list in client state and re-runs the
//! search on every keystroke or filter change. `CandidateSearcher` holds a
//! copy of that list so each search only has to ship the query across the
//! JS boundary.
//!
//! Build with `wasm-pack build --no-default-features --features wasm`.

use crate::config::ScorerConfig;
use crate::highlight::highlight;
use crate::search::search_with_config;
use crate::types::{Candidate, SearchQuery};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::collections::BTreeSet;
use wasm_bindgen::prelude::*;

/// Search result output for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    candidate: &'a Candidate,
    score: f64,
    keyword_score: f64,
    semantic_score: f64,
    matched_terms: Vec<&'a str>,
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

/// WASM-accessible candidate search.
#[wasm_bindgen]
pub struct CandidateSearcher {
    candidates: Vec<Candidate>,
    config: ScorerConfig,
}

#[wasm_bindgen]
impl CandidateSearcher {
    /// Takes an array of candidate objects (camelCase keys).
    #[wasm_bindgen(constructor)]
    pub fn new(candidates: JsValue) -> Result<CandidateSearcher, JsValue> {
        let candidates: Vec<Candidate> =
            from_value(candidates).map_err(|e| js_error("invalid candidates", e))?;
        Ok(CandidateSearcher {
            candidates,
            config: ScorerConfig::default(),
        })
    }

    /// Override the scorer weights. Missing keys keep their defaults.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: ScorerConfig = from_value(config).map_err(|e| js_error("invalid config", e))?;
        config.validate().map_err(|e| js_error("invalid config", e))?;
        self.config = config;
        Ok(())
    }

    /// Number of candidates held.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.candidates.len()
    }

    /// Run a search. `query` is `{ text, filters, mode, limit }`, all optional.
    pub fn search(&self, query: JsValue) -> Result<JsValue, JsValue> {
        let query: SearchQuery = if query.is_undefined() || query.is_null() {
            SearchQuery::default()
        } else {
            from_value(query).map_err(|e| js_error("invalid query", e))?
        };

        let results = search_with_config(&self.candidates, &query, &self.config);
        let output: Vec<SearchResultOutput<'_>> = results
            .iter()
            .map(|r| SearchResultOutput {
                candidate: r.candidate,
                score: r.score,
                keyword_score: r.keyword_score,
                semantic_score: r.semantic_score,
                matched_terms: r.matched_terms.iter().map(String::as_str).collect(),
            })
            .collect();

        to_value(&output).map_err(|e| js_error("failed to serialize results", e))
    }
}

/// Split display text into `{ text, matched }` segments for the given terms.
#[wasm_bindgen(js_name = highlightText)]
pub fn highlight_text(text: &str, matched_terms: Vec<String>) -> Result<JsValue, JsValue> {
    let terms: BTreeSet<String> = matched_terms.into_iter().collect();
    to_value(&highlight(text, &terms)).map_err(|e| js_error("failed to serialize segments", e))
}
