// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers and their order.
//!
//! Two signals feed every score. The keyword score counts distinct query
//! terms the candidate shares (plus a flat bonus for a location filter hit).
//! The semantic score is the cosine similarity of the two term-frequency
//! vectors. The search mode decides how they blend.

mod core;
pub mod ranking;

pub use self::core::*;
