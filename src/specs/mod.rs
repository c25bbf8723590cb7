// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec owns a single remote
//! page and encodes *where the ground truth lives in its HTML* and *how to
//! extract it tolerantly*: selector choice, precedence, and the shaping of
//! results into small bundle structs.
//!
//! Conventions:
//! - Case-insensitive tag detection; local scanning within known blocks
//!   rather than full-document regexes.
//! - Every spec splits `parse_doc(&str)` from `fetch(...)` so parsing is
//!   testable offline against fixtures.
//! - Stable output shapes per page; team names leave a spec already
//!   canonicalized through `teams::canonical_name`.
//! - No caching, no scoring, no presentation; specs only read pages.
//!   When to fetch and what to do with the data lives in `scrape`.

pub mod defense_stats;
pub mod game_log;
pub mod player_stats;
pub mod schedule;
pub mod team_schedule;
pub mod team_stats;
