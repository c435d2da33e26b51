//! Report processing engine for the SCM analytics dashboard.
//!
//! Pipeline: raw BW report payload -> [`parser`] -> [`transform`] ->
//! [`projectors`] (driven by a per-widget mapping configuration) ->
//! widget-ready props from `contracts::widgets`. The [`client`] module
//! carries the async fetch boundary.

pub mod client;
pub mod defaults;
pub mod format;
pub mod palette;
pub mod parser;
pub mod path;
pub mod projectors;
pub mod transform;
