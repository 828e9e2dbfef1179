//! Shared operations used by both CLI and MCP server.
//!
//! This module holds the pipeline glue so `main.rs` (CLI) and
//! `mcp/server.rs` produce identical results.

pub mod catalog;
pub mod compare;
pub mod estimate;
pub mod tokens;

pub use catalog::{list_equivalences, list_models, EquivalencesResult, ModelsResult, ProviderGroup};
pub use compare::{compare_energy, CompareResult};
pub use estimate::{estimate, EstimateReport, EstimateRequest};
pub use tokens::{count_tokens, TokensResult};
