//! Tunables for deriving maps and applying gates.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How [`MatrixGate::apply`](crate::matrix_gate::MatrixGate::apply) computes
/// the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyStrategy {
    /// Build the full embedding matrix, then multiply.
    #[default]
    Materialize,
    /// Accumulate columns straight into the output state.
    Streaming,
}

/// Settings shared by a gate's map derivation and its applications.
///
/// # Example
/// ```
/// use qubit_embed::config::{ApplyStrategy, EmbedConfig};
/// let config = EmbedConfig::from_json_str(r#"{ "strategy": "streaming" }"#).unwrap();
/// assert_eq!(config.strategy, ApplyStrategy::Streaming);
/// assert_eq!(config.atol, EmbedConfig::default().atol);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Tolerance for accepting a product factorisation of a gate column.
    pub atol: f64,
    /// Minimum register dimension `2^n` before columns are built in parallel
    /// (only with the `parallel` feature).
    pub parallel_threshold: usize,
    pub strategy: ApplyStrategy,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        EmbedConfig {
            atol: 1e-12,
            parallel_threshold: 1 << 8,
            strategy: ApplyStrategy::Materialize,
        }
    }
}

impl EmbedConfig {
    /// Parse a config from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
