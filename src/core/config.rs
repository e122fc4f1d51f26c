//! Configuration of a graph-backed automaton.

use serde::{Deserialize, Serialize};

/// What `remove_state` does with transitions still attached to the state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalPolicy {
    /// Remove every incident transition, then the state.
    #[default]
    Cascade,

    /// Refuse with `StateHasTransitions` while any incident transition exists.
    Reject,
}

/// Settings of a [`GraphAutomaton`](super::GraphAutomaton).
///
/// # Example
///
/// ```rust
/// use hybrid_automata::core::{AutomatonConfig, RemovalPolicy};
///
/// let config = AutomatonConfig::builder()
///     .removal(RemovalPolicy::Reject)
///     .build();
/// assert_eq!(config.removal, RemovalPolicy::Reject);
///
/// let parsed: AutomatonConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(parsed.removal, RemovalPolicy::Cascade);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonConfig {
    #[serde(default)]
    pub removal: RemovalPolicy,
}

impl AutomatonConfig {
    pub fn builder() -> AutomatonConfigBuilder {
        AutomatonConfigBuilder::default()
    }
}

/// Fluent builder for [`AutomatonConfig`].
#[derive(Clone, Debug, Default)]
pub struct AutomatonConfigBuilder {
    removal: RemovalPolicy,
}

impl AutomatonConfigBuilder {
    /// Set the state removal policy.
    pub fn removal(mut self, policy: RemovalPolicy) -> Self {
        self.removal = policy;
        self
    }

    pub fn build(self) -> AutomatonConfig {
        AutomatonConfig {
            removal: self.removal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_cascades() {
        assert_eq!(AutomatonConfig::default().removal, RemovalPolicy::Cascade);
        assert_eq!(
            AutomatonConfig::builder().build(),
            AutomatonConfig::default()
        );
    }

    #[test]
    fn policy_serializes_lowercase() {
        let config = AutomatonConfig::builder()
            .removal(RemovalPolicy::Reject)
            .build();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"removal":"reject"}"#);

        let back: AutomatonConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
