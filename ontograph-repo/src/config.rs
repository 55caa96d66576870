//! Repository configuration.

use serde::{Deserialize, Serialize};

/// Options for a map-backed repository. Pure data, no I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Accept only union graphs in `put`; composed models only.
    #[serde(default)]
    pub require_union: bool,
}

impl RepositoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_union(mut self) -> Self {
        self.require_union = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_defaults() {
        let cfg: RepositoryConfig = serde_json::from_str("{}").unwrap();
        assert!(!cfg.require_union);

        let cfg: RepositoryConfig = serde_json::from_str(r#"{"require_union":true}"#).unwrap();
        assert!(cfg.require_union);
    }
}
