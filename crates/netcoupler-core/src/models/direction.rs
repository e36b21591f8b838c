use serde::{Deserialize, Serialize};

/// Which side of the network the external variable sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkDirection {
    /// The external variable precedes the network: `node ~ exposure + adjustment`.
    Exposure,
    /// The external variable follows the network: `outcome ~ node + adjustment`.
    Outcome,
}

impl LinkDirection {
    /// `(response, focal)` variable names for a model linking `node` and `external`.
    pub fn roles<'a>(self, node: &'a str, external: &'a str) -> (&'a str, &'a str) {
        match self {
            Self::Exposure => (node, external),
            Self::Outcome => (external, node),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exposure => "exposure",
            Self::Outcome => "outcome",
        }
    }
}

impl std::fmt::Display for LinkDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
