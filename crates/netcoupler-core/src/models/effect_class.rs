use serde::{Deserialize, Serialize};

/// Classification of a network node's link to the external variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectClass {
    /// Significant with a consistent sign at every adjustment step.
    Direct,
    /// Significant without network adjustment, not robust to it.
    Ambiguous,
    /// Not significant without network adjustment.
    #[serde(rename = "none")]
    NoEffect,
    /// At least one model in the sequence failed to fit.
    Undetermined,
}

impl EffectClass {
    pub const ALL: [EffectClass; 4] = [
        Self::Direct,
        Self::Ambiguous,
        Self::NoEffect,
        Self::Undetermined,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Ambiguous => "ambiguous",
            Self::NoEffect => "none",
            Self::Undetermined => "undetermined",
        }
    }

    /// Whether the label was reached from complete evidence.
    pub fn is_determined(self) -> bool {
        !matches!(self, Self::Undetermined)
    }
}

impl std::fmt::Display for EffectClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
