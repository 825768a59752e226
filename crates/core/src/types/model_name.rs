//! Closed set of known model names.

use serde::{Deserialize, Serialize};

/// The machine-learning models the API knows about.
///
/// Modeled as a closed enum rather than a raw string so an unknown name is
/// rejected during path deserialization, before any handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    /// Fixed message associated with each model.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Alexnet => "Deep learning FTW!",
            Self::Lenet => "LeCNN all the images",
            Self::Resnet => "Have some residuals",
        }
    }

    /// Wire name of the model.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alexnet => "alexnet",
            Self::Resnet => "resnet",
            Self::Lenet => "lenet",
        }
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
