use serde::{Deserialize, Serialize};

/// What to do when two entries resolve to the same id, e.g. a message
/// declared twice in one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollisionPolicy {
    /// The entry declared later replaces the earlier one
    #[default]
    LastWriteWins,
    /// Aggregation fails with `InferenceError::NameCollision`
    Reject,
}

/// Configuration options for argument inference
#[derive(Debug, Clone, Default)]
pub struct InferenceOptions {
    /// How duplicate entry ids are resolved
    pub collisions: CollisionPolicy,

    /// Treat patterns that reference no variables like absent patterns
    /// When true, `demo = Look ma, no arguments!` accepts no arguments
    /// parameter instead of requiring an empty arguments object
    pub omit_empty_shapes: bool,
}

impl InferenceOptions {
    /// Create a new options instance that rejects id collisions
    pub fn strict() -> Self {
        Self {
            collisions: CollisionPolicy::Reject,
            ..Default::default()
        }
    }

    /// Create a new options instance where argument-free patterns take no
    /// arguments parameter
    pub fn compact() -> Self {
        Self {
            omit_empty_shapes: true,
            ..Default::default()
        }
    }
}
