//! Core executor data types.

/// Terminal outcome of a node evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    /// Node produced its output and the output was stored.
    Succeeded,
    /// Node returned an error; nothing was stored.
    Failed,
}

/// Result of evaluating one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeResult {
    /// Node label, e.g. `provider.aws.schema`.
    pub id: String,
    /// Provider the node was evaluated for.
    pub provider: String,
    pub status: NodeStatus,
    /// Rendered error when `status` is `Failed`.
    pub error: Option<String>,
}

impl NodeResult {
    pub(crate) fn succeeded(id: String, provider: String) -> Self {
        Self {
            id,
            provider,
            status: NodeStatus::Succeeded,
            error: None,
        }
    }

    pub(crate) fn failed(id: String, provider: String, error: String) -> Self {
        Self {
            id,
            provider,
            status: NodeStatus::Failed,
            error: Some(error),
        }
    }
}
