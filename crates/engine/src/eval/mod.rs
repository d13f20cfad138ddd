//! Graph evaluation nodes.
//!
//! A node is evaluated once per graph pass by an external scheduler, which
//! supplies an [`EvalContext`] and stores whatever the node returns. Nodes
//! hand their result back by value; they never write into caller-owned slots.

mod schema;

pub use schema::{GetProviderSchema, normalize_schema};

use crate::error::EvalError;

/// The kind of graph walk being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkOperation {
    #[default]
    Validate,
    Plan,
    Apply,
}

/// Per-pass context shared by every node the scheduler evaluates.
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    pub operation: WalkOperation,
}

impl EvalContext {
    pub fn new(operation: WalkOperation) -> Self {
        Self { operation }
    }
}

/// A unit of work in the evaluation graph.
pub trait EvalNode {
    /// Value handed back to the scheduler on success.
    type Output;

    /// Label used in logs and node results.
    fn name(&self) -> String;

    /// Evaluates the node once.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] describing why the node could not produce its output.
    fn eval(&self, ctx: &EvalContext) -> Result<Self::Output, EvalError>;
}
