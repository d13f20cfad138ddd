//! Executor side of schema evaluation: runs schema nodes once each and stores
//! their results.
//!
//! Ordering and scheduling belong to the caller. The helpers here evaluate
//! nodes in the order given, make a single attempt per node, and record the
//! outcome of every node rather than stopping at the first failure.

mod store;
mod types;

pub use store::ProviderSchemas;
pub use types::{NodeResult, NodeStatus};

use tracing::{debug, warn};

use crate::eval::{EvalContext, EvalNode, GetProviderSchema};

/// Evaluate one schema node and store its result.
///
/// The store is written only when evaluation succeeds. Errors are captured on
/// the returned [`NodeResult`].
pub fn run_schema_node(node: &GetProviderSchema, ctx: &EvalContext, store: &mut ProviderSchemas) -> NodeResult {
    let id = node.name();
    let provider = node.provider_name.clone();
    debug!(node = %id, operation = ?ctx.operation, "evaluating node");

    let outcome = node.eval(ctx).and_then(|schema| store.insert_once(provider.clone(), schema));
    match outcome {
        Ok(()) => {
            debug!(node = %id, "node succeeded");
            NodeResult::succeeded(id, provider)
        }
        Err(error) => {
            warn!(node = %id, error = %error, "node failed");
            NodeResult::failed(id, provider, error.to_string())
        }
    }
}

/// Evaluate schema nodes sequentially in the given order.
///
/// Returns the populated store alongside one result per node.
pub fn run_schema_nodes(nodes: &[GetProviderSchema], ctx: &EvalContext) -> (ProviderSchemas, Vec<NodeResult>) {
    let mut store = ProviderSchemas::new();
    let results = nodes.iter().map(|node| run_schema_node(node, ctx, &mut store)).collect();
    (store, results)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use stratum_types::{ResourceType, SchemaBlock};

    use super::*;
    use crate::{
        error::{EvalError, ProviderError},
        provider::{NullProvider, ResourceProvider},
    };

    #[derive(Debug)]
    struct FixedProvider {
        schema: Result<Option<Arc<SchemaBlock>>, ProviderError>,
    }

    impl ResourceProvider for FixedProvider {
        fn resources(&self) -> Vec<ResourceType> {
            vec![ResourceType::new("fixed_thing", true)]
        }

        fn data_sources(&self) -> Vec<stratum_types::DataSource> {
            Vec::new()
        }

        fn provider_schema(&self) -> Result<Option<Arc<SchemaBlock>>, ProviderError> {
            self.schema.clone()
        }
    }

    #[test]
    fn success_stores_schema_and_failure_leaves_store_untouched() {
        let nodes = vec![
            GetProviderSchema::new("good", Arc::new(FixedProvider { schema: Ok(None) })),
            GetProviderSchema::new("legacy", Arc::new(NullProvider)),
            GetProviderSchema::new(
                "broken",
                Arc::new(FixedProvider {
                    schema: Err(ProviderError::transport("connection reset")),
                }),
            ),
        ];

        let (store, results) = run_schema_nodes(&nodes, &EvalContext::default());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].status, NodeStatus::Succeeded);
        assert_eq!(results[1].status, NodeStatus::Failed);
        assert_eq!(results[1].error.as_deref(), Some(EvalError::capability("legacy").to_string().as_str()));
        assert_eq!(results[2].status, NodeStatus::Failed);
        assert_eq!(results[2].error.as_deref(), Some("Transport error: connection reset"));

        assert_eq!(store.len(), 1);
        assert!(store.get("good").expect("good schema").is_empty());
        assert!(!store.contains("legacy"));
        assert!(!store.contains("broken"));
    }

    #[test]
    fn duplicate_provider_node_fails_without_overwriting() {
        let schema = Arc::new(SchemaBlock::empty());
        let provider: Arc<dyn ResourceProvider> = Arc::new(FixedProvider {
            schema: Ok(Some(schema.clone())),
        });
        let nodes = vec![
            GetProviderSchema::new("aws", provider.clone()),
            GetProviderSchema::new("aws", provider),
        ];

        let (store, results) = run_schema_nodes(&nodes, &EvalContext::default());

        assert_eq!(results[0].status, NodeStatus::Succeeded);
        assert_eq!(results[1].status, NodeStatus::Failed);
        assert!(Arc::ptr_eq(store.get("aws").expect("aws schema"), &schema));
    }
}
