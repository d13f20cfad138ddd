use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use stratum_engine::{
    EvalContext, EvalError, EvalNode, GetProviderSchema, NodeStatus, ProviderError, ProviderSchemas, ResourceProvider, WalkOperation,
    run_schema_node,
};
use stratum_types::{Attribute, AttributeType, DataSource, ResourceType, SchemaBlock};

/// Scriptable provider that counts schema fetches.
#[derive(Debug)]
struct MockProvider {
    resources: Vec<ResourceType>,
    data_sources: Vec<DataSource>,
    schema: Mutex<Result<Option<Arc<SchemaBlock>>, ProviderError>>,
    schema_calls: AtomicUsize,
}

impl MockProvider {
    fn new(resources: Vec<ResourceType>, data_sources: Vec<DataSource>) -> Self {
        Self {
            resources,
            data_sources,
            schema: Mutex::new(Ok(None)),
            schema_calls: AtomicUsize::new(0),
        }
    }

    fn returning(self, schema: Result<Option<Arc<SchemaBlock>>, ProviderError>) -> Self {
        *self.schema.lock().unwrap() = schema;
        self
    }
}

impl ResourceProvider for MockProvider {
    fn resources(&self) -> Vec<ResourceType> {
        self.resources.clone()
    }

    fn data_sources(&self) -> Vec<DataSource> {
        self.data_sources.clone()
    }

    fn provider_schema(&self) -> Result<Option<Arc<SchemaBlock>>, ProviderError> {
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        self.schema.lock().unwrap().clone()
    }
}

#[test]
fn schema_capable_provider_returns_exact_schema() {
    let schema = Arc::new(SchemaBlock::empty());
    let provider = Arc::new(MockProvider::new(vec![ResourceType::new("baz_bar", true)], vec![]).returning(Ok(Some(schema.clone()))));

    let node = GetProviderSchema::new("baz", provider);
    let got = node.eval(&EvalContext::default()).expect("unexpected error");

    assert!(Arc::ptr_eq(&got, &schema), "result is not the schema the provider returned");
}

#[test]
fn provider_without_catalog_fails_capability_check() {
    let provider = Arc::new(MockProvider::new(vec![], vec![]));
    let node = GetProviderSchema::new("qux", provider.clone());
    let mut store = ProviderSchemas::new();

    let err = node.eval(&EvalContext::default()).expect_err("empty provider must not be schema capable");
    assert_eq!(err, EvalError::capability("qux"));
    assert!(err.to_string().contains("\"qux\""));
    assert_eq!(provider.schema_calls.load(Ordering::SeqCst), 0);

    let result = run_schema_node(&node, &EvalContext::default(), &mut store);
    assert_eq!(result.status, NodeStatus::Failed);
    assert!(store.is_empty());
}

#[test]
fn absent_schema_is_normalized_to_empty() {
    let provider = Arc::new(MockProvider::new(vec![], vec![DataSource::new("foo_lookup", true)]).returning(Ok(None)));
    let node = GetProviderSchema::new("foo", provider);

    let got = node.eval(&EvalContext::new(WalkOperation::Plan)).expect("eval");

    assert_eq!(*got, SchemaBlock::empty());
    assert!(got.is_empty());
}

#[test]
fn fetch_error_is_returned_unchanged() {
    let transport_error = ProviderError::transport("plugin did not respond");
    let provider = Arc::new(MockProvider::new(vec![ResourceType::new("foo_thing", true)], vec![]).returning(Err(transport_error.clone())));
    let node = GetProviderSchema::new("foo", provider.clone());
    let mut store = ProviderSchemas::new();

    let err = node.eval(&EvalContext::default()).expect_err("fetch failure must propagate");
    assert_eq!(err, EvalError::Provider(transport_error.clone()));
    assert_eq!(err.to_string(), transport_error.to_string());

    let result = run_schema_node(&node, &EvalContext::default(), &mut store);
    assert_eq!(result.status, NodeStatus::Failed);
    assert_eq!(result.error, Some(transport_error.to_string()));
    assert!(!store.contains("foo"));
    assert_eq!(provider.schema_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn first_resource_flag_gates_fetch_even_when_data_sources_disagree() {
    let provider = Arc::new(
        MockProvider::new(
            vec![ResourceType::new("foo_a", false), ResourceType::new("foo_b", true)],
            vec![DataSource::new("foo_d", true)],
        )
        .returning(Ok(Some(Arc::new(SchemaBlock::empty())))),
    );
    let node = GetProviderSchema::new("foo", provider.clone());

    let err = node.eval(&EvalContext::default()).expect_err("first resource declares no schema support");
    assert!(matches!(err, EvalError::Capability { ref provider } if provider == "foo"));
    assert_eq!(provider.schema_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn successful_node_writes_store_once() {
    let schema = Arc::new(SchemaBlock::empty().with_attribute("region", Attribute::required(AttributeType::String)));
    let provider = Arc::new(MockProvider::new(vec![ResourceType::new("aws_instance", true)], vec![]).returning(Ok(Some(schema.clone()))));
    let node = GetProviderSchema::new("aws", provider);
    let mut store = ProviderSchemas::new();

    let result = run_schema_node(&node, &EvalContext::default(), &mut store);

    assert_eq!(result.status, NodeStatus::Succeeded);
    assert_eq!(result.id, "provider.aws.schema");
    assert!(result.error.is_none());
    assert!(Arc::ptr_eq(store.get("aws").expect("stored schema"), &schema));
}

#[test]
fn plugin_error_is_surfaced_verbatim() {
    let plugin_error = ProviderError::plugin("foo", "schema method not implemented by plugin binary");
    let provider = Arc::new(MockProvider::new(vec![ResourceType::new("foo_thing", true)], vec![]).returning(Err(plugin_error.clone())));
    let node = GetProviderSchema::new("foo", provider);

    let err = node.eval(&EvalContext::default()).expect_err("plugin failure must propagate");

    assert_eq!(err, EvalError::Provider(plugin_error));
    assert_eq!(err.to_string(), "Provider plugin error: foo - schema method not implemented by plugin binary");
}
