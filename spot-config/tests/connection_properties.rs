//! Property-based tests for connection naming and default selection.

use proptest::prelude::*;
use spot_config::{Adapter, ConfigErrorKind, ConnectionRegistry};
use std::sync::Arc;

struct MockAdapter;

impl Adapter for MockAdapter {
    fn driver_name(&self) -> &'static str {
        "mock"
    }
}

fn adds_strategy() -> impl Strategy<Value = Vec<(u8, bool)>> {
    prop::collection::vec((0u8..6, any::<bool>()), 0..20)
}

proptest! {
    /// The default is the last accepted explicit request, else the first add.
    #[test]
    fn default_is_last_explicit_or_first(adds in adds_strategy()) {
        let mut registry = ConnectionRegistry::new();
        let mut accepted: Vec<String> = Vec::new();
        let mut expected_default: Option<String> = None;

        for (idx, make_default) in adds {
            let name = format!("conn-{idx}");
            let result = registry.add(name.clone(), Arc::new(MockAdapter), make_default);
            if accepted.contains(&name) {
                prop_assert_eq!(result.err().map(|e| e.kind()), Some(ConfigErrorKind::DuplicateConnection));
                continue;
            }
            prop_assert!(result.is_ok());
            if make_default || expected_default.is_none() {
                expected_default = Some(name.clone());
            }
            accepted.push(name);
        }

        prop_assert_eq!(registry.len(), accepted.len());
        prop_assert_eq!(registry.default_name(), expected_default.as_deref());
        prop_assert_eq!(registry.names().collect::<Vec<_>>(), accepted.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
