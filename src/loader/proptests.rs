//! Property-based tests for loader dispatch

use proptest::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{LoadError, LoaderModule, Result};
use crate::flavor::{Flavor, SafeTensorsFlavor};
use crate::frame::Frame;
use crate::manifest::Manifest;
use crate::predictor::{self, Predictor};

struct StubPredictor;

impl Predictor for StubPredictor {
    fn predict(&self, input: &Frame) -> predictor::Result<Frame> {
        Ok(input.clone())
    }
}

#[derive(Default)]
struct CountingLoader {
    calls: AtomicUsize,
}

impl LoaderModule for CountingLoader {
    type Flavor = SafeTensorsFlavor;

    fn create_predictor(
        &self,
        _root_path: &Path,
        _flavor: SafeTensorsFlavor,
    ) -> Result<Box<dyn Predictor>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(StubPredictor))
    }
}

fn arb_foreign_flavor_names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z][a-z0-9-]{0,15}", 0..6).prop_map(|names| {
        names
            .into_iter()
            .filter(|n| n != SafeTensorsFlavor::NAME)
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_foreign_flavors_never_match(names in arb_foreign_flavor_names()) {
        let mut manifest = Manifest::new("prop-model");
        for name in &names {
            manifest = manifest.with_flavor(
                name.clone(),
                serde_yaml::to_value(name.clone()).expect("to_value should succeed"),
            );
        }

        let loader = CountingLoader::default();
        let err = loader.load(&manifest).expect_err("load should fail");

        prop_assert!(matches!(err, LoadError::FlavorNotPresent(_)));
        prop_assert!(err.to_string().contains(SafeTensorsFlavor::NAME));
        prop_assert_eq!(loader.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn prop_rootless_manifest_never_reaches_create_predictor(
        weights in "[a-z]{1,12}\\.safetensors"
    ) {
        let mut manifest = Manifest::new("prop-model");
        manifest
            .add_flavor(&SafeTensorsFlavor { weights, architecture: None })
            .expect("add_flavor should succeed");

        let loader = CountingLoader::default();
        let err = loader.load(&manifest).expect_err("load should fail");

        prop_assert!(matches!(err, LoadError::RootPathMissing));
        prop_assert_eq!(loader.calls.load(Ordering::SeqCst), 0);
    }
}
