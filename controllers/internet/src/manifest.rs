//! Embedded child manifests.
//!
//! The production-test Deployment is fixed: nothing about it is derived
//! from the parent resource, it is only attached or withheld.

use crate::error::HookError;

const PRODUCTION_TEST_DEPLOYMENT: &str = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: internet-production-tests
spec:
  replicas: 1
  selector:
    matchLabels:
      app: production-tests
  template:
    metadata:
      labels:
        app: production-tests
    spec:
      containers:
        - name: production-tests
          image: salaboy/internet-production-tests:metacontroller
          imagePullPolicy: Always
"#;

/// Parse the embedded production-test Deployment into the generic JSON
/// value the sync response carries.
pub fn production_test_deployment() -> Result<serde_json::Value, HookError> {
    Ok(serde_yaml::from_str(PRODUCTION_TEST_DEPLOYMENT)?)
}
