//! Common test utilities for SDK integration tests

use beamforge_sdk::{EditorSession, EditorSessionBuilder};

/// A three-step chain pipeline
pub const CHAIN_PIPELINE: &str = r#"
pipeline:
  type: chain
  transforms:
    - type: ReadFromCsv
      name: read
      config:
        path: gs://bucket/in.csv
    - type: Filter
      name: keep_valid
      config:
        language: python
        keep: "col2 > 0"
    - type: WriteToJson
      name: write
      config:
        path: gs://bucket/out.json
"#;

/// A fan-in pipeline in the input-graph form
pub const FAN_IN_PIPELINE: &str = r#"
pipeline:
  type: composite
  transforms:
    - type: Create
      name: orders
    - type: Create
      name: customers
    - type: Join
      name: join
      input:
        left: orders
        right: customers
      config:
        equalities: customer_id
"#;

/// Build a session preloaded with the given pipeline
pub async fn load_session(yaml: &str) -> EditorSession {
    EditorSessionBuilder::new()
        .with_pipeline_yaml(yaml)
        .build()
        .await
        .expect("session builds from valid pipeline")
}

/// Build an empty session
pub async fn empty_session() -> EditorSession {
    EditorSessionBuilder::new()
        .build()
        .await
        .expect("empty session builds")
}
