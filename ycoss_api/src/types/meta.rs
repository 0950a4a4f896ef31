use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dataset metadata from `/meta.json`.
///
/// Only the refresh timestamp is interpreted; the remaining keys (per-batch,
/// per-industry counts and the like) are kept as-is for display.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ApiMeta {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
