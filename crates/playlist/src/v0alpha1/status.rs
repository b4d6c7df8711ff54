use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaylistStatus {
    /// Last reconcile result per operator, keyed by operator name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub operator_states: BTreeMap<String, OperatorState>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_fields: BTreeMap<String, Json>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorState {
    /// Resource version of the object the operator last evaluated.
    pub last_evaluation: String,
    pub state: OperatorStateState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptive_state: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, Json>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorStateState {
    Success,
    InProgress,
    Failed,
}
