use appsdk_core::List;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use kube::core::TypeMeta;
use serde::{Deserialize, Serialize};

use super::VERSION;
use crate::GROUP;

/// An API token issued to a service account. Carried as data only; tokens
/// have no object header of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountToken {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub revoked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<Time>,
    pub created: Time,
}

pub type ServiceAccountTokenList = List<ServiceAccountToken>;

pub fn token_list(items: Vec<ServiceAccountToken>) -> ServiceAccountTokenList {
    let types = TypeMeta {
        api_version: format!("{}/{}", GROUP, VERSION),
        kind: "ServiceAccountTokenList".to_string(),
    };
    List::with_types(types, items)
}
