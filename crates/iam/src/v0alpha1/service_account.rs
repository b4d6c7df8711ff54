use std::borrow::Cow;

use appsdk_core::{Kind, List};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::NamespaceResourceScope;
use kube::core::TypeMeta;
use kube::Resource;
use serde::{Deserialize, Serialize};

use super::VERSION;
use crate::GROUP;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceAccountSpec {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

/// Service account. Has no subresources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceAccount {
    #[serde(flatten, default)]
    pub types: Option<TypeMeta>,
    #[serde(default, skip_serializing_if = "is_empty_meta")]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ServiceAccountSpec,
}

fn is_empty_meta(meta: &ObjectMeta) -> bool {
    *meta == ObjectMeta::default()
}

pub type ServiceAccountList = List<ServiceAccount>;

impl ServiceAccount {
    pub fn new(name: &str, spec: ServiceAccountSpec) -> Self {
        Self {
            types: Some(Self::type_meta()),
            metadata: ObjectMeta { name: Some(name.to_string()), ..Default::default() },
            spec,
        }
    }
}

impl Resource for ServiceAccount {
    type DynamicType = ();
    type Scope = NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        "ServiceAccount".into()
    }

    fn group(_: &()) -> Cow<'_, str> {
        GROUP.into()
    }

    fn version(_: &()) -> Cow<'_, str> {
        VERSION.into()
    }

    fn plural(_: &()) -> Cow<'_, str> {
        "serviceaccounts".into()
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl Kind for ServiceAccount {
    type Spec = ServiceAccountSpec;

    fn types(&self) -> Option<&TypeMeta> {
        self.types.as_ref()
    }

    fn types_mut(&mut self) -> &mut Option<TypeMeta> {
        &mut self.types
    }

    fn spec(&self) -> &ServiceAccountSpec {
        &self.spec
    }

    fn spec_mut(&mut self) -> &mut ServiceAccountSpec {
        &mut self.spec
    }
}
