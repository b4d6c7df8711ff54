//! Minimal kinds for exercising the contracts without a real API group.

use std::any::Any;
use std::borrow::Cow;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::NamespaceResourceScope;
use kube::core::TypeMeta;
use kube::Resource;
use serde::{Deserialize, Serialize};

use crate::{downcast_value, Error, Kind, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetSpec {
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetStatus {
    pub ready: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    #[serde(flatten, default)]
    pub types: Option<TypeMeta>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: WidgetSpec,
    #[serde(default)]
    pub status: WidgetStatus,
}

impl Resource for Widget {
    type DynamicType = ();
    type Scope = NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        "Widget".into()
    }

    fn group(_: &()) -> Cow<'_, str> {
        "test.example".into()
    }

    fn version(_: &()) -> Cow<'_, str> {
        "v1".into()
    }

    fn plural(_: &()) -> Cow<'_, str> {
        "widgets".into()
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl Kind for Widget {
    type Spec = WidgetSpec;

    const SUBRESOURCES: &'static [&'static str] = &["status"];

    fn types(&self) -> Option<&TypeMeta> {
        self.types.as_ref()
    }

    fn types_mut(&mut self) -> &mut Option<TypeMeta> {
        &mut self.types
    }

    fn spec(&self) -> &WidgetSpec {
        &self.spec
    }

    fn spec_mut(&mut self) -> &mut WidgetSpec {
        &mut self.spec
    }

    fn subresource(&self, name: &str) -> Option<&dyn Any> {
        match name {
            "status" => Some(&self.status),
            _ => None,
        }
    }

    fn replace_subresource(&mut self, name: &str, value: Box<dyn Any>) -> Result<()> {
        match name {
            "status" => {
                self.status = downcast_value(value, "status")?;
                Ok(())
            }
            _ => Err(Error::UnknownSubresource(name.to_string())),
        }
    }
}

/// Spec-only kind in the same group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gadget {
    #[serde(flatten, default)]
    pub types: Option<TypeMeta>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: String,
}

impl Resource for Gadget {
    type DynamicType = ();
    type Scope = NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        "Gadget".into()
    }

    fn group(_: &()) -> Cow<'_, str> {
        "test.example".into()
    }

    fn version(_: &()) -> Cow<'_, str> {
        "v1".into()
    }

    fn plural(_: &()) -> Cow<'_, str> {
        "gadgets".into()
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl Kind for Gadget {
    type Spec = String;

    fn types(&self) -> Option<&TypeMeta> {
        self.types.as_ref()
    }

    fn types_mut(&mut self) -> &mut Option<TypeMeta> {
        &mut self.types
    }

    fn spec(&self) -> &String {
        &self.spec
    }

    fn spec_mut(&mut self) -> &mut String {
        &mut self.spec
    }
}
