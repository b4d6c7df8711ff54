use std::any::Any;
use std::borrow::Cow;

use appsdk_core::{downcast_value, Error, Kind, List, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::NamespaceResourceScope;
use kube::core::TypeMeta;
use kube::Resource;
use serde::{Deserialize, Serialize};

use super::{PlaylistSpec, PlaylistStatus, VERSION};
use crate::GROUP;

const STATUS: &str = "status";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(flatten, default)]
    pub types: Option<TypeMeta>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: PlaylistSpec,
    #[serde(default)]
    pub status: PlaylistStatus,
}

pub type PlaylistList = List<Playlist>;

impl Playlist {
    pub fn new(name: &str, spec: PlaylistSpec) -> Self {
        Self {
            types: Some(Self::type_meta()),
            metadata: ObjectMeta { name: Some(name.to_string()), ..Default::default() },
            spec,
            status: PlaylistStatus::default(),
        }
    }
}

impl Resource for Playlist {
    type DynamicType = ();
    type Scope = NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        "Playlist".into()
    }

    fn group(_: &()) -> Cow<'_, str> {
        GROUP.into()
    }

    fn version(_: &()) -> Cow<'_, str> {
        VERSION.into()
    }

    fn plural(_: &()) -> Cow<'_, str> {
        "playlists".into()
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl Kind for Playlist {
    type Spec = PlaylistSpec;

    const SUBRESOURCES: &'static [&'static str] = &[STATUS];

    fn types(&self) -> Option<&TypeMeta> {
        self.types.as_ref()
    }

    fn types_mut(&mut self) -> &mut Option<TypeMeta> {
        &mut self.types
    }

    fn spec(&self) -> &PlaylistSpec {
        &self.spec
    }

    fn spec_mut(&mut self) -> &mut PlaylistSpec {
        &mut self.spec
    }

    fn subresource(&self, name: &str) -> Option<&dyn Any> {
        match name {
            STATUS => Some(&self.status),
            _ => None,
        }
    }

    fn replace_subresource(&mut self, name: &str, value: Box<dyn Any>) -> Result<()> {
        match name {
            STATUS => {
                self.status = downcast_value::<PlaylistStatus>(value, STATUS)?;
                Ok(())
            }
            _ => Err(Error::UnknownSubresource(name.to_string())),
        }
    }
}
