//! Identity and access kinds (`iam.grafana.app`).

#![forbid(unsafe_code)]

use appsdk_core::Scheme;

pub mod v0alpha1;

pub const GROUP: &str = "iam.grafana.app";

/// Register every served iam kind. Token lists are plain data and not registered.
pub fn install(scheme: &mut Scheme) {
    scheme.register::<v0alpha1::ServiceAccount>();
}
