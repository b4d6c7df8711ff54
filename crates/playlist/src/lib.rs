//! Playlist API kind (`playlist.grafana.app`).

#![forbid(unsafe_code)]

use appsdk_core::Scheme;

pub mod v0alpha1;

pub const GROUP: &str = "playlist.grafana.app";

/// Register every served playlist kind.
pub fn install(scheme: &mut Scheme) {
    scheme.register::<v0alpha1::Playlist>();
}
