mod playlist;
mod spec;
mod status;

pub use playlist::{Playlist, PlaylistList};
pub use spec::{PlaylistItem, PlaylistItemType, PlaylistSpec};
pub use status::{OperatorState, OperatorStateState, PlaylistStatus};

pub const VERSION: &str = "v0alpha1";
