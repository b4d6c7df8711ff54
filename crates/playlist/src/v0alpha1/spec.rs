use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaylistSpec {
    pub title: String,
    /// Time each dashboard stays on screen, e.g. `5m`.
    pub interval: String,
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(rename = "type")]
    pub item_type: PlaylistItemType,
    /// Dashboard UID, tag or legacy numeric id, depending on `item_type`.
    pub value: String,
}

impl PlaylistItem {
    pub fn dashboard_by_uid(uid: impl Into<String>) -> Self {
        Self { item_type: PlaylistItemType::DashboardByUid, value: uid.into() }
    }

    pub fn dashboard_by_tag(tag: impl Into<String>) -> Self {
        Self { item_type: PlaylistItemType::DashboardByTag, value: tag.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistItemType {
    DashboardByTag,
    DashboardByUid,
    /// Deprecated numeric dashboard id.
    DashboardById,
}
