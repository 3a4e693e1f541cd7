use serde::{Deserialize, Serialize};

use crate::models::{LinkId, PostId};

/// Status code the platform reports for a successful operation.
pub const STATUS_SUCCESS: i32 = 0;

/// Bare response envelope carrying only the platform status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenStruct {
    pub status: i32,
}

impl OpenStruct {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Cover image presets offered when creating a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenPresetStruct {
    pub status: i32,
    #[serde(default)]
    pub presets: Vec<String>,
}

/// Recommended channel listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRecommendStruct {
    pub status: i32,
    #[serde(default)]
    pub items: Vec<RecommendedLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedLink {
    pub link_id: LinkId,
    pub link_name: String,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub link_image_url: Option<String>,
    #[serde(default)]
    pub member_count: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// One post in a channel's feed.
///
/// `post_datas` and `scrap_data` are platform-defined structured payloads;
/// their inner shape varies by post kind, so they stay untyped JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPostStruct {
    pub id: PostId,
    pub link_id: LinkId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: Option<i64>,
    #[serde(default)]
    pub react_count: i32,
    #[serde(default)]
    pub post_datas: Option<serde_json::Value>,
    #[serde(default)]
    pub scrap_data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenPostListStruct {
    pub status: i32,
    #[serde(default)]
    pub posts: Vec<OpenPostStruct>,
}

/// Result of reacting to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPostReactStruct {
    pub status: i32,
    #[serde(default)]
    pub react_count: Option<i32>,
}

/// One page of unified channel search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSearchStruct {
    pub status: i32,
    #[serde(default)]
    pub total_count: i32,
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub items: Vec<OpenSearchLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSearchLink {
    pub link_id: LinkId,
    pub link_name: String,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub link_image_url: Option<String>,
    #[serde(default)]
    pub member_count: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub locked: bool,
}

/// One page of post search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPostSearchStruct {
    pub status: i32,
    #[serde(default)]
    pub total_count: i32,
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub items: Vec<OpenPostStruct>,
}
