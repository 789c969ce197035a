use super::object::{object_list, optional_object};
use super::Identifier;
use serde::Deserialize;

/// Response of `POST /v1/statistics/by-point`. Only the fields the
/// aggregation reads are modelled; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamPayload {
    #[serde(default, deserialize_with = "object_list")]
    pub items: Vec<UpstreamItem>,
}

/// Absent counters are 0, an explicit `null` is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamItem {
    #[serde(default, deserialize_with = "optional_object")]
    pub user: Option<UpstreamUser>,
    #[serde(default)]
    pub collected_ds: f64,
    #[serde(default)]
    pub collected_shop: f64,
    #[serde(default)]
    pub transfer_ds: f64,
    #[serde(default)]
    pub placement: f64,
    #[serde(default)]
    pub placement_weight: f64,
    #[serde(default)]
    pub packed_item_count: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamUser {
    #[serde(default)]
    pub id: Option<Identifier>,
    #[serde(default)]
    pub full_name: Option<String>,
}
