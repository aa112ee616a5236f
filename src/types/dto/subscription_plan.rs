use serde::Deserialize;
use serde_json::Value;

/// Typed insert record produced by validating a subscription plan payload.
///
/// Plans have no HTTP routes; they are created and listed through the store
/// interface only, matching the storage surface of the original service.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriptionPlan {
    pub name: String,
    pub description: String,
    /// Price in the smallest currency unit
    pub price: i32,
    pub features: Option<Value>,
}
