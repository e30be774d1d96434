//! Dress models for the wardrobe service

use chrono::{DateTime, Utc};
use common::ResourceId;
use serde::{Deserialize, Deserializer, Serialize};

/// Dress entry as stored by the external store
///
/// Decoding is lenient: missing or null text fields become empty strings and
/// an unparseable `createdAt` becomes `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dress {
    pub id: ResourceId,
    pub user_id: ResourceId,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "text_or_empty")]
    pub dress_type: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub color: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub occasion: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub season: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "common::timestamps::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Candidate submitted by the add-dress form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DressDraft {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub dress_type: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub occasion: String,
    #[serde(default)]
    pub season: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl DressDraft {
    /// Trim the free-text fields; a blank image means none
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            image: self
                .image
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            ..self
        }
    }

    /// Every field but the image is required
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            &self.name,
            &self.dress_type,
            &self.color,
            &self.category,
            &self.occasion,
            &self.season,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err("Please fill in all required fields".to_string());
        }

        Ok(())
    }
}

/// Creation payload sent to the store; the store assigns the id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDress {
    #[serde(flatten)]
    pub draft: DressDraft,
    pub user_id: ResourceId,
    pub created_at: DateTime<Utc>,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DressPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub dress_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl DressPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Filters applied to a fetched collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of name, type, color or category
    pub search: Option<String>,
    /// Exact type
    #[serde(rename = "type")]
    pub dress_type: Option<String>,
    /// Exact color
    pub color: Option<String>,
    /// Exact occasion
    pub occasion: Option<String>,
    /// Exact category
    pub category: Option<String>,
}

/// Aggregate statistics over a collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DressStats {
    pub total_count: usize,
    pub distinct_categories: usize,
    pub distinct_colors: usize,
    pub distinct_occasions: usize,
    pub distinct_types: usize,
    pub recent_count: usize,
    pub most_common_category: String,
}
