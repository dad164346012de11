//! Content lists, metadata and resources

use super::Label;
use serde::{Deserialize, Serialize};

/// A list of Content items, pre-composed (`new`, `issued`, `expired`) or
/// produced by a dynamic menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "contentList")]
pub struct ContentList {
    #[serde(rename = "@totalItems", default)]
    pub total_items: i32,

    #[serde(rename = "@firstItem", default, skip_serializing_if = "Option::is_none")]
    pub first_item: Option<i32>,

    #[serde(rename = "@lastItem", default, skip_serializing_if = "Option::is_none")]
    pub last_item: Option<i32>,

    #[serde(rename = "@id", default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    #[serde(rename = "contentItem", default)]
    pub content_items: Vec<ContentItem>,
}

impl ContentList {
    pub fn len(&self) -> usize {
        self.content_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content_items.is_empty()
    }

    /// Identifiers of the items in this page of the list
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.content_items.iter().map(|item| item.id.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "contentItem")]
pub struct ContentItem {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@lastModifiedDate", default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<String>,

    #[serde(default)]
    pub label: Label,
}

/// Metadata of a Content item, available before it is issued
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "contentMetadata")]
pub struct ContentMetadata {
    #[serde(rename = "@category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "@requiresReturn", default)]
    pub requires_return: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<Sample>,

    #[serde(default)]
    pub metadata: Metadata,
}

/// Dublin Core based metadata record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "metadata")]
pub struct Metadata {
    #[serde(alias = "dc:title", default)]
    pub title: String,

    #[serde(alias = "dc:identifier", default)]
    pub identifier: String,

    #[serde(alias = "dc:publisher", default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(alias = "dc:format", default)]
    pub format: String,

    #[serde(alias = "dc:date", default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(alias = "dc:source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(rename = "type", alias = "dc:type", default)]
    pub types: Vec<String>,

    #[serde(rename = "subject", alias = "dc:subject", default)]
    pub subjects: Vec<String>,

    #[serde(alias = "dc:rights", default)]
    pub rights: Vec<String>,

    #[serde(rename = "relation", alias = "dc:relation", default)]
    pub relations: Vec<String>,

    #[serde(rename = "language", alias = "dc:language", default)]
    pub languages: Vec<String>,

    #[serde(rename = "description", alias = "dc:description", default)]
    pub descriptions: Vec<String>,

    #[serde(rename = "creator", alias = "dc:creator", default)]
    pub creators: Vec<String>,

    #[serde(rename = "coverage", alias = "dc:coverage", default)]
    pub coverages: Vec<String>,

    #[serde(rename = "contributor", alias = "dc:contributor", default)]
    pub contributors: Vec<String>,

    #[serde(rename = "narrator", default)]
    pub narrators: Vec<String>,

    /// Total size of the Content item in bytes
    #[serde(default)]
    pub size: i64,

    #[serde(default)]
    pub meta: Vec<Meta>,
}

/// Additional `name`/`content` metadata pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@content")]
    pub content: String,
}

/// Sample of a Content item retrievable without issuing it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(rename = "@id")]
    pub id: String,
}

/// All the resources that constitute a Content item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "resources")]
pub struct Resources {
    #[serde(rename = "@returnBy", default, skip_serializing_if = "Option::is_none")]
    pub return_by: Option<String>,

    #[serde(rename = "@lastModifiedDate", default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<String>,

    #[serde(rename = "resource", default)]
    pub resources: Vec<Resource>,
}

impl Resources {
    /// Sum of the declared resource sizes, in bytes
    pub fn total_size(&self) -> i64 {
        self.resources.iter().map(|r| r.size).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "resource")]
pub struct Resource {
    #[serde(rename = "@uri")]
    pub uri: String,

    #[serde(rename = "@mimeType")]
    pub mime_type: String,

    #[serde(rename = "@size", default)]
    pub size: i64,

    /// Path of the resource relative to the Content item root
    #[serde(rename = "@localURI")]
    pub local_uri: String,

    #[serde(rename = "@lastModifiedDate", default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<String>,
}
