//! Z39.86-2005 bookmark sets

use super::{Audio, bookmark_ns};
use serde::{Deserialize, Serialize};

/// Bookmarks, highlights and last reading position of one Content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "bookmarkSet")]
pub struct BookmarkSet {
    #[serde(rename = "@xmlns", default = "bookmark_ns")]
    pub xmlns: String,

    #[serde(default)]
    pub title: Title,

    #[serde(default)]
    pub uid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmark: Option<Position>,

    #[serde(rename = "bookmark", default)]
    pub bookmarks: Vec<Bookmark>,

    #[serde(rename = "hilite", default)]
    pub hilites: Vec<Hilite>,
}

impl Default for BookmarkSet {
    fn default() -> Self {
        Self {
            xmlns: bookmark_ns(),
            title: Title::default(),
            uid: String::new(),
            lastmark: None,
            bookmarks: Vec::new(),
            hilites: Vec::new(),
        }
    }
}

impl BookmarkSet {
    pub fn new(title: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            title: Title {
                text: title.into(),
                audio: None,
            },
            uid: uid.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
}

/// A location in the publication
///
/// Used for `lastmark`, `hiliteStart` and `hiliteEnd`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub ncx_ref: String,

    #[serde(rename = "URI")]
    pub uri: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_offset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_offset: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    #[serde(rename = "@label", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(
        rename = "@xml:lang",
        alias = "@lang",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub lang: Option<String>,

    pub ncx_ref: String,

    #[serde(rename = "URI")]
    pub uri: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_offset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_offset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hilite {
    #[serde(rename = "@label", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub hilite_start: Position,

    pub hilite_end: Position,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
}
