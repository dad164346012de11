//! Service announcements and read receipts

use super::Label;
use serde::{Deserialize, Serialize};

/// Announcements the user has not read yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "announcements")]
pub struct Announcements {
    #[serde(rename = "announcement", default)]
    pub announcements: Vec<Announcement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(rename = "@id")]
    pub id: String,

    /// `WARNING`, `ERROR`, `INFORMATION` or `SYSTEM`
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub announcement_type: Option<String>,

    /// 1 (high) to 3 (low)
    #[serde(rename = "@priority", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(default)]
    pub label: Label,
}

/// Announcement ids to mark as read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "read")]
pub struct Read {
    #[serde(rename = "item", default)]
    pub items: Vec<String>,
}

impl Read {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&Announcements> for Read {
    fn from(announcements: &Announcements) -> Self {
        Self::new(announcements.announcements.iter().map(|a| a.id.clone()))
    }
}
