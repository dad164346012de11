//! DAISY Online payload types
//!
//! Plain serde structures mapped on the DODP v1 schema with `quick_xml`
//! conventions: `@name` fields are attributes, the others child elements.
//! Optional elements are `Option`s, repeated elements `Vec`s.
//!
//! Some services qualify metadata elements (`dc:title`...). Those fields
//! accept both spellings through serde aliases.

mod announcements;
mod bookmarks;
mod content;
mod questions;
mod service;

pub use announcements::{Announcement, Announcements, Read};
pub use bookmarks::{Bookmark, BookmarkSet, Hilite, Note, Position, Title};
pub use content::{ContentItem, ContentList, ContentMetadata, Meta, Metadata, Resource, Resources, Sample};
pub use questions::{
    Choice, Choices, InputQuestion, InputTypes, MultipleChoiceQuestion, Questions, UserResponse,
    UserResponses,
};
pub use service::{
    Audio, Config, Input, Label, MimeType, ReadingSystemAttributes, Service, ServiceAttributes,
    ServiceProvider, SupportedContentFormats, SupportedContentProtectionFormats,
    SupportedContentSelectionMethods, SupportedInputTypes, SupportedMimeTypes,
    SupportedOptionalOperations, SupportedUplinkAudioCodecs,
};

/// Namespace of DODP v1 messages
pub const DODP_NS: &str = "http://www.daisy.org/ns/daisy-online/";

/// Namespace of the Z39.86-2005 bookmark format
pub const BOOKMARK_NS: &str = "http://www.daisy.org/z3986/2005/bookmark/";

/// Reserved content list identifiers for `getContentList`
pub mod content_list {
    /// Content items newly available to the user
    pub const NEW: &str = "new";

    /// Content items currently issued to the user
    pub const ISSUED: &str = "issued";

    /// Content items whose loan has expired
    pub const EXPIRED: &str = "expired";
}

/// Reserved question identifiers for `getQuestions`
pub mod question {
    /// Entry point of the dynamic menu
    pub const DEFAULT: &str = "default";

    /// Entry point of the search menu
    pub const SEARCH: &str = "search";

    /// Go back one step (requires `supportsServerSideBack`)
    pub const BACK: &str = "back";
}

/// Input types accepted by input questions
pub mod input_type {
    pub const TEXT_NUMERIC: &str = "TEXT_NUMERIC";
    pub const TEXT_ALPHANUMERIC: &str = "TEXT_ALPHANUMERIC";
    pub const AUDIO: &str = "AUDIO";
}

/// Optional operations a service may advertise in its attributes
pub mod optional_operation {
    pub const SET_BOOKMARKS: &str = "SET_BOOKMARKS";
    pub const GET_BOOKMARKS: &str = "GET_BOOKMARKS";
    pub const DYNAMIC_MENUS: &str = "DYNAMIC_MENUS";
    pub const SERVICE_ANNOUNCEMENTS: &str = "SERVICE_ANNOUNCEMENTS";
    pub const PDTB2_KEY_PROVISION: &str = "PDTB2_KEY_PROVISION";
}

/// Content selection methods a service may support
pub mod selection_method {
    pub const OUT_OF_BAND: &str = "OUT_OF_BAND";
    pub const BROWSE: &str = "BROWSE";
}

pub(crate) fn dodp_ns() -> String {
    DODP_NS.to_string()
}

pub(crate) fn bookmark_ns() -> String {
    BOOKMARK_NS.to_string()
}
