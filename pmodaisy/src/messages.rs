//! Request and response elements of the DODP v1 operations
//!
//! Each request serializes to the element named after its operation, each
//! response to `<operation>Response`, both in the DODP namespace.

use crate::models::{
    Announcements, BookmarkSet, ContentList, ContentMetadata, Questions, Read,
    ReadingSystemAttributes, Resources, ServiceAttributes, UserResponses, dodp_ns,
};
use serde::{Deserialize, Serialize};

/// Declares a DODP message element with its namespace attribute, a
/// `Default` impl and a positional constructor.
macro_rules! dodp_message {
    (
        $(#[$meta:meta])*
        $name:ident => $element:literal {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename = $element)]
        pub struct $name {
            #[serde(rename = "@xmlns", default = "dodp_ns")]
            pub xmlns: String,
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $name {
            /// Element name on the wire
            pub const ELEMENT: &'static str = $element;

            pub fn new($($field: $ty),*) -> Self {
                Self {
                    xmlns: dodp_ns(),
                    $($field,)*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    xmlns: dodp_ns(),
                    $($field: Default::default(),)*
                }
            }
        }
    };
}

// ============================================================================
// Session
// ============================================================================

dodp_message! {
    /// Logs a Reading System on to a Service
    LogOn => "logOn" {
        username: String,
        password: String,
    }
}

dodp_message! {
    LogOnResponse => "logOnResponse" {
        #[serde(rename = "logOnResult", default)]
        log_on_result: bool,
    }
}

dodp_message! {
    /// Logs a Reading System off a Service
    LogOff => "logOff" {}
}

dodp_message! {
    LogOffResponse => "logOffResponse" {
        #[serde(rename = "logOffResult", default)]
        log_off_result: bool,
    }
}

dodp_message! {
    GetServiceAttributes => "getServiceAttributes" {}
}

dodp_message! {
    GetServiceAttributesResponse => "getServiceAttributesResponse" {
        #[serde(rename = "serviceAttributes", default)]
        service_attributes: ServiceAttributes,
    }
}

dodp_message! {
    SetReadingSystemAttributes => "setReadingSystemAttributes" {
        #[serde(rename = "readingSystemAttributes")]
        reading_system_attributes: ReadingSystemAttributes,
    }
}

dodp_message! {
    SetReadingSystemAttributesResponse => "setReadingSystemAttributesResponse" {
        #[serde(rename = "setReadingSystemAttributesResult", default)]
        set_reading_system_attributes_result: bool,
    }
}

// ============================================================================
// Content
// ============================================================================

dodp_message! {
    GetContentList => "getContentList" {
        id: String,
        #[serde(rename = "firstItem")]
        first_item: i32,
        #[serde(rename = "lastItem")]
        last_item: i32,
    }
}

dodp_message! {
    GetContentListResponse => "getContentListResponse" {
        #[serde(rename = "contentList", default)]
        content_list: ContentList,
    }
}

dodp_message! {
    GetContentMetadata => "getContentMetadata" {
        #[serde(rename = "contentID")]
        content_id: String,
    }
}

dodp_message! {
    GetContentMetadataResponse => "getContentMetadataResponse" {
        #[serde(rename = "contentMetadata", default)]
        content_metadata: ContentMetadata,
    }
}

dodp_message! {
    GetContentResources => "getContentResources" {
        #[serde(rename = "contentID")]
        content_id: String,
    }
}

dodp_message! {
    GetContentResourcesResponse => "getContentResourcesResponse" {
        #[serde(default)]
        resources: Resources,
    }
}

dodp_message! {
    IssueContent => "issueContent" {
        #[serde(rename = "contentID")]
        content_id: String,
    }
}

dodp_message! {
    IssueContentResponse => "issueContentResponse" {
        #[serde(rename = "issueContentResult", default)]
        issue_content_result: bool,
    }
}

dodp_message! {
    ReturnContent => "returnContent" {
        #[serde(rename = "contentID")]
        content_id: String,
    }
}

dodp_message! {
    ReturnContentResponse => "returnContentResponse" {
        #[serde(rename = "returnContentResult", default)]
        return_content_result: bool,
    }
}

// ============================================================================
// Dynamic menus & announcements
// ============================================================================

dodp_message! {
    GetQuestions => "getQuestions" {
        #[serde(rename = "userResponses")]
        user_responses: UserResponses,
    }
}

dodp_message! {
    GetQuestionsResponse => "getQuestionsResponse" {
        #[serde(default)]
        questions: Questions,
    }
}

dodp_message! {
    GetServiceAnnouncements => "getServiceAnnouncements" {}
}

dodp_message! {
    GetServiceAnnouncementsResponse => "getServiceAnnouncementsResponse" {
        #[serde(default)]
        announcements: Announcements,
    }
}

dodp_message! {
    MarkAnnouncementsAsRead => "markAnnouncementsAsRead" {
        read: Read,
    }
}

dodp_message! {
    MarkAnnouncementsAsReadResponse => "markAnnouncementsAsReadResponse" {
        #[serde(rename = "markAnnouncementsAsReadResult", default)]
        mark_announcements_as_read_result: bool,
    }
}

// ============================================================================
// Bookmarks
// ============================================================================

dodp_message! {
    SetBookmarks => "setBookmarks" {
        #[serde(rename = "contentID")]
        content_id: String,
        #[serde(rename = "bookmarkSet")]
        bookmark_set: BookmarkSet,
    }
}

dodp_message! {
    SetBookmarksResponse => "setBookmarksResponse" {
        #[serde(rename = "setBookmarksResult", default)]
        set_bookmarks_result: bool,
    }
}

dodp_message! {
    GetBookmarks => "getBookmarks" {
        #[serde(rename = "contentID")]
        content_id: String,
    }
}

dodp_message! {
    GetBookmarksResponse => "getBookmarksResponse" {
        #[serde(rename = "bookmarkSet", default)]
        bookmark_set: BookmarkSet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Announcement, Audio, Bookmark, Choice, Choices, Config, ContentItem, Hilite, Input,
        InputQuestion, InputTypes, Label, Meta, Metadata, MimeType, MultipleChoiceQuestion, Note,
        Position, Resource, Sample, Service, ServiceProvider, SupportedContentFormats,
        SupportedContentSelectionMethods, SupportedInputTypes, SupportedMimeTypes,
        SupportedOptionalOperations, SupportedUplinkAudioCodecs, UserResponse, content_list,
        input_type, optional_operation, question,
    };
    use crate::soap::{build_soap_envelope, parse_soap_envelope};
    use serde::de::DeserializeOwned;
    use std::fmt::Debug;

    fn round_trip<T>(value: &T) -> T
    where
        T: Serialize + DeserializeOwned + Debug,
    {
        let xml = build_soap_envelope(value).unwrap();
        let envelope = parse_soap_envelope(xml.as_bytes()).unwrap();
        envelope.body.decode_first().unwrap().unwrap()
    }

    #[test]
    fn test_log_on_wire_format() {
        let xml = build_soap_envelope(&LogOn::new("u".into(), "p".into())).unwrap();
        assert!(xml.contains(
            r#"<logOn xmlns="http://www.daisy.org/ns/daisy-online/"><username>u</username><password>p</password></logOn>"#
        ));
    }

    #[test]
    fn test_empty_request_wire_format() {
        let xml = build_soap_envelope(&LogOff::new()).unwrap();
        assert!(xml.contains(r#"<logOff xmlns="http://www.daisy.org/ns/daisy-online/"/>"#));
    }

    #[test]
    fn test_simple_requests_round_trip() {
        let req = LogOn::new("reader".into(), "s3cr&t<".into());
        assert_eq!(round_trip(&req), req);

        let req = GetContentList::new(content_list::ISSUED.into(), 0, -1);
        assert_eq!(round_trip(&req), req);

        let req = IssueContent::new("con_42".into());
        assert_eq!(round_trip(&req), req);

        let req = GetServiceAnnouncements::new();
        assert_eq!(round_trip(&req), req);

        let req = LogOff::new();
        assert_eq!(round_trip(&req), req);

        let req = GetServiceAttributes::new();
        assert_eq!(round_trip(&req), req);

        let req = GetContentMetadata::new("con_42".into());
        assert_eq!(round_trip(&req), req);

        let req = GetContentResources::new("con_42".into());
        assert_eq!(round_trip(&req), req);

        let req = ReturnContent::new("con_42".into());
        assert_eq!(round_trip(&req), req);

        let req = GetBookmarks::new("con_42".into());
        assert_eq!(round_trip(&req), req);

        let req = MarkAnnouncementsAsRead::new(Read::new(["ann_1", "ann_2"]));
        assert_eq!(round_trip(&req), req);
    }

    #[test]
    fn test_boolean_responses_round_trip() {
        let resp = LogOnResponse::new(true);
        assert_eq!(round_trip(&resp), resp);

        let resp = ReturnContentResponse::new(false);
        assert_eq!(round_trip(&resp), resp);

        let resp = LogOffResponse::new(true);
        assert_eq!(round_trip(&resp), resp);

        let resp = SetReadingSystemAttributesResponse::new(true);
        assert_eq!(round_trip(&resp), resp);

        let resp = IssueContentResponse::new(true);
        assert_eq!(round_trip(&resp), resp);

        let resp = MarkAnnouncementsAsReadResponse::new(false);
        assert_eq!(round_trip(&resp), resp);

        let resp = SetBookmarksResponse::new(true);
        assert_eq!(round_trip(&resp), resp);
    }

    #[test]
    fn test_reading_system_attributes_round_trip() {
        let attrs = ReadingSystemAttributes {
            manufacturer: "PMOMusic".into(),
            model: "pmodaisy".into(),
            serial_number: None,
            version: "0.1.0".into(),
            config: Config {
                supports_multiple_selections: false,
                preferred_ui_language: "fr-FR".into(),
                bandwidth: Some(1_000_000),
                supported_content_formats: SupportedContentFormats {
                    content_formats: vec!["ANSI/NISO Z39.86-2005".into()],
                },
                supported_mime_types: SupportedMimeTypes {
                    mime_types: vec![MimeType::new("audio/mpeg"), MimeType::new("text/xml")],
                },
                supported_input_types: SupportedInputTypes {
                    inputs: vec![Input::new(input_type::TEXT_ALPHANUMERIC)],
                },
                requires_audio_labels: false,
                ..Default::default()
            },
        };

        let req = SetReadingSystemAttributes::new(attrs);
        assert_eq!(round_trip(&req), req);
    }

    #[test]
    fn test_content_responses_round_trip() {
        let resp = GetContentListResponse::new(ContentList {
            total_items: 2,
            first_item: Some(0),
            last_item: Some(1),
            id: content_list::ISSUED.into(),
            label: Some(Label::text("Issued books")),
            content_items: vec![
                ContentItem {
                    id: "con_1".into(),
                    last_modified_date: Some("2024-01-01T00:00:00Z".into()),
                    label: Label::text("Moby Dick"),
                },
                ContentItem {
                    id: "con_2".into(),
                    last_modified_date: None,
                    label: Label::text("Ulysses"),
                },
            ],
        });
        assert_eq!(round_trip(&resp), resp);

        let resp = GetContentMetadataResponse::new(ContentMetadata {
            category: Some("BOOK".into()),
            requires_return: true,
            sample: Some(Sample { id: "sample_1".into() }),
            metadata: Metadata {
                title: "Moby Dick".into(),
                identifier: "isbn:123".into(),
                format: "ANSI/NISO Z39.86-2005".into(),
                creators: vec!["Herman Melville".into()],
                languages: vec!["en".into()],
                size: 123_456,
                ..Default::default()
            },
        });
        assert_eq!(round_trip(&resp), resp);

        let resp = GetContentResourcesResponse::new(Resources {
            return_by: Some("2030-01-01T00:00:00Z".into()),
            last_modified_date: None,
            resources: vec![Resource {
                uri: "https://example.org/con_1/ncc.html".into(),
                mime_type: "text/html".into(),
                size: 2048,
                local_uri: "ncc.html".into(),
                last_modified_date: None,
            }],
        });
        assert_eq!(round_trip(&resp), resp);
    }

    #[test]
    fn test_questions_round_trip() {
        let req = GetQuestions::new(UserResponses {
            responses: vec![
                UserResponse::with_value("q1", "c2"),
                UserResponse::with_value("q2", "melville"),
            ],
        });
        assert_eq!(round_trip(&req), req);
    }

    #[test]
    fn test_questions_responses_round_trip() {
        let label = |text: &str| Label {
            lang: Some("en".into()),
            dir: None,
            text: text.into(),
            audio: None,
        };

        let resp = GetQuestionsResponse::new(Questions {
            multiple_choice_questions: vec![MultipleChoiceQuestion {
                id: "q_kind".into(),
                allow_multiple_selections: true,
                label: label("What are you looking for?"),
                choices: Choices {
                    choices: vec![
                        Choice {
                            id: "c_author".into(),
                            label: label("An author"),
                        },
                        Choice {
                            id: "c_title".into(),
                            label: label("A title"),
                        },
                    ],
                },
            }],
            input_questions: vec![InputQuestion {
                id: "q_terms".into(),
                input_types: InputTypes {
                    inputs: vec![
                        Input::new(input_type::TEXT_ALPHANUMERIC),
                        Input::new(input_type::AUDIO),
                    ],
                },
                label: label("Search terms"),
            }],
            content_list_ref: None,
            label: None,
        });
        assert_eq!(round_trip(&resp), resp);

        let resp = GetQuestionsResponse::new(Questions {
            content_list_ref: Some("search_results_17".into()),
            ..Default::default()
        });
        assert_eq!(round_trip(&resp), resp);

        let resp = GetQuestionsResponse::new(Questions {
            label: Some(label("Thank you for your feedback")),
            ..Default::default()
        });
        assert_eq!(round_trip(&resp), resp);

        let req = GetQuestions::new(UserResponses::reserved(question::BACK));
        assert_eq!(round_trip(&req), req);
    }

    #[test]
    fn test_service_attributes_response_round_trip() {
        let resp = GetServiceAttributesResponse::new(ServiceAttributes {
            service_provider: Some(ServiceProvider {
                id: "org.example".into(),
                label: Some(Label::text("Example Library")),
            }),
            service: Some(Service {
                id: "org.example.daisy".into(),
                label: Some(Label {
                    lang: Some("en".into()),
                    dir: Some("ltr".into()),
                    text: "Talking books".into(),
                    audio: Some(Audio {
                        uri: "https://example.org/labels/service.mp3".into(),
                        range_begin: Some(0),
                        range_end: Some(4095),
                        size: Some(4096),
                    }),
                }),
            }),
            supported_content_selection_methods: SupportedContentSelectionMethods {
                methods: vec!["OUT_OF_BAND".into(), "BROWSE".into()],
            },
            supports_server_side_back: true,
            supports_search: true,
            supported_uplink_audio_codecs: SupportedUplinkAudioCodecs {
                codecs: vec!["audio/ogg".into()],
            },
            supports_audio_labels: true,
            supported_optional_operations: SupportedOptionalOperations {
                operations: vec![
                    optional_operation::SET_BOOKMARKS.into(),
                    optional_operation::GET_BOOKMARKS.into(),
                    optional_operation::DYNAMIC_MENUS.into(),
                ],
            },
        });

        let decoded = round_trip(&resp);
        assert_eq!(decoded, resp);
        assert!(decoded.service_attributes.supports_operation(optional_operation::DYNAMIC_MENUS));
    }

    #[test]
    fn test_announcements_response_round_trip() {
        let resp = GetServiceAnnouncementsResponse::new(Announcements {
            announcements: vec![
                Announcement {
                    id: "ann_1".into(),
                    announcement_type: Some("INFORMATION".into()),
                    priority: Some(3),
                    label: Label::text("New books available"),
                },
                Announcement {
                    id: "ann_2".into(),
                    announcement_type: None,
                    priority: None,
                    label: Label::text("Maintenance tonight"),
                },
            ],
        });
        assert_eq!(round_trip(&resp), resp);
    }

    #[test]
    fn test_content_metadata_with_meta_round_trip() {
        let resp = GetContentMetadataResponse::new(ContentMetadata {
            category: None,
            requires_return: false,
            sample: None,
            metadata: Metadata {
                title: "Ulysses".into(),
                identifier: "isbn:456".into(),
                publisher: Some("Shakespeare and Company".into()),
                format: "Daisy 2.02".into(),
                date: Some("1922".into()),
                narrators: vec!["Jim Norton".into()],
                size: 987_654,
                meta: vec![Meta {
                    name: "dtb:totalTime".into(),
                    content: "27:16:00".into(),
                }],
                ..Default::default()
            },
        });
        assert_eq!(round_trip(&resp), resp);
    }

    #[test]
    fn test_bookmarks_response_round_trip() {
        let mut set = BookmarkSet::new("Ulysses", "isbn:456");
        set.bookmarks.push(Bookmark {
            label: Some("Stately, plump".into()),
            lang: Some("en".into()),
            ncx_ref: "nav_1".into(),
            uri: "chapter1.smil#t1".into(),
            time_offset: None,
            char_offset: Some("12".into()),
            note: Some(Note {
                text: Some("Opening line".into()),
                audio: None,
            }),
        });
        set.hilites.push(Hilite {
            label: Some("Molly".into()),
            hilite_start: Position {
                ncx_ref: "nav_18".into(),
                uri: "chapter18.smil#t1".into(),
                time_offset: Some("00:00:00".into()),
                char_offset: None,
            },
            hilite_end: Position {
                ncx_ref: "nav_18".into(),
                uri: "chapter18.smil#t90".into(),
                time_offset: Some("00:03:10".into()),
                char_offset: None,
            },
            note: Some(Note {
                text: None,
                audio: Some(Audio {
                    uri: "note_1.wav".into(),
                    ..Default::default()
                }),
            }),
        });

        let resp = GetBookmarksResponse::new(set);
        assert_eq!(round_trip(&resp), resp);
    }

    #[test]
    fn test_bookmarks_round_trip() {
        let mut set = BookmarkSet::new("Moby Dick", "isbn:123");
        set.lastmark = Some(Position {
            ncx_ref: "nav_3".into(),
            uri: "chapter3.smil#t12".into(),
            time_offset: Some("00:01:12".into()),
            char_offset: None,
        });
        set.bookmarks.push(Bookmark {
            label: Some("Call me Ishmael".into()),
            ncx_ref: "nav_1".into(),
            uri: "chapter1.smil#t1".into(),
            time_offset: Some("00:00:01".into()),
            ..Default::default()
        });

        let req = SetBookmarks::new("con_1".into(), set);
        let decoded = round_trip(&req);
        assert_eq!(decoded, req);
        assert_eq!(decoded.bookmark_set.xmlns, crate::models::BOOKMARK_NS);
    }
}
