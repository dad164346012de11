//! Dynamic menus: questions and user responses

use super::{Input, Label};
use serde::{Deserialize, Serialize};

/// User responses to questions, sent with `getQuestions`
///
/// A single response with a reserved question id
/// ([`question`](crate::models::question)) starts or rewinds a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "userResponses")]
pub struct UserResponses {
    #[serde(rename = "userResponse", default)]
    pub responses: Vec<UserResponse>,
}

impl UserResponses {
    /// Responses made of a single reserved question id
    pub fn reserved(question_id: impl Into<String>) -> Self {
        Self {
            responses: vec![UserResponse::new(question_id)],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "userResponse")]
pub struct UserResponse {
    #[serde(rename = "@questionID")]
    pub question_id: String,

    /// Choice id or typed text
    #[serde(rename = "@value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Base64 encoded audio answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl UserResponse {
    pub fn new(question_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            ..Default::default()
        }
    }

    pub fn with_value(question_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: Some(value.into()),
            data: None,
        }
    }
}

/// Next step of a dynamic menu
///
/// Holds either questions, a reference to the resulting content list, or
/// a final label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "questions", rename_all = "camelCase")]
pub struct Questions {
    #[serde(rename = "multipleChoiceQuestion", default)]
    pub multiple_choice_questions: Vec<MultipleChoiceQuestion>,

    #[serde(rename = "inputQuestion", default)]
    pub input_questions: Vec<InputQuestion>,

    /// Id to pass to `getContentList` once the menu is complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_list_ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoiceQuestion {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@allowMultipleSelections", default)]
    pub allow_multiple_selections: bool,

    #[serde(default)]
    pub label: Label,

    #[serde(default)]
    pub choices: Choices,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choices {
    #[serde(rename = "choice", default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default)]
    pub label: Label,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputQuestion {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default)]
    pub input_types: InputTypes,

    #[serde(default)]
    pub label: Label,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTypes {
    #[serde(rename = "input", default)]
    pub inputs: Vec<Input>,
}
