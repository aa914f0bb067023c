//! Forms, form configs, questions and responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audience of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormScope {
    /// Everyone in the faction.
    #[default]
    Faction,
    /// Members of one group.
    Group,
    /// A single principal.
    Principal,
    /// Seats of one term.
    Term,
}

/// What a single response is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormAttachmentType {
    /// One response per account.
    #[default]
    Account,
    /// One response per faction member.
    Member,
    /// One response per principal.
    Principal,
}

/// How responses are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormExecutionType {
    /// Submitted once and reported.
    #[default]
    Report,
    /// Editable after submission.
    Live,
}

/// When the form is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormFlowType {
    /// Assigned to its audience.
    #[default]
    Standard,
    /// Opened on demand, e.g. from a bulletin.
    OnDemand,
}

/// Purpose of a form config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormIntent {
    /// Built by staff.
    #[default]
    Generated,
    /// Any other purpose.
    #[serde(other)]
    Other,
}

impl FormFlowType {
    /// Wire value used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::OnDemand => "OnDemand",
        }
    }
}

impl FormIntent {
    /// Wire value used in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generated => "Generated",
            Self::Other => "Other",
        }
    }
}

/// Kind of form section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSectionKind {
    /// Heading.
    Header,
    /// Paragraph.
    #[default]
    Text,
    /// Question.
    FormQuestion,
}

/// Answer kind of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormOptionKind {
    /// Free text.
    #[default]
    Text,
    /// Date.
    Date,
    /// Number.
    Number,
    /// One of the options.
    SingleChoice,
    /// Any of the options.
    MultipleChoice,
    /// Email address.
    Email,
    /// Uploaded photo.
    PhotoUpload,
    /// A kind this client does not know.
    #[serde(other)]
    Unsupported,
}

/// Display name and export value of a choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuePair {
    /// Display name.
    pub name: String,
    /// Export value.
    pub value: String,
}

impl ValuePair {
    /// Creates a choice.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Answer configuration of a question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptionConfig {
    /// Answer kind.
    pub kind: FormOptionKind,
    /// External mapping code.
    pub code: Option<String>,
    /// Offers a free-text "other" choice.
    pub other: bool,
    /// Label of the "other" choice.
    pub other_text: Option<String>,
    /// Choices.
    pub options: Vec<ValuePair>,
    /// Profile field the answer maps to.
    pub profile: Option<String>,
}

/// Question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormQuestion {
    /// Question ID, assigned by the server.
    pub form_question_id: Uuid,
    /// Title.
    pub title: String,
    /// Answer configuration.
    pub config: FormOptionConfig,
    /// Answer, populated in reports.
    pub answer: Option<FormResponseData>,
}

/// Form body section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSection {
    /// Section kind.
    pub kind: FormSectionKind,
    /// Section text.
    pub text: Option<String>,
    /// Question for `FormQuestion` sections.
    pub question: Option<FormQuestion>,
}

impl FormSection {
    /// Question of this section when it is a question section.
    pub fn as_question(&self) -> Option<&FormQuestion> {
        match self.kind {
            FormSectionKind::FormQuestion => self.question.as_ref(),
            _ => None,
        }
    }
}

/// Form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Form {
    /// Form ID, assigned by the server.
    pub form_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Creating account.
    pub account_id_creator: Uuid,
    /// Optional template reference; questions are not copied from it.
    pub form_config_id: Option<Uuid>,
    /// Audience.
    pub scope: FormScope,
    /// Response attachment.
    pub attachment: FormAttachmentType,
    /// Whether a response is required.
    pub required: bool,
    /// Collection mode.
    pub execution: FormExecutionType,
    /// Presentation flow.
    pub flow: FormFlowType,
    /// External identifier; enables per-question codes.
    pub external_identifier: Option<String>,
    /// Whether the form is enabled.
    pub enabled: bool,
    /// Title.
    pub title: String,
    /// Summary.
    pub summary: String,
    /// Body sections.
    pub sections: Vec<FormSection>,
    /// Target group when scope is `Group`.
    pub group_id: Option<Uuid>,
    /// Target principal when scope is `Principal`.
    pub principal_id: Option<Uuid>,
    /// Target term when scope is `Term`.
    pub term_id: Option<Uuid>,
    /// Response, populated in reports.
    pub form_response: Option<FormResponse>,
}

impl Form {
    /// Question sections in order.
    pub fn questions(&self) -> impl Iterator<Item = &FormQuestion> {
        self.sections.iter().filter_map(FormSection::as_question)
    }
}

/// Form template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Form config ID.
    pub form_config_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Name.
    pub name: Option<String>,
    /// Presentation flow.
    pub flow: FormFlowType,
    /// Purpose.
    pub purpose: FormIntent,
}

/// Submitted response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormResponse {
    /// Response ID, assigned by the server.
    pub form_response_id: Uuid,
    /// Responding account; admins may answer for others.
    pub account_id: Uuid,
    /// Form ID.
    pub form_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Required for `Member` attachment.
    pub member_id: Option<Uuid>,
    /// Required for `Principal` attachment.
    pub principal_id: Option<Uuid>,
    /// Answers.
    pub response_data: Vec<FormResponseData>,
    /// Display name of the submitter, populated in reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
}

/// Answer to one question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormResponseData {
    /// Question ID.
    pub form_question_id: Uuid,
    /// Export value.
    pub response_raw: Option<String>,
    /// Display value.
    pub response_display: Option<String>,
}
