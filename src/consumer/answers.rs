//! Filler answers used when the sample submits a form.

use crate::types::{FormOptionKind, FormQuestion, FormResponseData};
use chrono::{DateTime, SecondsFormat, Utc};

/// Canned text answer.
pub const TEXT_ANSWER: &str = "Answered";
/// Canned number answer.
pub const NUMBER_ANSWER: &str = "134";
/// Canned email answer.
pub const EMAIL_ANSWER: &str = "noone@domain.com";

/// Builds the deterministic filler answer for `question`.
///
/// Choice questions take their first option; photo uploads and unknown kinds
/// get an entry without a value.
pub fn canned_answer(question: &FormQuestion, now: DateTime<Utc>) -> FormResponseData {
    let mut data = FormResponseData {
        form_question_id: question.form_question_id,
        ..Default::default()
    };

    let (raw, display) = match question.config.kind {
        FormOptionKind::Text => (Some(TEXT_ANSWER.to_string()), Some(TEXT_ANSWER.to_string())),
        FormOptionKind::Date => {
            let stamp = now.to_rfc3339_opts(SecondsFormat::Secs, true);
            (Some(stamp.clone()), Some(stamp))
        }
        FormOptionKind::Number => (
            Some(NUMBER_ANSWER.to_string()),
            Some(NUMBER_ANSWER.to_string()),
        ),
        FormOptionKind::SingleChoice | FormOptionKind::MultipleChoice => {
            match question.config.options.first() {
                Some(option) => (Some(option.value.clone()), Some(option.name.clone())),
                None => (None, None),
            }
        }
        FormOptionKind::Email => (Some(EMAIL_ANSWER.to_string()), Some(EMAIL_ANSWER.to_string())),
        // TODO: upload through a temporary media URL once the media service is wrapped.
        FormOptionKind::PhotoUpload => (None, None),
        FormOptionKind::Unsupported => (None, None),
    };

    data.response_raw = raw;
    data.response_display = display;
    data
}
