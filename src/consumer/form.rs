//! Form use cases.

use super::{canned_answer, first_of, updated_title, SampleConsumer};
use crate::errors::{HavenError, HavenResult};
use crate::services::FormAccountQuery;
use crate::types::{
    AccountInfo, Form, FormAttachmentType, FormExecutionType, FormFlowType, FormOptionConfig,
    FormOptionKind, FormQuestion, FormResponse, FormScope, FormSection, FormSectionKind, Paging,
    ValuePair,
};
use chrono::Utc;
use std::path::PathBuf;
use uuid::Uuid;

/// Answers of a form report and where its export was saved.
#[derive(Debug, Clone)]
pub struct FormAnswers {
    /// Submitter and raw first answer of each report row.
    pub rows: Vec<(String, Option<String>)>,
    /// Browser download URL of the export.
    pub export_url: String,
    /// Local copy of the export.
    pub path: PathBuf,
}

impl SampleConsumer {
    /// Creates a faction-wide form.
    #[tracing::instrument(skip(self))]
    pub async fn form_create(&mut self, faction_id: Uuid) -> HavenResult<Form> {
        let form = sample_form(&self.account, faction_id);

        self.clients
            .client_for(Some(faction_id))?
            .forms()
            .upsert(&form)
            .await?
            .into_item()
    }

    /// Creates a form targeted at the first group.
    ///
    /// Principal and term targeting use `FormScope::Principal` +
    /// `principal_id` and `FormScope::Term` + `term_id`.
    #[tracing::instrument(skip(self))]
    pub async fn form_create_with_target(&mut self, faction_id: Uuid) -> HavenResult<Form> {
        let client = self.clients.client_for(Some(faction_id))?;

        let groups = client
            .groups()
            .by_faction(faction_id, Paging::first())
            .await?
            .into_items()?;
        let group = first_of(groups, "group")?;

        let mut form = sample_form(&self.account, faction_id);
        form.title = "This is targeted to a group".to_string();
        form.scope = FormScope::Group;
        form.group_id = Some(group.group_id);

        client.forms().upsert(&form).await?.into_item()
    }

    /// Retitles a form and appends a text question.
    ///
    /// Only people assigned after the edit can answer new questions, unless
    /// the form runs as `FormExecutionType::Live` and they edit their answers.
    #[tracing::instrument(skip(self))]
    pub async fn form_edit(&mut self, faction_id: Uuid, form_id: Uuid) -> HavenResult<Form> {
        let client = self.clients.client_for(Some(faction_id))?;

        let mut form = client.forms().get(form_id).await?.into_item()?;
        form.title = updated_title(Utc::now());
        form.sections.push(FormSection {
            kind: FormSectionKind::FormQuestion,
            text: None,
            question: Some(FormQuestion {
                title: "This is a new question".to_string(),
                config: FormOptionConfig {
                    kind: FormOptionKind::Text,
                    code: Some("new".to_string()),
                    profile: None,
                    ..Default::default()
                },
                ..Default::default()
            }),
        });

        client.forms().upsert(&form).await?.into_item()
    }

    /// Answers every question of a form assigned to the current account.
    ///
    /// Needs an identity with faction memberships, e.g. the one returned by
    /// `get_self`.
    #[tracing::instrument(skip(self))]
    pub async fn form_submit(&mut self, faction_id: Uuid, form_id: Uuid) -> HavenResult<bool> {
        let client = self.clients.client_for(Some(faction_id))?;

        let query = FormAccountQuery {
            include_submitted: true,
            include_pending: true,
            principal_id: None,
            skip: 0,
            take: 20,
        };
        let forms = client
            .forms()
            .for_faction_account(faction_id, &query)
            .await?
            .into_items()?;
        let form = forms
            .into_iter()
            .find(|f| f.form_id == form_id)
            .ok_or_else(|| HavenError::not_found("Check demonstration code for proper IDs"))?;

        let response = build_response(&self.account, faction_id, &form)?;
        tracing::info!(answers = response.response_data.len(), "Submitting form");

        Ok(client.forms().submit(&response).await?.is_success())
    }

    /// Reads a form's report and saves its spreadsheet export to a temp file.
    #[tracing::instrument(skip(self))]
    pub async fn form_get_answers(&mut self, faction_id: Uuid, form_id: Uuid) -> HavenResult<FormAnswers> {
        let client = self.clients.client_for(Some(faction_id))?;

        let report = client
            .forms()
            .report(form_id, None, Paging::all())
            .await?
            .into_items()?;
        let rows = report
            .iter()
            .map(|row| {
                let submitter = row
                    .form_response
                    .as_ref()
                    .and_then(|r| r.submitted_by.clone())
                    .unwrap_or_default();
                let answer = row
                    .questions()
                    .next()
                    .and_then(|q| q.answer.as_ref())
                    .and_then(|a| a.response_raw.clone());
                (submitter, answer)
            })
            .collect();

        let export_url = client.forms().export_url(form_id);
        let data = client.forms().export(form_id).await?;

        let folder = std::env::temp_dir().join(Uuid::new_v4().simple().to_string());
        tokio::fs::create_dir_all(&folder).await?;
        let path = folder.join("export.xlsx");
        tokio::fs::write(&path, &data).await?;
        tracing::info!(path = %path.display(), bytes = data.len(), "Saved form export");

        Ok(FormAnswers {
            rows,
            export_url,
            path,
        })
    }
}

/// Builds the response for `form`, answering each question with its canned
/// value. Member and principal ids come from the membership in `faction_id`.
pub(crate) fn build_response(
    account: &AccountInfo,
    faction_id: Uuid,
    form: &Form,
) -> HavenResult<FormResponse> {
    let (member_id, principal_id) = match form.attachment {
        FormAttachmentType::Account => (None, None),
        FormAttachmentType::Member | FormAttachmentType::Principal => {
            let membership = account.membership(faction_id).ok_or_else(|| {
                HavenError::not_found(format!("Account is not a member of faction {}", faction_id))
            })?;
            if form.attachment == FormAttachmentType::Member {
                (Some(membership.member_id.unwrap_or_default()), None)
            } else {
                (None, Some(membership.principal_id.unwrap_or_default()))
            }
        }
    };

    let now = Utc::now();
    Ok(FormResponse {
        // admins may answer for another account
        account_id: account.account_id,
        form_id: form.form_id,
        faction_id,
        member_id,
        principal_id,
        response_data: form.questions().map(|q| canned_answer(q, now)).collect(),
        ..Default::default()
    })
}

/// Demonstration form: one response per principal, one choice question.
///
/// `form_config_id` may reference a template, but the template's questions
/// are not copied; the sections below are the whole form.
pub(crate) fn sample_form(account: &AccountInfo, faction_id: Uuid) -> Form {
    Form {
        faction_id,
        account_id_creator: account.account_id,
        form_config_id: None,
        scope: FormScope::Faction,
        // one form per principal (per student, not per parent)
        attachment: FormAttachmentType::Principal,
        required: true,
        execution: FormExecutionType::Report,
        flow: FormFlowType::Standard,
        external_identifier: Some("your-system-id".to_string()),
        enabled: true,
        title: "My Form Title".to_string(),
        summary: "My Form summary".to_string(),
        sections: vec![
            FormSection {
                kind: FormSectionKind::Header,
                text: Some("Hello Header".to_string()),
                question: None,
            },
            FormSection {
                kind: FormSectionKind::Text,
                text: Some("this is general text for a form".to_string()),
                question: None,
            },
            FormSection {
                kind: FormSectionKind::FormQuestion,
                text: None,
                question: Some(FormQuestion {
                    title: "Single Choice Question w/Other".to_string(),
                    config: FormOptionConfig {
                        kind: FormOptionKind::SingleChoice,
                        other: true,
                        other_text: Some("Provide Other".to_string()),
                        code: Some("your-system-id-other".to_string()),
                        options: vec![
                            ValuePair::new("First Answer", "first"),
                            ValuePair::new("Second Answer", "Second Answer"),
                        ],
                        profile: None,
                    },
                    ..Default::default()
                }),
            },
        ],
        ..Default::default()
    }
}
