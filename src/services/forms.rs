//! Form, form config and response operations.

use crate::client::HavenClient;
use crate::envelope::{ActionResult, ItemResult, ListResult};
use crate::errors::HavenResult;
use crate::types::{Form, FormConfig, FormFlowType, FormIntent, FormResponse, Paging};
use bytes::Bytes;
use serde::Serialize;
use uuid::Uuid;

/// Service for form operations.
pub struct FormsService<'a> {
    client: &'a HavenClient,
}

impl<'a> FormsService<'a> {
    /// Creates a new forms service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Lists form configs of a faction filtered by flow and purpose.
    pub async fn configs_by_faction(
        &self,
        faction_id: Uuid,
        paging: Paging,
        flow: FormFlowType,
        purpose: FormIntent,
    ) -> HavenResult<ListResult<FormConfig>> {
        let query = FormConfigQuery {
            skip: paging.skip,
            take: paging.take,
            flow: flow.as_str(),
            purpose: purpose.as_str(),
        };
        self.client
            .get_with_params(&format!("/formconfig/by_faction/{}", faction_id), &query)
            .await
    }

    /// Creates or updates a form with its questions.
    pub async fn upsert(&self, form: &Form) -> HavenResult<ItemResult<Form>> {
        self.client.post("/forms/upsert", form).await
    }

    /// Gets a form.
    pub async fn get(&self, form_id: Uuid) -> HavenResult<ItemResult<Form>> {
        self.client.get(&format!("/form/{}", form_id)).await
    }

    /// Lists forms assigned to the current account in a faction.
    pub async fn for_faction_account(
        &self,
        faction_id: Uuid,
        query: &FormAccountQuery,
    ) -> HavenResult<ListResult<Form>> {
        self.client
            .get_with_params(&format!("/forms/for_account/{}", faction_id), query)
            .await
    }

    /// Submits a response.
    pub async fn submit(&self, response: &FormResponse) -> HavenResult<ActionResult> {
        self.client.post("/forms/submit", response).await
    }

    /// Lists submitted responses; each row is the form with answers filled in.
    pub async fn report(
        &self,
        form_id: Uuid,
        principal_id: Option<Uuid>,
        paging: Paging,
    ) -> HavenResult<ListResult<Form>> {
        let query = ReportQuery {
            principal_id,
            skip: paging.skip,
            take: paging.take,
        };
        self.client
            .get_with_params(&format!("/forms/{}/report", form_id), &query)
            .await
    }

    /// URL of the spreadsheet export, for a browser download.
    ///
    /// The server expects session cookies when this is opened from a web page.
    pub fn export_url(&self, form_id: Uuid) -> String {
        self.client.build_url(&format!("/forms/{}/export", form_id))
    }

    /// Downloads the spreadsheet export.
    pub async fn export(&self, form_id: Uuid) -> HavenResult<Bytes> {
        self.client
            .get_bytes(&format!("/forms/{}/export", form_id))
            .await
    }
}

/// Filter for forms assigned to the current account.
#[derive(Debug, Clone, Serialize)]
pub struct FormAccountQuery {
    /// Include forms already submitted.
    pub include_submitted: bool,
    /// Include forms still pending.
    pub include_pending: bool,
    /// Restrict to one principal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<Uuid>,
    /// Items to skip.
    pub skip: u32,
    /// Items to return.
    pub take: u32,
}

#[derive(Debug, Serialize)]
struct FormConfigQuery {
    skip: u32,
    take: u32,
    flow: &'static str,
    purpose: &'static str,
}

#[derive(Debug, Serialize)]
struct ReportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    principal_id: Option<Uuid>,
    skip: u32,
    take: u32,
}
