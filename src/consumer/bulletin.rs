//! Bulletin use cases.

use super::{first_of, updated_title, SampleConsumer};
use crate::errors::HavenResult;
use crate::types::{
    AccountInfo, Bulletin, BulletinScope, BulletinSection, BulletinSectionKind, FormFlowType,
    FormIntent, Paging,
};
use chrono::Utc;
use uuid::Uuid;

impl SampleConsumer {
    /// Creates a faction-wide bulletin in the first available category.
    #[tracing::instrument(skip(self))]
    pub async fn bulletin_create(&mut self, faction_id: Uuid) -> HavenResult<Bulletin> {
        let client = self.clients.client_for(Some(faction_id))?;

        let categories = client
            .bulletins()
            .categories_for_faction(faction_id, Paging::first())
            .await?
            .into_items()?;
        let category = first_of(categories, "bulletin category")?;

        let bulletin = sample_bulletin(&self.account, faction_id, category.bulletin_category_id);

        client.bulletins().create(&bulletin).await?.into_item()
    }

    /// Creates a bulletin offering an on-demand form as call to action.
    #[tracing::instrument(skip(self))]
    pub async fn bulletin_create_with_form(&mut self, faction_id: Uuid) -> HavenResult<Bulletin> {
        let client = self.clients.client_for(Some(faction_id))?;

        let categories = client
            .bulletins()
            .categories_for_faction(faction_id, Paging::first())
            .await?
            .into_items()?;
        let category = first_of(categories, "bulletin category")?;

        let configs = client
            .forms()
            .configs_by_faction(
                faction_id,
                Paging::first(),
                FormFlowType::OnDemand,
                FormIntent::Generated,
            )
            .await?
            .into_items()?;
        let config = first_of(configs, "on-demand form config")?;

        let mut bulletin = sample_bulletin(&self.account, faction_id, category.bulletin_category_id);
        bulletin.title = "This has a form attached!".to_string();
        bulletin.cta_form_config_id = Some(config.form_config_id);

        client.bulletins().create(&bulletin).await?.into_item()
    }

    /// Creates a bulletin targeted at the first active term.
    ///
    /// Group and principal targeting work the same way through
    /// `BulletinScope::Group` + `group_id` and `BulletinScope::Principal` +
    /// `principal_id`.
    #[tracing::instrument(skip(self))]
    pub async fn bulletin_create_with_target(&mut self, faction_id: Uuid) -> HavenResult<Bulletin> {
        let client = self.clients.client_for(Some(faction_id))?;

        let categories = client
            .bulletins()
            .categories_for_faction(faction_id, Paging::first())
            .await?
            .into_items()?;
        let category = first_of(categories, "bulletin category")?;

        let terms = client
            .terms()
            .active_by_faction(faction_id, Paging::first())
            .await?
            .into_items()?;
        let term = first_of(terms, "active term")?;

        let mut bulletin = sample_bulletin(&self.account, faction_id, category.bulletin_category_id);
        bulletin.title = "This is targeted to a term".to_string();
        bulletin.scope = BulletinScope::Term;
        bulletin.term_id = Some(term.term_id);

        client.bulletins().create(&bulletin).await?.into_item()
    }

    /// Retitles an existing bulletin with the current time.
    #[tracing::instrument(skip(self))]
    pub async fn bulletin_edit(&mut self, faction_id: Uuid, bulletin_id: Uuid) -> HavenResult<Bulletin> {
        let client = self.clients.client_for(Some(faction_id))?;

        let mut bulletin = client.bulletins().get(bulletin_id).await?.into_item()?;
        bulletin.title = updated_title(Utc::now());

        client
            .bulletins()
            .update(bulletin.bulletin_id, &bulletin)
            .await?
            .into_item()
    }
}

/// Demonstration bulletin visible to the whole faction.
pub(crate) fn sample_bulletin(
    account: &AccountInfo,
    faction_id: Uuid,
    bulletin_category_id: Uuid,
) -> Bulletin {
    Bulletin {
        faction_id,
        account_id_owner: account.account_id,
        bulletin_category_id,
        scope: BulletinScope::Faction,
        stack_tab: -1,
        title: "My Bulletin Title".to_string(),
        summary: "My bulletin summary".to_string(),
        // usually false; keeps demo runs from notifying everyone
        disable_push: true,
        active: true,
        sections: vec![
            BulletinSection {
                kind: BulletinSectionKind::Header,
                text: Some("Hello Header".to_string()),
            },
            BulletinSection {
                kind: BulletinSectionKind::Text,
                text: Some("this is general text for a bulletin".to_string()),
            },
        ],
        ..Default::default()
    }
}
