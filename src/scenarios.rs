//! Console walkthrough of the sample use cases.
//!
//! Each scenario prints what it did. Connection reports its own failure and
//! lets the run continue; any other failure is wrapped in an aggregate
//! naming the scenario and stops the run.

use crate::config::HavenConfig;
use crate::consumer::{first_of, last_of, SampleConsumer};
use crate::errors::{HavenError, HavenResult};
use crate::types::{AccountInfo, Paging};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Email registered by the principals scenario.
pub const SAMPLE_REGISTER_EMAIL: &str = "register@example.com";

/// Email invited by the principals scenario.
pub const SAMPLE_INVITE_EMAIL: &str = "invite@example.com";

/// A runnable walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Reads the calling account both wrapped and unwrapped.
    Connection,
    /// Faction feed versus account feed.
    Pattern,
    /// Bulletin create/target/edit.
    Bulletin,
    /// Form create/target/edit/submit/export.
    Form,
    /// Start a conversation.
    Conversations,
    /// Send a push notification.
    Push,
    /// Add and remove a group membership.
    Groups,
    /// Add and remove a seat.
    Terms,
    /// Register, invite, rename and disable a principal.
    Principals,
}

impl Scenario {
    /// Every scenario, in run order.
    pub const ALL: [Scenario; 9] = [
        Scenario::Connection,
        Scenario::Pattern,
        Scenario::Bulletin,
        Scenario::Form,
        Scenario::Conversations,
        Scenario::Push,
        Scenario::Groups,
        Scenario::Terms,
        Scenario::Principals,
    ];

    /// Scenarios run when none are selected.
    pub fn defaults() -> Vec<Scenario> {
        vec![Scenario::Connection, Scenario::Pattern]
    }

    /// Lowercase name accepted by `HAVEN_SCENARIOS`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::Pattern => "pattern",
            Self::Bulletin => "bulletin",
            Self::Form => "form",
            Self::Conversations => "conversations",
            Self::Push => "push",
            Self::Groups => "groups",
            Self::Terms => "terms",
            Self::Principals => "principals",
        }
    }

    /// Parses a comma-separated selection; `all` selects everything.
    ///
    /// Absent or blank input gives the defaults. Order follows `ALL`, and
    /// duplicates collapse.
    pub fn parse_selection(raw: Option<&str>) -> HavenResult<Vec<Scenario>> {
        let raw = match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(Self::defaults()),
        };

        if raw.eq_ignore_ascii_case("all") {
            return Ok(Self::ALL.to_vec());
        }

        let picked = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Scenario::from_str)
            .collect::<HavenResult<Vec<_>>>()?;

        Ok(Self::ALL
            .iter()
            .copied()
            .filter(|s| picked.contains(s))
            .collect())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = HavenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HavenError::configuration(format!("Unknown scenario: {}", s)))
    }
}

/// Runs scenarios against one faction.
pub struct Runner {
    config: HavenConfig,
    consumer: SampleConsumer,
    faction_id: Uuid,
}

impl Runner {
    /// Creates a runner acting as the identity in `config`.
    pub fn new(config: HavenConfig) -> Self {
        let faction_id = config.sample_faction();
        let consumer = SampleConsumer::from_config(config.clone());
        Self {
            config,
            consumer,
            faction_id,
        }
    }

    /// Gets the consumer.
    pub fn consumer(&mut self) -> &mut SampleConsumer {
        &mut self.consumer
    }

    /// Runs `scenarios` in order.
    pub async fn run(&mut self, scenarios: &[Scenario]) -> HavenResult<()> {
        for &scenario in scenarios {
            tracing::info!(scenario = %scenario, "Running scenario");

            if scenario == Scenario::Connection {
                if let Err(e) = self.connection().await {
                    println!("{}", e.first_non_aggregate().message());
                }
                continue;
            }

            self.run_one(scenario).await.map_err(|e| {
                HavenError::aggregate(format!("Scenario {} failed", scenario), vec![e])
            })?;
        }
        Ok(())
    }

    async fn run_one(&mut self, scenario: Scenario) -> HavenResult<()> {
        match scenario {
            Scenario::Connection => self.connection().await,
            Scenario::Pattern => self.pattern().await,
            Scenario::Bulletin => self.bulletin().await,
            Scenario::Form => self.form().await,
            Scenario::Conversations => self.conversations().await,
            Scenario::Push => self.push().await,
            Scenario::Groups => self.groups().await,
            Scenario::Terms => self.terms().await,
            Scenario::Principals => self.principals().await,
        }
    }

    async fn connection(&mut self) -> HavenResult<()> {
        // every response comes in an envelope; read `item`/`items` from it
        let response = self.consumer.get_self().await?;
        println!("I am: {}", email_of(response.item.as_ref()));

        let account = self.consumer.get_self_unwrapped().await?;
        println!("I am: {}", email_of(account.as_ref()));
        Ok(())
    }

    async fn pattern(&mut self) -> HavenResult<()> {
        println!("Look into the source for demonstrate_pattern for more info");
        let item = self.consumer.demonstrate_pattern(self.faction_id).await?;
        let body = item
            .and_then(|i| i.post)
            .and_then(|p| p.body)
            .unwrap_or_default();
        println!("First Feed Item: {}", body);
        Ok(())
    }

    async fn bulletin(&mut self) -> HavenResult<()> {
        let faction = self.faction_id;

        let bulletin = self.consumer.bulletin_create(faction).await?;
        println!("Created Item: {}", bulletin.bulletin_id);

        let bulletin = self.consumer.bulletin_create_with_form(faction).await?;
        println!("Created Item: {}", bulletin.bulletin_id);

        let bulletin = self.consumer.bulletin_create_with_target(faction).await?;
        println!("Created Item: {}", bulletin.bulletin_id);

        let bulletin = self.consumer.bulletin_edit(faction, bulletin.bulletin_id).await?;
        println!("Edited Item: {}", bulletin.bulletin_id);
        Ok(())
    }

    async fn form(&mut self) -> HavenResult<()> {
        let faction = self.faction_id;

        // submitting needs the caller's memberships, which only the
        // self lookup returns
        let fetched = self.consumer.get_self().await?.demo_unpack();
        let account = merge_identity(self.consumer.account(), fetched);
        self.consumer = SampleConsumer::new(self.config.clone(), account);

        let form = self.consumer.form_create(faction).await?;
        println!("Created Item: {}", form.form_id);

        let form = self.consumer.form_create_with_target(faction).await?;
        println!("Created Item: {}", form.form_id);

        let form = self.consumer.form_edit(faction, form.form_id).await?;
        println!("Edited Item: {}", form.form_id);

        let submitted = self.consumer.form_submit(faction, form.form_id).await?;
        println!("Submitted Item: {}", submitted);

        let answers = self.consumer.form_get_answers(faction, form.form_id).await?;
        for (submitter, answer) in &answers.rows {
            println!("{}: {}", submitter, answer.as_deref().unwrap_or_default());
        }
        tracing::info!(url = %answers.export_url, "Form export URL");
        println!("Downloaded to: {}", answers.path.display());
        Ok(())
    }

    async fn conversations(&mut self) -> HavenResult<()> {
        let faction = self.faction_id;
        let me = self.consumer.account().account_id;

        let people = self.consumer.convo_find_target(faction).await?;
        let others = people.into_iter().filter(|p| p.account_id != me).collect();
        let other = first_of(others, "conversation target")?;

        let conversation = self.consumer.convo_start(faction, other.account_id).await?;
        println!("Created Conversation: {}", conversation.conversation_id);
        Ok(())
    }

    async fn push(&mut self) -> HavenResult<()> {
        let me = self.consumer.account().account_id;
        let sent = self.consumer.push_send_generic(self.faction_id, me).await?;
        println!("Send Push: {}", sent);
        Ok(())
    }

    async fn groups(&mut self) -> HavenResult<()> {
        let faction = self.faction_id;
        let principal_id = self.own_principal().await?;

        let groups = self.consumer.groups_get(faction, Paging::first()).await?;
        let group = first_of(groups, "group")?;

        let added = self
            .consumer
            .principal_group_add(faction, principal_id, group.group_id)
            .await?;
        println!("Added to Group: {}", added);

        let removed = self
            .consumer
            .principal_group_remove(faction, principal_id, group.group_id)
            .await?;
        println!("Removed from Group: {}", removed);
        Ok(())
    }

    async fn terms(&mut self) -> HavenResult<()> {
        let faction = self.faction_id;
        let principal_id = self.own_principal().await?;

        let terms = self.consumer.terms_get(faction, Paging::new(0, 100)).await?;
        let term = last_of(terms, "term")?;

        let seat = self
            .consumer
            .principal_seat_add(faction, principal_id, term.term_id)
            .await?;
        println!("Added Seat: {}", seat.seat_id);

        let removed = self.consumer.principal_seat_remove(faction, seat.seat_id).await?;
        println!("Removed from Seat: {}", removed);
        Ok(())
    }

    async fn principals(&mut self) -> HavenResult<()> {
        let faction = self.faction_id;

        let terms = self.consumer.terms_get(faction, Paging::new(0, 100)).await?;
        let term = last_of(terms, "term")?;

        let principal = self
            .consumer
            .principal_register(faction, term.term_id, SAMPLE_REGISTER_EMAIL)
            .await?;
        println!("Created Principal: {}", principal.principal_id);

        let invited = self
            .consumer
            .principal_invite(faction, principal.principal_id, SAMPLE_INVITE_EMAIL)
            .await?;
        println!("Invited to Principal: {}", invited);

        let principal = self
            .consumer
            .principal_edit(faction, principal.principal_id, "Updated Name")
            .await?;
        println!("Updated Principal: {}", principal.display_name);

        let changed = self
            .consumer
            .principal_change_status(faction, principal.principal_id, false)
            .await?;
        println!("Updated Status: {}", changed);
        Ok(())
    }

    /// Principal the caller manages, for demos that need one; nil if none.
    async fn own_principal(&mut self) -> HavenResult<Uuid> {
        let account = self.consumer.get_self().await?.demo_unpack();
        Ok(account
            .and_then(|a| a.first_principal_id())
            .unwrap_or_default())
    }
}

/// Fetched identity with the current credentials kept when the server
/// omits them.
fn merge_identity(current: &AccountInfo, fetched: Option<AccountInfo>) -> AccountInfo {
    match fetched {
        Some(mut account) => {
            if account.api_key.is_none() {
                account.api_key = current.api_key.clone();
            }
            if account.api_secret.is_none() {
                account.api_secret = current.api_secret.clone();
            }
            account
        }
        None => current.clone(),
    }
}

fn email_of(account: Option<&AccountInfo>) -> &str {
    account.and_then(|a| a.email.as_deref()).unwrap_or_default()
}
