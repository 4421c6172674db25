//! # Lifecycle Controller Service
//!
//! Implements `LifecycleApi`. Every operation reads the current record,
//! builds the complete new record in memory and writes it back in a single
//! store call. Concurrent writers to the same issue race; the last write
//! wins.
//!
//! Mutations resolve every account summary their view needs before the
//! write. Once the store has accepted a change the call cannot fail.

use crate::config::LifecycleConfig;
use crate::domain::{plan_transition, IssueDraft, IssuePage, IssueView, ListQuery, StatusUpdate};
use crate::ports::{AccountLookup, LifecycleApi};
use async_trait::async_trait;
use cc_02_issue_store::{Issue, IssueRepository};
use cc_03_access_policy::{authenticated, authorize, require, Operation};
use civic_telemetry::{log_issue_event, ISSUES_CREATED, ISSUES_DELETED, ISSUE_TRANSITIONS};
use shared_types::{AccountId, AccountSummary, CivicError, IssueId, Principal, TimeSource};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

const COMPONENT: &str = "lifecycle";

/// Resolved account summaries; `None` marks an account that no longer exists.
type Summaries = HashMap<AccountId, Option<AccountSummary>>;

fn build_view(issue: Issue, summaries: &Summaries) -> IssueView {
    IssueView::build(issue, |id| summaries.get(&id).cloned().flatten())
}

/// Issue lifecycle orchestration.
pub struct LifecycleController {
    issues: Arc<dyn IssueRepository>,
    accounts: Arc<dyn AccountLookup>,
    time: Arc<dyn TimeSource>,
    config: LifecycleConfig,
}

impl LifecycleController {
    pub fn new(
        issues: Arc<dyn IssueRepository>,
        accounts: Arc<dyn AccountLookup>,
        time: Arc<dyn TimeSource>,
        config: LifecycleConfig,
    ) -> Self {
        Self {
            issues,
            accounts,
            time,
            config,
        }
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    async fn load(&self, issue_id: IssueId) -> Result<Issue, CivicError> {
        self.issues
            .get(issue_id)
            .await?
            .ok_or_else(CivicError::issue_not_found)
    }

    async fn store(&self, issue: Issue) -> Result<(), CivicError> {
        if self.issues.replace(issue).await? {
            Ok(())
        } else {
            // Deleted between our read and this write.
            Err(CivicError::issue_not_found())
        }
    }

    /// Looks up every account `issues` reference, each one once.
    async fn summaries_for(
        &self,
        issues: &[Issue],
        known: Summaries,
    ) -> Result<Summaries, CivicError> {
        let mut summaries = known;
        for issue in issues {
            let referenced = std::iter::once(issue.reported_by())
                .chain(issue.assigned_to)
                .chain(issue.resolution().record().map(|r| r.resolved_by));
            for id in referenced {
                if !summaries.contains_key(&id) {
                    let summary = self.accounts.summary(id).await?;
                    summaries.insert(id, summary);
                }
            }
        }
        Ok(summaries)
    }

    async fn render_all(&self, issues: Vec<Issue>) -> Result<Vec<IssueView>, CivicError> {
        let summaries = self.summaries_for(&issues, Summaries::new()).await?;
        Ok(issues
            .into_iter()
            .map(|issue| build_view(issue, &summaries))
            .collect())
    }

    fn page_bounds(&self, query: &ListQuery) -> Result<(usize, usize), CivicError> {
        let page = query.page.unwrap_or(1);
        let page_size = query.page_size.unwrap_or(self.config.default_page_size);
        if page == 0 {
            return Err(CivicError::validation("Page must be at least 1"));
        }
        if page_size == 0 {
            return Err(CivicError::validation("Page size must be at least 1"));
        }
        Ok((page, page_size.min(self.config.max_page_size)))
    }
}

#[async_trait]
impl LifecycleApi for LifecycleController {
    async fn create_issue(
        &self,
        principal: &Principal,
        draft: IssueDraft,
    ) -> Result<IssueView, CivicError> {
        let actor = require(principal, None, Operation::Create)?;
        // A credential for a vanished account is treated as no credential.
        let reporter = self
            .accounts
            .summary(actor.id)
            .await?
            .ok_or(CivicError::Forbidden)?;

        let new_issue = draft.into_new_issue(reporter.ward.clone())?;
        let issue = Issue::report(new_issue, actor.id, self.time.now());
        let summaries = Summaries::from([(actor.id, Some(reporter))]);
        self.issues.insert(issue.clone()).await?;

        ISSUES_CREATED.inc();
        log_issue_event!(
            info,
            COMPONENT,
            "Issue reported",
            issue.id(),
            reporter = %actor.id,
            category = %issue.category,
            ward = %issue.location.ward
        );
        Ok(build_view(issue, &summaries))
    }

    async fn update_status(
        &self,
        principal: &Principal,
        issue_id: IssueId,
        update: StatusUpdate,
    ) -> Result<IssueView, CivicError> {
        let actor = require(principal, None, Operation::UpdateStatus)?;
        let mut issue = self.load(issue_id).await?;
        let from = issue.status();

        let now = self.time.now();
        let change = plan_transition(
            &issue,
            update.status,
            actor.id,
            now,
            update.notes,
            update.after_image,
        )?;
        issue.apply_transition(change, now)?;
        let summaries = self
            .summaries_for(std::slice::from_ref(&issue), Summaries::new())
            .await?;
        self.store(issue.clone()).await?;

        ISSUE_TRANSITIONS
            .with_label_values(&[update.status.as_str()])
            .inc();
        log_issue_event!(
            info,
            COMPONENT,
            "Issue status changed",
            issue_id,
            from = %from,
            to = %update.status,
            admin = %actor.id
        );
        Ok(build_view(issue, &summaries))
    }

    async fn assign(
        &self,
        principal: &Principal,
        issue_id: IssueId,
        assignee: AccountId,
    ) -> Result<IssueView, CivicError> {
        let actor = require(principal, None, Operation::Assign)?;
        let mut issue = self.load(issue_id).await?;
        let assignee_summary = self
            .accounts
            .summary(assignee)
            .await?
            .ok_or_else(CivicError::account_not_found)?;

        issue.assign(assignee, self.time.now());
        let summaries = self
            .summaries_for(
                std::slice::from_ref(&issue),
                Summaries::from([(assignee, Some(assignee_summary))]),
            )
            .await?;
        self.store(issue.clone()).await?;

        log_issue_event!(
            info,
            COMPONENT,
            "Issue assigned",
            issue_id,
            assignee = %assignee,
            admin = %actor.id
        );
        Ok(build_view(issue, &summaries))
    }

    async fn delete_issue(
        &self,
        principal: &Principal,
        issue_id: IssueId,
    ) -> Result<(), CivicError> {
        authenticated(principal)?;
        let issue = self.load(issue_id).await?;
        let actor = require(principal, Some(issue.reported_by()), Operation::Delete)?;

        if !self.issues.remove(issue_id).await? {
            return Err(CivicError::issue_not_found());
        }

        ISSUES_DELETED.inc();
        log_issue_event!(info, COMPONENT, "Issue deleted", issue_id, by = %actor.id);
        Ok(())
    }

    async fn list_issues(
        &self,
        principal: &Principal,
        query: ListQuery,
    ) -> Result<IssuePage, CivicError> {
        require(principal, None, Operation::ListAny)?;
        let (page, page_size) = self.page_bounds(&query)?;
        let offset = (page - 1).saturating_mul(page_size);

        let result = self.issues.query(&query.filter, offset, page_size).await?;
        debug!(
            component = COMPONENT,
            page,
            page_size,
            total = result.total,
            "Issues listed"
        );

        Ok(IssuePage {
            items: self.render_all(result.items).await?,
            total_pages: result.total.div_ceil(page_size),
            current_page: page,
            total: result.total,
        })
    }

    async fn get_own_issues(&self, principal: &Principal) -> Result<Vec<IssueView>, CivicError> {
        let own_id = principal.actor().map(|actor| actor.id);
        let actor = require(principal, own_id, Operation::ReadOwn)?;
        let issues = self.issues.by_reporter(actor.id).await?;
        self.render_all(issues).await
    }

    async fn get_issue(
        &self,
        principal: &Principal,
        issue_id: IssueId,
    ) -> Result<IssueView, CivicError> {
        authenticated(principal)?;
        let issue = self.load(issue_id).await?;

        let owner = Some(issue.reported_by());
        let visible = authorize(principal, owner, Operation::ReadAny).is_allowed()
            || authorize(principal, owner, Operation::ReadOwn).is_allowed();
        if !visible {
            // Same answer as a missing issue.
            return Err(CivicError::issue_not_found());
        }
        let summaries = self
            .summaries_for(std::slice::from_ref(&issue), Summaries::new())
            .await?;
        Ok(build_view(issue, &summaries))
    }
}
