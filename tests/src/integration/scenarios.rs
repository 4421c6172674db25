//! # End-to-End Scenarios
//!
//! Flows that cross the identity, lifecycle and statistics subsystems through
//! a fully wired `ServiceContainer`.

#[cfg(test)]
mod tests {
    use super::super::fixtures::{admin_request, citizen_request, draft, Harness, TEST_PASSWORD};
    use cc_01_identity_directory::test_utils::{StalledAccountStore, SwitchableAccountStore};
    use cc_01_identity_directory::{DeadlineAccountStore, InMemoryAccountStore, NewAccount};
    use cc_02_issue_store::test_utils::StalledIssueStore;
    use cc_02_issue_store::{DeadlineIssueStore, InMemoryIssueStore, IssueFilter};
    use cc_04_lifecycle_controller::{ListQuery, StatusUpdate};
    use civic_runtime::container::{RuntimeConfig, ServiceContainer};
    use civic_runtime::handlers::present;
    use shared_types::{
        CivicError, ErrorKind, IssueCategory, IssueStatus, ManualTimeSource, Principal, Role,
        ADMIN_WARD,
    };
    use std::sync::Arc;
    use std::time::Duration;

    // =========================================================================
    // ISSUE LIFECYCLE
    // =========================================================================

    #[tokio::test]
    async fn test_report_resolve_then_owner_deletes() {
        let h = Harness::new().await.unwrap();
        let ann = h.citizen("Ann", "7").await.unwrap();
        let ann_p = ann.principal();

        let created = h.report(&ann_p, "Pothole on Elm St").await.unwrap();
        assert_eq!(created.status, IssueStatus::Reported);
        assert_eq!(created.location.ward, "7");
        assert!(created.resolution.is_none());

        let resolved = h
            .container
            .lifecycle
            .update_status(
                &h.admin_principal(),
                created.id,
                StatusUpdate::to(IssueStatus::Resolved).with_notes("Filled"),
            )
            .await
            .unwrap();
        assert_eq!(resolved.status, IssueStatus::Resolved);
        let resolution = resolved.resolution.unwrap();
        assert_eq!(resolution.notes.as_deref(), Some("Filled"));
        assert_eq!(resolution.resolver_id, h.admin.id());
        assert_eq!(resolution.resolved_by.unwrap().name, "CityCare Admin");

        h.container
            .lifecycle
            .delete_issue(&ann_p, created.id)
            .await
            .unwrap();
        let err = h
            .container
            .lifecycle
            .get_issue(&ann_p, created.id)
            .await
            .unwrap_err();
        assert_eq!(err, CivicError::issue_not_found());
    }

    #[tokio::test]
    async fn test_full_walk_to_closed() {
        let h = Harness::new().await.unwrap();
        let ann = h.citizen("Ann", "7").await.unwrap();
        let issue = h.report(&ann.principal(), "Broken light").await.unwrap();
        let admin = h.admin_principal();

        for target in [IssueStatus::InProgress, IssueStatus::Resolved, IssueStatus::Closed] {
            let view = h
                .container
                .lifecycle
                .update_status(&admin, issue.id, StatusUpdate::to(target))
                .await
                .unwrap();
            assert_eq!(view.status, target);
            assert_eq!(view.resolution.is_some(), target.is_settled());
        }

        let err = h
            .container
            .lifecycle
            .update_status(&admin, issue.id, StatusUpdate::to(IssueStatus::InProgress))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_client_supplied_ward_ignored() {
        let h = Harness::new().await.unwrap();
        let bob = h.citizen("Bob", "3").await.unwrap();

        let mut spoofed = draft("Overflowing drain", IssueCategory::Sanitation);
        spoofed.location.ward = Some("12".into());
        let view = h
            .container
            .lifecycle
            .create_issue(&bob.principal(), spoofed)
            .await
            .unwrap();
        assert_eq!(view.location.ward, "3");
    }

    #[tokio::test]
    async fn test_stranger_cannot_touch_issue() {
        let h = Harness::new().await.unwrap();
        let ann = h.citizen("Ann", "7").await.unwrap();
        let bob = h.citizen("Bob", "7").await.unwrap();
        let issue = h.report(&ann.principal(), "Pothole").await.unwrap();
        let bob_p = bob.principal();

        let err = h
            .container
            .lifecycle
            .delete_issue(&bob_p, issue.id)
            .await
            .unwrap_err();
        assert_eq!(err, CivicError::Forbidden);

        let err = h
            .container
            .lifecycle
            .update_status(&bob_p, issue.id, StatusUpdate::to(IssueStatus::Closed))
            .await
            .unwrap_err();
        assert_eq!(err, CivicError::Forbidden);

        let still_there = h
            .container
            .lifecycle
            .get_issue(&ann.principal(), issue.id)
            .await
            .unwrap();
        assert_eq!(still_there.status, IssueStatus::Reported);
    }

    #[tokio::test]
    async fn test_anonymous_rejected_everywhere() {
        let h = Harness::new().await.unwrap();
        let anon = Principal::Anonymous;

        let err = h.report(&anon, "Pothole").await.unwrap_err();
        assert_eq!(err, CivicError::Forbidden);
        let err = h.container.lifecycle.get_own_issues(&anon).await.unwrap_err();
        assert_eq!(err, CivicError::Forbidden);
        let err = h.container.statistics.compute_stats(&anon).await.unwrap_err();
        assert_eq!(err, CivicError::Forbidden);
    }

    #[tokio::test]
    async fn test_assign_then_list_filtered() {
        let h = Harness::new().await.unwrap();
        let ann = h.citizen("Ann", "7").await.unwrap();
        let crew = h.citizen("Crew", "7").await.unwrap();
        let admin = h.admin_principal();

        let first = h.report(&ann.principal(), "Pothole").await.unwrap();
        h.report(&ann.principal(), "Another pothole").await.unwrap();

        let assigned = h
            .container
            .lifecycle
            .assign(&admin, first.id, crew.id())
            .await
            .unwrap();
        assert_eq!(assigned.assigned_to.unwrap().name, "Crew");

        h.container
            .lifecycle
            .update_status(&admin, first.id, StatusUpdate::to(IssueStatus::InProgress))
            .await
            .unwrap();

        let page = h
            .container
            .lifecycle
            .list_issues(
                &admin,
                ListQuery::page(1, 10).with_filter(IssueFilter {
                    status: Some(IssueStatus::InProgress),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, first.id);
    }

    #[tokio::test]
    async fn test_pagination_over_25_issues() {
        let h = Harness::new().await.unwrap();
        let ann = h.citizen("Ann", "7").await.unwrap();
        for n in 0..25 {
            h.report(&ann.principal(), &format!("Issue {n}")).await.unwrap();
        }

        let page = h
            .container
            .lifecycle
            .list_issues(&h.admin_principal(), ListQuery::page(2, 10))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total, 25);

        let own = h.container.lifecycle.get_own_issues(&ann.principal()).await.unwrap();
        assert_eq!(own.len(), 25);
        assert_eq!(own[0].title, "Issue 24");
    }

    #[tokio::test]
    async fn test_stats_follow_lifecycle() {
        let h = Harness::new().await.unwrap();
        let ann = h.citizen("Ann", "7").await.unwrap();
        let bob = h.citizen("Bob", "3").await.unwrap();
        let admin = h.admin_principal();

        let a = h.report(&ann.principal(), "Pothole").await.unwrap();
        h.report(&bob.principal(), "Dark street").await.unwrap();
        h.container
            .lifecycle
            .update_status(&admin, a.id, StatusUpdate::to(IssueStatus::Resolved))
            .await
            .unwrap();

        let stats = h.container.statistics.compute_stats(&admin).await.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.status_count(IssueStatus::Resolved), 1);
        assert_eq!(stats.status_count(IssueStatus::Reported), 1);
        assert_eq!(stats.status_count(IssueStatus::Closed), 0);
        assert_eq!(stats.count_by_ward.get("7"), Some(&1));
        assert_eq!(stats.count_by_ward.get("3"), Some(&1));
        assert_eq!(stats.count_by_category.get(&IssueCategory::Road), Some(&2));
    }

    // =========================================================================
    // REGISTRATION
    // =========================================================================

    #[tokio::test]
    async fn test_admin_registration_rules() {
        let h = Harness::new().await.unwrap();
        let identity = &h.container.identity;

        let err = identity
            .register(admin_request("Mallory", Some("WRONG")))
            .await
            .unwrap_err();
        assert_eq!(err, CivicError::Forbidden);

        let err = identity
            .register(admin_request("Mallory", None))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let mut no_ward = citizen_request("Carl", "1");
        no_ward.ward = None;
        let err = identity.register(no_ward).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let code = h.container.config.identity.admin_registration_code.clone();
        let admin = identity
            .register(admin_request("Grace", Some(&code)))
            .await
            .unwrap();
        assert!(admin.is_admin());
        assert_eq!(admin.ward(), "All");
    }

    #[tokio::test]
    async fn test_duplicate_email_and_login() {
        let h = Harness::new().await.unwrap();
        let identity = &h.container.identity;
        h.citizen("Ann", "7").await.unwrap();

        let mut again = citizen_request("Ann", "9");
        again.email = "  ANN@Example.com ".into();
        let err = identity.register(again).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateIdentity);

        let ann = identity
            .authenticate("ann@example.com", TEST_PASSWORD)
            .await
            .unwrap();
        assert_eq!(ann.ward(), "7");
        let err = identity
            .authenticate("ann@example.com", "wrong-password")
            .await
            .unwrap_err();
        assert_eq!(err, CivicError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_bootstrap_twice_one_admin() {
        let h = Harness::new().await.unwrap();
        assert!(!h.container.identity.ensure_default_admin().await.unwrap());

        let config = RuntimeConfig::for_testing();
        let admin = h
            .container
            .identity
            .find_by_email(&config.identity.default_admin_email)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.id(), h.admin.id());
    }

    #[tokio::test]
    async fn test_direct_admin_create_requires_all_ward() {
        let h = Harness::new().await.unwrap();
        let candidate = |ward: &str| NewAccount {
            name: "Grace".into(),
            email: "grace@citycare.com".into(),
            password: TEST_PASSWORD.into(),
            role: Role::Admin,
            ward: ward.into(),
        };

        let err = h.container.identity.create(candidate("5")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(h
            .container
            .identity
            .find_by_email("grace@citycare.com")
            .await
            .unwrap()
            .is_none());

        let admin = h.container.identity.create(candidate(ADMIN_WARD)).await.unwrap();
        assert_eq!(admin.ward(), ADMIN_WARD);
    }

    // =========================================================================
    // DEPENDENCY FAILURES
    // =========================================================================

    #[tokio::test]
    async fn test_directory_outage_leaves_no_partial_writes() {
        let accounts = Arc::new(SwitchableAccountStore::new());
        let issues = Arc::new(InMemoryIssueStore::new());
        let container = ServiceContainer::with_stores(
            RuntimeConfig::for_testing(),
            accounts.clone(),
            issues.clone(),
            Arc::new(ManualTimeSource::new(1_000)),
        )
        .unwrap();
        container.identity.ensure_default_admin().await.unwrap();
        let admin = container
            .identity
            .authenticate("admin@citycare.com", "admin123")
            .await
            .unwrap()
            .principal();
        let ann = container
            .identity
            .register(citizen_request("Ann", "7"))
            .await
            .unwrap()
            .principal();
        let existing = container
            .lifecycle
            .create_issue(&ann, draft("Pothole", IssueCategory::Road))
            .await
            .unwrap();

        accounts.fail_lookups(true);
        let err = container
            .lifecycle
            .create_issue(&ann, draft("Broken light", IssueCategory::Electricity))
            .await
            .unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(issues.len(), 1);

        let err = container
            .lifecycle
            .update_status(&admin, existing.id, StatusUpdate::to(IssueStatus::Resolved))
            .await
            .unwrap_err();
        assert!(err.is_retryable());

        let err = container
            .lifecycle
            .assign(&admin, existing.id, ann.actor().unwrap().id)
            .await
            .unwrap_err();
        assert!(err.is_retryable());

        // Retrying once the directory is back behaves like a first attempt.
        accounts.fail_lookups(false);
        let view = container.lifecycle.get_issue(&admin, existing.id).await.unwrap();
        assert_eq!(view.status, IssueStatus::Reported);
        assert!(view.assigned_to.is_none());

        let resolved = container
            .lifecycle
            .update_status(&admin, existing.id, StatusUpdate::to(IssueStatus::Resolved))
            .await
            .unwrap();
        assert_eq!(resolved.status, IssueStatus::Resolved);
        container
            .lifecycle
            .create_issue(&ann, draft("Broken light", IssueCategory::Electricity))
            .await
            .unwrap();
        assert_eq!(issues.len(), 2);
    }

    // =========================================================================
    // STORE DEADLINES
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_stalled_issue_store_surfaces_unavailable() {
        let config = RuntimeConfig::for_testing();
        let deadline = Duration::from_millis(config.store.store_timeout_ms);
        let container = ServiceContainer::with_stores(
            config,
            Arc::new(DeadlineAccountStore::new(InMemoryAccountStore::new(), deadline)),
            Arc::new(DeadlineIssueStore::new(StalledIssueStore, deadline)),
            Arc::new(ManualTimeSource::new(0)),
        )
        .unwrap();
        let ann = container
            .identity
            .register(citizen_request("Ann", "7"))
            .await
            .unwrap();

        let err = container
            .lifecycle
            .create_issue(&ann.principal(), draft("Pothole", IssueCategory::Road))
            .await
            .unwrap_err();
        assert!(err.is_retryable());

        let body = present(&err, true);
        assert_eq!(body.kind, ErrorKind::StoreUnavailable);
        assert!(!body.message.contains("issues."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_account_store_blocks_login() {
        let config = RuntimeConfig::for_testing();
        let deadline = Duration::from_millis(config.store.store_timeout_ms);
        let container = ServiceContainer::with_stores(
            config,
            Arc::new(DeadlineAccountStore::new(StalledAccountStore, deadline)),
            Arc::new(DeadlineIssueStore::new(StalledIssueStore, deadline)),
            Arc::new(ManualTimeSource::new(0)),
        )
        .unwrap();

        let err = container
            .identity
            .authenticate("ann@example.com", TEST_PASSWORD)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
    }
}
