//! # Cross-Crate Properties
//!
//! Randomized checks of the issue invariants through the wired container.
//! Each case builds a fresh container on a current-thread runtime.

#[cfg(test)]
mod tests {
    use super::super::fixtures::{draft, Harness};
    use cc_04_lifecycle_controller::StatusUpdate;
    use proptest::prelude::*;
    use shared_types::{CivicError, IssueCategory, IssueStatus};

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(fut)
    }

    fn status() -> impl Strategy<Value = IssueStatus> {
        prop_oneof![
            Just(IssueStatus::Reported),
            Just(IssueStatus::InProgress),
            Just(IssueStatus::Resolved),
            Just(IssueStatus::Closed),
        ]
    }

    fn category() -> impl Strategy<Value = IssueCategory> {
        proptest::sample::select(IssueCategory::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_ward_always_from_reporter(
            own_ward in "[0-9]{1,2}",
            claimed in proptest::option::of("[A-Za-z0-9]{0,4}"),
            category in category(),
        ) {
            let ward = block_on(async {
                let h = Harness::new().await.unwrap();
                let citizen = h.citizen("Ann", &own_ward).await.unwrap();
                let mut input = draft("Pothole", category);
                input.location.ward = claimed;
                h.container
                    .lifecycle
                    .create_issue(&citizen.principal(), input)
                    .await
                    .unwrap()
                    .location
                    .ward
            });
            prop_assert_eq!(ward, own_ward);
        }

        #[test]
        fn prop_resolution_tracks_status(targets in proptest::collection::vec(status(), 0..6)) {
            block_on(async {
                let h = Harness::new().await.unwrap();
                let ann = h.citizen("Ann", "7").await.unwrap();
                let admin = h.admin_principal();
                let issue = h.report(&ann.principal(), "Pothole").await.unwrap();

                let mut current = IssueStatus::Reported;
                for target in targets {
                    let result = h
                        .container
                        .lifecycle
                        .update_status(&admin, issue.id, StatusUpdate::to(target))
                        .await;
                    match result {
                        Ok(view) => {
                            current = view.status;
                            assert_eq!(view.status, target);
                        }
                        Err(err) => assert!(matches!(err, CivicError::Validation(_))),
                    }

                    let view = h.container.lifecycle.get_issue(&admin, issue.id).await.unwrap();
                    assert_eq!(view.status, current);
                    assert_eq!(view.resolution.is_some(), current.is_settled());
                }
            });
        }

        #[test]
        fn prop_stats_total_matches_status_sum(
            plan in proptest::collection::vec((category(), status()), 0..12),
        ) {
            let stats = block_on(async {
                let h = Harness::new().await.unwrap();
                let ann = h.citizen("Ann", "7").await.unwrap();
                let admin = h.admin_principal();

                for (category, target) in &plan {
                    let issue = h
                        .container
                        .lifecycle
                        .create_issue(&ann.principal(), draft("Issue", *category))
                        .await
                        .unwrap();
                    // Disallowed targets leave the issue reported.
                    let _ = h
                        .container
                        .lifecycle
                        .update_status(&admin, issue.id, StatusUpdate::to(*target))
                        .await;
                }
                h.container.statistics.compute_stats(&admin).await.unwrap()
            });

            prop_assert_eq!(stats.total, plan.len());
            prop_assert_eq!(stats.count_by_status.values().sum::<usize>(), stats.total);
            prop_assert_eq!(stats.count_by_category.values().sum::<usize>(), stats.total);
            prop_assert_eq!(stats.count_by_ward.values().sum::<usize>(), stats.total);
        }

        #[test]
        fn prop_non_owner_delete_forbidden(count in 1usize..5, victim in 0usize..5) {
            block_on(async {
                let h = Harness::new().await.unwrap();
                let ann = h.citizen("Ann", "7").await.unwrap();
                let bob = h.citizen("Bob", "7").await.unwrap();

                let mut ids = Vec::new();
                for n in 0..count {
                    ids.push(h.report(&ann.principal(), &format!("Issue {n}")).await.unwrap().id);
                }
                let target = ids[victim % count];

                let err = h
                    .container
                    .lifecycle
                    .delete_issue(&bob.principal(), target)
                    .await
                    .unwrap_err();
                assert_eq!(err, CivicError::Forbidden);

                let own = h.container.lifecycle.get_own_issues(&ann.principal()).await.unwrap();
                assert_eq!(own.len(), count);
                assert!(own.iter().any(|view| view.id == target));
            });
        }
    }
}
