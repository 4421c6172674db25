//! # CityCare Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | cc-02 Issue Store | filtered, paginated query |
//! | cc-05 Statistics | aggregation over a snapshot |

use cc_02_issue_store::{InMemoryIssueStore, Issue, IssueFilter, IssueRepository, Location, NewIssue};
use cc_05_statistics::aggregate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use shared_types::{AccountId, IssueCategory, IssuePriority, IssueStatus};

fn synthetic_issues(count: usize) -> Vec<Issue> {
    let mut rng = rand::thread_rng();
    let reporter = AccountId::new();
    (0..count)
        .map(|n| {
            let category = IssueCategory::ALL[rng.gen_range(0..IssueCategory::ALL.len())];
            Issue::report(
                NewIssue {
                    title: format!("Issue {n}"),
                    description: "Synthetic".to_string(),
                    category,
                    location: Location {
                        address: format!("{n} Main St"),
                        ward: rng.gen_range(1..=30).to_string(),
                        coordinates: None,
                    },
                    images: Vec::new(),
                    priority: IssuePriority::Medium,
                },
                reporter,
                n as u64,
            )
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("cc-05-statistics");

    for size in [100, 1_000, 10_000] {
        let issues = synthetic_issues(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("aggregate", size), &issues, |b, issues| {
            b.iter(|| black_box(aggregate(issues)))
        });
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("cc-02-issue-store");
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");

    for size in [1_000, 10_000] {
        let store = InMemoryIssueStore::new();
        runtime.block_on(async {
            for issue in synthetic_issues(size) {
                store.insert(issue).await.expect("insert");
            }
        });

        let filter = IssueFilter {
            status: Some(IssueStatus::Reported),
            category: Some(IssueCategory::Road),
            priority: None,
        };
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("query_page_2", size), &store, |b, store| {
            b.iter(|| runtime.block_on(async { black_box(store.query(&filter, 10, 10).await) }))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_query);
criterion_main!(benches);
