//! Property tests for the authority scorer
//!
//! Covers the invariants that hold for every input: the closed set of
//! source-authority scores, the sum invariant, monotonic freshness and
//! rating tiers, and implied recognition for official sources.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use research_prep::config::{ScoringRules, CONTENT_TYPES};
use research_prep::scoring::{
    calculate_at, rating_for, score_source_authority, score_timeliness,
};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 6, 15)
        .expect("valid date")
        .and_hms_opt(8, 0, 0)
        .expect("valid time")
}

fn days_ago(days: i64) -> String {
    (now().date() - chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

const OFFICIAL_HOSTS: &[&str] = &[
    "kubernetes.io",
    "docs.docker.com",
    "golang.org",
    "www.rust-lang.org",
    "docs.python.org",
    "nginx.org",
    "httpd.apache.org",
    "www.w3.org",
    "datatracker.ietf.org",
];

fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ".*",
        (
            prop::sample::select(vec!["http", "https"]),
            "[a-z0-9.-]{1,30}",
            "(/[A-Za-z0-9_.-]{0,12}){0,4}",
        )
            .prop_map(|(scheme, host, path)| format!("{}://{}{}", scheme, host, path)),
        prop::sample::select(OFFICIAL_HOSTS.to_vec()).prop_map(|h| format!("https://{}/", h)),
        "https://github\\.com/[a-z]{1,10}/[a-z]{1,10}(/blob/main/[a-z]{1,8}\\.md)?",
    ]
}

proptest! {
    #[test]
    fn source_authority_is_in_closed_set(url in url_strategy()) {
        let score = score_source_authority(ScoringRules::global(), &url);
        prop_assert!([0, 5, 25, 35, 38, 40].contains(&score), "unexpected score {} for {}", score, url);
    }

    #[test]
    fn official_host_scores_40_regardless_of_path(
        host in prop::sample::select(OFFICIAL_HOSTS.to_vec()),
        path in "(/[A-Za-z0-9_.-]{0,12}){0,4}",
        query in "(\\?[a-z]{1,5}=[a-z0-9]{0,5})?",
    ) {
        let url = format!("https://{}{}{}", host, path, query);
        prop_assert_eq!(score_source_authority(ScoringRules::global(), &url), 40);
    }

    #[test]
    fn total_is_sum_of_components(
        url in url_strategy(),
        date in proptest::option::of(prop_oneof![".{0,20}", (0i64..4000).prop_map(days_ago)]),
        content_type in prop_oneof![prop::sample::select(CONTENT_TYPES.to_vec()).prop_map(String::from), "[a-z-]{0,12}"],
        stars in any::<u64>(),
    ) {
        let b = calculate_at(ScoringRules::global(), &url, date.as_deref(), &content_type, stars, now());
        prop_assert!(b.source_authority <= 40);
        prop_assert!(b.timeliness <= 30);
        prop_assert!(b.technical_depth <= 20);
        prop_assert!(b.community_recognition <= 10);
        prop_assert_eq!(
            b.total,
            b.source_authority + b.timeliness + b.technical_depth + b.community_recognition
        );
        prop_assert!(b.total <= 100);
        prop_assert_eq!(b.rating, rating_for(ScoringRules::global(), b.total));
    }

    #[test]
    fn timeliness_never_increases_with_age(a in 0i64..4000, b in 0i64..4000) {
        let (newer, older) = if a <= b { (a, b) } else { (b, a) };
        let rules = ScoringRules::global();
        let newer_score = score_timeliness(rules, Some(&days_ago(newer)), now());
        let older_score = score_timeliness(rules, Some(&days_ago(older)), now());
        prop_assert!(newer_score >= older_score, "{}d -> {}, {}d -> {}", newer, newer_score, older, older_score);
    }

    #[test]
    fn unparsable_date_scores_like_missing(date in "[A-Za-z ]{0,20}") {
        let rules = ScoringRules::global();
        prop_assert_eq!(score_timeliness(rules, Some(&date), now()), 0);
        prop_assert_eq!(score_timeliness(rules, None, now()), 0);
    }

    #[test]
    fn official_sources_always_get_full_recognition(
        host in prop::sample::select(OFFICIAL_HOSTS.to_vec()),
        stars in any::<u64>(),
    ) {
        let url = format!("https://{}/docs", host);
        let b = calculate_at(ScoringRules::global(), &url, None, "guide", stars, now());
        prop_assert_eq!(b.community_recognition, 10);
    }
}

#[test]
fn rating_is_monotonic_in_total() {
    let rules = ScoringRules::global();
    for total in 0..100 {
        assert!(rating_for(rules, total) <= rating_for(rules, total + 1));
    }
    assert_eq!(rating_for(rules, 90), rating_for(rules, 100));
    assert!(rating_for(rules, 89) < rating_for(rules, 90));
}

#[test]
fn documented_examples() {
    let rules = ScoringRules::global();
    assert_eq!(
        score_source_authority(rules, "https://kubernetes.io/docs/concepts/"),
        40
    );
    assert_eq!(score_source_authority(rules, "https://medium.com/x/y"), 5);
}
