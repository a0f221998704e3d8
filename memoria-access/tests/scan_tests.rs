mod common;

use common::{active, harness, pending, seeded_harness, UnreachableStore};
use memoria_access::{AccessError, ScanOutcome};
use memoria_types::Role;
use std::sync::Arc;

#[tokio::test]
async fn unknown_tag_resolves_to_no_record() {
    let h = seeded_harness(vec![]).await;
    let outcome = h.resolver.resolve(&"RM-UNKNOWN-99".into()).await.unwrap();
    assert_eq!(outcome, ScanOutcome::NoRecord);
    assert!(h.sessions.restore().await.is_none());
}

#[tokio::test]
async fn new_sentinel_resolves_to_activation() {
    let h = seeded_harness(vec![]).await;
    let outcome = h.resolver.resolve(&"NEW".into()).await.unwrap();
    assert_eq!(outcome, ScanOutcome::Pending);
}

#[tokio::test]
async fn pending_tag_resolves_to_activation_without_session() {
    let h = seeded_harness(vec![pending("RM-ALPHA-01")]).await;
    let outcome = h.resolver.resolve(&"RM-ALPHA-01".into()).await.unwrap();
    assert_eq!(outcome, ScanOutcome::Pending);
    assert!(h.sessions.restore().await.is_none());
}

#[tokio::test]
async fn active_tag_opens_the_vault_and_caches_the_session() {
    let h = seeded_harness(vec![active("RM-ALPHA-01", "secret1")]).await;
    let outcome = h.resolver.resolve(&"RM-ALPHA-01".into()).await.unwrap();
    assert!(matches!(outcome, ScanOutcome::Active(_)));

    let restored = h.sessions.restore().await.unwrap();
    assert_eq!(restored.record.tag_id, memoria_types::TagId::new("RM-ALPHA-01"));
}

#[tokio::test]
async fn admin_tag_bypasses_even_without_a_record() {
    let h = seeded_harness(vec![]).await;
    let outcome = h.resolver.resolve(&"RM-ADMIN-2026".into()).await.unwrap();
    match outcome {
        ScanOutcome::AdminBypass(record) => assert_eq!(record.role, Role::Admin),
        other => panic!("expected bypass, got {other:?}"),
    }
    // The bypass session is cached like any other.
    assert!(h.sessions.restore().await.is_some());
}

#[tokio::test]
async fn admin_tag_bypasses_a_pending_record() {
    let h = seeded_harness(vec![pending("RM-ADMIN-2026")]).await;
    let outcome = h.resolver.resolve(&"RM-ADMIN-2026".into()).await.unwrap();
    assert!(matches!(outcome, ScanOutcome::AdminBypass(_)));
}

#[tokio::test]
async fn admin_tag_bypasses_with_store_down() {
    let h = harness(Arc::new(UnreachableStore));
    let outcome = h.resolver.resolve(&"RM-ADMIN-2026".into()).await.unwrap();
    match outcome {
        ScanOutcome::AdminBypass(record) => assert_eq!(record.role, Role::Admin),
        other => panic!("expected bypass, got {other:?}"),
    }
}

#[tokio::test]
async fn store_failure_surfaces_for_ordinary_tags() {
    let h = harness(Arc::new(UnreachableStore));
    let err = h.resolver.resolve(&"RM-ALPHA-01".into()).await.unwrap_err();
    match err {
        AccessError::StoreUnavailable(msg) => assert!(msg.contains("connection refused")),
        other => panic!("expected store error, got {other:?}"),
    }
}
