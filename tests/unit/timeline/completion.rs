use std::time::Duration;

use super::*;

#[tokio::test]
async fn resolved_signal_completes() {
    let (signal, completion) = Completion::channel();
    signal.resolve();
    completion.await;
}

#[tokio::test(start_paused = true)]
async fn dropped_signal_never_completes() {
    let (signal, completion) = Completion::channel();
    drop(signal);
    let waited = tokio::time::timeout(Duration::from_secs(3600), completion).await;
    assert!(waited.is_err());
}

#[test]
fn page_hide_cancels_every_pending_run_token() {
    let lifecycle = PageLifecycle::new();
    let a = lifecycle.run_token();
    let b = lifecycle.clone().run_token();
    assert!(!a.is_cancelled());

    lifecycle.page_hide();
    assert!(a.is_cancelled());
    assert!(b.is_cancelled());
}

#[test]
fn runs_started_after_page_hide_are_not_cancelled() {
    let lifecycle = PageLifecycle::new();
    let before = lifecycle.run_token();
    lifecycle.page_hide();

    let after = lifecycle.clone().run_token();
    assert!(before.is_cancelled());
    assert!(!after.is_cancelled());

    lifecycle.page_hide();
    assert!(after.is_cancelled());
}

#[test]
fn resolving_after_completion_dropped_is_harmless() {
    let (signal, completion) = Completion::channel();
    drop(completion);
    signal.resolve();
}
