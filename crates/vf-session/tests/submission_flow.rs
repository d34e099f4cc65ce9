//! End-to-end submissions against a stub classifier and an on-disk store.

mod common;

use pretty_assertions::assert_eq;
use rstest::rstest;
use vf_config::{GatewayConfig, StorageConfig, VfConfig};
use vf_core::{FIXED_CONFIDENCE, FailureKind, PredictionResult, Verdict, sample_article};
use vf_session::{CheckOutcome, Session, SubmissionOutcome, SubmissionPhase};
use vf_store::{FileStore, HISTORY_KEY, KeyValueStore};

fn config(url: String, dir: &tempfile::TempDir) -> VfConfig {
    VfConfig {
        gateway: GatewayConfig {
            url,
            timeout_secs: 5,
            ..GatewayConfig::default()
        },
        storage: StorageConfig {
            data_dir: dir.path().display().to_string(),
            ..StorageConfig::default()
        },
    }
}

fn snapshot(config: &VfConfig) -> Option<Vec<PredictionResult>> {
    FileStore::new(config.storage.store_path())
        .get(HISTORY_KEY)
        .expect("store readable")
        .map(|raw| serde_json::from_str(&raw).expect("snapshot parses"))
}

#[rstest]
#[case("<html><body><h1>real</h1></body></html>", Verdict::Real)]
#[case("<h1> REAL </h1>", Verdict::Real)]
#[case("<h1>fake</h1>", Verdict::Fake)]
#[case("<h1>uncertain</h1>", Verdict::Fake)]
#[case("<p>no heading</p>", Verdict::Fake)]
#[tokio::test]
async fn heading_decides_verdict(#[case] body: &str, #[case] expected: Verdict) {
    let dir = tempfile::tempdir().unwrap();
    let (url, server) = common::serve_html(200, body, 1);
    let config = config(url, &dir);
    let mut session = Session::from_config(&config).unwrap();

    let outcome = session.check(sample_article()).await;

    let CheckOutcome::Submitted(SubmissionOutcome::Succeeded(result)) = outcome else {
        panic!("expected a successful submission");
    };
    assert_eq!(result.prediction, expected);
    assert_eq!(result.confidence, FIXED_CONFIDENCE);
    assert_eq!(server.join().unwrap(), 1);
}

#[tokio::test]
async fn real_heading_updates_history_and_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let (url, _server) = common::serve_html(200, "<h1>real</h1>", 1);
    let config = config(url, &dir);
    let mut session = Session::from_config(&config).unwrap();
    let before = session.history().len();

    let outcome = session.check(sample_article()).await;

    assert!(matches!(outcome, CheckOutcome::Submitted(SubmissionOutcome::Succeeded(_))));
    assert_eq!(session.history().len(), before + 1);
    assert_eq!(session.state().phase(), SubmissionPhase::Succeeded);

    let persisted = snapshot(&config).expect("snapshot written");
    assert_eq!(persisted, session.history().entries().to_vec());
    assert_eq!(persisted[0].prediction, Verdict::Real);
    assert_eq!(persisted[0].author, sample_article().author);

    let reopened = Session::from_config(&config).unwrap();
    assert_eq!(reopened.history().entries(), session.history().entries());
}

#[tokio::test]
async fn server_error_fails_without_touching_history() {
    let dir = tempfile::tempdir().unwrap();
    let (url, _server) = common::serve_html(500, "internal error", 1);
    let config = config(url, &dir);
    let mut session = Session::from_config(&config).unwrap();

    let outcome = session.check(sample_article()).await;

    assert_eq!(
        outcome,
        CheckOutcome::Submitted(SubmissionOutcome::Failed(FailureKind::GatewayUnreachable))
    );
    assert_eq!(session.state().failure(), Some(FailureKind::GatewayUnreachable));
    assert!(session.history().is_empty());
    assert_eq!(snapshot(&config), None);

    let notices = session.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_failure());
}

#[tokio::test]
async fn clearing_three_results_removes_the_key() {
    let dir = tempfile::tempdir().unwrap();
    let (url, server) = common::serve_html(200, "<h1>fake</h1>", 3);
    let config = config(url, &dir);
    let mut session = Session::from_config(&config).unwrap();
    for _ in 0..3 {
        session.check(sample_article()).await;
    }
    assert_eq!(server.join().unwrap(), 3);
    assert_eq!(snapshot(&config).map(|s| s.len()), Some(3));

    assert_eq!(session.clear_history().unwrap(), 3);

    assert!(session.history().is_empty());
    assert_eq!(snapshot(&config), None);
    assert!(Session::from_config(&config).unwrap().history().is_empty());
}
