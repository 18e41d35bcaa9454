use super::*;
use crate::scoring::fake::FakeScoringService;
use crate::scoring::{FetchError, HealthStatus, Prediction, SampleCatalog, ScoringError};
use crate::transaction::{
    FeatureField, SampleTransaction, TransactionClass, TransactionFeatures, Verdict,
};
use std::time::{Duration, Instant};

fn controller_with(fake: &FakeScoringService) -> EguiController {
    EguiController::new(Arc::new(fake.clone()))
}

fn wait_for(controller: &mut EguiController, done: impl Fn(&EguiController) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        controller.poll_jobs();
        if done(controller) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting for background job");
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn wait_idle(controller: &mut EguiController) {
    wait_for(controller, |c| !c.has_pending_jobs());
}

fn fill_valid(controller: &mut EguiController) {
    for (field, raw) in FeatureField::ALL.into_iter().zip(["10", "0.5", "-1.2", "3", "0", "42.5"]) {
        controller.update_field(field, raw);
    }
}

fn fraud_sample() -> SampleTransaction {
    SampleTransaction {
        features: TransactionFeatures {
            time: 406.0,
            v1: -2.312227,
            v2: 1.951992,
            v3: -1.609851,
            v4: 3.997906,
            amount: 0.0,
        },
        class: TransactionClass::Fraud,
    }
}

#[test]
fn update_field_reads_back_exact_text() {
    let mut controller = controller_with(&FakeScoringService::new());
    controller.update_field(FeatureField::V1, " -0.5e");
    assert_eq!(controller.field(FeatureField::V1), " -0.5e");
    controller.update_field(FeatureField::V1, "");
    assert_eq!(controller.field(FeatureField::V1), "");
    assert_eq!(controller.outcome(), &SubmissionOutcome::Unset);
}

#[test]
fn apply_sample_overwrites_every_field() {
    let mut controller = controller_with(&FakeScoringService::new());
    fill_valid(&mut controller);
    controller.update_field(FeatureField::Amount, "garbage");
    controller.apply_sample(&fraud_sample());
    assert_eq!(controller.field(FeatureField::Time), "406");
    assert_eq!(controller.field(FeatureField::V1), "-2.312227");
    assert_eq!(controller.field(FeatureField::V2), "1.951992");
    assert_eq!(controller.field(FeatureField::V3), "-1.609851");
    assert_eq!(controller.field(FeatureField::V4), "3.997906");
    assert_eq!(controller.field(FeatureField::Amount), "0");
}

#[test]
fn apply_sample_leaves_outcome_alone() {
    let fake = FakeScoringService::new();
    fake.push_prediction(Ok(Prediction {
        verdict: Verdict::Legitimate,
        fraud_probability: 0.03,
    }));
    let mut controller = controller_with(&fake);
    fill_valid(&mut controller);
    controller.submit();
    wait_idle(&mut controller);
    let before = controller.outcome().clone();
    controller.apply_sample(&fraud_sample());
    assert_eq!(controller.outcome(), &before);
}

#[test]
fn invalid_input_fails_without_request() {
    let fake = FakeScoringService::new();
    let mut controller = controller_with(&fake);
    fill_valid(&mut controller);
    controller.update_field(FeatureField::V3, "abc");
    controller.submit();
    assert_eq!(
        controller.outcome(),
        &SubmissionOutcome::Failed("invalid input".to_string())
    );
    assert!(!controller.has_pending_jobs());
    assert!(fake.predict_calls().is_empty());
}

#[test]
fn empty_form_is_invalid_input() {
    let fake = FakeScoringService::new();
    let mut controller = controller_with(&fake);
    controller.submit();
    assert_eq!(controller.outcome().error_message(), Some("invalid input"));
    assert!(fake.predict_calls().is_empty());
}

#[test]
fn fraud_prediction_is_shown_with_percentage() {
    let fake = FakeScoringService::new();
    fake.push_prediction(Ok(Prediction {
        verdict: Verdict::Fraud,
        fraud_probability: 0.87,
    }));
    let mut controller = controller_with(&fake);
    controller.apply_sample(&fraud_sample());
    controller.submit();
    assert!(controller.outcome().is_pending());
    wait_idle(&mut controller);
    assert_eq!(
        controller.outcome(),
        &SubmissionOutcome::Succeeded {
            verdict: Verdict::Fraud,
            probability: 0.87,
        }
    );
    assert_eq!(controller.outcome().probability_label().as_deref(), Some("87.00%"));
    assert_eq!(fake.predict_calls(), vec![fraud_sample().features()]);
}

#[test]
fn legitimate_prediction_is_shown_with_percentage() {
    let fake = FakeScoringService::new();
    fake.push_prediction(Ok(Prediction {
        verdict: Verdict::Legitimate,
        fraud_probability: 0.03,
    }));
    let mut controller = controller_with(&fake);
    fill_valid(&mut controller);
    controller.submit();
    wait_idle(&mut controller);
    assert!(matches!(
        controller.outcome(),
        SubmissionOutcome::Succeeded {
            verdict: Verdict::Legitimate,
            ..
        }
    ));
    assert_eq!(controller.outcome().probability_label().as_deref(), Some("3.00%"));
}

#[test]
fn second_submit_while_pending_is_ignored() {
    let (fake, release) = FakeScoringService::gated();
    fake.push_prediction(Ok(Prediction {
        verdict: Verdict::Fraud,
        fraud_probability: 0.6,
    }));
    let mut controller = controller_with(&fake);
    fill_valid(&mut controller);
    controller.submit();
    controller.update_field(FeatureField::Amount, "not a number");
    controller.submit();
    controller.submit();
    assert!(controller.outcome().is_pending());
    release.send(()).unwrap();
    wait_idle(&mut controller);
    assert_eq!(fake.predict_calls().len(), 1);
    assert!(matches!(
        controller.outcome(),
        SubmissionOutcome::Succeeded { .. }
    ));
}

#[test]
fn rejection_detail_becomes_failure_message() {
    let fake = FakeScoringService::new();
    fake.push_prediction(Err(ScoringError::Rejected {
        status: 500,
        detail: Some("Model not loaded".to_string()),
    }));
    fake.push_prediction(Err(ScoringError::Rejected {
        status: 422,
        detail: None,
    }));
    let mut controller = controller_with(&fake);
    fill_valid(&mut controller);
    controller.submit();
    wait_idle(&mut controller);
    assert_eq!(controller.outcome().error_message(), Some("Model not loaded"));
    controller.submit();
    wait_idle(&mut controller);
    assert_eq!(
        controller.outcome().error_message(),
        Some("request failed with status 422")
    );
}

#[test]
fn transport_failure_then_resubmit_goes_pending_again() {
    let (fake, release) = FakeScoringService::gated();
    fake.push_prediction(Err(ScoringError::Transport("connection refused".to_string())));
    fake.push_prediction(Ok(Prediction {
        verdict: Verdict::Legitimate,
        fraud_probability: 0.1,
    }));
    let mut controller = controller_with(&fake);
    fill_valid(&mut controller);
    controller.submit();
    release.send(()).unwrap();
    wait_idle(&mut controller);
    let message = controller.outcome().error_message().unwrap_or_default();
    assert!(!message.is_empty());
    assert!(message.starts_with("transport error"));

    controller.submit();
    assert!(controller.outcome().is_pending());
    assert!(controller.outcome().error_message().is_none());
    release.send(()).unwrap();
    wait_idle(&mut controller);
    assert_eq!(fake.predict_calls().len(), 2);
}

#[test]
fn stale_score_result_is_discarded() {
    let mut controller = controller_with(&FakeScoringService::new());
    controller.handle_score_result(
        99,
        Ok(Prediction {
            verdict: Verdict::Fraud,
            fraud_probability: 0.9,
        }),
    );
    assert_eq!(controller.outcome(), &SubmissionOutcome::Unset);
}

#[test]
fn catalog_loads_once() {
    let fake = FakeScoringService::new();
    fake.set_catalog(Ok(SampleCatalog {
        samples: vec![fraud_sample()],
        ..SampleCatalog::default()
    }));
    let mut controller = controller_with(&fake);
    assert_eq!(controller.catalog(), &CatalogState::NotRequested);
    controller.load_catalog();
    assert!(controller.catalog().is_loading());
    controller.load_catalog();
    wait_idle(&mut controller);
    controller.load_catalog();
    wait_idle(&mut controller);
    assert_eq!(fake.catalog_calls(), 1);
    let catalog = controller.catalog().catalog().unwrap();
    assert_eq!(catalog.samples, vec![fraud_sample()]);
}

#[test]
fn empty_catalog_is_loaded_with_no_rows() {
    let fake = FakeScoringService::new();
    fake.set_catalog(Ok(SampleCatalog::default()));
    let mut controller = controller_with(&fake);
    controller.load_catalog();
    wait_idle(&mut controller);
    let catalog = controller.catalog().catalog().unwrap();
    assert!(catalog.samples.is_empty());
}

#[test]
fn catalog_failure_degrades_and_form_still_works() {
    let fake = FakeScoringService::new();
    fake.set_catalog(Err(FetchError::Status(503)));
    fake.push_prediction(Ok(Prediction {
        verdict: Verdict::Legitimate,
        fraud_probability: 0.2,
    }));
    let mut controller = controller_with(&fake);
    controller.load_catalog();
    wait_idle(&mut controller);
    assert_eq!(controller.catalog(), &CatalogState::Degraded);

    fill_valid(&mut controller);
    controller.submit();
    wait_idle(&mut controller);
    assert!(matches!(
        controller.outcome(),
        SubmissionOutcome::Succeeded { .. }
    ));
}

#[test]
fn start_probes_health_once() {
    let fake = FakeScoringService::new();
    fake.set_catalog(Ok(SampleCatalog::default()));
    fake.set_health(Ok(HealthStatus {
        status: "healthy".to_string(),
        model_loaded: true,
    }));
    let mut controller = controller_with(&fake);
    controller.start();
    wait_idle(&mut controller);
    assert_eq!(fake.health_calls(), 1);
    assert_eq!(controller.ui().status.text, "Service healthy");
}

#[test]
fn health_without_model_and_unreachable_service_are_reported() {
    let fake = FakeScoringService::new();
    fake.set_health(Ok(HealthStatus {
        status: "healthy".to_string(),
        model_loaded: false,
    }));
    let mut controller = controller_with(&fake);
    controller.check_health();
    wait_idle(&mut controller);
    assert_eq!(controller.ui().status.text, "Service up, model not loaded");

    let mut offline = controller_with(&FakeScoringService::new());
    offline.check_health();
    wait_idle(&mut offline);
    assert_eq!(offline.ui().status.text, "Service unreachable");
}

#[test]
fn dropping_controller_with_request_in_flight_does_not_panic() {
    let (fake, release) = FakeScoringService::gated();
    fake.push_prediction(Ok(Prediction {
        verdict: Verdict::Fraud,
        fraud_probability: 0.5,
    }));
    let mut controller = controller_with(&fake);
    fill_valid(&mut controller);
    controller.submit();
    drop(controller);
    release.send(()).unwrap();
    let deadline = Instant::now() + Duration::from_secs(5);
    while fake.predict_calls().is_empty() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(fake.predict_calls().len(), 1);
}
