use pets_core::models::level::TriageLevel;
use pets_rules::scores::{
    EyeOpening, GcsAssessment, MotorResponse, PtsAirway, PtsAssessment, PtsConsciousness,
    PtsSkeletal, PtsSystolicBp, PtsWeight, PtsWound, VerbalResponse,
};
use pets_session::session::{AgeField, PendingItem, ToggleOutcome, TriageSession, VitalField};

#[test]
fn plain_symptom_toggles_directly() {
    let mut session = TriageSession::new();
    assert!(matches!(
        session.toggle_symptom("gi3").unwrap(),
        ToggleOutcome::Selected
    ));
    assert!(session.selected_symptoms().contains("gi3"));

    assert!(matches!(
        session.toggle_symptom("gi3").unwrap(),
        ToggleOutcome::Deselected
    ));
    assert!(session.selected_symptoms().is_empty());
}

#[test]
fn gated_symptom_requires_confirmation() {
    let mut session = TriageSession::new();
    assert!(matches!(
        session.toggle_symptom("n1").unwrap(),
        ToggleOutcome::ConfirmationRequired
    ));
    assert!(session.selected_symptoms().is_empty());
    assert_eq!(
        session.pending(),
        Some(&PendingItem::Symptom("n1".to_string()))
    );

    session.confirm_pending().unwrap();
    assert!(session.selected_symptoms().contains("n1"));
    assert!(session.pending().is_none());
}

#[test]
fn cancel_leaves_item_unselected() {
    let mut session = TriageSession::new();
    session.toggle_symptom("r1").unwrap();
    session.cancel_pending();
    assert!(session.pending().is_none());
    assert!(session.selected_symptoms().is_empty());
    assert!(session.confirm_pending().is_err());
}

#[test]
fn new_pending_request_replaces_the_prior_one() {
    let mut session = TriageSession::new();
    session.toggle_symptom("n1").unwrap();
    session.toggle_symptom("c1").unwrap();
    assert_eq!(
        session.pending(),
        Some(&PendingItem::Symptom("c1".to_string()))
    );

    // Only the replacing item is selected on confirm.
    session.confirm_pending().unwrap();
    assert!(session.selected_symptoms().contains("c1"));
    assert!(!session.selected_symptoms().contains("n1"));
}

#[test]
fn gated_symptom_deselects_without_confirmation() {
    let mut session = TriageSession::new();
    session.toggle_symptom("n1").unwrap();
    session.confirm_pending().unwrap();

    assert!(matches!(
        session.toggle_symptom("n1").unwrap(),
        ToggleOutcome::Deselected
    ));
    assert!(session.pending().is_none());
}

#[test]
fn risk_factor_confirmation_flow() {
    let mut session = TriageSession::new();
    assert!(matches!(
        session.toggle_risk_factor("p_severe").unwrap(),
        ToggleOutcome::ConfirmationRequired
    ));
    assert_eq!(
        session.pending(),
        Some(&PendingItem::RiskFactor("p_severe".to_string()))
    );
    session.confirm_pending().unwrap();
    assert!(session.selected_risk_factors().contains("p_severe"));
}

#[test]
fn unknown_ids_error_at_the_toggle_boundary() {
    let mut session = TriageSession::new();
    assert!(session.toggle_symptom("zz9").is_err());
    assert!(session.toggle_risk_factor("zz9").is_err());
}

#[test]
fn selection_invalidates_the_narrative() {
    let mut session = TriageSession::new();
    session.begin_narrative();
    session.finish_narrative("既往报告".to_string());
    assert_eq!(session.narrative(), Some("既往报告"));

    session.toggle_symptom("gi3").unwrap();
    assert_eq!(session.narrative(), None);

    // Symptom deselection does not invalidate.
    session.finish_narrative("新报告".to_string());
    session.toggle_symptom("gi3").unwrap();
    assert_eq!(session.narrative(), Some("新报告"));

    // Risk-factor toggles invalidate in both directions.
    session.toggle_risk_factor("repeat_visit").unwrap();
    assert_eq!(session.narrative(), None);
    session.finish_narrative("再次生成".to_string());
    session.toggle_risk_factor("repeat_visit").unwrap();
    assert_eq!(session.narrative(), None);
}

#[test]
fn narrative_guard_is_single_flight() {
    let mut session = TriageSession::new();
    assert!(session.begin_narrative());
    assert!(!session.begin_narrative());
    assert!(session.is_generating());

    session.finish_narrative("完成".to_string());
    assert!(!session.is_generating());
    assert!(session.begin_narrative());
}

#[test]
fn reset_clears_everything() {
    let mut session = TriageSession::new();
    session.edit_age(AgeField::Years, "3");
    session.edit_vital(VitalField::Spo2, "91");
    session.toggle_symptom("gi3").unwrap();
    session.toggle_risk_factor("repeat_visit").unwrap();
    session.finish_narrative("报告".to_string());

    session.reset();
    assert_eq!(session.age_value(AgeField::Years), "");
    assert_eq!(session.vital_value(VitalField::Spo2), "");
    assert!(session.selected_symptoms().is_empty());
    assert!(session.selected_risk_factors().is_empty());
    assert_eq!(session.narrative(), None);
    assert_eq!(session.evaluate().level, TriageLevel::NonUrgent);
}

#[test]
fn gcs_apply_injects_the_critical_band() {
    // E=2, V=2, M=3 → total 7 → n1 → level 1 on its own.
    let mut session = TriageSession::new();
    session.apply_gcs(&GcsAssessment {
        eye: EyeOpening::ToPain,
        verbal: VerbalResponse::Incomprehensible,
        motor: MotorResponse::AbnormalFlexion,
    });
    assert!(session.selected_symptoms().contains("n1"));
    assert_eq!(session.evaluate().level, TriageLevel::Critical);
}

#[test]
fn gcs_reapply_replaces_the_prior_injection() {
    let mut session = TriageSession::new();
    session.apply_gcs(&GcsAssessment {
        eye: EyeOpening::ToPain,
        verbal: VerbalResponse::Incomprehensible,
        motor: MotorResponse::AbnormalFlexion,
    });
    session.apply_gcs(&GcsAssessment {
        eye: EyeOpening::Spontaneous,
        verbal: VerbalResponse::Oriented,
        motor: MotorResponse::ObeysCommands,
    });
    assert!(!session.selected_symptoms().contains("n1"));
    assert!(session.selected_symptoms().contains("n8"));
    assert_eq!(session.evaluate().level, TriageLevel::SemiUrgent);
}

#[test]
fn pts_apply_and_clear() {
    let severe = PtsAssessment {
        weight: PtsWeight::UnderTenKg,
        airway: PtsAirway::Maintainable,
        systolic_bp: PtsSystolicBp::FiftyToNinety,
        consciousness: PtsConsciousness::Obtunded,
        wound: PtsWound::Minor,
        skeletal: PtsSkeletal::ClosedFracture,
    };
    let mut session = TriageSession::new();
    session.apply_pts(&severe);
    assert!(session.selected_symptoms().contains("s1"));
    assert_eq!(session.evaluate().level, TriageLevel::Critical);

    let stable = PtsAssessment {
        weight: PtsWeight::OverTwentyKg,
        airway: PtsAirway::Normal,
        systolic_bp: PtsSystolicBp::OverNinety,
        consciousness: PtsConsciousness::Awake,
        wound: PtsWound::None,
        skeletal: PtsSkeletal::None,
    };
    session.apply_pts(&stable);
    assert!(!session.selected_symptoms().contains("s1"));
}

#[test]
fn dosage_gate_follows_anaphylaxis_selection() {
    let mut session = TriageSession::new();
    session.edit_weight("20");
    session.edit_age(AgeField::Years, "7");
    assert!(!session.anaphylaxis_indicated());

    session.toggle_symptom("a1").unwrap();
    assert!(session.anaphylaxis_indicated());
    let dosing = session.anaphylaxis_dosing().unwrap();
    assert!((dosing.epinephrine_mg - 0.2).abs() < 1e-9);

    session.edit_weight("");
    assert!(session.anaphylaxis_dosing().is_none());
}

#[test]
fn narrative_input_carries_findings_and_level_name() {
    let mut session = TriageSession::new();
    session.edit_age(AgeField::Years, "5");
    session.edit_vital(VitalField::HeartRate, "145");
    session.toggle_symptom("gi2").unwrap();
    session.toggle_risk_factor("repeat_visit").unwrap();

    let input = session.narrative_input();
    assert_eq!(input.age_years, "5");
    assert_eq!(input.heart_rate, "145");
    assert_eq!(
        input.findings,
        [
            "频繁呕吐/脱水 (2级)",
            "[风险] 24h内因同一症状再次就诊 (注2)"
        ]
    );
    // HR 145 at 5y is level 2, escalated to 1 by the repeat visit.
    assert_eq!(input.level_name, "1级: 濒危");
}
