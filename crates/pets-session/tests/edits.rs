use pets_session::session::{AgeField, TriageSession, VitalField};

#[test]
fn age_fields_accept_digits_only() {
    let mut session = TriageSession::new();
    session.edit_age(AgeField::Years, "5");
    assert_eq!(session.age_value(AgeField::Years), "5");

    // Rejected edits retain the prior value, silently.
    session.edit_age(AgeField::Years, "5a");
    assert_eq!(session.age_value(AgeField::Years), "5");
    session.edit_age(AgeField::Years, "5.0");
    assert_eq!(session.age_value(AgeField::Years), "5");

    // Clearing is always allowed.
    session.edit_age(AgeField::Years, "");
    assert_eq!(session.age_value(AgeField::Years), "");
}

#[test]
fn vital_fields_accept_one_decimal_point() {
    let mut session = TriageSession::new();
    session.edit_vital(VitalField::Temperature, "38");
    session.edit_vital(VitalField::Temperature, "38.");
    session.edit_vital(VitalField::Temperature, "38.5");
    assert_eq!(session.vital_value(VitalField::Temperature), "38.5");

    session.edit_vital(VitalField::Temperature, "38.5.1");
    assert_eq!(session.vital_value(VitalField::Temperature), "38.5");
    session.edit_vital(VitalField::Temperature, "-38");
    assert_eq!(session.vital_value(VitalField::Temperature), "38.5");
}

#[test]
fn weight_field_validates_like_a_vital() {
    let mut session = TriageSession::new();
    session.edit_weight("20.5");
    assert_eq!(session.weight_value(), "20.5");
    session.edit_weight("20,5");
    assert_eq!(session.weight_value(), "20.5");
}

#[test]
fn partial_decimal_entries_parse_as_absent() {
    let mut session = TriageSession::new();
    session.edit_vital(VitalField::Spo2, ".");
    assert_eq!(session.input().vitals.spo2, None);

    session.edit_vital(VitalField::Spo2, ".5");
    assert_eq!(session.input().vitals.spo2, Some(0.5));
}

#[test]
fn blank_age_parts_normalize_to_zero() {
    let mut session = TriageSession::new();
    session.edit_age(AgeField::Months, "7");
    let input = session.input();
    assert_eq!(input.age.years, 0);
    assert_eq!(input.age.months, 7);
    assert_eq!(input.age.total_months(), 7);
}
