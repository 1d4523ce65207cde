use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::age::Age;

/// The six triage vital signs. `None` means not entered; readings ≤0 are
/// likewise excluded from rule evaluation by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalReadings {
    /// 体温, °C.
    pub temperature: Option<f64>,
    /// 心率, beats/min.
    pub heart_rate: Option<f64>,
    /// 呼吸, breaths/min.
    pub resp_rate: Option<f64>,
    /// 收缩压, mmHg.
    pub systolic_bp: Option<f64>,
    /// 血氧饱和度, %.
    pub spo2: Option<f64>,
    /// 毛细血管再充盈时间, seconds.
    pub crt: Option<f64>,
}

/// One triage encounter's worth of input: everything the engine needs to
/// compute a level. Built fresh from the session on every evaluation —
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInput {
    pub age: Age,
    pub weight_kg: Option<f64>,
    pub vitals: VitalReadings,
    pub selected_symptoms: BTreeSet<String>,
    pub selected_risk_factors: BTreeSet<String>,
}
