//! Age-banded vital-sign classifier.
//!
//! Each vital sign is evaluated independently against the standard's
//! threshold tables; a patient can accumulate findings from several
//! vitals at once. Readings that are absent or ≤0 are excluded from
//! evaluation entirely. Within one vital and one age band, at most one
//! finding is emitted (first match by descending severity).
//!
//! The boundary operators are transcribed literally from the standard,
//! asymmetries included: respiratory-rate level 1 is a strict `>` and
//! levels 2/3 are upper-inclusive half-open ranges, so exactly 70
//! breaths/min in the <3-month band is level 2, not level 1.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pets_core::models::age::Age;
use pets_core::models::level::TriageLevel;
use pets_core::models::patient::VitalReadings;

/// One classifier finding: a human-readable reason tag plus the level it
/// justifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalFinding {
    pub tag: String,
    pub level: TriageLevel,
}

/// The five age bands of the respiratory/heart-rate tables (表3/表4),
/// partitioning the total-months axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    UnderThreeMonths,
    ThreeToTwelveMonths,
    OneToThreeYears,
    FourToElevenYears,
    TwelveYearsAndUp,
}

impl AgeBand {
    pub fn of(total_months: u32) -> Self {
        match total_months {
            0..3 => AgeBand::UnderThreeMonths,
            3..12 => AgeBand::ThreeToTwelveMonths,
            12..48 => AgeBand::OneToThreeYears,
            48..144 => AgeBand::FourToElevenYears,
            _ => AgeBand::TwelveYearsAndUp,
        }
    }
}

/// 表3 thresholds for one band. Level 1 is `rate > l1`; level 2 is
/// `(l2, l1]`; level 3 is `(l3, l2]` — the cascade encodes the upper
/// bounds.
struct RespThresholds {
    l1: f64,
    l2: f64,
    l3: f64,
}

fn resp_thresholds(band: AgeBand) -> RespThresholds {
    match band {
        AgeBand::UnderThreeMonths => RespThresholds {
            l1: 70.0,
            l2: 60.0,
            l3: 50.0,
        },
        AgeBand::ThreeToTwelveMonths => RespThresholds {
            l1: 60.0,
            l2: 50.0,
            l3: 40.0,
        },
        AgeBand::OneToThreeYears => RespThresholds {
            l1: 50.0,
            l2: 40.0,
            l3: 30.0,
        },
        AgeBand::FourToElevenYears => RespThresholds {
            l1: 40.0,
            l2: 30.0,
            l3: 20.0,
        },
        AgeBand::TwelveYearsAndUp => RespThresholds {
            l1: 30.0,
            l2: 20.0,
            l3: 15.0,
        },
    }
}

/// 表4 thresholds for one band. Level 1 is the symmetric window
/// `rate > high || rate < low` (both strict); levels 2/3 are lower-bound
/// `≥` checks tried in descending severity.
struct HeartThresholds {
    high: f64,
    low: f64,
    l2_min: f64,
    l3_min: f64,
}

fn heart_thresholds(band: AgeBand) -> HeartThresholds {
    match band {
        AgeBand::UnderThreeMonths => HeartThresholds {
            high: 210.0,
            low: 80.0,
            l2_min: 180.0,
            l3_min: 110.0,
        },
        AgeBand::ThreeToTwelveMonths => HeartThresholds {
            high: 190.0,
            low: 80.0,
            l2_min: 170.0,
            l3_min: 110.0,
        },
        AgeBand::OneToThreeYears => HeartThresholds {
            high: 180.0,
            low: 80.0,
            l2_min: 150.0,
            l3_min: 100.0,
        },
        AgeBand::FourToElevenYears => HeartThresholds {
            high: 160.0,
            low: 60.0,
            l2_min: 130.0,
            l3_min: 70.0,
        },
        AgeBand::TwelveYearsAndUp => HeartThresholds {
            high: 140.0,
            low: 50.0,
            l2_min: 110.0,
            l3_min: 60.0,
        },
    }
}

/// A reading counts only when it was entered and is positive.
fn entered(reading: Option<f64>) -> Option<f64> {
    reading.filter(|v| *v > 0.0)
}

/// Classify all entered vitals against the age-banded tables.
///
/// Evaluation order (and therefore reason order) is fixed: SpO2, CRT,
/// systolic BP, temperature, respiratory rate, heart rate.
pub fn classify(vitals: &VitalReadings, age: &Age) -> Vec<VitalFinding> {
    let mut findings = Vec::new();
    let mut push = |tag: &str, level: TriageLevel| {
        findings.push(VitalFinding {
            tag: tag.to_string(),
            level,
        });
    };

    if let Some(spo2) = entered(vitals.spo2) {
        if spo2 < 90.0 {
            push("V: SpO2 < 90% (1级)", TriageLevel::Critical);
        } else if spo2 <= 94.0 {
            push("V: SpO2 90-94% (2级)", TriageLevel::Emergent);
        }
    }

    if let Some(crt) = entered(vitals.crt) {
        if crt > 5.0 {
            push("C: CRT > 5s (1级)", TriageLevel::Critical);
        } else if crt >= 3.0 {
            push("C: CRT 3-5s (2级)", TriageLevel::Emergent);
        }
    }

    if let Some(sbp) = entered(vitals.systolic_bp)
        && is_hypotensive(sbp, age)
    {
        push("C: 低血压 (1级)", TriageLevel::Critical);
    }

    if let Some(t) = entered(vitals.temperature) {
        if t >= 41.0 || t < 35.0 {
            push("V: 体温极值 (2级)", TriageLevel::Emergent);
        }
        // Fires in addition to the extreme-temperature finding.
        if age.total_months() < 3 && t >= 38.0 {
            push("V: <3月龄发热 (2级)", TriageLevel::Emergent);
        }
    }

    if let Some(rr) = entered(vitals.resp_rate) {
        let t = resp_thresholds(AgeBand::of(age.total_months()));
        if rr > t.l1 {
            push("R: 呼吸频率危急 (1级)", TriageLevel::Critical);
        } else if rr > t.l2 {
            push("R: 呼吸增快 (2级)", TriageLevel::Emergent);
        } else if rr > t.l3 {
            push("R: 气促 (3级)", TriageLevel::Urgent);
        }
    }

    if let Some(hr) = entered(vitals.heart_rate) {
        let t = heart_thresholds(AgeBand::of(age.total_months()));
        if hr > t.high || hr < t.low {
            push("C: 心率危象 (1级)", TriageLevel::Critical);
        } else if hr >= t.l2_min {
            push("C: 心率增快 (2级)", TriageLevel::Emergent);
        } else if hr >= t.l3_min {
            push("C: 心率偏快 (3级)", TriageLevel::Urgent);
        }
    }

    findings
}

/// Age-banded hypotension check. Each clause pairs an age condition with
/// its pressure threshold, and a clause that fails on pressure still
/// lets the later ones apply: a neonate at 65 mmHg misses the `< 60`
/// neonate cutoff but is still under the ≤12-month `< 70` one, and a
/// 1-year-old at 71 mmHg falls through to the 1–10-year `< 70 + 2×years`
/// formula. Thresholds: neonate < 60, ≤12 total months < 70, 1–10 years
/// `< 70 + 2×years`, over 10 years < 90. An age outside every clause
/// (only reachable through odd part entry, e.g. 0 years 13 months)
/// yields no finding.
fn is_hypotensive(sbp: f64, age: &Age) -> bool {
    (age.is_neonate() && sbp < 60.0)
        || (age.total_months() <= 12 && sbp < 70.0)
        || ((1..=10).contains(&age.years) && sbp < f64::from(70 + 2 * age.years))
        || (age.years > 10 && sbp < 90.0)
}
