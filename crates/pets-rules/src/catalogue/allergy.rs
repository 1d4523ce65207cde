use pets_core::models::level::TriageLevel;

use crate::catalogue::{Symptom, SymptomCategory};

/// Allergy symptoms that indicate anaphylaxis. Selecting any of these
/// activates the emergency dosage calculator; a bare rash (a4) does not.
pub(super) const ANAPHYLAXIS_IDS: &[&str] = &["a1", "a2", "a3"];

/// 过敏反应.
pub(super) fn category() -> SymptomCategory {
    SymptomCategory {
        id: "allergy".to_string(),
        name: "过敏反应".to_string(),
        symptoms: vec![
            Symptom {
                id: "a1".to_string(),
                name: "过敏性休克 (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: None,
            },
            Symptom {
                id: "a2".to_string(),
                name: "广泛皮疹伴呼吸窘迫 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "a3".to_string(),
                name: "广泛皮疹伴剧烈腹痛 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "a4".to_string(),
                name: "单纯皮疹 (3级)".to_string(),
                level: TriageLevel::Urgent,
                helper_info: None,
            },
        ],
    }
}
