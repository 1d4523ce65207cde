use pets_core::models::level::TriageLevel;

use crate::catalogue::{Symptom, SymptomCategory};

/// 中毒及环境.
pub(super) fn category() -> SymptomCategory {
    SymptomCategory {
        id: "toxic".to_string(),
        name: "中毒及环境".to_string(),
        symptoms: vec![
            Symptom {
                id: "o1".to_string(),
                name: "中毒伴生命体征不稳定 (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: None,
            },
            Symptom {
                id: "o2".to_string(),
                name: "溺水 / 触电 (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: None,
            },
            Symptom {
                id: "o3".to_string(),
                name: "急性中毒 (生命体征稳定) (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "o4".to_string(),
                name: "动物咬伤伴全身症状 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "o5".to_string(),
                name: "局部动物咬伤 (3级)".to_string(),
                level: TriageLevel::Urgent,
                helper_info: None,
            },
        ],
    }
}
