use pets_core::models::level::TriageLevel;

use crate::catalogue::{Symptom, SymptomCategory};

/// 血液/代谢.
pub(super) fn category() -> SymptomCategory {
    SymptomCategory {
        id: "blood".to_string(),
        name: "血液/代谢".to_string(),
        symptoms: vec![
            Symptom {
                id: "b1".to_string(),
                name: "凝血障碍伴大出血 (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: None,
            },
            Symptom {
                id: "b2".to_string(),
                name: "血小板极低伴出血 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "b3".to_string(),
                name: "低血糖伴神志改变 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "b4".to_string(),
                name: "糖尿病酮症 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
        ],
    }
}
