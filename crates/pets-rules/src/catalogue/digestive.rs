use pets_core::models::level::TriageLevel;

use crate::catalogue::{Symptom, SymptomCategory};

/// 消化系统.
pub(super) fn category() -> SymptomCategory {
    SymptomCategory {
        id: "gi".to_string(),
        name: "消化系统".to_string(),
        symptoms: vec![
            Symptom {
                id: "gi1".to_string(),
                name: "消化道大出血 (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: None,
            },
            Symptom {
                id: "gi2".to_string(),
                name: "频繁呕吐/脱水 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "gi3".to_string(),
                name: "轻度脱水 (3级)".to_string(),
                level: TriageLevel::Urgent,
                helper_info: None,
            },
            Symptom {
                id: "gi4".to_string(),
                name: "急性腹痛 (疑似急腹症) (3级)".to_string(),
                level: TriageLevel::Urgent,
                helper_info: None,
            },
            Symptom {
                id: "gi5".to_string(),
                name: "无脱水呕吐/腹泻 (4级)".to_string(),
                level: TriageLevel::SemiUrgent,
                helper_info: None,
            },
        ],
    }
}
