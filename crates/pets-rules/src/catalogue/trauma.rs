use pets_core::models::level::TriageLevel;

use crate::catalogue::{Symptom, SymptomCategory};

/// 外科/创伤. `s1` doubles as the injection target of the PTS calculator.
pub(super) fn category() -> SymptomCategory {
    SymptomCategory {
        id: "surg".to_string(),
        name: "外科/创伤".to_string(),
        symptoms: vec![
            Symptom {
                id: "s1".to_string(),
                name: "严重多发伤 (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: None,
            },
            Symptom {
                id: "s2".to_string(),
                name: "骨筋膜室综合征 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "s3".to_string(),
                name: "开放性骨折 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "s4".to_string(),
                name: "单纯骨折 (3级)".to_string(),
                level: TriageLevel::Urgent,
                helper_info: None,
            },
            Symptom {
                id: "s5".to_string(),
                name: "轻微切割伤 (4级)".to_string(),
                level: TriageLevel::SemiUrgent,
                helper_info: None,
            },
        ],
    }
}
