use pets_core::models::level::TriageLevel;

use crate::catalogue::{Symptom, SymptomCategory};

/// 呼吸系统. The distress-grade entries reference the banded respiratory
/// rate table (表3) in their confirmation text.
pub(super) fn category() -> SymptomCategory {
    SymptomCategory {
        id: "resp".to_string(),
        name: "呼吸系统".to_string(),
        symptoms: vec![
            Symptom {
                id: "r1".to_string(),
                name: "R: 重度呼吸窘迫 (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: Some(
                    "呼吸频率(表3:1级), 发绀，脉速，吸气性三凹征，鼻扇，呻吟等。".to_string(),
                ),
            },
            Symptom {
                id: "r2".to_string(),
                name: "R: 中度呼吸窘迫 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: Some("明显气促(表3:2级), 烦躁，轻度三凹征，鼻扇等。".to_string()),
            },
            Symptom {
                id: "r3".to_string(),
                name: "R: 轻度呼吸窘迫 (3级)".to_string(),
                level: TriageLevel::Urgent,
                helper_info: Some("气促(表3:3级), 劳累后气短，无明显三凹征等。".to_string()),
            },
            Symptom {
                id: "r4".to_string(),
                name: "SpO2 < 90% (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: None,
            },
            Symptom {
                id: "r5".to_string(),
                name: "SpO2 90% ~ 94% (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
        ],
    }
}
