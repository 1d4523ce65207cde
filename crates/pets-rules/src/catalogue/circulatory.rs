use pets_core::models::level::TriageLevel;

use crate::catalogue::{Symptom, SymptomCategory};

/// 循环系统.
pub(super) fn category() -> SymptomCategory {
    SymptomCategory {
        id: "circ".to_string(),
        name: "循环系统".to_string(),
        symptoms: vec![
            Symptom {
                id: "c1".to_string(),
                name: "C: 失代偿性休克 (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: Some(
                    "面色苍白/湿冷/脉弱/心率异常(表4:1级)/低血压/意识下降。".to_string(),
                ),
            },
            Symptom {
                id: "c2".to_string(),
                name: "C: 代偿性休克 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: Some(
                    "组织灌注不良(CRT 3-5s)/心动过速(表4:2级)，血压可正常。".to_string(),
                ),
            },
            Symptom {
                id: "c3".to_string(),
                name: "C: 心动过速/过缓伴血压正常 (3级)".to_string(),
                level: TriageLevel::Urgent,
                helper_info: None,
            },
            Symptom {
                id: "c4".to_string(),
                name: "心搏骤停 (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: None,
            },
            Symptom {
                id: "c5".to_string(),
                name: "活动性大出血 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
        ],
    }
}
