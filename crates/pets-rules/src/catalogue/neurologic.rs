use pets_core::models::level::TriageLevel;

use crate::catalogue::{Symptom, SymptomCategory};

/// 神经系统. The GCS-band entries (n1/n2/n8) double as the injection
/// targets of the GCS calculator.
pub(super) fn category() -> SymptomCategory {
    SymptomCategory {
        id: "neuro".to_string(),
        name: "神经系统".to_string(),
        symptoms: vec![
            Symptom {
                id: "n1".to_string(),
                name: "G: GCS 评分 3~9 分 (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: Some("GCS 3～9 分。表现为无反应，气道不能维持。".to_string()),
            },
            Symptom {
                id: "n2".to_string(),
                name: "G: GCS 评分 10~13 分 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: Some("GCS 10～13 分。生命体征异常，面临生命危险。".to_string()),
            },
            Symptom {
                id: "n3".to_string(),
                name: "持续惊厥发作 (1级)".to_string(),
                level: TriageLevel::Critical,
                helper_info: None,
            },
            Symptom {
                id: "n4".to_string(),
                name: "嗜睡 / 烦躁不安 / 浅昏迷 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "n5".to_string(),
                name: "剧烈头痛伴频繁呕吐 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "n6".to_string(),
                name: "急性瘫痪 / 松软儿 (2级)".to_string(),
                level: TriageLevel::Emergent,
                helper_info: None,
            },
            Symptom {
                id: "n8".to_string(),
                name: "神志清楚 (GCS 14-15分)".to_string(),
                level: TriageLevel::SemiUrgent,
                helper_info: None,
            },
        ],
    }
}
