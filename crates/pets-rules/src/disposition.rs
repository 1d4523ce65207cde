//! Per-level disposition table: response time, zone, and standard
//! interventions for each of the five triage levels. Total and immutable.

use std::sync::LazyLock;

use pets_core::models::disposition::Disposition;
use pets_core::models::level::TriageLevel;

static DISPOSITIONS: LazyLock<Vec<Disposition>> = LazyLock::new(|| {
    vec![
        Disposition {
            level: TriageLevel::Critical,
            level_name: "1级: 濒危".to_string(),
            response_time: "立即".to_string(),
            zone: "抢救室".to_string(),
            zone_color: "bg-red-600".to_string(),
            description: "病情濒危，随时可能危及生命，需立即投入抢救。".to_string(),
            interventions: vec![
                "进入红区".to_string(),
                "气道/呼吸支持".to_string(),
                "团队立即介入".to_string(),
            ],
        },
        Disposition {
            level: TriageLevel::Emergent,
            level_name: "2级: 危重".to_string(),
            response_time: "≤15min".to_string(),
            zone: "抢救室".to_string(),
            zone_color: "bg-orange-500".to_string(),
            description: "病情危重，生命体征不稳定，需尽快救治。".to_string(),
            interventions: vec![
                "安排红区".to_string(),
                "医生15min内接诊".to_string(),
                "心电监护".to_string(),
            ],
        },
        Disposition {
            level: TriageLevel::Urgent,
            level_name: "3级: 急症".to_string(),
            response_time: "≤1h".to_string(),
            zone: "优先区".to_string(),
            zone_color: "bg-yellow-500".to_string(),
            description: "病情急，潜在风险，需优先处理。".to_string(),
            interventions: vec!["黄区诊疗".to_string(), "医生1h内接诊".to_string()],
        },
        Disposition {
            level: TriageLevel::SemiUrgent,
            level_name: "4级: 亚急症".to_string(),
            response_time: "≤2h".to_string(),
            zone: "普通候诊区".to_string(),
            zone_color: "bg-green-500".to_string(),
            description: "病情稳定，恶化风险低，允许适度候诊。".to_string(),
            interventions: vec!["绿区候诊".to_string(), "医生2h内接诊".to_string()],
        },
        Disposition {
            level: TriageLevel::NonUrgent,
            level_name: "5级: 非急症".to_string(),
            response_time: "≤4h".to_string(),
            zone: "普通候诊区".to_string(),
            zone_color: "bg-blue-500".to_string(),
            description: "症状轻微，无恶化倾向。".to_string(),
            interventions: vec!["普通诊查".to_string(), "建议门诊随访".to_string()],
        },
    ]
});

/// The disposition for a final triage level. The table holds exactly one
/// entry per level, in rank order.
pub fn disposition_for(level: TriageLevel) -> &'static Disposition {
    &DISPOSITIONS[usize::from(level.rank() - 1)]
}

/// The full table, in rank order (for the reference view).
pub fn dispositions() -> &'static [Disposition] {
    &DISPOSITIONS
}
