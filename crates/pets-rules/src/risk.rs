//! Risk-factor registry (调节因子). Escalating factors shift the final
//! level one step toward more urgent; the rest are informational only.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::RuleError;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactor {
    pub id: String,
    pub name: String,
    /// Whether presence of this factor escalates the final level by one
    /// step (floored at level 1).
    pub escalates: bool,
    pub helper_info: Option<String>,
}

static RISK_FACTORS: LazyLock<Vec<RiskFactor>> = LazyLock::new(|| {
    vec![
        RiskFactor {
            id: "repeat_visit".to_string(),
            name: "24h内因同一症状再次就诊 (注2)".to_string(),
            escalates: true,
            helper_info: None,
        },
        RiskFactor {
            id: "complex_history".to_string(),
            name: "合并高危基础病史 (如先心、免疫缺陷、肿瘤、移植等) (注3)".to_string(),
            escalates: true,
            helper_info: None,
        },
        RiskFactor {
            id: "p_severe".to_string(),
            name: "P: 剧烈/严重疼痛 (7-10分) (注4)".to_string(),
            escalates: true,
            helper_info: Some(
                "Wong-Baker 面部表情疼痛量表或数字评定量表 (NRS) 评分 7～10 分。".to_string(),
            ),
        },
        RiskFactor {
            id: "p_moderate".to_string(),
            name: "P: 中度疼痛 (4-6分)".to_string(),
            escalates: false,
            helper_info: None,
        },
        RiskFactor {
            id: "guardian_anxiety".to_string(),
            name: "家长极度焦虑 / 医疗纠纷高风险 (注5)".to_string(),
            escalates: false,
            helper_info: None,
        },
    ]
});

/// All risk factors, in registry order.
pub fn risk_factors() -> &'static [RiskFactor] {
    &RISK_FACTORS
}

/// Look up a risk factor by id.
pub fn find_risk_factor(id: &str) -> Option<&'static RiskFactor> {
    RISK_FACTORS.iter().find(|f| f.id == id)
}

/// Look up a risk factor by id, erroring on unknown ids.
pub fn risk_factor(id: &str) -> Result<&'static RiskFactor, RuleError> {
    find_risk_factor(id).ok_or_else(|| RuleError::UnknownRiskFactor(id.to_string()))
}
