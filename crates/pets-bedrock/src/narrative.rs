//! Triage narrative generation.
//!
//! Builds the Chinese-language prompt from the patient summary and sends
//! it to a Claude model via the Converse API. Prompt assembly is a pure
//! function so it can be tested without AWS.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, Message, SystemContentBlock,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::BedrockError;

/// Default inference profile for narrative generation. The Converse API
/// requires an inference profile ID, not a bare foundation model ID.
pub const DEFAULT_NARRATIVE_MODEL: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

const NARRATIVE_SYSTEM_PROMPT: &str = "\
你是一名资深儿科急诊专家。针对预检分诊台提供的患儿情况，\
输出一份深度的临床预检分析报告。语言风格：专业、严谨、简洁。\
格式：使用Markdown。";

/// The structured patient summary handed to the model. Vital fields are
/// the raw entry strings — blank means not entered and renders as
/// 未录入 in the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrativeInput {
    pub age_years: String,
    pub age_months: String,
    pub age_days: String,
    pub weight: String,
    pub temperature: String,
    pub heart_rate: String,
    pub resp_rate: String,
    pub systolic_bp: String,
    pub spo2: String,
    pub crt: String,
    /// Selected symptom names, then risk factors prefixed `[风险] `.
    pub findings: Vec<String>,
    /// Final level display name, e.g. "2级: 危重".
    pub level_name: String,
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() { "未录入" } else { value }
}

/// Assemble the user prompt for one narrative request.
pub fn build_prompt(input: &NarrativeInput) -> String {
    let findings = if input.findings.is_empty() {
        "无特异性症状".to_string()
    } else {
        input.findings.join("、")
    };

    format!(
        "患儿基本资料：\n\
         - 年龄：{years}岁 {months}月 {days}天\n\
         - 体重：{weight}kg\n\
         - 生命体征：\n\
         \u{20}\u{20}* 体温: {temperature}°C\n\
         \u{20}\u{20}* 心率: {heart_rate}次/分\n\
         \u{20}\u{20}* 呼吸: {resp_rate}次/分\n\
         \u{20}\u{20}* 血压: {systolic_bp}mmHg\n\
         \u{20}\u{20}* SpO2: {spo2}%\n\
         \u{20}\u{20}* CRT: {crt}秒\n\
         - 预检分级结果：{level}\n\
         - 识别到的症状：{findings}\n\
         \n\
         请按以下结构输出：\n\
         1. 【病情评估】 分析当前生命体征和症状的严重性及其在儿科急诊中的临床意义。\n\
         2. 【潜在风险】 基于当前指标，列出可能出现的恶化指标或潜在并发症。\n\
         3. 【临床路径建议】 建议的实验室检查及影像学检查。\n\
         4. 【干预重点】 护理及首接医生应重点监测的生命体征。",
        years = or_missing(&input.age_years),
        months = or_missing(&input.age_months),
        days = or_missing(&input.age_days),
        weight = or_missing(&input.weight),
        temperature = or_missing(&input.temperature),
        heart_rate = or_missing(&input.heart_rate),
        resp_rate = or_missing(&input.resp_rate),
        systolic_bp = or_missing(&input.systolic_bp),
        spo2 = or_missing(&input.spo2),
        crt = or_missing(&input.crt),
        level = input.level_name,
        findings = findings,
    )
}

/// Generate a clinical narrative for one patient summary.
///
/// Single-attempt, no retry: the caller decides what a failure means
/// (the session converts any error into its fixed fallback text).
pub async fn generate_narrative(
    config: &aws_config::SdkConfig,
    model_id: &str,
    input: &NarrativeInput,
) -> Result<String, BedrockError> {
    let client = aws_sdk_bedrockruntime::Client::new(config);

    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(build_prompt(input)))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    info!(model_id, level = %input.level_name, "generating triage narrative");

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(
            NARRATIVE_SYSTEM_PROMPT.to_string(),
        ))
        .messages(message)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(t) = block {
                Some(t.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    info!(model_id, text_len = text.len(), "triage narrative complete");

    Ok(text)
}
