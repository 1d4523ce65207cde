use pets_bedrock::narrative::{NarrativeInput, build_prompt};

fn filled_input() -> NarrativeInput {
    NarrativeInput {
        age_years: "5".to_string(),
        age_months: "2".to_string(),
        age_days: "0".to_string(),
        weight: "18".to_string(),
        temperature: "38.5".to_string(),
        heart_rate: "145".to_string(),
        resp_rate: "25".to_string(),
        systolic_bp: "95".to_string(),
        spo2: "96".to_string(),
        crt: "2".to_string(),
        findings: vec![
            "频繁呕吐/脱水 (2级)".to_string(),
            "[风险] 24h内因同一症状再次就诊 (注2)".to_string(),
        ],
        level_name: "2级: 危重".to_string(),
    }
}

#[test]
fn prompt_includes_all_entered_values() {
    let prompt = build_prompt(&filled_input());
    assert!(prompt.contains("年龄：5岁 2月 0天"));
    assert!(prompt.contains("体重：18kg"));
    assert!(prompt.contains("体温: 38.5°C"));
    assert!(prompt.contains("心率: 145次/分"));
    assert!(prompt.contains("预检分级结果：2级: 危重"));
}

#[test]
fn findings_are_joined_with_separator() {
    let prompt = build_prompt(&filled_input());
    assert!(prompt.contains("频繁呕吐/脱水 (2级)、[风险] 24h内因同一症状再次就诊 (注2)"));
}

#[test]
fn blank_fields_render_as_missing() {
    let input = NarrativeInput {
        level_name: "5级: 非急症".to_string(),
        ..NarrativeInput::default()
    };
    let prompt = build_prompt(&input);
    assert!(prompt.contains("体重：未录入kg"));
    assert!(prompt.contains("SpO2: 未录入%"));
    assert!(prompt.contains("识别到的症状：无特异性症状"));
}

#[test]
fn prompt_requests_the_four_report_sections() {
    let prompt = build_prompt(&filled_input());
    for section in ["【病情评估】", "【潜在风险】", "【临床路径建议】", "【干预重点】"] {
        assert!(prompt.contains(section), "missing {section}");
    }
}
