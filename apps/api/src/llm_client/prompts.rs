// Shared prompt fragments. Feature-specific templates live next to the code that uses them.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Tone and safety guardrails appended to every user-facing generation prompt.
pub const SAFETY_INSTRUCTION: &str = "\
    你不是心理咨询师或医生：不要做任何疾病诊断，不要提及药物或治疗，\
    不要使用宿命论的说法。避免“绝对”“必须”“一定”等绝对化措辞，\
    用温和、具体、可执行的语言。所有内容使用简体中文。";
