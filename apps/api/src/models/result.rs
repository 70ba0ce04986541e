use serde::{Deserialize, Serialize};

use crate::generation::verdict::Verdict;

/// The diagnosis + action plan rendered on the result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultData {
    pub highlight: String,
    pub judgment: Judgment,
    pub blindspot: String,
    pub actions: Vec<String>,
    pub advantage_tips: Vec<AdvantageTip>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Judgment {
    pub verdict: Verdict,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvantageTip {
    pub strength_id: String,
    pub strength_name: String,
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerResult {
    pub directions: Vec<CareerDirection>,
    pub work_style: String,
    pub energy_drains: Vec<String>,
    pub next_step: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDirection {
    pub title: String,
    pub reason: String,
    pub matched_strengths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideResult {
    pub title: String,
    pub weeks: Vec<GuideWeek>,
    pub daily_practice: String,
    pub check_questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideWeek {
    pub week: u8,
    pub theme: String,
    pub tasks: Vec<String>,
}

/// Which backend produced a payload. Reported to the client for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Mock,
    Ai,
}
