use serde::Serialize;

/// A predefined life situation the user picks before describing their confusion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    /// Short noun phrase used when interpolating the scenario into copy.
    pub focus: &'static str,
}

pub static SCENARIOS: [Scenario; 6] = [
    Scenario {
        id: "career-choice",
        title: "职业选择",
        focus: "职业方向",
    },
    Scenario {
        id: "workplace",
        title: "职场困境",
        focus: "当下的工作",
    },
    Scenario {
        id: "relationships",
        title: "人际关系",
        focus: "身边的关系",
    },
    Scenario {
        id: "learning",
        title: "学习成长",
        focus: "学习计划",
    },
    Scenario {
        id: "life-decision",
        title: "人生抉择",
        focus: "这次重要决定",
    },
    Scenario {
        id: "self-growth",
        title: "自我探索",
        focus: "自我认识",
    },
];

pub fn all_scenarios() -> &'static [Scenario] {
    &SCENARIOS
}

pub fn find_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}
