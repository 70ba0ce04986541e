//! The 34 StrengthsFinder traits and the four domains they belong to.

use serde::{Deserialize, Serialize};

/// One of the four Gallup domains. Ordering follows the canonical chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Domain {
    Executing,
    Influencing,
    RelationshipBuilding,
    StrategicThinking,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Executing,
        Domain::Influencing,
        Domain::RelationshipBuilding,
        Domain::StrategicThinking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Domain::Executing => "执行力",
            Domain::Influencing => "影响力",
            Domain::RelationshipBuilding => "关系建立",
            Domain::StrategicThinking => "战略思维",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Strength {
    pub id: &'static str,
    pub name: &'static str,
    pub english_name: &'static str,
    pub domain: Domain,
    /// Pre-authored one-liner on putting the strength to work.
    pub leverage: &'static str,
}

const fn s(
    id: &'static str,
    name: &'static str,
    english_name: &'static str,
    domain: Domain,
    leverage: &'static str,
) -> Strength {
    Strength {
        id,
        name,
        english_name,
        domain,
        leverage,
    }
}

use Domain::{Executing, Influencing, RelationshipBuilding, StrategicThinking};

pub static STRENGTHS: [Strength; 34] = [
    // 执行力
    s("achiever", "成就", "Achiever", Executing, "把大目标拆成每天可以勾掉的小任务，用完成感给自己续航"),
    s("arranger", "统筹", "Arranger", Executing, "把手上的资源和人排成一张表，找出最省力的组合"),
    s("belief", "信仰", "Belief", Executing, "先写下你最在意的三条价值观，用它们给选项打分"),
    s("consistency", "公平", "Consistency", Executing, "为反复出现的决定定一条规则，减少临场纠结"),
    s("deliberative", "审慎", "Deliberative", Executing, "列出最坏情况和应对方案，风险看清了就敢迈步"),
    s("discipline", "纪律", "Discipline", Executing, "给关键事项固定时间段，让节奏替你对抗拖延"),
    s("focus", "专注", "Focus", Executing, "每周只定一个最重要的目标，其余事情为它让路"),
    s("responsibility", "责任", "Responsibility", Executing, "只对自己真正承诺的事负责，学会说清边界"),
    s("restorative", "排难", "Restorative", Executing, "把困惑当成一个待修复的问题，逐条找出故障点"),
    // 影响力
    s("activator", "行动", "Activator", Influencing, "用一个最小的试探动作代替长时间的思考"),
    s("command", "统率", "Command", Influencing, "主动把难谈的话题摆上桌，直接推动局面"),
    s("communication", "沟通", "Communication", Influencing, "把想法讲给一个人听，讲清楚的过程就是理清楚的过程"),
    s("competition", "竞争", "Competition", Influencing, "找一个可衡量的对照指标，让进步看得见"),
    s("maximizer", "完美", "Maximizer", Influencing, "把精力投到已经做得不错的地方，让它变得卓越"),
    s("self-assurance", "自信", "Self-Assurance", Influencing, "相信自己的判断，给决定设一个截止时间"),
    s("significance", "追求", "Significance", Influencing, "选择能被看见、能留下影响的方向投入"),
    s("woo", "取悦", "Woo", Influencing, "借助你结识新朋友的能力，去找三位过来人聊一聊"),
    // 关系建立
    s("adaptability", "适应", "Adaptability", RelationshipBuilding, "接受计划会变，先把今天能做的事做好"),
    s("connectedness", "关联", "Connectedness", RelationshipBuilding, "把眼前的困惑放进更长的人生线索里去看"),
    s("developer", "伯乐", "Developer", RelationshipBuilding, "像培养别人一样观察自己的小进步并记录下来"),
    s("empathy", "体谅", "Empathy", RelationshipBuilding, "先分辨哪些情绪属于自己、哪些来自别人"),
    s("harmony", "和谐", "Harmony", RelationshipBuilding, "寻找各方都能接受的共同点，再推进分歧部分"),
    s("includer", "包容", "Includer", RelationshipBuilding, "把相关的人拉进来一起讨论，不必独自扛"),
    s("individualization", "个别", "Individualization", RelationshipBuilding, "承认自己的独特节奏，不套用别人的标准答案"),
    s("positivity", "积极", "Positivity", RelationshipBuilding, "每天记录一件顺利的小事，给自己补充能量"),
    s("relator", "交往", "Relator", RelationshipBuilding, "找一位深度信任的朋友，坦诚聊一次你的困惑"),
    // 战略思维
    s("analytical", "分析", "Analytical", StrategicThinking, "用数据和事实替代猜测，把选项放进对比表"),
    s("context", "回顾", "Context", StrategicThinking, "回顾过去做对的三次选择，找出其中的共同模式"),
    s("futuristic", "前瞻", "Futuristic", StrategicThinking, "描绘三年后理想的一天，再倒推现在的第一步"),
    s("ideation", "理念", "Ideation", StrategicThinking, "用头脑风暴写出十种可能，再挑最让你兴奋的一种"),
    s("input", "搜集", "Input", StrategicThinking, "给信息收集设定上限，收集够了就进入整理阶段"),
    s("intellection", "思维", "Intellection", StrategicThinking, "留出独处思考的时间，把想法写成一页笔记"),
    s("learner", "学习", "Learner", StrategicThinking, "把困境当作新课题，设计一个两周的学习实验"),
    s("strategic", "战略", "Strategic", StrategicThinking, "列出所有路径，快速排除走不通的，保留最优解"),
];

pub fn all_strengths() -> &'static [Strength] {
    &STRENGTHS
}

pub fn find_strength(id: &str) -> Option<&'static Strength> {
    STRENGTHS.iter().find(|s| s.id == id)
}

pub fn strengths_in(domain: Domain) -> impl Iterator<Item = &'static Strength> {
    STRENGTHS.iter().filter(move |s| s.domain == domain)
}
