//! Pre-authored copy fragments for the mock generator.
//!
//! Placeholders use `{name}` syntax and are filled by `fill`:
//! `{top}` top strength name, `{names}` all strength names, `{focus}` scenario focus,
//! `{domain}` dominant domain label, `{keywords}` matched confusion keywords.

use crate::analysis::confusion_parser::{ConfusionCategory, Intensity};
use crate::catalog::{all_scenarios, Domain};

use Domain::{Executing, Influencing, RelationshipBuilding, StrategicThinking};

pub const GENERIC_HIGHLIGHT: &str =
    "你的{names}组合在{focus}上自带辨识度，{top}是你最值得依靠的那张牌。";

const HIGHLIGHTS: &[(&str, Domain, &str)] = &[
    ("career-choice", Executing, "在职业选择上，你的{top}让你一旦认准方向就能稳步推进，{names}组合适合需要扎实交付的岗位。"),
    ("career-choice", Influencing, "你的{top}让你天然适合被看见的位置，{names}组合在需要推动和说服的职业里会很亮眼。"),
    ("career-choice", RelationshipBuilding, "你的{top}说明你的职业满足感很大程度来自人，{names}组合适合与人深度协作的方向。"),
    ("career-choice", StrategicThinking, "你的{top}让你看问题比别人多走几步，{names}组合适合需要判断和规划的职业。"),
    ("workplace", Executing, "在当下的工作里，你的{top}是团队里最可靠的那一环，{names}让你能把混乱变成秩序。"),
    ("workplace", Influencing, "在职场上，你的{top}让你有能力改变局面，{names}组合适合主动争取话语权。"),
    ("workplace", RelationshipBuilding, "在团队中，你的{top}让别人愿意靠近你，{names}组合是你化解职场难题的底气。"),
    ("workplace", StrategicThinking, "在工作中，你的{top}让你比别人更早看到问题的本质，{names}组合是你的判断力来源。"),
    ("relationships", Executing, "在关系里，你的{top}让人觉得踏实可靠，{names}组合让你说到做到。"),
    ("relationships", Influencing, "在关系中，你的{top}让你敢于表达，{names}组合能帮你把心里话说清楚。"),
    ("relationships", RelationshipBuilding, "你的{top}是处理关系的天赋，{names}组合让你能读懂别人没说出口的部分。"),
    ("relationships", StrategicThinking, "在关系里，你的{top}让你能跳出情绪看全局，{names}组合帮你找到关系卡住的原因。"),
    ("learning", Executing, "在学习上，你的{top}让你能持续投入，{names}组合适合循序渐进的长期积累。"),
    ("learning", Influencing, "在学习中，你的{top}让你擅长边学边输出，{names}组合适合用分享来加深理解。"),
    ("learning", RelationshipBuilding, "你的{top}让你在共学中成长最快，{names}组合适合找到同伴一起学。"),
    ("learning", StrategicThinking, "你的{top}让学习本身就是乐趣，{names}组合适合搭建自己的知识体系。"),
    ("life-decision", Executing, "面对这次重要决定，你的{top}让你一旦决定就能负责到底，{names}组合是落地的保障。"),
    ("life-decision", Influencing, "面对抉择，你的{top}让你敢于拍板，{names}组合能帮你争取到想要的结果。"),
    ("life-decision", RelationshipBuilding, "面对抉择，你的{top}让你格外在意身边的人，{names}组合会让你的决定更有温度。"),
    ("life-decision", StrategicThinking, "面对抉择，你的{top}让你能把各种可能想清楚，{names}组合是你做判断的底层能力。"),
    ("self-growth", Executing, "在自我探索上，你的{top}让你愿意为成长付出行动，{names}组合让改变看得见。"),
    ("self-growth", Influencing, "探索自我时，你的{top}让你渴望活出影响力，{names}组合指向一个被看见的自己。"),
    ("self-growth", RelationshipBuilding, "探索自我时，你的{top}提醒你：你在关系中最像自己，{names}组合是你的温度来源。"),
    ("self-growth", StrategicThinking, "探索自我时，你的{top}让你善于反思，{names}组合能帮你画出属于自己的地图。"),
];

pub fn highlight_template(scenario_id: &str, domain: Domain) -> Option<&'static str> {
    HIGHLIGHTS
        .iter()
        .find(|(s, d, _)| *s == scenario_id && *d == domain)
        .map(|(_, _, t)| *t)
}

pub fn judgment_opening(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::Low => "",
        Intensity::Medium => "能感受到这件事让你有些困扰。",
        Intensity::High => "先给自己一点喘息的空间，你已经承受了不少。",
    }
}

/// Two variants per category, picked by the context seed.
pub fn judgment_templates(category: ConfusionCategory) -> [&'static str; 2] {
    match category {
        ConfusionCategory::InfoOverload => [
            "你并不缺信息，而是缺一个收口的标准。围绕{focus}你已经收集得够多，真正卡住你的是决策规则。",
            "你在{focus}上反复比较，说明每个选项都有吸引力。问题不在选项，而在你还没决定什么最重要。",
        ],
        ConfusionCategory::DirectionLost => [
            "你的迷茫不是没有方向，而是{focus}里的方向太多且都不够清晰。先找到让你有能量的那一条线。",
            "关于{focus}，你缺的不是答案，而是一个让你愿意投入的理由。方向会在行动中慢慢显形。",
        ],
        ConfusionCategory::ExecutionBlock => [
            "你知道该做什么，只是启动成本太高。在{focus}上，把第一步缩小到十分钟就能完成。",
            "你的卡顿不是懒，而是目标太大、反馈太慢。{focus}需要更短的反馈回路。",
        ],
        ConfusionCategory::RelationshipStrain => [
            "{focus}里的摩擦消耗了你很多能量。问题往往不在对错，而在双方的期待没有说清楚。",
            "你在{focus}中承担了过多的情绪劳动。先分清哪些是你的责任，哪些不是。",
        ],
        ConfusionCategory::EnergyDrain => [
            "你的电量已经接近见底，此时任何关于{focus}的决定都会被疲惫放大。先恢复，再判断。",
            "长期的消耗让你对{focus}失去了感觉。这不是能力问题，而是节奏问题。",
        ],
        ConfusionCategory::SelfDoubt => [
            "你对自己的评价比事实更苛刻。在{focus}上，你已经具备的比你以为的多。",
            "比较让你看不见自己的长处。{focus}需要的恰恰是你身上的{top}。",
        ],
        ConfusionCategory::General => [
            "你正处在{focus}的过渡期，困惑是正常的信号，说明你在认真对待自己的人生。",
            "这段关于{focus}的困惑，是你重新校准方向的机会。先从最小的一步开始。",
        ],
    }
}

pub fn blindspot_template(domain: Domain) -> &'static str {
    match domain {
        Executing => "{domain}是你的主场，但你容易把完成任务当成解决问题，忙碌可能掩盖了方向上的疑问。",
        Influencing => "{domain}让你习惯主导，但你可能过早下结论，忽略了还没被听见的声音。",
        RelationshipBuilding => "{domain}让你体贴他人，但你可能把别人的需要放在自己前面，忘了问自己想要什么。",
        StrategicThinking => "{domain}让你想得深远，但你可能在思考里停留太久，迟迟没有把想法交给现实检验。",
    }
}

pub fn blindspot_suffix(category: ConfusionCategory) -> &'static str {
    match category {
        ConfusionCategory::InfoOverload => "这次，多收集一条信息的价值已经很低了。",
        ConfusionCategory::DirectionLost => "方向往往是走出来的，而不是想出来的。",
        ConfusionCategory::ExecutionBlock => "完美的计划不如一个粗糙的开始。",
        ConfusionCategory::RelationshipStrain => "你的感受和别人的感受同样重要。",
        ConfusionCategory::EnergyDrain => "休息不是浪费时间，而是必要的投入。",
        ConfusionCategory::SelfDoubt => "别人眼里的你，可能比你自己看到的更有力量。",
        ConfusionCategory::General => "给困惑一点时间，它会变得更具体。",
    }
}

/// Three category actions; the generator uses two of them.
pub fn category_actions(category: ConfusionCategory) -> [&'static str; 3] {
    match category {
        ConfusionCategory::InfoOverload => [
            "写下最重要的三条决策标准，用{top}给每个选项按标准打分",
            "暂停收集新信息48小时，只整理手上已有的内容",
            "给决定设一个截止日期，到期就选得分最高的选项",
        ],
        ConfusionCategory::DirectionLost => [
            "回顾过去一年最有能量的三个时刻，找出它们的共同点",
            "用{top}列出三个方向，各做一次低成本的小尝试",
            "找一位走过相似路的人聊30分钟，问他当时怎么选",
        ],
        ConfusionCategory::ExecutionBlock => [
            "把最卡的那件事拆成十分钟就能完成的第一步，今天就做",
            "用{top}设计一个看得见的进度表，每完成一步就打勾",
            "找一个同伴互相监督，每天晚上同步一次进展",
        ],
        ConfusionCategory::RelationshipStrain => [
            "写下你对这段关系的真实期待，再猜一猜对方的期待",
            "约一次不带评判的对话，先用{top}倾听对方的立场",
            "为自己划出一条清晰的边界，并温和地说出来",
        ],
        ConfusionCategory::EnergyDrain => [
            "这周删掉一件不是非做不可的事，把时间留给休息",
            "记录三天的能量曲线，找出最消耗你的场景",
            "每天安排20分钟只属于自己的时间，用来做让{top}发光的事",
        ],
        ConfusionCategory::SelfDoubt => [
            "列出过去做成的五件事，写下每件事里你用到的优势",
            "请三位信任的朋友说说你最突出的特点",
            "用{top}挑一个小挑战，用完成它来收集自信的证据",
        ],
        ConfusionCategory::General => [
            "用一页纸写下此刻的困惑，越具体越好",
            "从{names}中挑一个优势，本周刻意使用三次",
            "一周后重读这页纸，看看哪些困惑已经自己消失了",
        ],
    }
}

pub fn scenario_action(scenario_id: &str) -> &'static str {
    match scenario_id {
        "career-choice" => "把目标岗位的三份招聘要求和你的{names}逐条对照",
        "workplace" => "和直属上级约一次15分钟的沟通，对齐接下来一个月的重点",
        "relationships" => "本周主动联系一位让你感到轻松的朋友",
        "learning" => "为接下来两周定一个能展示出来的小成果",
        "life-decision" => "分别想象选A和选B一年后的自己，写下各自的感受",
        "self-growth" => "每晚花五分钟写下今天最像自己的一个瞬间",
        _ => "本周挑一件与{focus}有关的小事，立刻去做",
    }
}

pub fn missing_domain_action(domain: Domain) -> &'static str {
    match domain {
        Executing => "找一位执行力强的伙伴，请他帮你把计划落到日程上",
        Influencing => "把你的想法讲给一个人听，练习清晰地表达立场",
        RelationshipBuilding => "遇到卡点时，主动向身边人求助，而不是独自消化",
        StrategicThinking => "行动前花十分钟想一想：还有没有第三种选择",
    }
}

pub const URGENT_PREFIX: &str = "【本周内】";

/// Career directions per domain: (title, reason).
pub fn career_directions(domain: Domain) -> [(&'static str, &'static str); 3] {
    match domain {
        Executing => [
            ("项目经理", "需要把复杂任务推进到底，正好发挥你的执行力"),
            ("运营专员", "重视流程和稳定产出，你的可靠性会被看见"),
            ("质量与交付负责人", "对细节和承诺的坚持是这个岗位的核心"),
        ],
        Influencing => [
            ("销售与商务拓展", "需要主动出击和说服他人，适合你的影响力"),
            ("市场与品牌", "需要把想法讲出去并打动人"),
            ("创业或业务负责人", "需要拍板和带动团队向前"),
        ],
        RelationshipBuilding => [
            ("人力资源与组织发展", "核心是理解人、发展人"),
            ("咨询与辅导", "需要建立信任并陪伴他人成长"),
            ("客户成功", "长期关系的经营正是你的强项"),
        ],
        StrategicThinking => [
            ("产品经理", "需要看清用户和趋势，做取舍和规划"),
            ("数据分析与研究", "用事实和逻辑回答问题是你的舒适区"),
            ("战略与咨询", "善于在不确定中找到路径"),
        ],
    }
}

pub fn work_style(domain: Domain) -> &'static str {
    match domain {
        Executing => "你在目标明确、节奏稳定的环境里表现最好，清晰的交付标准会让你安心。",
        Influencing => "你在有舞台、有挑战的环境里表现最好，需要被看见和被认可。",
        RelationshipBuilding => "你在信任度高、协作紧密的团队里表现最好，人际氛围直接影响你的状态。",
        StrategicThinking => "你在有思考空间、允许探索的环境里表现最好，需要时间把问题想透。",
    }
}

pub fn missing_domain_drain(domain: Domain) -> &'static str {
    match domain {
        Executing => "需要长期重复执行、缺少变化的事务性工作",
        Influencing => "需要频繁公开表态或强势谈判的场合",
        RelationshipBuilding => "需要大量情绪安抚和人际周旋的角色",
        StrategicThinking => "需要长期独立做复杂规划的岗位",
    }
}

/// Four weekly themes for the guide, keyed by category.
pub fn guide_weeks(category: ConfusionCategory) -> [(&'static str, [&'static str; 2]); 4] {
    match category {
        ConfusionCategory::InfoOverload => [
            ("清点信息", ["把已有信息归成三类：事实、观点、担忧", "删掉与决策无关的信息源"]),
            ("确立标准", ["写下三条不可妥协的决策标准", "用{top}为每个选项打分"]),
            ("小步验证", ["对得分最高的选项做一次低成本尝试", "记录尝试中的真实感受"]),
            ("做出决定", ["在约定日期做出选择并告诉一个人", "为选择制定第一个月的计划"]),
        ],
        ConfusionCategory::DirectionLost => [
            ("回看来路", ["写下过去让你有成就感的五件事", "找出它们共同用到的优势"]),
            ("打开可能", ["列出十个感兴趣的方向，不做评判", "用{top}挑出三个最想试的"]),
            ("真实接触", ["为每个方向找一位从业者聊聊", "参加一次相关的活动或课程"]),
            ("收拢方向", ["选出一个方向作为未来三个月的主线", "定下第一个可衡量的小目标"]),
        ],
        ConfusionCategory::ExecutionBlock => [
            ("降低门槛", ["把目标拆成十分钟的小任务", "每天完成至少一个"]),
            ("建立节奏", ["固定每天的专注时段", "用{top}设计自己的打卡方式"]),
            ("引入反馈", ["找一位同伴每周同步进度", "记录完成后的感受"]),
            ("巩固习惯", ["复盘四周的完成率", "把有效的做法写成自己的规则"]),
        ],
        ConfusionCategory::RelationshipStrain => [
            ("看清期待", ["写下你对对方的期待和自己的底线", "猜测对方的期待"]),
            ("照顾自己", ["每天留出独处时间恢复能量", "觉察哪些情绪属于你"]),
            ("开启对话", ["用{top}准备一次坦诚的对话", "对话中先倾听再表达"]),
            ("调整关系", ["根据对话结果调整相处方式", "确认边界是否被尊重"]),
        ],
        ConfusionCategory::EnergyDrain => [
            ("止损", ["删减一项非必要的承诺", "保证每天七小时睡眠"]),
            ("觉察", ["记录每天的能量高低点", "找出最消耗你的场景"]),
            ("充电", ["每天做一件让{top}发光的小事", "安排一次彻底放空的半天"]),
            ("重建节奏", ["把高能量时段留给最重要的事", "为消耗场景设计应对方式"]),
        ],
        ConfusionCategory::SelfDoubt => [
            ("收集证据", ["列出过去的五个成功经历", "请朋友说出你的三个优点"]),
            ("重新命名", ["把自我批评改写成中性描述", "每天记录一次做得好的瞬间"]),
            ("小挑战", ["用{top}完成一个略有难度的任务", "记录过程中的真实表现"]),
            ("稳定自信", ["复盘四周的证据清单", "给未来的自己写一封信"]),
        ],
        ConfusionCategory::General => [
            ("看清困惑", ["用一页纸写下困惑的全部细节", "圈出最让你在意的一句"]),
            ("认识优势", ["阅读{names}的描述，标出最像你的部分", "观察一周里优势出现的时刻"]),
            ("刻意练习", ["每天刻意使用{top}一次", "记录使用后的结果"]),
            ("整合复盘", ["重读第一周写下的困惑", "写下你现在的新理解"]),
        ],
    }
}

pub fn check_questions(category: ConfusionCategory) -> [&'static str; 3] {
    let specific = match category {
        ConfusionCategory::InfoOverload => "我的决策标准是否已经清晰到可以直接打分？",
        ConfusionCategory::DirectionLost => "有没有哪件事让我愿意投入更多时间？",
        ConfusionCategory::ExecutionBlock => "这周我完成的最小一步是什么？",
        ConfusionCategory::RelationshipStrain => "我是否说出了自己真实的期待？",
        ConfusionCategory::EnergyDrain => "我的能量比上周多了还是少了？",
        ConfusionCategory::SelfDoubt => "这周我收集到了哪些证明自己的证据？",
        ConfusionCategory::General => "我的困惑是否变得更具体了？",
    };
    [
        specific,
        "这周我在哪个时刻最像自己？",
        "下周我想继续保留的一个做法是什么？",
    ]
}

/// Substitutes `{key}` placeholders. Unknown placeholders are left as-is.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}

/// Verifies every scenario has a highlight for every domain.
pub fn check_coverage() -> Vec<String> {
    let mut problems = Vec::new();
    for scenario in all_scenarios() {
        for domain in Domain::ALL {
            if highlight_template(scenario.id, domain).is_none() {
                problems.push(format!(
                    "no highlight copy for scenario '{}' × domain {}",
                    scenario.id,
                    domain.label()
                ));
            }
        }
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scenario_domain_pair_has_copy() {
        let problems = check_coverage();
        assert!(problems.is_empty(), "missing copy: {problems:?}");
    }

    #[test]
    fn test_unknown_scenario_has_no_highlight() {
        assert!(highlight_template("unknown", Domain::Executing).is_none());
    }

    #[test]
    fn test_fill_replaces_all_occurrences() {
        let out = fill("{top}和{top}，还有{names}", &[("top", "专注"), ("names", "专注、学习")]);
        assert_eq!(out, "专注和专注，还有专注、学习");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        assert_eq!(fill("{missing}", &[("top", "x")]), "{missing}");
    }

    #[test]
    fn test_low_intensity_has_no_opening() {
        assert!(judgment_opening(Intensity::Low).is_empty());
        assert!(!judgment_opening(Intensity::High).is_empty());
    }
}
