//! Mock generator: deterministic template filling in place of an LLM call.
//!
//! Same form in, byte-identical result out. Variants are chosen with the
//! context seed, never with randomness.

use crate::analysis::context::DiagnosisContext;
use crate::catalog::Strength;
use crate::generation::mock_rules::{
    blindspot_suffix, blindspot_template, career_directions, category_actions, check_questions,
    fill, guide_weeks, highlight_template, judgment_opening, judgment_templates,
    missing_domain_action, missing_domain_drain, scenario_action, work_style, GENERIC_HIGHLIGHT,
    URGENT_PREFIX,
};
use crate::generation::verdict::{Verdict, MAX_ACTIONS};
use crate::models::result::{
    AdvantageTip, CareerDirection, CareerResult, GuideResult, GuideWeek, Judgment, ResultData,
};

/// Placeholder values shared by every template.
fn placeholders(ctx: &DiagnosisContext) -> [(&'static str, String); 5] {
    [
        ("top", ctx.top_strength().name.to_string()),
        ("names", ctx.strength_names()),
        ("focus", ctx.scenario.focus.to_string()),
        ("domain", ctx.dominant_domain.label().to_string()),
        ("keywords", ctx.profile.matched_keywords.join("、")),
    ]
}

fn render(template: &str, ctx: &DiagnosisContext) -> String {
    let values = placeholders(ctx);
    let pairs: Vec<(&str, &str)> = values.iter().map(|(k, v)| (*k, v.as_str())).collect();
    fill(template, &pairs)
}

pub fn generate_result(ctx: &DiagnosisContext) -> ResultData {
    let category = ctx.profile.category;

    let highlight_src =
        highlight_template(ctx.scenario.id, ctx.dominant_domain).unwrap_or(GENERIC_HIGHLIGHT);
    let highlight = render(highlight_src, ctx);

    let variants = judgment_templates(category);
    let summary = format!(
        "{}{}",
        judgment_opening(ctx.profile.intensity),
        render(variants[ctx.seed % variants.len()], ctx)
    );

    let blindspot = format!(
        "{}{}",
        render(blindspot_template(ctx.dominant_domain), ctx),
        blindspot_suffix(category)
    );

    ResultData {
        highlight,
        judgment: Judgment {
            verdict: Verdict::for_category(category),
            summary,
        },
        blindspot,
        actions: build_actions(ctx),
        advantage_tips: build_tips(ctx),
    }
}

/// Two category actions, one scenario action, then optional conflict and
/// missing-domain actions, capped at `MAX_ACTIONS`.
fn build_actions(ctx: &DiagnosisContext) -> Vec<String> {
    let pool = category_actions(ctx.profile.category);
    let start = ctx.seed % pool.len();

    let mut actions: Vec<String> = (0..2)
        .map(|i| render(pool[(start + i) % pool.len()], ctx))
        .collect();
    actions.push(render(scenario_action(ctx.scenario.id), ctx));

    if let Some(conflict) = ctx.conflicts.first() {
        actions.push(format!(
            "平衡{}与{}：{}",
            conflict.first, conflict.second, conflict.advice
        ));
    }
    if let Some(domain) = ctx.missing_domains.first() {
        actions.push(missing_domain_action(*domain).to_string());
    }
    actions.truncate(MAX_ACTIONS);

    if ctx.profile.urgent {
        if let Some(first) = actions.first_mut() {
            first.insert_str(0, URGENT_PREFIX);
        }
    }
    actions
}

fn build_tips(ctx: &DiagnosisContext) -> Vec<AdvantageTip> {
    ctx.strengths.iter().map(|s| catalog_tip(s)).collect()
}

/// The catalog's leverage line as a tip. Also back-fills tips the LLM left out.
pub fn catalog_tip(strength: &Strength) -> AdvantageTip {
    AdvantageTip {
        strength_id: strength.id.to_string(),
        strength_name: strength.name.to_string(),
        tip: strength.leverage.to_string(),
    }
}

pub fn generate_career(ctx: &DiagnosisContext) -> CareerResult {
    let ranked = ctx.ranked_domains();

    // top domain contributes two directions, the runner-up one
    let mut directions = Vec::new();
    for (rank, domain) in ranked.iter().take(2).enumerate() {
        let take = if rank == 0 { 2 } else { 1 };
        let matched: Vec<String> = ctx
            .strengths_in(*domain)
            .iter()
            .map(|s| s.name.to_string())
            .collect();
        for (title, reason) in career_directions(*domain).iter().take(take) {
            directions.push(CareerDirection {
                title: title.to_string(),
                reason: format!("{}，与你的{}相呼应", reason, matched.join("、")),
                matched_strengths: matched.clone(),
            });
        }
    }
    if ranked.len() == 1 {
        let (title, reason) = career_directions(ranked[0])[2];
        directions.push(CareerDirection {
            title: title.to_string(),
            reason: reason.to_string(),
            matched_strengths: ctx.strengths.iter().map(|s| s.name.to_string()).collect(),
        });
    }

    let mut energy_drains: Vec<String> = ctx
        .missing_domains
        .iter()
        .map(|d| missing_domain_drain(*d).to_string())
        .collect();
    energy_drains.extend(
        ctx.conflicts
            .iter()
            .map(|c| format!("同时要求{}和{}的情境：{}", c.first, c.second, c.tension)),
    );

    let next_step = match directions.first() {
        Some(first) => format!(
            "本周找一位{}聊30分钟，验证这个方向是否让你的{}有用武之地。",
            first.title,
            ctx.top_strength().name
        ),
        None => render("本周用{top}梳理一次你对{focus}的期待。", ctx),
    };

    CareerResult {
        directions,
        work_style: work_style(ctx.dominant_domain).to_string(),
        energy_drains,
        next_step,
    }
}

pub fn generate_guide(ctx: &DiagnosisContext) -> GuideResult {
    let category = ctx.profile.category;

    let weeks = guide_weeks(category)
        .iter()
        .enumerate()
        .map(|(i, (theme, tasks))| GuideWeek {
            week: (i + 1) as u8,
            theme: theme.to_string(),
            tasks: tasks.iter().map(|t| render(t, ctx)).collect(),
        })
        .collect();

    GuideResult {
        title: format!(
            "{}：用{}走出{}的四周计划",
            ctx.scenario.title,
            ctx.top_strength().name,
            category.label()
        ),
        weeks,
        daily_practice: format!("每天睡前花五分钟回答：今天我用{}做成了什么？", ctx.top_strength().name),
        check_questions: check_questions(category)
            .iter()
            .map(|q| q.to_string())
            .collect(),
    }
}
