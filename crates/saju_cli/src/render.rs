//! Plain-text rendering for the terminal.

use saju_base::fortune::{format_fortune_preview, format_fortune_summary};
use saju_base::{
    ALL_ELEMENTS, CascadeLevel, Chart, FortuneCascade, FortuneKind, GanjiAttributes,
    PillarOracle, PillarOrder, Script, format_pillars_text,
};

fn or_dash(v: Option<&str>) -> &str {
    v.unwrap_or("-")
}

pub fn attributes_lines(a: &GanjiAttributes) -> Vec<String> {
    let hidden: Vec<String> = a
        .hidden_stems
        .iter()
        .map(|h| {
            let god = h.ten_god.map(|t| format!(" {}", t.hangul())).unwrap_or_default();
            format!("{}({}%){god}", h.stem.hanja(), h.ratio_percent)
        })
        .collect();
    let void = a
        .void_branches
        .map(|[x, y]| format!("{}{}", x.hanja(), y.hanja()));
    vec![
        format!("{} ({})", a.ganji_hanja, a.ganji_hangul),
        format!(
            "  stem   {} {}{} {}",
            a.stem.hanja,
            a.stem.element.hangul(),
            a.stem.polarity.hangul(),
            or_dash(a.stem.ten_god.map(|t| t.hangul())),
        ),
        format!(
            "  branch {} {}{} {}",
            a.branch.hanja,
            a.branch.element.hangul(),
            a.branch.polarity.hangul(),
            or_dash(a.branch.ten_god.map(|t| t.hangul())),
        ),
        format!("  fate   {}", or_dash(a.twelve_fate.map(|f| f.hangul()))),
        format!("  hidden {}", hidden.join(" ")),
        format!("  nayin  {}", or_dash(a.nayin)),
        format!("  void   {}", or_dash(void.as_deref())),
    ]
}

pub fn chart_lines(chart: &Chart, script: Script) -> Vec<String> {
    let mut out = vec![format_pillars_text(&chart.pillars, PillarOrder::Calendar, script)];
    out.push(format!(
        "day master: {}",
        or_dash(chart.day_master.map(|s| s.hanja()))
    ));
    for row in chart.details(PillarOrder::Display) {
        let Some(attrs) = &row.attributes else {
            out.push(format!("{}: -", row.slot.pillar_label()));
            continue;
        };
        let ganji = match script {
            Script::Hangul => &attrs.ganji_hangul,
            Script::Hanja => &attrs.ganji_hanja,
        };
        out.push(format!(
            "{}: {ganji}  {} / {}  {}",
            row.slot.pillar_label(),
            row.stem_role(),
            row.branch_role(),
            or_dash(attrs.twelve_fate.map(|f| f.hangul())),
        ));
    }
    let balance = chart.balance();
    let shares: Vec<String> = ALL_ELEMENTS
        .iter()
        .map(|e| format!("{} {:.0}%", e.hangul(), balance.get(*e) * 100.0))
        .collect();
    out.push(format!("elements: {}", shares.join(" · ")));
    let mut summary = format!("balance: {:.0}", balance.balance_score());
    if let Some(dm) = chart.day_master {
        summary.push_str(&format!("  day master support: {:.0}", balance.day_master_support(dm)));
    }
    out.push(summary);
    out
}

pub fn cascade_lines<O: PillarOracle + ?Sized>(cascade: &FortuneCascade<'_, O>) -> Vec<String> {
    let mut out = Vec::new();
    let levels: [CascadeLevel; 4] = [
        FortuneKind::Decade,
        FortuneKind::Year,
        FortuneKind::Month,
        FortuneKind::Day,
    ];
    for level in levels {
        let list = cascade.candidates(level);
        out.push(format!("[{}] {}", level.hangul(), list.len()));
        if list.is_empty() {
            out.push("    (없음)".to_string());
            continue;
        }
        let selected = cascade.selection().get(level);
        for (i, p) in list.iter().enumerate() {
            let mark = if selected == Some(i) { '*' } else { ' ' };
            let text = format_fortune_preview(p);
            out.push(format!("  {mark} {i:>2} {}", if text.is_empty() { "-" } else { text.as_str() }));
        }
        out.push(format!("    → {}", format_fortune_summary(cascade.selected(level))));
    }
    out
}
