//! Korean text renderings of fortune periods.

use super::types::{FortuneKind, FortunePeriod};

const SEPARATOR: &str = " · ";

impl FortuneKind {
    /// Ordinal label such as `3대운` or `12일운`.
    pub fn order_label(self, order: u32) -> String {
        format!("{order}{}", self.hangul())
    }
}

impl FortunePeriod {
    /// `갑자(甲子)`; empty when the pillar is unresolved.
    pub fn ganji_text(&self) -> String {
        self.pillar
            .map(|p| format!("{}({})", p.hangul(), p.hanja()))
            .unwrap_or_default()
    }

    /// Ordinal label, empty without an order.
    pub fn order_text(&self) -> String {
        self.order
            .map(|o| self.kind.order_label(o))
            .unwrap_or_default()
    }

    /// Start age as text, `-` when unknown.
    pub fn start_age_text(&self) -> String {
        self.age_from
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// `2024년 3월 5일`, cut off at the first missing component.
pub fn format_fortune_date(period: &FortunePeriod) -> String {
    let Some(y) = period.year else {
        return String::new();
    };
    match (period.month, period.day) {
        (None, _) => format!("{y}년"),
        (Some(m), None) => format!("{y}년 {m}월"),
        (Some(m), Some(d)) => format!("{y}년 {m}월 {d}일"),
    }
}

/// One-line summary: ganji, order, age range, then reference date or start year.
pub fn format_fortune_summary(period: Option<&FortunePeriod>) -> String {
    let Some(p) = period else {
        return "없음".to_string();
    };
    let mut parts = Vec::new();
    let ganji = p.ganji_text();
    if !ganji.is_empty() {
        parts.push(ganji);
    }
    let order = p.order_text();
    if !order.is_empty() {
        parts.push(order);
    }
    if let (Some(from), Some(to)) = (p.age_from, p.age_to) {
        parts.push(format!("{from}~{to}세"));
    }
    let date = format_fortune_date(p);
    if !date.is_empty() {
        parts.push(match p.kind {
            FortuneKind::Decade => format!("기준 {date}"),
            kind => format!("{} 기준 {date}", kind.hangul()),
        });
    } else if let Some(start) = p.start_year {
        parts.push(format!("시작 {start}년"));
    }
    if parts.is_empty() {
        "없음".to_string()
    } else {
        parts.join(SEPARATOR)
    }
}

/// Compact list row: order, date, ganji.
pub fn format_fortune_preview(period: &FortunePeriod) -> String {
    [period.order_text(), format_fortune_date(period), period.ganji_text()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
