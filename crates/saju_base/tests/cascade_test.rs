//! End-to-end cascade tests: JSON document → chart → selection state.
//!
//! The oracle here is a closure over the sexagenary cycle so the tests do not
//! depend on any calendar rules.

use saju_base::{
    CascadeConfig, CascadeSelection, Chart, ChartDocument, FnOracle, FortuneCascade, FortuneKind,
    FourPillars, OracleError, OraclePillars, Pillar, Stem, TenGod, pillar_from_cycle,
};
use saju_base::fortune::{format_fortune_preview, format_fortune_summary};
use saju_time::LocalDateTime;

const DOC: &str = r#"{
  "dayMaster": 0,
  "birthYear": 1990,
  "pillars": [
    {"k": "Y", "stem": 6, "branch": 6},
    {"k": "M", "stem": 4, "branch": 2},
    {"k": "D", "stem": 0, "branch": 0},
    {"k": "H", "stem": 2, "branch": 2}
  ],
  "daeun": {"type": "DAEUN", "order": 2, "stem": 5, "branch": 3, "ageFrom": 13, "ageTo": 22, "startYear": 2002},
  "seun": {"type": "SEUN", "year": 2024, "month": 3, "stem": 0, "branch": 4},
  "ilun": {"type": "ILUN", "day": 17},
  "daeunList": [
    {"type": "DAEUN", "order": 1, "stem": 5, "branch": 3, "ageFrom": 3, "ageTo": 12, "startYear": 1992},
    {"type": "DAEUN", "order": 2, "ganjiHanja": "庚辰", "ageFrom": 13, "ageTo": 22, "startYear": 2002},
    {"type": "DAEUN", "order": 3, "stemKo": "신", "branchKo": "사", "ageFrom": 23, "ageTo": 32, "startYear": 2012}
  ]
}"#;

fn oracle(seed: &LocalDateTime) -> Result<OraclePillars, OracleError> {
    if seed.year > 2100 {
        return Err(OracleError::OutOfRange(seed.to_string()));
    }
    Ok(OraclePillars {
        local: *seed,
        pillars: FourPillars {
            year: Some(pillar_from_cycle(i64::from(seed.year) - 4)),
            month: Some(pillar_from_cycle(i64::from(seed.month))),
            day: Some(pillar_from_cycle(i64::from(seed.day))),
            hour: None,
        },
    })
}

fn chart() -> Chart {
    Chart::from_document(&ChartDocument::from_json(DOC).expect("valid document"))
}

#[test]
fn document_decades_resolve_by_any_glyph_form() {
    let chart = chart();
    assert_eq!(chart.day_master, Some(Stem::Gap));
    let decades = &chart.fortunes.decades;
    assert_eq!(decades.len(), 3);
    assert_eq!(decades[0].pillar, Pillar::parse("己卯"));
    assert_eq!(decades[1].pillar, Pillar::parse("庚辰"));
    assert_eq!(decades[2].pillar, Pillar::parse("辛巳"));
}

#[test]
fn full_cascade_from_document() {
    let chart = chart();
    let oracle = FnOracle(oracle);
    let mut cascade = FortuneCascade::new(chart.fortunes.clone(), &oracle, CascadeConfig::default());
    assert_eq!(cascade.selection(), CascadeSelection {
        decade: Some(0),
        year: Some(0),
        month: Some(0),
        day: Some(0),
    });

    cascade.select_decade(1).unwrap();
    let years = cascade.candidates(FortuneKind::Year);
    assert_eq!(years.len(), 10);
    let got: Vec<(Option<i32>, Option<i32>)> = years.iter().map(|y| (y.year, y.age_from)).collect();
    let want: Vec<(Option<i32>, Option<i32>)> = (0..10).map(|i| (Some(2002 + i), Some(13 + i))).collect();
    assert_eq!(got, want);

    cascade.select_year(2).unwrap();
    let months = cascade.candidates(FortuneKind::Month);
    assert_eq!(months.len(), 12);
    assert!(months.iter().all(|m| m.year == Some(2004)));

    // February 2004 is a leap month.
    cascade.select_month(1).unwrap();
    let days = cascade.candidates(FortuneKind::Day);
    assert_eq!(days.len(), 29);
    assert_eq!(days[16].pillar, Some(pillar_from_cycle(17)));

    cascade.select_day(28).unwrap();
    assert!(cascade.select_day(29).is_err());
    let day = cascade.selected(FortuneKind::Day).unwrap();
    assert_eq!(format_fortune_preview(day), "29일운 · 2004년 2월 29일 · 계사(癸巳)");
}

#[test]
fn synthesized_periods_carry_relations_to_day_master() {
    let chart = chart();
    let oracle = FnOracle(oracle);
    let cascade = FortuneCascade::new(chart.fortunes.clone(), &oracle, CascadeConfig::default());
    // 1992 is 壬申 against a 甲 day master.
    let year = cascade.selected(FortuneKind::Year).unwrap();
    assert_eq!(year.pillar, Pillar::parse("壬申"));
    let attrs = cascade.selected_attributes(FortuneKind::Year, chart.day_master).unwrap();
    assert_eq!(attrs.stem.ten_god, Some(TenGod::Pyeonin));
    assert!(attrs.twelve_fate.is_some());
    assert_eq!(
        format_fortune_summary(Some(year)),
        "임신(壬申) · 1세운 · 3~3세 · 세운 기준 1992년"
    );
}

#[test]
fn oracle_failures_degrade_single_candidates() {
    let doc = ChartDocument::from_json(
        r#"{"daeunList": [{"order": 9, "ageFrom": 83, "ageTo": 92, "startYear": 2095}]}"#,
    )
    .unwrap();
    let chart = Chart::from_document(&doc);
    let oracle = FnOracle(oracle);
    let cascade = FortuneCascade::new(chart.fortunes, &oracle, CascadeConfig::default());
    let years = cascade.candidates(FortuneKind::Year);
    assert_eq!(years.len(), 10);
    assert_eq!(years.iter().filter(|y| y.is_resolved()).count(), 6);
    assert!(years[6].pillar.is_none());
    assert_eq!(years[6].year, Some(2101));
}

#[test]
fn extreme_document_years_and_ages_degrade_without_panicking() {
    let oracle = FnOracle(oracle);

    let doc = ChartDocument::from_json(
        r#"{"daeunList": [{"ageFrom": 1, "ageTo": 10, "startYear": 2147483647}]}"#,
    )
    .unwrap();
    let cascade = FortuneCascade::new(Chart::from_document(&doc).fortunes, &oracle, CascadeConfig::default());
    let years = cascade.candidates(FortuneKind::Year);
    assert_eq!(years.len(), 1);
    assert_eq!(years[0].year, Some(i32::MAX));
    assert!(years[0].pillar.is_none());
    assert_eq!(cascade.candidates(FortuneKind::Month).len(), 12);
    assert!(cascade.candidates(FortuneKind::Day).iter().all(|d| !d.is_resolved()));

    let doc = ChartDocument::from_json(
        r#"{"daeunList": [{"ageFrom": 1, "ageTo": 2147483647, "startYear": 2000}]}"#,
    )
    .unwrap();
    let cascade = FortuneCascade::new(Chart::from_document(&doc).fortunes, &oracle, CascadeConfig::default());
    let years = cascade.candidates(FortuneKind::Year);
    assert_eq!(years.len(), 10);
    assert_eq!(years[9].year, Some(2009));
}

#[test]
fn empty_document_has_empty_levels() {
    let chart = Chart::from_document(&ChartDocument::from_json("{}").unwrap());
    let oracle = FnOracle(oracle);
    let cascade = FortuneCascade::new(chart.fortunes, &oracle, CascadeConfig::default());
    assert_eq!(cascade.selection(), CascadeSelection::default());
    assert!(cascade.candidates(FortuneKind::Year).is_empty());
    assert_eq!(format_fortune_summary(cascade.selected(FortuneKind::Day)), "없음");
}

#[test]
fn custom_config_shortens_day_list() {
    let config = CascadeConfig {
        max_day_candidates: 7,
        ..CascadeConfig::default()
    };
    let oracle = FnOracle(oracle);
    let cascade = FortuneCascade::new(chart().fortunes, &oracle, config);
    assert_eq!(cascade.candidates(FortuneKind::Day).len(), 7);
}
