use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    ALL_BRANCHES, ALL_STEMS, CascadeConfig, Chart, ChartDocument, FnOracle, FortuneCascade,
    FourPillars, OracleError, OraclePillars, Pillar, Stem, ganji_attributes, pillar_from_cycle,
    resolve_branch, resolve_stem, twelve_fate,
};
use saju_time::LocalDateTime;

fn fake_oracle(seed: &LocalDateTime) -> Result<OraclePillars, OracleError> {
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

fn resolver_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");
    group.bench_function("resolve_stem_hangul", |b| {
        b.iter(|| resolve_stem(black_box("계")))
    });
    group.bench_function("resolve_branch_hanja", |b| {
        b.iter(|| resolve_branch(black_box("亥")))
    });
    group.bench_function("parse_pair", |b| b.iter(|| Pillar::parse(black_box("갑자"))));
    group.finish();
}

fn attributes_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("attributes");
    group.bench_function("twelve_fate_all", |b| {
        b.iter(|| {
            for s in ALL_STEMS {
                for br in ALL_BRANCHES {
                    black_box(twelve_fate(s, br));
                }
            }
        })
    });
    group.bench_function("ganji_attributes", |b| {
        let p = pillar_from_cycle(41);
        b.iter(|| ganji_attributes(black_box(p), Some(Stem::Gap)))
    });
    group.finish();
}

fn cascade_bench(c: &mut Criterion) {
    let doc = ChartDocument::from_json(
        r#"{"dayMaster": 0, "daeunList": [
            {"order": 1, "ageFrom": 3, "ageTo": 12, "startYear": 1992},
            {"order": 2, "ageFrom": 13, "ageTo": 22, "startYear": 2002}
        ]}"#,
    )
    .expect("bench document");
    let chart = Chart::from_document(&doc);
    let oracle = FnOracle(fake_oracle);

    let mut group = c.benchmark_group("cascade");
    group.bench_function("build", |b| {
        b.iter(|| FortuneCascade::new(black_box(chart.fortunes.clone()), &oracle, CascadeConfig::default()))
    });
    group.bench_function("select_decade", |b| {
        let mut cascade = FortuneCascade::new(chart.fortunes.clone(), &oracle, CascadeConfig::default());
        let mut i = 0;
        b.iter(|| {
            i ^= 1;
            cascade.select_decade(black_box(i)).expect("in range");
        })
    });
    group.finish();
}

criterion_group!(benches, resolver_bench, attributes_bench, cascade_bench);
criterion_main!(benches);
