use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use ipl_terminal::stats::{match_stats, pie_segments};
use ipl_terminal::team_api::{MatchRecord, parse_team_matches_json};

fn long_history(len: usize) -> Vec<MatchRecord> {
    let statuses = ["Won", "Lost", "Draw", "No Result"];
    (0..len)
        .map(|i| MatchRecord {
            id: i.to_string(),
            match_status: statuses[i % statuses.len()].to_string(),
            ..MatchRecord::default()
        })
        .collect()
}

fn bench_team_matches_parse(c: &mut Criterion) {
    c.bench_function("team_matches_parse", |b| {
        b.iter(|| {
            let data = parse_team_matches_json(black_box(TEAM_RCB_JSON)).unwrap();
            black_box(data.recent_matches.len());
        })
    });
}

fn bench_match_stats(c: &mut Criterion) {
    let history = long_history(1_000);
    c.bench_function("match_stats_1k", |b| {
        b.iter(|| {
            let buckets = match_stats(black_box(&history));
            black_box(pie_segments(&buckets));
        })
    });
}

criterion_group!(perf, bench_team_matches_parse, bench_match_stats);
criterion_main!(perf);

static TEAM_RCB_JSON: &str = include_str!("../tests/fixtures/team_rcb.json");
