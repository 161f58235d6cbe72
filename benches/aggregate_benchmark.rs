use criterion::{criterion_group, criterion_main, Criterion};
use pubg_stats_bot::models::pubg::{MatchDocument, MatchRecord};
use pubg_stats_bot::services::aggregator::join_match;
use serde_json::{json, Value};
use std::hint::black_box;

/// A 100-player squad match with the target player last.
fn squad_match_json() -> Value {
    let mut included = Vec::new();
    for team in 0..25 {
        let mut refs = Vec::new();
        for slot in 0..4 {
            let n = team * 4 + slot;
            included.push(json!({
                "type": "participant",
                "id": format!("participant-{}", n),
                "attributes": { "stats": {
                    "playerId": format!("account.{}", n),
                    "kills": n % 7,
                    "damageDealt": f64::from(n) * 12.5,
                    "timeSurvived": 900 + n
                }}
            }));
            refs.push(json!({ "type": "participant", "id": format!("participant-{}", n) }));
        }
        let won = if team == 0 { "true" } else { "false" };
        included.push(json!({
            "type": "roster",
            "id": format!("roster-{}", team),
            "attributes": { "stats": { "rank": team + 1 }, "won": won },
            "relationships": { "participants": { "data": refs } }
        }));
    }
    included.push(json!({ "type": "asset", "id": "asset-1", "attributes": {} }));

    json!({
        "data": {
            "type": "match",
            "id": "bench-match",
            "attributes": { "gameMode": "squad-fpp", "mapName": "Baltic_Main", "createdAt": "2024-01-01T00:00:00Z" }
        },
        "included": included
    })
}

fn benchmark_join_match(c: &mut Criterion) {
    let raw = squad_match_json();
    let record: MatchRecord =
        MatchRecord::from(serde_json::from_value::<MatchDocument>(raw.clone()).unwrap());

    let mut group = c.benchmark_group("match_join");

    group.bench_function("parse_match_document", |b| {
        b.iter(|| {
            let doc: MatchDocument = serde_json::from_value(black_box(raw.clone())).unwrap();
            MatchRecord::from(doc)
        })
    });

    group.bench_function("join_last_player", |b| {
        b.iter(|| join_match(black_box(&record), black_box("account.99")))
    });

    group.bench_function("join_missing_player", |b| {
        b.iter(|| join_match(black_box(&record), black_box("account.nobody")))
    });

    group.finish();
}

criterion_group!(benches, benchmark_join_match);
criterion_main!(benches);
