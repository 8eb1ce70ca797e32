use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use box_heuristics::goals::GoalIndex;
use box_heuristics::heuristic::{Estimator, Heuristic};
use box_heuristics::state::State;
use box_heuristics::strategy::{new_strategy, StrategyKind};


fn make_state() -> State {
    State::from_json(include_str!("../states/warehouse.json"))
        .expect("Couldn't parse state fixture")
}

fn bench_goal_index(c: &mut Criterion) {
    let state = make_state();
    c.bench_function("goal_index", |b| b.iter(|| {
        GoalIndex::new(black_box(&state))
    }));
}

fn bench_estimators(c: &mut Criterion) {
    let state = make_state();
    let goals = Arc::new(GoalIndex::new(&state).expect("Malformed fixture"));
    let mut group = c.benchmark_group("estimators");
    for estimator in Estimator::ALL {
        let heuristic = Heuristic::new(goals.clone(), estimator);
        group.bench_function(estimator.name(), |b| b.iter(|| {
            heuristic.h(black_box(&state))
        }));
    }
    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let state = make_state();
    let goals = Arc::new(GoalIndex::new(&state).expect("Malformed fixture"));
    let mut group = c.benchmark_group("strategies");
    for kind in [StrategyKind::Astar, StrategyKind::Wastar, StrategyKind::Greedy] {
        let heuristic = Heuristic::new(goals.clone(), Estimator::default());
        let strategy = new_strategy(kind, heuristic, Some(5))
            .expect("Invalid strategy");
        group.bench_function(strategy.describe(), |b| b.iter(|| {
            strategy.evaluate(black_box(&state))
        }));
    }
    group.finish();
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench_goal_index, bench_estimators, bench_strategies,
}
criterion_main!(benches);
