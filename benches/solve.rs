use capture_solver::core::{Board, Stone, Topology};
use capture_solver::solver::{Solver, SolverConfig, TerminationPolicy};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn solve_fresh(topology: Topology, policy: TerminationPolicy) -> usize {
    let config = SolverConfig::new(topology).with_policy(policy);
    let mut solver = Solver::new(config).expect("valid config");
    solver.solve_empty(Stone::Black).expect("empty board");
    solver.table().len()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve/empty");
    for size in ["4", "5", "6", "2x2", "2x3"] {
        let topology: Topology = size.parse().expect("board size");
        for policy in [TerminationPolicy::FirstCapture, TerminationPolicy::NoLegalMoveLoses] {
            group.bench_with_input(
                BenchmarkId::new(policy.name(), size),
                &topology,
                |b, &topology| b.iter(|| black_box(solve_fresh(topology, policy))),
            );
        }
    }
    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let topology = Topology::grid(3, 3).expect("3x3");
    let board = Board::parse(topology, "1,0,-1,0,1,0,-1,0,0").expect("board");
    c.bench_function("rules/legal_moves_3x3", |b| {
        b.iter(|| black_box(board.legal_moves(Stone::White).count()))
    });
}

criterion_group!(solve, bench_solve, bench_legal_moves);
criterion_main!(solve);
