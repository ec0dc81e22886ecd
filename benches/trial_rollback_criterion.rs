use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rollback_chess::engines::engine_greedy::{GreedyEngine, OpponentConfig};
use rollback_chess::engines::engine_trait::Engine;
use rollback_chess::game_state::chess_types::{Board, Color, GameState};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    diagram: &'static str,
    to_move: Color,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start",
        diagram: "
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        ",
        to_move: Color::Black,
    },
    BenchCase {
        name: "fools_mate",
        diagram: "
            rnb.kbnr
            pppp.ppp
            ........
            ....p...
            ......Pq
            .....P..
            PPPPP..P
            RNBQKBNR
        ",
        to_move: Color::White,
    },
    BenchCase {
        name: "open_middlegame",
        diagram: "
            r...k..r
            ppp..ppp
            ..n.bn..
            ...qp...
            ...P....
            ..N..N..
            PPP.QPPP
            R.B.K..R
        ",
        to_move: Color::Black,
    },
];

fn bench_checkmate(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_checkmate");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let board = Board::from_diagram(case.diagram).expect("benchmark diagram should parse");
        let mut game = GameState::from_board(board, case.to_move);

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &case.to_move, |b, color| {
            b.iter(|| {
                let mated = game
                    .is_checkmate(black_box(*color))
                    .expect("checkmate query should run");
                black_box(mated)
            });
        });
    }

    group.finish();
}

fn bench_opponent_turn(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_turn");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES.iter().filter(|case| case.to_move == Color::Black) {
        let board = Board::from_diagram(case.diagram).expect("benchmark diagram should parse");
        let game = GameState::from_board(board, Color::Black);

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &game, |b, game| {
            let mut engine = GreedyEngine::new(OpponentConfig {
                color: Color::Black,
                seed: Some(1234),
            });
            b.iter(|| {
                let mut trial = game.clone();
                let played = engine
                    .play_turn(black_box(&mut trial))
                    .expect("greedy turn should run");
                black_box(played)
            });
        });
    }

    group.finish();
}

criterion_group!(trial_rollback_benches, bench_checkmate, bench_opponent_turn);
criterion_main!(trial_rollback_benches);
