use super::*;
use crate::eval::{evaluate, MATE_SCORE};
use chess_core::{legal_moves, move_to_uci, START_FEN};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MATE_IN_ONE_WHITE: &str = "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1";
const MATE_IN_ONE_BLACK: &str = "4q1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1";
const HANGING_QUEEN: &str = "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1";

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn run(fen: &str, depth: u8, maximizing: bool) -> SearchOutcome {
    let mut nodes = 0;
    search(&pos(fen), depth, maximizing, &Evaluator::default(), &mut nodes)
}

fn best_uci(outcome: &SearchOutcome) -> String {
    move_to_uci(outcome.best_move.expect("search returned no move"))
}

#[test]
fn test_depth_zero_is_static_eval() {
    for fen in [START_FEN, KIWIPETE, HANGING_QUEEN] {
        let outcome = run(fen, 0, true);
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.score, evaluate(&pos(fen)));
    }
}

#[test]
fn test_returned_move_is_legal() {
    for fen in [START_FEN, KIWIPETE, HANGING_QUEEN, MATE_IN_ONE_BLACK] {
        let legal = legal_moves(&pos(fen));
        for depth in 1..=2 {
            for maximizing in [true, false] {
                let outcome = run(fen, depth, maximizing);
                let mv = outcome.best_move.expect("position has legal moves");
                assert!(legal.contains(&mv), "{fen} depth {depth}: illegal {mv:?}");
            }
        }
    }
}

#[test]
fn test_alpha_beta_matches_minimax() {
    let cases: &[(&str, u8)] = &[
        (START_FEN, 3),
        (KIWIPETE, 2),
        (HANGING_QUEEN, 3),
        (MATE_IN_ONE_WHITE, 3),
        (MATE_IN_ONE_BLACK, 3),
        ("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 2 3", 3),
        ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3),
    ];
    let eval = Evaluator::default();

    for &(fen, depth) in cases {
        for maximizing in [true, false] {
            let mut pruned_nodes = 0;
            let pruned = search(&pos(fen), depth, maximizing, &eval, &mut pruned_nodes);

            let mut full_nodes = 0;
            let mut tmp = pos(fen);
            let full = minimax(&mut tmp, depth, maximizing, &eval, &mut full_nodes);

            assert_eq!(pruned, full, "{fen} depth {depth} maximizing {maximizing}");
            assert!(pruned_nodes <= full_nodes);
        }
    }
}

#[test]
fn test_pruning_skips_nodes() {
    let eval = Evaluator::default();
    let mut pruned_nodes = 0;
    search(&Position::startpos(), 3, true, &eval, &mut pruned_nodes);

    let mut full_nodes = 0;
    minimax(&mut Position::startpos(), 3, true, &eval, &mut full_nodes);

    assert!(pruned_nodes < full_nodes);
}

#[test]
fn test_deterministic() {
    let first = run(KIWIPETE, 2, true);
    for _ in 0..3 {
        assert_eq!(run(KIWIPETE, 2, true), first);
    }
}

#[test]
fn test_ties_keep_first_generated_move() {
    // Every move from the start position scores 0 at depth 2
    let outcome = run(START_FEN, 2, true);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.best_move, legal_moves(&Position::startpos()).first().copied());
}

#[test]
fn test_finds_mate_in_one() {
    for depth in 1..=3 {
        let outcome = run(MATE_IN_ONE_WHITE, depth, true);
        assert_eq!(best_uci(&outcome), "e1e8", "depth {depth}");
        assert_eq!(outcome.score, MATE_SCORE);
    }

    let mated = pos(MATE_IN_ONE_WHITE).with_move(run(MATE_IN_ONE_WHITE, 1, true).best_move.unwrap());
    assert_eq!(evaluate(&mated), MATE_SCORE);
}

#[test]
fn test_minimizing_root_finds_black_mate() {
    let outcome = run(MATE_IN_ONE_BLACK, 1, false);
    assert_eq!(best_uci(&outcome), "e8e1");
    assert_eq!(outcome.score, -MATE_SCORE);
}

#[test]
fn test_maximizing_root_with_black_to_move_avoids_black_mate() {
    // A maximizing root scores Black's candidate moves for White, so the
    // mating move is the worst choice under that reading.
    let outcome = run(MATE_IN_ONE_BLACK, 1, true);
    assert_ne!(best_uci(&outcome), "e8e1");
    assert!(outcome.score > -MATE_SCORE);
}

#[test]
fn test_wins_hanging_queen() {
    for depth in 1..=2 {
        let outcome = run(HANGING_QUEEN, depth, true);
        assert_eq!(best_uci(&outcome), "d2d5", "depth {depth}");
        assert_eq!(outcome.score, 5);
    }
}

#[test]
fn test_terminal_root_returns_no_move() {
    for fen in ["R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1", "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1"] {
        let outcome = run(fen, 2, true);
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.score, evaluate(&pos(fen)));
    }
}

#[test]
fn test_search_restores_position() {
    let mut p = pos(KIWIPETE);
    let before = p.clone();
    let mut nodes = 0;
    alpha_beta(&mut p, 2, -INFINITY, INFINITY, true, &Evaluator::default(), &mut nodes);
    assert_eq!(p, before);
    assert!(nodes > 48);
}
