use super::*;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

#[test]
fn test_startpos_is_balanced() {
    assert_eq!(evaluate(&Position::startpos()), 0);
}

#[test]
fn test_missing_black_queen_is_plus_nine() {
    let full = pos("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let no_queen = pos("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(evaluate(&no_queen) - evaluate(&full), 9);
}

#[test]
fn test_score_is_white_relative_regardless_of_mover() {
    let white = pos("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let black = pos("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");
    assert_eq!(evaluate(&white), 5);
    assert_eq!(evaluate(&black), 5);
}

#[test]
fn test_piece_values() {
    let values: Vec<i32> = PieceKind::ALL.iter().map(|&k| piece_value(k)).collect();
    assert_eq!(values, vec![1, 3, 3, 5, 9, 0]);
}

#[test]
fn test_black_mated_scores_plus_sentinel() {
    let mated = pos("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert_eq!(evaluate(&mated), MATE_SCORE);
}

#[test]
fn test_white_mated_scores_minus_sentinel() {
    let mated = pos("6k1/8/8/8/8/8/5PPP/r5K1 w - - 0 1");
    assert_eq!(evaluate(&mated), -MATE_SCORE);
}

#[test]
fn test_draws_fall_through_to_material_by_default() {
    // Stalemated Black, White a queen up
    let stalemate = pos("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert_eq!(evaluate(&stalemate), 9);

    let lone_bishop = pos("8/8/8/4k3/8/4KB2/8/8 w - - 0 1");
    assert_eq!(evaluate(&lone_bishop), 3);
}

#[test]
fn test_zero_draw_policy() {
    let eval = Evaluator::new(DrawScoring::Zero);
    assert_eq!(eval.evaluate(&pos("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1")), 0);
    assert_eq!(eval.evaluate(&pos("8/8/8/4k3/8/4KB2/8/8 w - - 0 1")), 0);
    assert_eq!(eval.evaluate(&pos("8/8/8/4k3/8/4K3/4R3/8 w - - 100 90")), 0);
    // Mates and live positions are unaffected
    assert_eq!(eval.evaluate(&pos("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1")), MATE_SCORE);
    assert_eq!(eval.evaluate(&pos("4k3/8/8/8/8/8/8/R3K3 w - - 0 1")), 5);
}

#[test]
fn test_evaluate_does_not_mutate() {
    let p = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let before = p.clone();
    let first = evaluate(&p);
    assert_eq!(p, before);
    assert_eq!(evaluate(&p), first);
}
