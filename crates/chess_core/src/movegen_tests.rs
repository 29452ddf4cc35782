use super::*;
use crate::uci::move_to_uci;

fn uci_moves(fen: &str) -> Vec<String> {
    let pos = Position::from_fen(fen).unwrap();
    legal_moves(&pos).into_iter().map(move_to_uci).collect()
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_startpos_order_is_square_major() {
    let moves = uci_moves(crate::fen::START_FEN);
    assert_eq!(&moves[..4], &["b1c3", "b1a3", "g1h3", "g1f3"]);
    assert_eq!(moves[4], "a2a3");
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
        .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
}

#[test]
fn test_promotions_generate_four_choices() {
    let moves = uci_moves("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    for promo in ["a7a8q", "a7a8r", "a7a8b", "a7a8n"] {
        assert!(moves.iter().any(|m| m == promo), "missing {promo}");
    }
}

#[test]
fn test_en_passant_capture_available() {
    let moves = uci_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    assert!(moves.iter().any(|m| m == "e5d6"));
}

#[test]
fn test_castling_blocked_through_attacked_square() {
    // Black rook on f8 covers f1
    let moves = uci_moves("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(!moves.iter().any(|m| m == "e1g1"));

    let moves = uci_moves("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(moves.iter().any(|m| m == "e1g1"));
}

#[test]
fn test_pinned_piece_cannot_move() {
    // Knight on e2 pinned by the rook on e8
    let moves = uci_moves("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
    assert!(!moves.iter().any(|m| m.starts_with("e2")));
}

#[test]
fn test_has_legal_move_matches_generation() {
    let fens = [
        crate::fen::START_FEN,
        "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
        "R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1",
        "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1",
    ];
    for fen in fens {
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(has_legal_move(&pos), !legal_moves(&pos).is_empty(), "fen: {fen}");
    }
}

#[test]
fn test_generation_leaves_position_untouched() {
    let mut pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
        .unwrap();
    let before = pos.clone();
    let mut moves = Vec::new();
    legal_moves_into(&mut pos, &mut moves);
    assert_eq!(pos, before);
}

#[test]
fn test_move_counters_saturate() {
    let fen = "4k3/8/8/8/8/8/8/4K2R b - - 4294967295 4294967295";
    let mut pos = Position::from_fen(fen).unwrap();
    let before = pos.clone();

    for mv in legal_moves(&before) {
        let undo = pos.make_move(mv);
        assert_eq!(pos.halfmove_clock, u32::MAX);
        assert_eq!(pos.fullmove_number, u32::MAX);
        pos.unmake_move(mv, undo);
        assert_eq!(pos, before);
    }
}

#[test]
fn test_en_passant_removes_the_pushed_pawn() {
    let pos = Position::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").unwrap();
    let ep = legal_moves(&pos)
        .into_iter()
        .find(|mv| mv.is_en_passant)
        .expect("d5e6 en passant");
    assert_eq!(move_to_uci(ep), "d5e6");
    assert_eq!(pos.with_move(ep).to_fen(), "4k3/8/4P3/8/8/8/8/4K3 b - - 0 1");
}
