//! Long algebraic move text (`e2e4`, `e7e8q`), as used by UCI.

use crate::{board::Position, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::with_capacity(5);
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.to_char());
    }
    s
}

/// Resolves move text against the legal moves of `pos`, so the castle and
/// en-passant flags come out right. Returns `None` for illegal or malformed
/// text.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt.chars().nth(4) {
        Some(ch) => Some(PieceKind::from_char(ch).filter(|k| PieceKind::PROMOTIONS.contains(k))?),
        None => None,
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_text() {
        let pos = Position::startpos();
        for mv in legal_moves(&pos) {
            assert_eq!(parse_uci_move(&pos, &move_to_uci(mv)), Some(mv));
        }
    }

    #[test]
    fn test_promotion_text() {
        let pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mv = parse_uci_move(&pos, "a7a8n").unwrap();
        assert_eq!(mv.promo, Some(PieceKind::Knight));
        assert_eq!(move_to_uci(mv), "a7a8n");
        // A promotion must name its piece
        assert_eq!(parse_uci_move(&pos, "a7a8"), None);
    }

    #[test]
    fn test_castle_flag_recovered() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let mv = parse_uci_move(&pos, "e1g1").unwrap();
        assert!(mv.is_castle);
    }

    #[test]
    fn test_rejects_illegal_and_garbage() {
        let pos = Position::startpos();
        assert_eq!(parse_uci_move(&pos, "e2e5"), None);
        assert_eq!(parse_uci_move(&pos, "zz"), None);
        assert_eq!(parse_uci_move(&pos, "e2e4x"), None);
    }
}
