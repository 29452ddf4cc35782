//! Material-based position evaluation

use chess_core::{Color, GameStatus, PieceKind, Position};

use crate::config::DrawScoring;

/// Score of a checkmated position. Larger than any material balance, so a
/// forced mate always outranks winning material.
pub const MATE_SCORE: i32 = 10_000;

/// Returns the material value of a piece in pawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// White material minus Black material.
pub fn material(pos: &Position) -> i32 {
    pos.pieces()
        .map(|(_, pc)| {
            let v = piece_value(pc.kind);
            if pc.color == Color::White {
                v
            } else {
                -v
            }
        })
        .sum()
}

/// Static evaluator. Scores are from White's perspective:
/// - Positive = good for White
/// - Negative = good for Black
/// - `±MATE_SCORE` = the side to move is checkmated
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    draws: DrawScoring,
}

impl Evaluator {
    pub fn new(draws: DrawScoring) -> Self {
        Self { draws }
    }

    pub fn evaluate(&self, pos: &Position) -> i32 {
        match self.draws {
            DrawScoring::Material => {
                if pos.is_checkmate() {
                    return mated_score(pos);
                }
            }
            DrawScoring::Zero => match pos.status() {
                GameStatus::Checkmate => return mated_score(pos),
                status if status.is_draw() => return 0,
                _ => {}
            },
        }
        material(pos)
    }
}

/// Evaluates with the default draw policy (plain material).
pub fn evaluate(pos: &Position) -> i32 {
    Evaluator::default().evaluate(pos)
}

fn mated_score(pos: &Position) -> i32 {
    match pos.side_to_move {
        Color::White => -MATE_SCORE,
        Color::Black => MATE_SCORE,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
