//! Terminal-state queries: checkmate, stalemate and rule draws.

use crate::{board::Position, movegen::has_legal_move, types::*};

/// Halfmove clock value at which the fifty-move rule ends the game.
pub const FIFTY_MOVE_LIMIT: u32 = 100;

/// Outcome classification of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameStatus {
    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate | GameStatus::FiftyMoveRule | GameStatus::InsufficientMaterial
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::FiftyMoveRule => "fifty_move_rule",
            GameStatus::InsufficientMaterial => "insufficient_material",
        }
    }
}

impl Position {
    /// Classifies the position. Checkmate and stalemate take precedence over
    /// the rule draws.
    pub fn status(&self) -> GameStatus {
        if !has_legal_move(self) {
            return if self.in_check(self.side_to_move) {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            };
        }
        self.rule_draw().unwrap_or(GameStatus::Ongoing)
    }

    /// Fifty-move or insufficient-material draw, if either applies. Does not
    /// generate moves.
    pub fn rule_draw(&self) -> Option<GameStatus> {
        if self.is_fifty_move_draw() {
            Some(GameStatus::FiftyMoveRule)
        } else if self.is_insufficient_material() {
            Some(GameStatus::InsufficientMaterial)
        } else {
            None
        }
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && !has_legal_move(self)
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move) && !has_legal_move(self)
    }

    pub fn is_draw(&self) -> bool {
        self.status().is_draw()
    }

    pub fn is_game_over(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_LIMIT
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// only bishops that all stand on one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut bishops_dark = 0;
        let mut bishops_light = 0;

        for (s, pc) in self.pieces() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Knight => minors += 1,
                PieceKind::Bishop => {
                    minors += 1;
                    if is_dark_square(s) {
                        bishops_dark += 1;
                    } else {
                        bishops_light += 1;
                    }
                }
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            }
        }

        let bishops = bishops_dark + bishops_light;
        minors <= 1 || (bishops == minors && (bishops_dark == 0 || bishops_light == 0))
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
