//! Forsyth-Edwards Notation codec.
//!
//! Decoding validates the structure of every field and the basic sanity of
//! the board (one king per side, no pawns on the back ranks) so that the
//! search never runs on a position it cannot reason about.

use std::fmt::Write as _;
use std::str::FromStr;

use thiserror::Error;

use crate::{
    board::{CastlingRights, Position},
    types::*,
};

/// The standard initial arrangement.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Reasons a FEN string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 4 to 6 space-separated fields, found {0}")]
    FieldCount(usize),

    #[error("piece placement must have 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("rank {rank} has consecutive empty-square counts")]
    ConsecutiveDigits { rank: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid castling field '{0}'")]
    Castling(String),

    #[error("invalid en-passant field '{0}'")]
    EnPassant(String),

    #[error("invalid halfmove clock '{0}'")]
    HalfmoveClock(String),

    #[error("invalid fullmove number '{0}'")]
    FullmoveNumber(String),

    #[error("expected exactly one {color:?} king, found {count}")]
    KingCount { color: Color, count: usize },

    #[error("pawn on back rank at {0}")]
    PawnOnBackRank(String),
}

impl Position {
    /// Decodes a FEN string. The halfmove and fullmove fields may be omitted
    /// and default to `0` and `1`.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::FieldCount(parts.len()));
        }

        let mut pos = Position::empty();
        parse_placement(parts[0], &mut pos)?;

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        pos.castling = parse_castling(parts[2])?;
        pos.en_passant = parse_en_passant(parts[3], &pos)?;

        let halfmove = parts.get(4).copied().unwrap_or("0");
        pos.halfmove_clock = halfmove
            .parse()
            .map_err(|_| FenError::HalfmoveClock(halfmove.to_string()))?;

        let fullmove = parts.get(5).copied().unwrap_or("1");
        pos.fullmove_number = match fullmove.parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => return Err(FenError::FullmoveNumber(fullmove.to_string())),
        };

        validate_board(&pos)?;
        Ok(pos)
    }

    /// Encodes all six FEN fields.
    ///
    /// The en-passant target is written after every double pawn push, even
    /// when no pawn can capture there. Some encoders (recent chess.js among
    /// them) print `-` in that case, so the same position can differ from
    /// their output in the fourth field.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);

        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                let Some(s) = sq(file, rank) else { continue };
                match self.piece_at(s) {
                    Some(pc) => {
                        if empty > 0 {
                            let _ = write!(out, "{empty}");
                            empty = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(out, "{empty}");
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(self.side_to_move.to_char());

        out.push(' ');
        if self.castling.is_empty() {
            out.push('-');
        } else {
            for (flag, ch) in [
                (self.castling.wk, 'K'),
                (self.castling.wq, 'Q'),
                (self.castling.bk, 'k'),
                (self.castling.bq, 'q'),
            ] {
                if flag {
                    out.push(ch);
                }
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }

        let _ = write!(out, " {} {}", self.halfmove_clock, self.fullmove_number);
        out
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

fn parse_placement(field: &str, pos: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    // FEN lists rank 8 first
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as i8;
        let label = 8 - rank_idx;
        let mut file: i8 = 0;
        let mut prev_digit = false;

        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                if prev_digit {
                    return Err(FenError::ConsecutiveDigits { rank: label });
                }
                if !(1..=8).contains(&d) {
                    return Err(FenError::RankWidth { rank: label });
                }
                prev_digit = true;
                file += d as i8;
            } else {
                prev_digit = false;
                let pc = Piece::from_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                let s = sq(file, rank).ok_or(FenError::RankWidth { rank: label })?;
                pos.set_piece(s, Some(pc));
                file += 1;
            }
            if file > 8 {
                return Err(FenError::RankWidth { rank: label });
            }
        }
        if file != 8 {
            return Err(FenError::RankWidth { rank: label });
        }
    }
    Ok(())
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut castling = CastlingRights::none();
    if field == "-" {
        return Ok(castling);
    }
    for c in field.chars() {
        let slot = match c {
            'K' => &mut castling.wk,
            'Q' => &mut castling.wq,
            'k' => &mut castling.bk,
            'q' => &mut castling.bq,
            _ => return Err(FenError::Castling(field.to_string())),
        };
        if *slot {
            return Err(FenError::Castling(field.to_string()));
        }
        *slot = true;
    }
    Ok(castling)
}

/// The target must be the empty square a pawn of the side not to move just
/// skipped: that pawn stands one rank further on and its start square is empty.
fn parse_en_passant(field: &str, pos: &Position) -> Result<Option<u8>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let reject = || FenError::EnPassant(field.to_string());
    let target = coord_to_sq(field).ok_or_else(reject)?;

    let pusher = pos.side_to_move.other();
    let (target_rank, step) = match pusher {
        Color::Black => (5, -1),
        Color::White => (2, 1),
    };
    if rank_of(target) != target_rank {
        return Err(reject());
    }

    let (f, r) = (file_of(target), rank_of(target));
    let pushed = sq(f, r + step).and_then(|s| pos.piece_at(s));
    let origin = sq(f, r - step).and_then(|s| pos.piece_at(s));
    if pos.piece_at(target).is_some()
        || origin.is_some()
        || pushed != Some(Piece::new(pusher, PieceKind::Pawn))
    {
        return Err(reject());
    }
    Ok(Some(target))
}

fn validate_board(pos: &Position) -> Result<(), FenError> {
    for color in [Color::White, Color::Black] {
        let count = pos
            .pieces()
            .filter(|(_, pc)| pc.color == color && pc.kind == PieceKind::King)
            .count();
        if count != 1 {
            return Err(FenError::KingCount { color, count });
        }
    }

    if let Some((s, _)) = pos
        .pieces()
        .find(|(s, pc)| pc.kind == PieceKind::Pawn && (rank_of(*s) == 0 || rank_of(*s) == 7))
    {
        return Err(FenError::PawnOnBackRank(sq_to_coord(s)));
    }

    Ok(())
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
