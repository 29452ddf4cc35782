//! Legal move generation.
//!
//! Moves are generated pseudo-legally square by square (a1 first) and then
//! filtered by playing each one and testing whether the mover's king is left
//! attacked. The resulting order is deterministic for a given position, which
//! the search relies on for its tie-break.

use crate::{board::Position, types::*};

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// One castling option: king path, squares that must be empty, and squares
/// the king crosses that must not be attacked.
struct CastleRoute {
    king_from: u8,
    king_to: u8,
    empty: &'static [u8],
    safe: &'static [u8],
}

const WHITE_KINGSIDE: CastleRoute = CastleRoute {
    king_from: 4,
    king_to: 6,
    empty: &[5, 6],
    safe: &[5, 6],
};
const WHITE_QUEENSIDE: CastleRoute = CastleRoute {
    king_from: 4,
    king_to: 2,
    empty: &[3, 2, 1],
    safe: &[3, 2],
};
const BLACK_KINGSIDE: CastleRoute = CastleRoute {
    king_from: 60,
    king_to: 62,
    empty: &[61, 62],
    safe: &[61, 62],
};
const BLACK_QUEENSIDE: CastleRoute = CastleRoute {
    king_from: 60,
    king_to: 58,
    empty: &[59, 58, 57],
    safe: &[59, 58],
};

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
/// The position is mutated while testing legality and restored before return.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    out.retain(|&mv| is_legal(pos, mv, mover));
}

/// True if the side to move has at least one legal move. Stops at the first
/// one found.
pub fn has_legal_move(pos: &Position) -> bool {
    let mut tmp = pos.clone();
    let mut pseudo = Vec::with_capacity(64);
    pseudo_moves(&tmp, &mut pseudo);

    let mover = tmp.side_to_move;
    pseudo.into_iter().any(|mv| is_legal(&mut tmp, mv, mover))
}

fn is_legal(pos: &mut Position, mv: Move, mover: Color) -> bool {
    let undo = pos.make_move(mv);
    let illegal = pos.in_check(mover);
    pos.unmake_move(mv, undo);
    !illegal
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for (from, pc) in pos.pieces() {
        if pc.color != pos.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
            PieceKind::Knight => gen_steps(pos, from, pc.color, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => gen_slider(pos, from, pc.color, &DIAGONALS, out),
            PieceKind::Rook => gen_slider(pos, from, pc.color, &ORTHOGONALS, out),
            PieceKind::Queen => gen_slider(pos, from, pc.color, &ALL_DIRECTIONS, out),
            PieceKind::King => {
                gen_steps(pos, from, pc.color, &KING_DELTAS, out);
                gen_castle(pos, from, pc.color, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, promo_rank: i8, out: &mut Vec<Move>) {
    if rank_of(to) == promo_rank {
        for pk in PieceKind::PROMOTIONS {
            out.push(Move::with_promo(from, to, pk));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let (dir, start_rank, promo_rank): (i8, i8, i8) = match c {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    // forward 1, then 2 from the start rank
    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, promo_rank, out);

        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, promo_rank, out),
            Some(_) => {}
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to);
                mv.is_en_passant = true;
                out.push(mv);
            }
            None => {}
        }
    }
}

/// Single-step movers: knight and king.
fn gen_steps(pos: &Position, from: u8, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                Some(pc) if pc.color == c => {}
                _ => out.push(Move::new(from, to)),
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let routes: [(bool, &CastleRoute); 2] = match c {
        Color::White => [
            (pos.castling.wk, &WHITE_KINGSIDE),
            (pos.castling.wq, &WHITE_QUEENSIDE),
        ],
        Color::Black => [
            (pos.castling.bk, &BLACK_KINGSIDE),
            (pos.castling.bq, &BLACK_QUEENSIDE),
        ],
    };

    // Can't castle out of check; the crossed squares are tested below.
    if routes[0].1.king_from != from || pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    for (allowed, route) in routes {
        if !allowed {
            continue;
        }
        let rook_sq = if route.king_to > route.king_from {
            route.king_from + 3
        } else {
            route.king_from - 4
        };
        let rook_home = pos.piece_at(rook_sq) == Some(Piece::new(c, PieceKind::Rook));
        let clear = route.empty.iter().all(|&s| pos.piece_at(s).is_none());
        let safe = route.safe.iter().all(|&s| !pos.is_square_attacked(s, enemy));
        if rook_home && clear && safe {
            let mut mv = Move::new(route.king_from, route.king_to);
            mv.is_castle = true;
            out.push(mv);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
