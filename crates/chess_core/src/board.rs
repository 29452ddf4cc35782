use crate::movegen::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS};
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.wk || self.wq || self.bk || self.bq)
    }
}

/// Board state with value semantics. Search mutates one owned instance with
/// `make_move`/`unmake_move`; everything else treats it as a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// What `make_move` overwrote, enough for `unmake_move` to restore it.
#[derive(Clone, Debug)]
pub struct Undo {
    pub moved_piece: Piece,
    pub captured: Option<Piece>,
    /// Differs from the destination only for en passant
    pub capture_sq: u8,
    pub rook_move: Option<(u8, u8)>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// King move of each castle and the rook move it implies:
/// (king_from, king_to, rook_from, rook_to).
const CASTLE_ROOKS: [(u8, u8, u8, u8); 4] = [
    (4, 6, 7, 5),
    (4, 2, 0, 3),
    (60, 62, 63, 61),
    (60, 58, 56, 59),
];

impl CastlingRights {
    /// Clears every right that depends on a king or rook standing on `s`.
    fn revoke_touching(&mut self, s: u8) {
        match s {
            4 => {
                self.wk = false;
                self.wq = false;
            }
            60 => {
                self.bk = false;
                self.bq = false;
            }
            0 => self.wq = false,
            7 => self.wk = false,
            56 => self.bq = false,
            63 => self.bk = false,
            _ => {}
        }
    }
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position::empty();
        p.castling = CastlingRights::all();

        // Pawns
        for f in 0..8 {
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// A board with no pieces, White to move and no castling rights.
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|pc| (i as u8, pc)))
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.board[i]
                && pc.color == c
                && pc.kind == PieceKind::King
            {
                return Some(i as u8);
            }
        }
        None
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn in_check(&self, c: Color) -> bool {
        let ksq = match self.king_sq(c) {
            Some(s) => s,
            None => return false,
        };
        self.is_square_attacked(ksq, c.other())
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let (tf, tr) = (file_of(target), rank_of(target));
        let holds = |df: i8, dr: i8, kind: PieceKind| {
            sq(tf + df, tr + dr)
                .and_then(|s| self.piece_at(s))
                .is_some_and(|pc| pc.color == by && pc.kind == kind)
        };

        // Attacking pawns stand one rank behind the target, seen from `by`
        let behind = match by {
            Color::White => -1,
            Color::Black => 1,
        };
        if holds(-1, behind, PieceKind::Pawn) || holds(1, behind, PieceKind::Pawn) {
            return true;
        }
        if KNIGHT_DELTAS.iter().any(|&(df, dr)| holds(df, dr, PieceKind::Knight)) {
            return true;
        }
        if KING_DELTAS.iter().any(|&(df, dr)| holds(df, dr, PieceKind::King)) {
            return true;
        }

        self.ray_hits(target, by, &DIAGONALS, PieceKind::Bishop)
            || self.ray_hits(target, by, &ORTHOGONALS, PieceKind::Rook)
    }

    /// True if the first piece along any of `dirs` from `target` is a `by`
    /// slider of `kind` or a `by` queen.
    fn ray_hits(&self, target: u8, by: Color, dirs: &[(i8, i8)], kind: PieceKind) -> bool {
        dirs.iter().any(|&(df, dr)| {
            let (mut f, mut r) = (file_of(target) + df, rank_of(target) + dr);
            while let Some(s) = sq(f, r) {
                if let Some(pc) = self.piece_at(s) {
                    return pc.color == by && (pc.kind == kind || pc.kind == PieceKind::Queen);
                }
                f += df;
                r += dr;
            }
            false
        })
    }

    /// Plays `mv` in place. `mv` must come from this position's legal move
    /// list; the returned `Undo` restores it via `unmake_move`.
    ///
    /// Move counters saturate at `u32::MAX` instead of overflowing.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self.piece_at(mv.from).expect("no piece on from-square");
        let mover = moved.color;
        let mut undo = Undo {
            moved_piece: moved,
            captured: self.piece_at(mv.to),
            capture_sq: mv.to,
            rook_move: None,
            castling: self.castling.clone(),
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        if mv.is_en_passant {
            // The captured pawn is level with the mover, on the target file
            let level = match mover {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(s) = sq(file_of(mv.to), rank_of(mv.to) + level) {
                undo.captured = self.board[s as usize].take();
                undo.capture_sq = s;
            }
        }

        let last_rank = match mover {
            Color::White => 7,
            Color::Black => 0,
        };
        let placed = if moved.kind == PieceKind::Pawn && rank_of(mv.to) == last_rank {
            Piece::new(mover, mv.promo.unwrap_or(PieceKind::Queen))
        } else {
            moved
        };
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(placed));

        if mv.is_castle
            && moved.kind == PieceKind::King
            && let Some(&(_, _, rf, rt)) = CASTLE_ROOKS
                .iter()
                .find(|&&(kf, kt, _, _)| kf == mv.from && kt == mv.to)
            && let Some(rook) = self.board[rf as usize].take()
        {
            self.set_piece(rt, Some(rook));
            undo.rook_move = Some((rf, rt));
        }

        self.castling.revoke_touching(mv.from);
        self.castling.revoke_touching(mv.to);

        self.en_passant = None;
        let (from_rank, to_rank) = (rank_of(mv.from), rank_of(mv.to));
        if moved.kind == PieceKind::Pawn && (to_rank - from_rank).abs() == 2 {
            self.en_passant = sq(file_of(mv.from), (from_rank + to_rank) / 2);
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || undo.captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = mover.other();

        undo
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.board[rt as usize].take();
            self.set_piece(rf, rook);
        }

        // Restores the pawn on promotions too
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved_piece));
        self.set_piece(undo.capture_sq, undo.captured);
    }

    /// Copy of the position with `mv` played.
    pub fn with_move(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }
}
