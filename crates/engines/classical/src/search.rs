//! Depth-bounded minimax with alpha-beta pruning

use chess_core::{legal_moves_into, Move, Position};

use crate::eval::Evaluator;

/// Window bound. Mate scores stay far inside it, so the first move searched
/// always improves on the initial best.
pub const INFINITY: i32 = i32::MAX;

/// Best move (None at leaves or when no move exists) and its score from
/// White's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    pub score: i32,
}

impl SearchOutcome {
    fn leaf(pos: &Position, eval: &Evaluator) -> Self {
        Self {
            best_move: None,
            score: eval.evaluate(pos),
        }
    }
}

/// Searches `pos` to `depth` plies with a full window.
///
/// `maximizing` is the root flag; it alternates at each ply below. The
/// position is cloned once and explored with make/unmake.
pub fn search(
    pos: &Position,
    depth: u8,
    maximizing: bool,
    eval: &Evaluator,
    nodes: &mut u64,
) -> SearchOutcome {
    let mut tmp = pos.clone();
    alpha_beta(&mut tmp, depth, -INFINITY, INFINITY, maximizing, eval, nodes)
}

/// Recursive minimax with alpha-beta pruning.
///
/// Moves are tried in generation order and only a strictly better score
/// replaces the current best, so the first of several equal moves wins.
/// `pos` is restored before returning.
pub fn alpha_beta(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    eval: &Evaluator,
    nodes: &mut u64,
) -> SearchOutcome {
    *nodes += 1;

    if depth == 0 {
        return SearchOutcome::leaf(pos, eval);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    if moves.is_empty() || pos.rule_draw().is_some() {
        return SearchOutcome::leaf(pos, eval);
    }

    let mut best_move = None;
    let mut best;

    if maximizing {
        best = -INFINITY;
        for mv in moves {
            let undo = pos.make_move(mv);
            let child = alpha_beta(pos, depth - 1, alpha, beta, false, eval, nodes);
            pos.unmake_move(mv, undo);

            if child.score > best {
                best = child.score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
    } else {
        best = INFINITY;
        for mv in moves {
            let undo = pos.make_move(mv);
            let child = alpha_beta(pos, depth - 1, alpha, beta, true, eval, nodes);
            pos.unmake_move(mv, undo);

            if child.score < best {
                best = child.score;
                best_move = Some(mv);
            }
            beta = beta.min(best);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
    }

    SearchOutcome {
        best_move,
        score: best,
    }
}

/// Full-width minimax over the same tree, without pruning. Returns the same
/// move and score as `search`; kept as its reference.
pub fn minimax(
    pos: &mut Position,
    depth: u8,
    maximizing: bool,
    eval: &Evaluator,
    nodes: &mut u64,
) -> SearchOutcome {
    *nodes += 1;

    if depth == 0 {
        return SearchOutcome::leaf(pos, eval);
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, &mut moves);
    if moves.is_empty() || pos.rule_draw().is_some() {
        return SearchOutcome::leaf(pos, eval);
    }

    let mut best_move = None;
    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mv in moves {
        let undo = pos.make_move(mv);
        let child = minimax(pos, depth - 1, !maximizing, eval, nodes);
        pos.unmake_move(mv, undo);

        let improves = if maximizing {
            child.score > best
        } else {
            child.score < best
        };
        if improves {
            best = child.score;
            best_move = Some(mv);
        }
    }

    SearchOutcome {
        best_move,
        score: best,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
