use cozy_chess::{Color, Piece};

use crate::board::Position;

/// Pawn units, matching the bot's historical scale (not centipawns).
const PAWN: i32 = 1;
const KNIGHT: i32 = 3;
const BISHOP: i32 = 3;
const ROOK: i32 = 5;
const QUEEN: i32 = 9;

// Mate scoring
pub const MATE_SCORE: i32 = 999_999;
pub const CHECK_BONUS: i32 = 50;
/// Search window bound; strictly outside every reachable score, mate offsets included.
pub const INFINITY: i32 = 1_000_000_000;

pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN,
        Piece::Knight => KNIGHT,
        Piece::Bishop => BISHOP,
        Piece::Rook => ROOK,
        Piece::Queen => QUEEN,
        Piece::King => 0,
    }
}

// Side-agnostic material: positive means White has more material.
pub fn material(pos: &Position) -> i32 {
    pos.pieces()
        .map(|(piece, color)| if color == Color::White { piece_value(piece) } else { -piece_value(piece) })
        .sum()
}

/// Static score from White's point of view.
///
/// A mated side to move scores `-MATE_SCORE` for White and `+MATE_SCORE` for
/// Black. Otherwise a side in check is scored `+CHECK_BONUS` when White is to
/// move and `-CHECK_BONUS` when Black is, replacing material entirely.
pub fn evaluate(pos: &Position) -> i32 {
    let white = pos.side_to_move() == Color::White;
    if pos.is_checkmate() {
        return if white { -MATE_SCORE } else { MATE_SCORE };
    }
    if pos.is_check() {
        return if white { CHECK_BONUS } else { -CHECK_BONUS };
    }
    material(pos)
}

// Static score from the side-to-move perspective (negamax-friendly)
pub fn evaluate_relative(pos: &Position) -> i32 {
    let base = evaluate(pos);
    if pos.side_to_move() == Color::White { base } else { -base }
}

pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_SCORE
}
