pub mod alphabeta;
pub mod eval;
pub mod ordering;
pub mod quiescence;
pub mod tt;
pub mod zobrist;

use cozy_chess::Move;

/// Score of a searched node (White's point of view) and the move that produced it.
///
/// `best` is `None` at the horizon, at terminal positions, and whenever the
/// node never examined a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best: Option<Move>,
}

impl SearchResult {
    pub fn leaf(score: i32) -> Self { Self { score, best: None } }
}
