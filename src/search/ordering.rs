use cozy_chess::{Color, Move, Piece};
use serde::{Deserialize, Serialize};

use crate::board::Position;

/// How the main search orders moves at each node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrder {
    /// Checks, then captures, then promotions.
    #[default]
    Tactical,
    CapturesFirst,
    /// Generation order.
    Unordered,
}

// Promotion rank, highest first when sorted descending.
fn promotion_rank(piece: Option<Piece>) -> u8 {
    match piece {
        None => 0,
        Some(Piece::Pawn) => 1,
        Some(Piece::Knight) => 2,
        Some(Piece::Bishop) => 3,
        Some(Piece::Rook) => 4,
        Some(Piece::Queen) => 5,
        Some(Piece::King) => 6,
    }
}

/// Sort key: checks before captures before promotions.
pub fn order_key(pos: &Position, m: Move) -> (bool, bool, u8) {
    (pos.gives_check(m), pos.is_capture(m), promotion_rank(pos.promotion(m)))
}

/// Orders moves by `order_key`, descending. The sort is stable, so ties keep
/// generation order and repeated searches visit moves identically.
pub fn order_moves(pos: &Position, moves: &mut Vec<Move>) {
    if moves.len() <= 1 { return; }
    let mut keyed: Vec<((bool, bool, u8), Move)> = moves.iter().map(|&m| (order_key(pos, m), m)).collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    moves.clear();
    moves.extend(keyed.into_iter().map(|(_, m)| m));
}

/// Captures first, everything else in generation order.
pub fn order_captures_first(pos: &Position, moves: &mut [Move]) {
    moves.sort_by_key(|&m| !pos.is_capture(m));
}

pub fn apply(order: MoveOrder, pos: &Position, moves: &mut Vec<Move>) {
    match order {
        MoveOrder::Tactical => order_moves(pos, moves),
        MoveOrder::CapturesFirst => order_captures_first(pos, moves),
        MoveOrder::Unordered => {}
    }
}

/// Drops moves leaving White's king square unless nothing else remains.
pub fn exclude_white_king_moves(pos: &Position, moves: &mut Vec<Move>) {
    let king = pos.king_square(Color::White);
    if moves.iter().any(|m| m.from != king) {
        moves.retain(|m| m.from != king);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_then_captures_then_promotions() {
        // Rook can check on e-file or take the knight; pawn can promote.
        let pos = Position::from_fen("4k3/1P6/8/8/8/n7/8/R3K3 w - - 0 1").unwrap();
        let mut moves = pos.legal_moves();
        order_moves(&pos, &mut moves);
        let first = moves[0];
        assert!(pos.gives_check(first), "first move {} should give check", pos.uci(first));
        let first_quiet_non_promo = moves.iter().position(|&m| order_key(&pos, m) == (false, false, 0)).unwrap();
        let capture = moves.iter().position(|&m| pos.uci(m) == "a1a3").unwrap();
        let promo = moves.iter().position(|&m| pos.uci(m) == "b7b8q").unwrap();
        assert!(capture < first_quiet_non_promo);
        assert!(promo < first_quiet_non_promo);
    }

    #[test]
    fn ordering_is_deterministic() {
        let pos = Position::startpos();
        let mut a = pos.legal_moves();
        let mut b = pos.legal_moves();
        order_moves(&pos, &mut a);
        order_moves(&pos, &mut b);
        assert_eq!(a, b);
        // No tactical moves at the start: generation order is kept.
        assert_eq!(a, pos.legal_moves());
    }

    #[test]
    fn king_filter_keeps_king_moves_when_alone() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mut moves = pos.legal_moves();
        let n = moves.len();
        exclude_white_king_moves(&pos, &mut moves);
        assert_eq!(moves.len(), n);

        let pos = Position::from_fen("4k3/8/8/8/8/8/P7/4K3 w - - 0 1").unwrap();
        let mut moves = pos.legal_moves();
        exclude_white_king_moves(&pos, &mut moves);
        assert!(moves.iter().all(|m| m.from != pos.king_square(Color::White)));
        assert_eq!(moves.len(), 2);
    }
}
