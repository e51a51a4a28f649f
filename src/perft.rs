use crate::board::Position;

// Leaf count by push/pop (no cloning of positions)
pub fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = pos.legal_moves();
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for mv in moves {
        pos.push(mv);
        nodes += perft(pos, depth - 1);
        pos.pop();
    }
    nodes
}
