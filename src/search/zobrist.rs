use cozy_chess::{Color, Piece};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::board::cozy::ALL_PIECES;
use crate::board::Position;

/// Which parts of a position identify a cache entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMode {
    /// Piece placement and side to move only. Positions differing only in
    /// castling rights or en passant share a key.
    #[default]
    Placement,
    /// cozy-chess's own hash, which also covers castling and en passant.
    Full,
}

fn piece_index(color: Color, piece: Piece) -> usize {
    color as usize * 6 + piece as usize
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

static TABLE: OnceLock<[u64; 12 * 64]> = OnceLock::new();
static SIDE_KEY: OnceLock<u64> = OnceLock::new();

fn init_table() -> &'static [u64; 12 * 64] {
    TABLE.get_or_init(|| {
        let mut t = [0u64; 12 * 64];
        let mut seed = 0xF00D_F00D_DEAD_BEEF;
        for v in &mut t {
            seed = splitmix64(seed);
            *v = seed;
        }
        t
    })
}

fn init_side() -> u64 {
    *SIDE_KEY.get_or_init(|| splitmix64(0xABCDEF1234567890))
}

pub fn placement_key(pos: &Position) -> u64 {
    let table = init_table();
    let board = pos.board();
    let mut key = 0u64;
    for color in [Color::White, Color::Black] {
        for piece in ALL_PIECES {
            let bb = board.colors(color) & board.pieces(piece);
            for sq in bb {
                key ^= table[piece_index(color, piece) * 64 + sq as usize];
            }
        }
    }
    if pos.side_to_move() == Color::Black { key ^= init_side(); }
    key
}

pub fn compute(pos: &Position, mode: KeyMode) -> u64 {
    match mode {
        KeyMode::Placement => placement_key(pos),
        KeyMode::Full => pos.board().hash(),
    }
}
