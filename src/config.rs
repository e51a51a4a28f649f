use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BotError, Result};
use crate::search::alphabeta::{RootMode, SearchParams};
use crate::search::ordering::MoveOrder;
use crate::search::zobrist::KeyMode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Minimax,
    /// First move that mates, promotes to a queen or gains material, in
    /// generation order; a random move when none does.
    Greedy,
}

/// Bot settings. Every field has a default, so a JSON file only needs the
/// keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub strategy: Strategy,
    pub depth: u32,
    pub root_mode: RootMode,
    pub use_tt: bool,
    pub use_quiescence: bool,
    pub move_order: MoveOrder,
    pub exclude_king_moves: bool,
    pub key_mode: KeyMode,
    pub qsearch_ply_limit: Option<u32>,
    /// Seed for the random fallback; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        let p = SearchParams::default();
        Self {
            strategy: Strategy::Minimax,
            depth: p.depth,
            root_mode: RootMode::Iterate,
            use_tt: p.use_tt,
            use_quiescence: p.use_quiescence,
            move_order: p.move_order,
            exclude_king_moves: p.exclude_king_moves,
            key_mode: p.key_mode,
            qsearch_ply_limit: p.qsearch_ply_limit,
            seed: None,
        }
    }
}

impl BotConfig {
    /// The earlier bot: one-shot root, static evaluation at the horizon, no
    /// cache, captures-first ordering and the White-king move filter.
    pub fn legacy() -> Self {
        Self {
            root_mode: RootMode::OneShot,
            use_tt: false,
            use_quiescence: false,
            move_order: MoveOrder::CapturesFirst,
            exclude_king_moves: true,
            ..Self::default()
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| BotError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| BotError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            depth: self.depth,
            use_tt: self.use_tt,
            use_quiescence: self.use_quiescence,
            move_order: self.move_order,
            exclude_king_moves: self.exclude_king_moves,
            key_mode: self.key_mode,
            qsearch_ply_limit: self.qsearch_ply_limit,
        }
    }
}
