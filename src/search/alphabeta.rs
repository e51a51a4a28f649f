use cozy_chess::{Color, Move};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::search::eval::{evaluate, is_mate_score, INFINITY};
use crate::search::ordering::{self, exclude_white_king_moves, MoveOrder};
use crate::search::tt::Tt;
use crate::search::zobrist::{self, KeyMode};
use crate::search::SearchResult;

/// How the top ply is searched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootMode {
    /// One recursive call from the root at the full depth.
    OneShot,
    /// Every root move is played and searched at `depth - 1` with a full
    /// window; the best score for the side to move wins. Root moves go
    /// through the same filter and ordering as interior nodes.
    #[default]
    Iterate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub depth: u32,
    pub use_tt: bool,
    pub use_quiescence: bool,
    pub move_order: MoveOrder,
    pub exclude_king_moves: bool,
    pub key_mode: KeyMode,
    /// Optional cap on quiescence plies. `None` searches loud moves to exhaustion.
    pub qsearch_ply_limit: Option<u32>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            depth: 4,
            use_tt: true,
            use_quiescence: true,
            move_order: MoveOrder::Tactical,
            exclude_king_moves: false,
            key_mode: KeyMode::Placement,
            qsearch_ply_limit: None,
        }
    }
}

/// Outcome of a root search with the counters collected on the way.
#[derive(Default, Debug, Clone)]
pub struct SearchReport {
    pub bestmove: Option<Move>,
    pub score: i32,
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
    pub tt_entries: usize,
}

/// Alpha-beta minimax over a single `Position`, walked with push/pop.
///
/// Scores are always from White's point of view; `maximizing` says which side
/// the current node picks for. The cache lives as long as the searcher, so use
/// one searcher per move decision (or call `reset`).
#[derive(Debug, Default)]
pub struct Searcher {
    pub(crate) params: SearchParams,
    tt: Tt,
    pub(crate) nodes: u64,
    pub(crate) qnodes: u64,
}

fn mate_in_depth(score: i32, depth: u32) -> i32 {
    // Mates found with more depth left are nearer the root and score further out.
    if is_mate_score(score) { score + score.signum() * depth as i32 } else { score }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, ..Self::default() }
    }

    pub fn params(&self) -> &SearchParams { &self.params }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn qnodes(&self) -> u64 { self.qnodes }

    pub fn tt(&self) -> &Tt { &self.tt }

    pub fn reset(&mut self) {
        self.tt.clear();
        self.nodes = 0;
        self.qnodes = 0;
    }

    fn key(&self, pos: &Position) -> u64 { zobrist::compute(pos, self.params.key_mode) }

    /// Score at depth zero: quiescence (translated into White's frame) or the
    /// static evaluation.
    fn horizon(&mut self, pos: &mut Position, alpha: i32, beta: i32) -> i32 {
        if !self.params.use_quiescence {
            return evaluate(pos);
        }
        if pos.side_to_move() == Color::White {
            self.quiescence(pos, alpha, beta)
        } else {
            -self.quiescence(pos, -beta, -alpha)
        }
    }

    pub fn search(&mut self, pos: &mut Position, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool) -> SearchResult {
        self.nodes += 1;

        let key = if self.params.use_tt { Some(self.key(pos)) } else { None };
        if let Some(k) = key {
            if let Some(hit) = self.tt.get(k) {
                trace!("tt hit {k:016x} depth {depth} score {}", hit.score);
                return hit;
            }
        }

        if depth == 0 {
            return SearchResult::leaf(self.horizon(pos, alpha, beta));
        }
        if pos.is_checkmate() {
            return SearchResult::leaf(mate_in_depth(evaluate(pos), depth));
        }

        let mut moves = pos.legal_moves();
        if moves.is_empty() {
            // Stalemate: nothing to fold, keep the static score.
            let res = SearchResult::leaf(evaluate(pos));
            if let Some(k) = key { self.tt.put(k, res); }
            return res;
        }
        if self.params.exclude_king_moves {
            exclude_white_king_moves(pos, &mut moves);
        }
        ordering::apply(self.params.move_order, pos, &mut moves);

        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move: Option<Move> = None;
        for m in moves {
            pos.push(m);
            let child = self.search(pos, depth - 1, alpha, beta, !maximizing);
            pos.pop();
            if maximizing {
                if child.score > best_score { best_score = child.score; best_move = Some(m); }
                alpha = alpha.max(best_score);
            } else {
                if child.score < best_score { best_score = child.score; best_move = Some(m); }
                beta = beta.min(best_score);
            }
            if beta <= alpha { break; }
        }

        let res = SearchResult { score: best_score, best: best_move };
        if let Some(k) = key { self.tt.put(k, res); }
        res
    }

    /// Searches the root to `params.depth` and reports the move for the side to move.
    pub fn search_root(&mut self, pos: &mut Position, mode: RootMode) -> SearchReport {
        let depth = self.params.depth;
        let maximizing = pos.side_to_move() == Color::White;
        let res = match mode {
            RootMode::OneShot => self.search(pos, depth, -INFINITY, INFINITY, maximizing),
            RootMode::Iterate => self.search_root_moves(pos, depth, maximizing),
        };
        debug!(
            "root search {:?} depth {} -> {:?} score {} nodes {} qnodes {} tt hits {}",
            mode, depth, res.best.map(|m| pos.uci(m)), res.score, self.nodes, self.qnodes, self.tt.hits()
        );
        SearchReport {
            bestmove: res.best,
            score: res.score,
            nodes: self.nodes,
            qnodes: self.qnodes,
            tt_hits: self.tt.hits(),
            tt_entries: self.tt.len(),
        }
    }

    fn search_root_moves(&mut self, pos: &mut Position, depth: u32, maximizing: bool) -> SearchResult {
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move: Option<Move> = None;
        let mut moves = pos.legal_moves();
        if self.params.exclude_king_moves {
            exclude_white_king_moves(pos, &mut moves);
        }
        ordering::apply(self.params.move_order, pos, &mut moves);
        for m in moves {
            pos.push(m);
            let child = self.search(pos, depth.saturating_sub(1), -INFINITY, INFINITY, !maximizing);
            pos.pop();
            trace!("root {} -> {}", pos.uci(m), child.score);
            let better = if maximizing { child.score > best_score } else { child.score < best_score };
            if better { best_score = child.score; best_move = Some(m); }
        }
        if best_move.is_none() {
            best_score = evaluate(pos);
        }
        SearchResult { score: best_score, best: best_move }
    }
}
