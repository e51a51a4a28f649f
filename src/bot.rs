use cozy_chess::{Color, Move, Piece};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::Position;
use crate::config::{BotConfig, Strategy};
use crate::error::{BotError, Result};
use crate::search::alphabeta::Searcher;
use crate::search::eval::material;

/// Why the bot played the move it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Only one legal move; nothing was searched.
    Forced,
    Search,
    Greedy,
    /// Uniform random pick among the legal moves.
    Fallback,
}

#[derive(Clone, Debug)]
pub struct Decision {
    pub mv: Move,
    pub uci: String,
    pub source: Source,
    pub score: Option<i32>,
    pub depth: u32,
    pub nodes: u64,
}

pub struct Bot {
    config: BotConfig,
    rng: SmallRng,
}

/// Search depth for this position. The phase split is kept as a hook; every
/// phase currently uses the configured depth.
pub fn dynamic_depth(pos: &Position, depth: u32) -> u32 {
    let pieces = pos.piece_count();
    if pieces <= 10 {
        debug!("endgame ({pieces} pieces)");
        depth
    } else if pieces <= 20 {
        debug!("midgame ({pieces} pieces)");
        depth
    } else {
        debug!("opening ({pieces} pieces)");
        depth
    }
}

impl Bot {
    pub fn new(config: BotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &BotConfig { &self.config }

    /// Picks a move for the position encoded by `fen` and returns it as
    /// long algebraic text (`e2e4`, `e7e8q`).
    pub fn choose_move(&mut self, fen: &str) -> Result<String> {
        let mut pos = Position::from_fen(fen)?;
        Ok(self.choose(&mut pos)?.uci)
    }

    /// Picks a move. `pos` is left exactly as it was passed in.
    pub fn choose(&mut self, pos: &mut Position) -> Result<Decision> {
        let moves = pos.legal_moves();
        if moves.is_empty() {
            return Err(BotError::NoLegalMoves);
        }
        if moves.len() == 1 {
            return Ok(self.decision(pos, moves[0], Source::Forced, None, 0, 0));
        }
        let decision = match self.config.strategy {
            Strategy::Minimax => self.choose_minimax(pos, &moves)?,
            Strategy::Greedy => self.choose_greedy(pos, &moves)?,
        };
        info!("{} -> {} ({:?})", pos.fen(), decision.uci, decision.source);
        Ok(decision)
    }

    fn choose_minimax(&mut self, pos: &mut Position, moves: &[Move]) -> Result<Decision> {
        let depth = dynamic_depth(pos, self.config.depth);
        let mut params = self.config.search_params();
        params.depth = depth;
        // Fresh cache per decision.
        let mut searcher = Searcher::new(params);
        let report = searcher.search_root(pos, self.config.root_mode);
        match report.bestmove {
            Some(mv) => Ok(self.decision(pos, mv, Source::Search, Some(report.score), depth, report.nodes)),
            None => {
                debug!("search produced no move, falling back to random");
                let mv = self.random_move(moves)?;
                Ok(self.decision(pos, mv, Source::Fallback, None, depth, report.nodes))
            }
        }
    }

    fn choose_greedy(&mut self, pos: &mut Position, moves: &[Move]) -> Result<Decision> {
        let sign = if pos.side_to_move() == Color::White { 1 } else { -1 };
        let initial = sign * material(pos);
        for &mv in moves {
            if mv.promotion == Some(Piece::Queen) {
                return Ok(self.decision(pos, mv, Source::Greedy, None, 1, 0));
            }
            pos.push(mv);
            let mates = pos.is_checkmate();
            let gain = sign * material(pos) > initial;
            pos.pop();
            if mates || gain {
                return Ok(self.decision(pos, mv, Source::Greedy, None, 1, 0));
            }
        }
        let mv = self.random_move(moves)?;
        Ok(self.decision(pos, mv, Source::Fallback, None, 0, 0))
    }

    fn random_move(&mut self, moves: &[Move]) -> Result<Move> {
        moves.choose(&mut self.rng).copied().ok_or(BotError::NoLegalMoves)
    }

    fn decision(&self, pos: &Position, mv: Move, source: Source, score: Option<i32>, depth: u32, nodes: u64) -> Decision {
        Decision { mv, uci: pos.uci(mv), source, score, depth, nodes }
    }
}

impl Default for Bot {
    fn default() -> Self { Self::new(BotConfig::default()) }
}
