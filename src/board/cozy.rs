use cozy_chess::{Board as CozyBoard, Color, File, Move, Piece, Square};

use crate::error::{BotError, Result};

pub const ALL_PIECES: [Piece; 6] = [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King];

pub fn opponent(color: Color) -> Color {
    if color == Color::White { Color::Black } else { Color::White }
}

/// A chess position with make/unmake semantics.
///
/// `push` keeps the previous board on an undo stack and `pop` restores it, so a
/// search can walk the tree on one `Position` and leave it exactly as it found it.
#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
    stack: Vec<CozyBoard>,
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: CozyBoard::default(), stack: Vec::with_capacity(64) }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        CozyBoard::from_fen(fen.trim(), false)
            .map(|b| Self { board: b, stack: Vec::with_capacity(64) })
            .map_err(|e| BotError::InvalidFen { fen: fen.to_string(), reason: format!("{e:?}") })
    }

    pub fn board(&self) -> &CozyBoard { &self.board }

    pub fn fen(&self) -> String { format!("{}", self.board) }

    /// Number of moves currently pushed on the undo stack.
    pub fn ply(&self) -> usize { self.stack.len() }

    pub fn side_to_move(&self) -> Color { self.board.side_to_move() }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|ml| {
            moves.extend(ml);
            false
        });
        moves
    }

    pub fn push(&mut self, mv: Move) {
        let prev = self.board.clone();
        self.board.play(mv);
        self.stack.push(prev);
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.stack.is_empty(), "pop without a matching push");
        if let Some(prev) = self.stack.pop() {
            self.board = prev;
        }
    }

    pub fn is_check(&self) -> bool { !self.board.checkers().is_empty() }

    pub fn is_checkmate(&self) -> bool {
        if !self.is_check() { return false; }
        let mut any = false;
        self.board.generate_moves(|ml| {
            any = !ml.is_empty();
            any
        });
        !any
    }

    pub fn gives_check(&self, mv: Move) -> bool {
        let mut child = self.board.clone();
        child.play(mv);
        !child.checkers().is_empty()
    }

    /// Captures include en passant. Castling (king onto own rook) never counts.
    pub fn is_capture(&self, mv: Move) -> bool {
        let them = self.board.colors(opponent(self.side_to_move()));
        if them.has(mv.to) { return true; }
        self.board.piece_on(mv.from) == Some(Piece::Pawn) && mv.from.file() != mv.to.file()
    }

    pub fn promotion(&self, mv: Move) -> Option<Piece> { mv.promotion }

    pub fn king_square(&self, color: Color) -> Square { self.board.king(color) }

    pub fn piece_count(&self) -> usize { self.board.occupied().len() as usize }

    /// Every piece on the board as `(piece, color)`, kings included.
    pub fn pieces(&self) -> impl Iterator<Item = (Piece, Color)> + '_ {
        [Color::White, Color::Black].into_iter().flat_map(move |color| {
            ALL_PIECES.into_iter().flat_map(move |piece| {
                let bb = self.board.colors(color) & self.board.pieces(piece);
                bb.into_iter().map(move |_| (piece, color))
            })
        })
    }

    fn is_castle(&self, mv: Move) -> bool {
        self.board.piece_on(mv.from) == Some(Piece::King)
            && self.board.colors(self.side_to_move()).has(mv.to)
    }

    /// Long algebraic text for a legal move. Castling is written as the king
    /// moving two squares (`e1g1`), not as king-takes-rook.
    pub fn uci(&self, mv: Move) -> String {
        if self.is_castle(mv) {
            let file = if mv.to.file() as u8 > mv.from.file() as u8 { File::G } else { File::C };
            let to = Square::new(file, mv.from.rank());
            return format!("{}{}", mv.from, to);
        }
        format!("{}", mv)
    }

    pub fn parse_uci(&self, text: &str) -> Result<Move> {
        let text = text.trim();
        self.legal_moves()
            .into_iter()
            .find(|&m| self.uci(m) == text)
            .ok_or_else(|| BotError::IllegalMove(text.to_string()))
    }
}

impl Default for Position {
    fn default() -> Self { Self::startpos() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castling_is_written_as_king_two_squares() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let texts: Vec<String> = pos.legal_moves().into_iter().map(|m| pos.uci(m)).collect();
        assert!(texts.iter().any(|t| t == "e1g1"), "missing short castle: {texts:?}");
        assert!(texts.iter().any(|t| t == "e1c1"), "missing long castle: {texts:?}");
        assert!(!texts.iter().any(|t| t == "e1h1"));
        let castle = pos.parse_uci("e1g1").unwrap();
        assert!(!pos.is_capture(castle));
    }

    #[test]
    fn en_passant_counts_as_capture() {
        let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
        let ep = pos.parse_uci("e5d6").unwrap();
        assert!(pos.is_capture(ep));
        let quiet = pos.parse_uci("e5e6").unwrap();
        assert!(!pos.is_capture(quiet));
    }

    #[test]
    fn push_pop_restores_board() {
        let mut pos = Position::startpos();
        let before = pos.fen();
        let mv = pos.parse_uci("e2e4").unwrap();
        pos.push(mv);
        assert_eq!(pos.ply(), 1);
        assert_ne!(pos.fen(), before);
        pos.pop();
        assert_eq!(pos.ply(), 0);
        assert_eq!(pos.fen(), before);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pop without a matching push")]
    fn unbalanced_pop_is_caught() {
        let mut pos = Position::startpos();
        let mv = pos.parse_uci("e2e4").unwrap();
        pos.push(mv);
        pos.pop();
        pos.pop();
    }

    #[test]
    fn back_rank_mate_detected() {
        let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mv = pos.parse_uci("a1a8").unwrap();
        assert!(pos.gives_check(mv));
        pos.push(mv);
        assert!(pos.is_check());
        assert!(pos.is_checkmate());
    }

    #[test]
    fn startpos_has_thirty_two_pieces() {
        let pos = Position::startpos();
        assert_eq!(pos.pieces().count(), 32);
        assert_eq!(pos.piece_count(), 32);
    }
}
