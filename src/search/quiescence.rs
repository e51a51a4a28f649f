use crate::board::Position;
use crate::search::alphabeta::Searcher;
use crate::search::eval::{evaluate_relative, INFINITY};

impl Searcher {
    /// Negamax quiescence search over captures and checks, scored for the
    /// side to move. Fail-hard: the result is clamped to `[alpha, beta]`.
    pub fn quiescence(&mut self, pos: &mut Position, alpha: i32, beta: i32) -> i32 {
        self.qsearch(pos, alpha, beta, 0)
    }

    pub fn qsearch_eval(&mut self, pos: &mut Position) -> i32 {
        self.quiescence(pos, -INFINITY, INFINITY)
    }

    fn qsearch(&mut self, pos: &mut Position, mut alpha: i32, beta: i32, qply: u32) -> i32 {
        self.qnodes += 1;
        // Stand pat
        let stand = evaluate_relative(pos);
        if stand >= beta { return beta; }
        if stand > alpha { alpha = stand; }
        if self.params.qsearch_ply_limit.is_some_and(|limit| qply >= limit) {
            return alpha;
        }

        // Captures and checks only
        for m in pos.legal_moves() {
            if !(pos.is_capture(m) || pos.gives_check(m)) { continue; }
            pos.push(m);
            let score = -self.qsearch(pos, -beta, -alpha, qply + 1);
            pos.pop();
            if score >= beta { return beta; }
            if score > alpha { alpha = score; }
        }
        alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::alphabeta::SearchParams;

    #[test]
    fn qsearch_improves_on_hanging_queen() {
        // The c1 bishop can take the queen on f4.
        let mut pos = Position::from_fen("4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1").unwrap();
        let mut s = Searcher::new(SearchParams::default());
        let stand = evaluate_relative(&pos);
        let qs = s.qsearch_eval(&mut pos);
        assert_eq!(stand, -6);
        assert!(qs > stand, "qsearch should improve eval: qs {qs} vs stand {stand}");
        assert_eq!(pos.ply(), 0);
    }

    #[test]
    fn qsearch_equals_standpat_without_loud_moves() {
        let mut pos = Position::from_fen("k7/8/8/8/8/8/8/7K w - - 0 1").unwrap();
        let mut s = Searcher::new(SearchParams::default());
        assert_eq!(s.qsearch_eval(&mut pos), evaluate_relative(&pos));
        assert_eq!(s.qnodes(), 1);
    }

    #[test]
    fn fail_high_returns_beta() {
        let mut pos = Position::from_fen("k7/8/8/8/8/8/8/1Q5K w - - 0 1").unwrap();
        let mut s = Searcher::new(SearchParams::default());
        assert_eq!(s.quiescence(&mut pos, -10, 5), 5);
    }

    #[test]
    fn ply_limit_zero_is_stand_pat() {
        let mut pos = Position::from_fen("4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1").unwrap();
        let params = SearchParams { qsearch_ply_limit: Some(0), ..SearchParams::default() };
        let mut s = Searcher::new(params);
        assert_eq!(s.qsearch_eval(&mut pos), -6);
    }
}
