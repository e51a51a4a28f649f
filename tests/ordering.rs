use fenbot::board::Position;
use fenbot::search::alphabeta::{RootMode, SearchParams, Searcher};
use fenbot::search::ordering::{order_key, order_moves, MoveOrder};

fn score_with(fen: &str, order: MoveOrder, depth: u32) -> (i32, u64) {
    let mut pos = Position::from_fen(fen).expect("valid fen");
    let p = SearchParams { depth, use_tt: false, use_quiescence: false, move_order: order, ..SearchParams::default() };
    let mut s = Searcher::new(p);
    let r = s.search_root(&mut pos, RootMode::OneShot);
    (r.score, r.nodes)
}

#[test]
fn ordering_never_changes_the_score() {
    let fens = [
        "k7/8/8/8/8/8/3qQ3/7K w - - 0 1",
        "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    ];
    for fen in fens {
        let (tactical, _) = score_with(fen, MoveOrder::Tactical, 3);
        let (captures, _) = score_with(fen, MoveOrder::CapturesFirst, 3);
        let (plain, _) = score_with(fen, MoveOrder::Unordered, 3);
        assert_eq!(tactical, plain, "{fen}");
        assert_eq!(captures, plain, "{fen}");
    }
}

#[test]
fn tactical_order_key_is_descending() {
    let pos = Position::from_fen("r3k3/1P6/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
    let mut moves = pos.legal_moves();
    order_moves(&pos, &mut moves);
    let keys: Vec<_> = moves.iter().map(|&m| order_key(&pos, m)).collect();
    assert!(keys.windows(2).all(|w| w[0] >= w[1]), "{keys:?}");
    assert!(keys[0].0, "a checking move should lead");
}
