use criterion::{criterion_group, criterion_main, Criterion, black_box};
use fenbot::board::Position;

fn bench_eval(c: &mut Criterion) {
    let p = Position::startpos();
    c.bench_function("evaluate_startpos", |ben| {
        ben.iter(|| {
            let v = fenbot::search::eval::evaluate(black_box(&p));
            black_box(v)
        })
    });
    let mid = Position::from_fen("r3k2r/pppq1ppp/2n2n2/3pp3/3PP3/2N2N2/PPPQ1PPP/R3K2R w KQkq - 0 8").unwrap();
    c.bench_function("placement_key_middlegame", |ben| {
        ben.iter(|| {
            let k = fenbot::search::zobrist::placement_key(black_box(&mid));
            black_box(k)
        })
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
