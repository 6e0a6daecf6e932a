use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wirerec::models::Pet;
use wirerec::record::Record;

fn example_payload() -> &'static str {
    r#"{
        "id": 42,
        "name": "Rex",
        "photoUrls": ["http://a/1.jpg", "http://a/2.jpg", "http://a/3.jpg"],
        "status": "available",
        "category": {"id": 1, "name": "dogs"},
        "tags": [
            {"id": 1, "name": "fluffy"},
            {"id": 2, "name": "small"},
            {"id": 3, "name": "house-trained"}
        ]
    }"#
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("pet_parse", |b| {
        b.iter(|| Pet::from_json(black_box(example_payload())))
    });
}

fn bench_serialize(c: &mut Criterion) {
    let pet = Pet::from_json(example_payload());
    c.bench_function("pet_serialize", |b| b.iter(|| black_box(&pet).to_json()));
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("pet_round_trip", |b| {
        b.iter(|| Pet::from_json(&Pet::from_json(black_box(example_payload())).to_json()))
    });
}

criterion_group!(benches, bench_parse, bench_serialize, bench_round_trip);
criterion_main!(benches);
