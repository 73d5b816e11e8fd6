use asset_reader::{MemoryProvider, ResourceReader};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn generate_random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

fn load_from_memory(c: &mut Criterion) {
    let inputs = [
        ("load_small", 1024),
        ("load_medium", 65536),
        ("load_large", 1048576),
    ];

    for (name, size) in inputs.iter() {
        let provider = MemoryProvider::new()
            .with_resource("blob.bin", generate_random_data(*size));
        let reader = ResourceReader::new(provider);
        let mut group = c.benchmark_group(name.to_string());
        group.measurement_time(std::time::Duration::from_secs(5));

        group.bench_function("load", move |b| {
            b.iter(|| {
                reader
                    .load(black_box("blob.bin"))
                    .expect("load returned nothing")
            });
        });

        group.finish();
    }
}

criterion_group!(benches, load_from_memory);
criterion_main!(benches);
