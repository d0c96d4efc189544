use bytepair::{decode, encode};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::Duration;

fn generate_test_data(size: usize, pattern: &str) -> Vec<u8> {
    match pattern {
        "text" => {
            let base = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
            let mut data = Vec::with_capacity(size);
            while data.len() < size {
                data.extend_from_slice(base);
            }
            data.truncate(size);
            data
        }
        "binary" => (0..size).map(|i| ((i * 17 + 11) % 256) as u8).collect(),
        "json" => {
            let template = br#"{"id":123,"name":"Example","values":[1,2,3,4,5],"active":true}"#;
            let mut data = Vec::with_capacity(size);
            while data.len() < size {
                data.extend_from_slice(template);
                data.push(b',');
            }
            data.truncate(size);
            data
        }
        _ => panic!("Unknown pattern: {pattern}"),
    }
}

fn round_trip_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip_throughput");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(30);

    for size in [1024, 10240, 102400].iter() {
        let size_label = match *size {
            1024 => "1KB",
            10240 => "10KB",
            102400 => "100KB",
            _ => "unknown",
        };

        for pattern in ["text", "binary", "json"].iter() {
            let data = generate_test_data(*size, pattern);
            let benchmark_id = BenchmarkId::from_parameter(format!("{size_label}/{pattern}"));

            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(benchmark_id, &data, |b, data| {
                b.iter(|| {
                    let (encoded, table) = encode(black_box(data));
                    let decoded = decode(black_box(&encoded), black_box(&table));
                    assert_eq!(data.len(), decoded.len());
                    decoded
                });
            });
        }
    }

    group.finish();
}

fn decode_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for pattern in ["text", "json"].iter() {
        let data = generate_test_data(102400, pattern);
        let (encoded, table) = encode(&data);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern),
            &(encoded, table),
            |b, (encoded, table)| b.iter(|| decode(black_box(encoded), black_box(table))),
        );
    }

    group.finish();
}

criterion_group!(benches, round_trip_throughput, decode_only);
criterion_main!(benches);
