use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use floatbuf::{load, store};
use rand::Rng;
use tempfile::TempDir;

fn bench_transfer(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let mut rng = rand::thread_rng();
    let mut group = c.benchmark_group("transfer");

    for count in [1_024usize, 262_144, 4_194_304] {
        let data: Vec<f32> = (0..count).map(|_| rng.gen()).collect();
        let path = dir.path().join(format!("bench_{count}.bin"));
        group.throughput(Throughput::Bytes((count * 4) as u64));

        group.bench_with_input(BenchmarkId::new("store", count), &data, |b, data| {
            b.iter(|| store(&path, black_box(data)).unwrap())
        });

        let mut buffer = vec![0.0f32; count];
        group.bench_with_input(BenchmarkId::new("load", count), &count, |b, _| {
            b.iter(|| load(&path, black_box(&mut buffer)).unwrap())
        });

        #[cfg(feature = "mmap")]
        group.bench_with_input(BenchmarkId::new("mmap", count), &count, |b, &count| {
            b.iter(|| {
                let mapped = floatbuf::MappedBuffer::open(&path, count).unwrap();
                black_box(mapped.iter().sum::<f32>())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transfer);
criterion_main!(benches);
