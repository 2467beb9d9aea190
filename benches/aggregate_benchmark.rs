use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rucat::{ExcludedSuffixes, run};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_test_directory_structure(dir: &Path, depth: usize, files_per_dir: usize) {
    if depth == 0 {
        return;
    }

    for i in 0..files_per_dir {
        fs::write(dir.join(format!("file_{}.txt", i)), format!("Content of file {}", i)).unwrap();
        fs::write(dir.join(format!("image_{}.png", i)), [0x89u8, 0x50, 0x4e, 0x47]).unwrap();
    }

    for i in 0..3 {
        let subdir_path = dir.join(format!("subdir_{}", i));
        fs::create_dir_all(&subdir_path).unwrap();
        create_test_directory_structure(&subdir_path, depth - 1, files_per_dir);
    }
}

fn bench_aggregate(c: &mut Criterion) {
    let tree = TempDir::new().unwrap();
    create_test_directory_structure(tree.path(), 4, 10);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");
    let suffixes = ExcludedSuffixes::default();

    c.bench_function("aggregate_depth4_10files", |b| {
        b.iter(|| run(black_box(tree.path()), &suffixes, &output).unwrap())
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
