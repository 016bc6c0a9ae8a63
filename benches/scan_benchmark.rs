use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rusize::output::NullReporter;
use rusize::{ErrorTally, MaxDepth, ScanConfig, compute_size, scan_root};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_test_directory_structure(dir: &Path, depth: usize, files_per_dir: usize) {
    if depth == 0 {
        return;
    }

    for i in 0..files_per_dir {
        let file_path = dir.join(format!("file_{}.txt", i));
        fs::write(&file_path, format!("Content of file {}", i)).unwrap();
    }

    for i in 0..3 {
        let subdir_path = dir.join(format!("subdir_{}", i));
        fs::create_dir_all(&subdir_path).unwrap();
        create_test_directory_structure(&subdir_path, depth - 1, files_per_dir);
    }
}

fn quiet_config(max_depth: MaxDepth) -> ScanConfig {
    ScanConfig {
        max_depth,
        show_progress: false,
        show_warnings: false,
        include_hidden: true,
    }
}

fn benchmark_compute_size_unlimited(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // 5 levels deep, 5 files per directory
    create_test_directory_structure(root, 5, 5);
    let config = quiet_config(MaxDepth::Unlimited);

    c.bench_function("compute_size_unlimited", |b| {
        b.iter(|| {
            let mut errors = ErrorTally::new();
            compute_size(
                black_box(root),
                black_box(&config),
                &mut errors,
                &mut NullReporter,
            )
        })
    });
}

fn benchmark_compute_size_default_depth(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    create_test_directory_structure(root, 5, 5);
    let config = quiet_config(MaxDepth::default());

    c.bench_function("compute_size_default_depth", |b| {
        b.iter(|| {
            let mut errors = ErrorTally::new();
            compute_size(
                black_box(root),
                black_box(&config),
                &mut errors,
                &mut NullReporter,
            )
        })
    });
}

fn benchmark_scan_root(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    create_test_directory_structure(root, 4, 10);
    let config = quiet_config(MaxDepth::Unlimited);

    c.bench_function("scan_root", |b| {
        b.iter(|| scan_root(black_box(root), black_box(&config), &mut NullReporter).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_compute_size_unlimited,
    benchmark_compute_size_default_depth,
    benchmark_scan_root
);

criterion_main!(benches);
