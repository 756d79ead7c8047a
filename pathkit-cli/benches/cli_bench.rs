use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

static CLI_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn pathkit() -> Command {
    let mut cmd = Command::cargo_bin("pathkit").expect("failed to locate pathkit binary");
    cmd.env_remove("PATHKIT_CONFIG").env_remove("PATHKIT_LOG_MODE");
    cmd
}

fn populate(dir: &TempDir, width: usize) {
    for i in 0..width {
        let sub = dir.path().join(format!("dir-{i}"));
        std::fs::create_dir_all(&sub).expect("failed to create bench dir");
        for j in 0..width {
            std::fs::write(sub.join(format!("file-{j}")), "payload")
                .expect("failed to write bench file");
        }
    }
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let output = pathkit().arg("--version").output().expect("failed to run pathkit");
            black_box(output);
        });
    });
}

fn bench_cli_normalize(c: &mut Criterion) {
    c.bench_function("cli_normalize", |b| {
        b.iter(|| {
            let output = pathkit()
                .args(["--style", "posix", "normalize", "/a/./b/../c//d/e/../f"])
                .output()
                .expect("failed to run pathkit normalize");
            black_box(output);
        });
    });
}

fn bench_cli_copy(c: &mut Criterion) {
    c.bench_function("cli_copy_recursive", |b| {
        b.iter_batched(
            || {
                let dir = TempDir::new().expect("failed to create temp dir");
                populate(&dir, 10);
                dir
            },
            |dir| {
                let counter = CLI_COUNTER.fetch_add(1, Ordering::Relaxed);
                let status = pathkit()
                    .current_dir(dir.path())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .args(["copy", "--recursive", "dir-0", &format!("copy-{counter}")])
                    .status()
                    .expect("failed to execute pathkit copy");
                black_box(status.success());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_cli_ls(c: &mut Criterion) {
    c.bench_function("cli_ls_recursive_json", |b| {
        b.iter_batched(
            || {
                let dir = TempDir::new().expect("failed to create temp dir");
                populate(&dir, 20);
                dir
            },
            |dir| {
                let output = pathkit()
                    .current_dir(dir.path())
                    .args(["ls", "--recursive", "--format", "json", "."])
                    .output()
                    .expect("failed to execute pathkit ls");
                black_box(output);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    cli_benches,
    bench_cli_startup,
    bench_cli_normalize,
    bench_cli_copy,
    bench_cli_ls
);
criterion_main!(cli_benches);
