//! Criterion benchmarks for leveled_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use leveled_logger::prelude::*;
use leveled_logger::info;
use std::io;
use std::sync::Arc;

fn sink_logger(level: LogLevel) -> Logger {
    Logger::builder()
        .level(level)
        .appender(WriterAppender::new(io::sink()))
        .build()
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Trace);

    group.bench_function("method", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("macro_formatted", |b| {
        b.iter(|| {
            info!(logger, "Request {} took {}ms", black_box(42), black_box(7));
        });
    });

    group.bench_function("custom_time_format", |b| {
        let logger = sink_logger(LogLevel::Trace);
        logger.set_time_format("%Y-%m-%dT%H:%M:%S%.6f");
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LogLevel::Error);

    group.bench_function("suppressed_method", |b| {
        b.iter(|| {
            logger.debug(black_box("Filtered out"));
        });
    });

    group.bench_function("suppressed_macro", |b| {
        b.iter(|| {
            leveled_logger::debug!(logger, "Filtered {}", black_box(1));
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");
    group.throughput(Throughput::Elements(400));

    let logger = Arc::new(sink_logger(LogLevel::Trace));

    group.bench_function("4_threads_x_100", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..100 {
                            logger.info(format!("Message {}", i));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().expect("Thread panicked");
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_emission,
    bench_level_filtering,
    bench_concurrent_logging
);
criterion_main!(benches);
