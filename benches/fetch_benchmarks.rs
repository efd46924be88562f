//! Benchmarks for `Fetcher::fetch`
//!
//! - `fetch/server`: full GET round trips against a local mock server, one per status
//! - `fetch/stub`: fetch overhead with a closure transport, no network
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench --bench fetch_benchmarks
//! cargo bench --bench fetch_benchmarks -- fetch/server
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fetchlog::transport::from_fn;
use fetchlog::{Fetcher, ReqwestTransport, Response};

const STATUSES: &[u16] = &[200, 404, 503];

fn local_fetcher() -> Fetcher {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build reqwest client");
    Fetcher::new(ReqwestTransport::from_client(client))
}

fn bench_fetch_server(c: &mut Criterion) {
    let mut server = mockito::Server::new();
    let fetcher = local_fetcher();
    let mut group = c.benchmark_group("fetch/server");

    for &status in STATUSES {
        let path = format!("/{}", status);
        let _mock = server
            .mock("GET", path.as_str())
            .with_status(status as usize)
            .create();
        let url = format!("{}{}", server.url(), path);

        group.bench_function(BenchmarkId::from_parameter(status), |b| {
            b.iter(|| {
                let code = fetcher.fetch(black_box(&url)).expect("Fetch failed");
                assert_eq!(code, status);
            });
        });
    }

    group.finish();
}

fn bench_fetch_stub(c: &mut Criterion) {
    let mut group = c.benchmark_group("fetch/stub");

    for &status in STATUSES {
        let fetcher = Fetcher::new(from_fn(move |_| Ok(Response::new(status))));

        group.bench_function(BenchmarkId::from_parameter(status), |b| {
            b.iter(|| fetcher.fetch(black_box("http://www.google.com")));
        });
    }

    group.finish();
}

criterion_group!(fetch_benches, bench_fetch_server, bench_fetch_stub);
criterion_main!(fetch_benches);
