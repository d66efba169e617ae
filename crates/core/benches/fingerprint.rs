use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use httpfinger_common::ReportMode;
use httpfinger_core::{Fingerprinter, HttpRequest};

fn browser_get() -> HttpRequest {
    HttpRequest {
        uri: "/catalog/search.php?q=term&page=2&sort=price".to_string(),
        method: "GET".to_string(),
        version: "1.1".to_string(),
        headers: [
            "Host: shop.example.com",
            "User-Agent: Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0",
            "Accept: text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            "Accept-Language: en-US,en;q=0.5",
            "Accept-Encoding: gzip, deflate, br",
            "Connection: keep-alive",
            "Upgrade-Insecure-Requests: 1",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        payload: None,
    }
}

fn form_post() -> HttpRequest {
    HttpRequest {
        uri: "/account/login.php".to_string(),
        method: "POST".to_string(),
        version: "1.1".to_string(),
        headers: [
            "Host: shop.example.com",
            "User-Agent: Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0",
            "Content-Type: application/x-www-form-urlencoded",
            "Content-Length: 42",
            "Connection: keep-alive",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        payload: Some("user=demo&pass=demo1234&remember=on&go=Login".to_string()),
    }
}

fn bench_fingerprint(c: &mut Criterion) {
    let engine = Fingerprinter::builtin(ReportMode::Full);
    let get = browser_get();
    let post = form_post();

    c.bench_function("fingerprint/browser_get", |b| {
        b.iter(|| engine.fingerprint(black_box(&get)).unwrap())
    });
    c.bench_function("fingerprint/form_post", |b| {
        b.iter(|| engine.fingerprint(black_box(&post)).unwrap())
    });
}

criterion_group!(benches, bench_fingerprint);
criterion_main!(benches);
