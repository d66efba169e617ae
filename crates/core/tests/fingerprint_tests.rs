//! End-to-end fixtures for the composed fingerprint.

use httpfinger_common::ReportMode;
use httpfinger_core::{Fingerprinter, HttpRequest};

/// Chrome 101 hitting a WebGoat instance; captured reference output.
fn chrome_webgoat_request() -> HttpRequest {
    HttpRequest {
        uri: "/WebGoat".to_string(),
        method: "GET".to_string(),
        version: "1.1".to_string(),
        headers: [
            "Host: localhost:8080",
            "Connection: keep-alive",
            "Cache-Control: max-age=0",
            "Upgrade-Insecure-Requests: 1",
            "User-Agent: Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/101.0.4951.67 Safari/537.36",
            "Accept: text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9",
            "Sec-GPC: 1",
            "Sec-Fetch-Site: none",
            "Sec-Fetch-Mode: navigate",
            "Sec-Fetch-User: ?1",
            "Sec-Fetch-Dest: document",
            "Accept-Encoding: gzip, deflate, br",
            "Accept-Language: en-US,en;q=0.9,fr;q=0.8,fr-FR;q=0.7",
            "Cookie: JSESSIONID=CY7pJ_5MW7-s4IMlKlhpgPi467TSwS6O-4lrrGZH; JSESSIONID=fD09zlMeWuY0Htn8gyRU9A.node0; io=YCQULPy6oHI7HkLxAAA5",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        payload: Some(String::new()),
    }
}

const CHROME_WEBGOAT_FINGERPRINT: &str = "0.9|1|0.8|||||GE|1|ho,co,ca-co,u-i-r,us-ag,ac,1586472b,7e369551,a602679,206f7215,975a9022,ac-en,ac-la,ck|co:ke-al/ca-co:916a0a82/us-ag:92028000/ac:f159e9d0/ac-en:gz,de,br/ac-la:b88ab870|||";

/// Firefox 115 navigation request with no payload.
fn firefox_webgoat_request() -> HttpRequest {
    HttpRequest {
        uri: "/WebGoat/start.mvc".to_string(),
        method: "GET".to_string(),
        version: "1.1".to_string(),
        headers: [
            "Host: localhost:8080",
            "User-Agent: Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0",
            "Accept: text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            "Accept-Language: fr,fr-FR;q=0.8,en-US;q=0.5,en;q=0.3",
            "Accept-Encoding: gzip, deflate, br",
            "Connection: keep-alive",
            "Cookie: JSESSIONID=5DF5D7B8F8F6A9E2E8D",
            "Upgrade-Insecure-Requests: 1",
            "Sec-Fetch-Dest: document",
            "Sec-Fetch-Mode: navigate",
            "Sec-Fetch-Site: none",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        payload: None,
    }
}

const FIREFOX_WEBGOAT_FINGERPRINT: &str = "1.3|2|0.9|||||GE|1|ho,us-ag,ac,ac-la,ac-en,co,ck,u-i-r,975a9022,a602679,7e369551|us-ag:55ed379d/ac:6cc9e5e/ac-la:686a865e/ac-en:gz,de,br/co:ke-al|||";

/// Form login POST with a 39-byte body.
fn login_post_request() -> HttpRequest {
    HttpRequest {
        uri: "/mutillidae/index.php?page=login.php".to_string(),
        method: "POST".to_string(),
        version: "1.1".to_string(),
        headers: [
            "Host: 192.168.56.102",
            "User-Agent: Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0",
            "Accept: text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            "Accept-Language: en-US,en;q=0.5",
            "Accept-Encoding: gzip, deflate",
            "Content-Type: application/x-www-form-urlencoded",
            "Content-Length: 39",
            "Origin: http://192.168.56.102",
            "Connection: keep-alive",
            "Referer: http://192.168.56.102/mutillidae/index.php?page=login.php",
            "Upgrade-Insecure-Requests: 1",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        payload: Some("user=aaa&pass=aaaaaaaa&login=Login+here".to_string()),
    }
}

const LOGIN_POST_FINGERPRINT: &str = "1.6|2|1.0|php|1.1|1|1.0|PO|1|ho,us-ag,ac,ac-la,ac-en,co-ty,co-le,or,co,re,u-i-r|us-ag:55ed379d/ac:de6738ac/ac-la:e75cce52/ac-en:gz,de/co-ty:ap-x-w-f-u/co:ke-al|A|3.5|1.6";

#[test]
fn chrome_webgoat_reference_output() {
    let engine = Fingerprinter::builtin(ReportMode::Full);
    assert_eq!(
        engine.fingerprint(&chrome_webgoat_request()).unwrap(),
        CHROME_WEBGOAT_FINGERPRINT
    );
}

#[test]
fn firefox_webgoat_reference_output() {
    let engine = Fingerprinter::builtin(ReportMode::Full);
    assert_eq!(
        engine.fingerprint(&firefox_webgoat_request()).unwrap(),
        FIREFOX_WEBGOAT_FINGERPRINT
    );
}

#[test]
fn login_post_reference_output() {
    let engine = Fingerprinter::builtin(ReportMode::Full);
    assert_eq!(
        engine.fingerprint(&login_post_request()).unwrap(),
        LOGIN_POST_FINGERPRINT
    );
}

#[test]
fn payload_terminates_fingerprint_with_entropy_fields() {
    let engine = Fingerprinter::builtin(ReportMode::Full);
    let output = engine.fingerprint(&login_post_request()).unwrap();
    assert!(output.ends_with("|A|3.5|1.6"));

    let no_payload = engine.fingerprint(&firefox_webgoat_request()).unwrap();
    assert!(no_payload.ends_with("|||"));
}

#[test]
fn every_fixture_has_fourteen_fields() {
    let engine = Fingerprinter::builtin(ReportMode::Full);
    for request in [
        chrome_webgoat_request(),
        firefox_webgoat_request(),
        login_post_request(),
    ] {
        let output = engine.fingerprint(&request).unwrap();
        assert_eq!(output.split('|').count(), 14);
    }
}

#[test]
fn permuting_headers_changes_order_but_not_token_content() {
    let engine = Fingerprinter::builtin(ReportMode::Full);
    let request = chrome_webgoat_request();
    let mut permuted = request.clone();
    permuted.headers.reverse();

    let original = engine.fingerprint(&request).unwrap();
    let reversed = engine.fingerprint(&permuted).unwrap();
    assert_ne!(original, reversed);

    let order_of = |fp: &str| fp.split('|').nth(9).unwrap().to_string();
    let values_of = |fp: &str| fp.split('|').nth(10).unwrap().to_string();

    let mut original_order: Vec<String> =
        order_of(&original).split(',').map(str::to_string).collect();
    let mut reversed_order: Vec<String> =
        order_of(&reversed).split(',').map(str::to_string).collect();
    original_order.sort();
    reversed_order.sort();
    assert_eq!(original_order, reversed_order);

    let mut original_values: Vec<String> =
        values_of(&original).split('/').map(str::to_string).collect();
    let mut reversed_values: Vec<String> =
        values_of(&reversed).split('/').map(str::to_string).collect();
    original_values.sort();
    reversed_values.sort();
    assert_eq!(original_values, reversed_values);
}

#[test]
fn minimal_mode_blanks_unlisted_fields() {
    let engine = Fingerprinter::builtin(ReportMode::Minimal);
    let output = engine.fingerprint(&chrome_webgoat_request()).unwrap();
    assert_eq!(
        output,
        "0.9||0.8|||||||ho,co,ca-co,u-i-r,us-ag,ac,1586472b,7e369551,a602679,206f7215,975a9022,ac-en,ac-la,ck||||"
    );
}

#[test]
fn all_mode_matches_full_mode() {
    let full = Fingerprinter::builtin(ReportMode::Full)
        .fingerprint(&chrome_webgoat_request())
        .unwrap();
    let all = Fingerprinter::builtin(ReportMode::All)
        .fingerprint(&chrome_webgoat_request())
        .unwrap();
    assert_eq!(full, all);
}
