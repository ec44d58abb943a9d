use mockito::{mock, server_url};

use worldcup::cli::Config;
use worldcup::error::Error;
use worldcup::feed::Feed;
use worldcup::render::Background;
use worldcup::run;

fn load_sample() -> String {
    std::fs::read_to_string("tests/sample_matches.json").expect("failed to read sample_matches.json")
}

fn config(base_url: String, endpoint: &str) -> Config {
    Config { endpoint: endpoint.to_string(), background: Background::Dark, base_url, color: false }
}

#[test]
fn prints_one_uncoloured_block_per_match_in_feed_order() {
    let _m = mock("GET", "/matches/today")
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body(load_sample())
        .create();

    let mut out: Vec<u8> = Vec::new();
    run(&config(server_url(), "today"), &mut out).expect("run failed");
    let printed = String::from_utf8(out).expect("output should be utf-8");

    assert!(!printed.contains('\u{1b}'), "output was: {}", printed);
    assert_eq!(printed.matches('\u{26BD}').count(), 4, "output was: {}", printed);
    let order: Vec<usize> = ["Brazil", "Mexico", "Spain", "Chile"]
        .iter()
        .map(|home| printed.find(&format!("     {}", home)).unwrap_or_else(|| panic!("{} missing from: {}", home, printed)))
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "output was: {}", printed);
    // kicked off in 2014, so everything has been played
    assert_eq!(printed.matches("Played ").count(), 4, "output was: {}", printed);
}

#[test]
fn fetch_keeps_renderable_records() {
    let _m = mock("GET", "/matches/2014-06-13")
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body(load_sample())
        .create();

    let feed = Feed::fetch(&server_url(), "2014-06-13").expect("fetch failed");
    assert_eq!(feed.matches().len(), 5);
    assert_eq!(feed.skipped(), 3);
}

#[test]
fn server_error_is_fatal() {
    let _m = mock("GET", "/matches/current").with_status(500).with_body("oops").create();

    let mut out: Vec<u8> = Vec::new();
    let result = run(&config(server_url(), "current"), &mut out);
    assert!(matches!(result, Err(Error::Http(_))), "result was: {:?}", result);
    assert!(out.is_empty());
}

#[test]
fn non_array_body_is_fatal() {
    let _m = mock("GET", "/matches/tomorrow")
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body(r#"{"error": "unknown endpoint"}"#)
        .create();

    let result = run(&config(server_url(), "tomorrow"), &mut Vec::new());
    assert!(matches!(result, Err(Error::InvalidFeed(_))), "result was: {:?}", result);
}

#[test]
fn unreachable_endpoint_is_fatal() {
    let mut out: Vec<u8> = Vec::new();
    let result = run(&config("http://127.0.0.1:1".to_string(), "today"), &mut out);
    assert!(matches!(result, Err(Error::Http(_))), "result was: {:?}", result);
    assert!(out.is_empty());
}
