use clap::Parser;

use worldcup::cli::Cli;
use worldcup::feed::DEFAULT_BASE_URL;
use worldcup::render::Background;

#[test]
fn defaults_fetch_every_match_on_a_dark_background() {
    let cli = Cli::try_parse_from(["worldcup"]).unwrap();
    let config = cli.config();
    assert_eq!(config.endpoint, "");
    assert_eq!(config.background, Background::Dark);
    assert!(config.color);
    // WORLDCUP_BASE_URL may be set in the environment running the tests
    if std::env::var_os("WORLDCUP_BASE_URL").is_none() {
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}

#[test]
fn endpoint_is_taken_verbatim_regardless_of_flag_position() {
    let before = Cli::try_parse_from(["worldcup", "-b", "light", "today"]).unwrap().config();
    let after = Cli::try_parse_from(["worldcup", "today", "--background", "light"]).unwrap().config();
    assert_eq!(before, after);
    assert_eq!(before.endpoint, "today");
    assert_eq!(before.background, Background::Light);
}

#[test]
fn unknown_background_is_rejected() {
    assert!(Cli::try_parse_from(["worldcup", "--background", "sepia"]).is_err());
}

#[test]
fn overrides() {
    let cli = Cli::try_parse_from(["worldcup", "--base-url", "http://localhost:8000", "--no-color", "-v", "current"]).unwrap();
    assert!(cli.verbose);
    let config = cli.config();
    assert_eq!(config.base_url, "http://localhost:8000");
    assert!(!config.color);
    assert_eq!(config.endpoint, "current");
}
