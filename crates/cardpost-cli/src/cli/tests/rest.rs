//! Tests for token, completions, man and the value parsers.

use super::{parse, parse_err};
use crate::cli::{parse_header, parse_mention, CliCommand};

#[test]
fn cli_parse_token() {
    match parse(&[
        "cardpost",
        "token",
        "--client-id",
        "app",
        "--tenant-id",
        "contoso",
        "--username",
        "bot@contoso.com",
    ]) {
        CliCommand::Token {
            client_id,
            tenant_id,
            username,
        } => {
            assert_eq!(client_id.as_deref(), Some("app"));
            assert_eq!(tenant_id.as_deref(), Some("contoso"));
            assert_eq!(username, "bot@contoso.com");
        }
        _ => panic!("expected Token"),
    }
}

#[test]
fn cli_parse_token_requires_username() {
    parse_err(&["cardpost", "token", "--client-id", "app"]);
}

#[test]
fn cli_parse_completions() {
    match parse(&["cardpost", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["cardpost", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}

#[test]
fn mention_parser_trims_and_splits_on_first_two_colons() {
    let m = parse_mention(" a@b.c : Name : alias:with:colons ").unwrap();
    assert_eq!(m.id, "a@b.c");
    assert_eq!(m.name, "Name");
    assert_eq!(m.alias.as_deref(), Some("alias:with:colons"));
}

#[test]
fn mention_parser_rejects_empty_parts() {
    assert!(parse_mention(":Name").is_err());
    assert!(parse_mention("id:").is_err());
    assert!(parse_mention("id:Name:").is_err());
}

#[test]
fn header_parser() {
    assert_eq!(
        parse_header("Authorization: Bearer x:y").unwrap(),
        ("Authorization".to_string(), "Bearer x:y".to_string())
    );
    assert!(parse_header(": v").is_err());
    assert!(parse_header("novalue").is_err());
}
