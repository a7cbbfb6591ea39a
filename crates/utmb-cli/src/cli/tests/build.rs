//! Tests for `build` argument parsing and request assembly.

use super::parse;
use crate::cli::{BuildArgs, Cli, CliCommand};
use clap::Parser;
use utmb_core::builder;
use utmb_core::request::{QueryParameter, UtmField};

fn build_args(args: &[&str]) -> BuildArgs {
    match parse(args) {
        CliCommand::Build(a) => a,
        other => panic!("expected Build, got {other:?}"),
    }
}

#[test]
fn cli_parse_build_minimal() {
    let a = build_args(&["utmb", "build", "https://example.com"]);
    assert_eq!(a.base_url, "https://example.com");
    assert!(a.source.is_none());
    assert!(a.params.is_empty());
    assert!(!a.save);
    assert!(!a.shorten);
    assert!(a.provider.is_none());
}

#[test]
fn cli_parse_build_all_fields() {
    let a = build_args(&[
        "utmb",
        "build",
        "https://example.com/landing",
        "--source",
        "google",
        "--medium",
        "cpc",
        "--campaign",
        "spring",
        "--term",
        "shoes",
        "--content",
        "hero",
        "-p",
        "ref=nav",
        "--param",
        "q=a=b",
        "-p",
        "empty=",
        "--save",
        "--shorten",
        "--provider",
        "isgd",
    ]);
    assert_eq!(a.source.as_deref(), Some("google"));
    assert_eq!(a.content.as_deref(), Some("hero"));
    assert_eq!(
        a.params,
        vec![
            QueryParameter::new("ref", "nav"),
            QueryParameter::new("q", "a=b"),
            QueryParameter::new("empty", ""),
        ]
    );
    assert!(a.save);
    assert!(a.shorten);
    assert_eq!(a.provider.as_deref(), Some("isgd"));
}

#[test]
fn cli_parse_build_rejects_param_without_equals() {
    assert!(Cli::try_parse_from(["utmb", "build", "https://example.com", "-p", "novalue"]).is_err());
}

#[test]
fn cli_parse_build_provider_requires_shorten() {
    assert!(
        Cli::try_parse_from(["utmb", "build", "https://example.com", "--provider", "isgd"]).is_err()
    );
}

#[test]
fn build_args_to_request_and_build() {
    let a = build_args(&[
        "utmb",
        "build",
        "https://example.com",
        "--medium",
        "cpc",
        "--source",
        "google",
        "-p",
        "ref=nav",
    ]);
    let req = a.to_request();
    assert_eq!(req.utm.get(UtmField::Source), Some("google"));
    assert_eq!(req.utm.get(UtmField::Medium), Some("cpc"));
    assert_eq!(req.utm.get(UtmField::Term), None);
    let built = builder::build(&req).unwrap();
    assert_eq!(
        built.final_url(),
        "https://example.com/?utm_source=google&utm_medium=cpc&ref=nav"
    );
}
