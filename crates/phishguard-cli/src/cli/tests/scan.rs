//! Tests for `scan` argument parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_scan() {
    match parse(&["phishguard", "scan", "http://paypa1.com/login"]) {
        CliCommand::Scan {
            url,
            json,
            no_record,
        } => {
            assert_eq!(url, "http://paypa1.com/login");
            assert!(!json);
            assert!(!no_record);
        }
        _ => panic!("expected Scan"),
    }
}

#[test]
fn cli_parse_scan_flags() {
    match parse(&["phishguard", "scan", "example.com", "--json", "--no-record"]) {
        CliCommand::Scan {
            url,
            json,
            no_record,
        } => {
            assert_eq!(url, "example.com");
            assert!(json);
            assert!(no_record);
        }
        _ => panic!("expected Scan with flags"),
    }
}

#[test]
fn cli_parse_scan_requires_url() {
    assert!(Cli::try_parse_from(["phishguard", "scan"]).is_err());
}
