use std::path::PathBuf;

use serde_json::Value;
use did::error::{exit_codes, Error};

#[test]
fn every_error_exits_with_one() {
    let errors = [
        Error::InvalidDate("2013/02/30".to_string()),
        Error::InvalidArgument("bad".to_string()),
        Error::InvalidConfig("bad".to_string()),
        Error::UnwritableLog {
            path: PathBuf::from("did.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        },
    ];
    for err in errors {
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }
    assert_eq!(exit_codes::SUCCESS, 0);
}

#[test]
fn invalid_date_message_includes_input() {
    let err = Error::InvalidDate("2013/13/01".to_string());
    assert!(err.to_string().contains("2013/13/01"));
    assert_eq!(err.kind(), "invalid_date");
}

#[test]
fn log_errors_carry_path_details() {
    let err = Error::UnreadableLog {
        path: PathBuf::from("did.txt"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.kind(), "unreadable_log");
    assert!(err.to_string().contains("did.txt"));
    let details = err.details().expect("details");
    assert_eq!(details["path"], Value::String("did.txt".to_string()));
}
