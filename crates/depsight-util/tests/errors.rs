use depsight_util::errors::DepsightError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = DepsightError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_invalid_edge_display() {
    let err = DepsightError::InvalidEdge {
        edge: "<none> -> com.acme:lib:1.0".to_string(),
        message: "requested selector is missing".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid dependency edge (<none> -> com.acme:lib:1.0): requested selector is missing"
    );
}

#[test]
fn test_unsupported_kind_display() {
    let err = DepsightError::UnsupportedSelectorKind {
        edge: "lib@android -> :app".to_string(),
        kind: "lib@android".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Unexpected component kind 'lib@android' for dependency edge: lib@android -> :app"
    );
}

#[test]
fn test_report_error_display() {
    let err = DepsightError::Report {
        message: "bad toml".to_string(),
    };
    assert_eq!(err.to_string(), "Edge report error: bad toml");
}

#[test]
fn test_config_error_display() {
    let err = DepsightError::Config {
        message: "unknown scheme".to_string(),
    };
    assert_eq!(err.to_string(), "Config error: unknown scheme");
}

#[test]
fn test_generic_error_display() {
    let err = DepsightError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: DepsightError = io_err.into();
    assert!(matches!(err, DepsightError::Io(_)));
}
