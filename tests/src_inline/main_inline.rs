use super::*;

#[test]
fn test_defaults_match_fixed_paths() {
    let config = RunConfig::try_parse_from(["green-residuals"]).unwrap();
    assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
    assert_eq!(config.out, PathBuf::from(DEFAULT_OUTPUT));
    assert_eq!(config.dpi, 400);
    assert!(config.summary.is_none());
    assert!(config.report.is_none());
}

#[test]
fn test_parse_overrides() {
    let config = RunConfig::try_parse_from([
        "green-residuals",
        "--input",
        "data.csv",
        "--out",
        "grid.png",
        "--dpi",
        "72",
        "--summary",
        "summary.json",
    ])
    .unwrap();
    assert_eq!(config.input, PathBuf::from("data.csv"));
    assert_eq!(config.out, PathBuf::from("grid.png"));
    assert_eq!(config.dpi, 72);
    assert_eq!(config.summary, Some(PathBuf::from("summary.json")));
}

#[test]
fn test_unknown_argument_rejected() {
    assert!(RunConfig::try_parse_from(["green-residuals", "--bogus"]).is_err());
}

#[test]
fn test_run_fails_fast_on_missing_input() {
    let dir = crate::test_support::make_temp_dir("main");
    let config = RunConfig {
        input: dir.join("absent.csv"),
        out: dir.join("grid.png"),
        dpi: 20,
        summary: None,
        report: None,
    };
    let err = run(&config).unwrap_err();
    assert!(err.contains("absent.csv"));
    assert!(!dir.join("grid.png").exists());
}
