use checksums2dups::cli::Cli;
use checksums2dups::error::{ExitCode, ProcessError};
use clap::Parser;
use std::fs;
use tempfile::tempdir;

const MANIFEST: &str = "h1\ta/b/f1.txt\nh1\ta/b/f2.txt\nh2\ta/c/f3.txt\n";

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["checksums2dups", "-q"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_run_writes_both_outputs() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("manifest.tab");
    fs::write(&manifest, MANIFEST).unwrap();
    let json = dir.path().join("tree.json");
    let csv = dir.path().join("tree.csv");

    let cli = parse(&[
        "-j",
        json.to_str().unwrap(),
        "-c",
        csv.to_str().unwrap(),
        manifest.to_str().unwrap(),
    ]);
    let code = checksums2dups::run_app(cli).unwrap();

    assert_eq!(code, ExitCode::Success);
    assert!(json.is_file());
    let csv_text = fs::read_to_string(&csv).unwrap();
    assert_eq!(csv_text.lines().count(), 5);
}

#[test]
fn test_run_csv_only_leaves_json_unwritten() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("manifest.tab");
    fs::write(&manifest, MANIFEST).unwrap();
    let csv = dir.path().join("dups.csv");

    let cli = parse(&["-c", csv.to_str().unwrap(), manifest.to_str().unwrap()]);
    checksums2dups::run_app(cli).unwrap();

    assert!(csv.is_file());
    let written: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(written.len(), 2);
}

#[test]
fn test_no_output_selected_writes_nothing() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("manifest.tab");
    fs::write(&manifest, MANIFEST).unwrap();

    let err = Cli::try_parse_from(["checksums2dups", manifest.to_str().unwrap()]).unwrap_err();
    assert_eq!(err.exit_code(), 2);

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_missing_manifest_names_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.tab");
    let csv = dir.path().join("out.csv");

    let cli = parse(&["-c", csv.to_str().unwrap(), missing.to_str().unwrap()]);
    let err = checksums2dups::run_app(cli).unwrap_err();

    let process_err = err.downcast_ref::<ProcessError>().unwrap();
    assert!(matches!(process_err, ProcessError::NotAFile(_)));
    assert_eq!(process_err.exit_code().as_i32(), 2);
    assert!(err.to_string().contains("nope.tab"));
    assert!(!csv.exists());
}

#[test]
fn test_directory_argument_is_not_a_file() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("out.csv");

    let cli = parse(&["-c", csv.to_str().unwrap(), dir.path().to_str().unwrap()]);
    let err = checksums2dups::run_app(cli).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::NotAFile(_))
    ));
}

#[test]
fn test_first_failure_stops_remaining_manifests() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.tab");
    fs::write(&good, MANIFEST).unwrap();
    let missing = dir.path().join("missing.tab");
    let csv = dir.path().join("out.csv");

    let cli = parse(&[
        "-c",
        csv.to_str().unwrap(),
        missing.to_str().unwrap(),
        good.to_str().unwrap(),
    ]);
    assert!(checksums2dups::run_app(cli).is_err());
    assert!(!csv.exists(), "good manifest must not be processed after a failure");
}

#[test]
fn test_keep_going_processes_remaining_manifests() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.tab");
    fs::write(&good, MANIFEST).unwrap();
    let missing = dir.path().join("missing.tab");
    let csv = dir.path().join("out.csv");

    let cli = parse(&[
        "--keep-going",
        "-c",
        csv.to_str().unwrap(),
        missing.to_str().unwrap(),
        good.to_str().unwrap(),
    ]);
    let err = checksums2dups::run_app(cli).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ProcessError>(),
        Some(ProcessError::Incomplete(1))
    ));
    assert!(csv.is_file());
}

#[test]
fn test_unwritable_output_is_processing_failure() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("manifest.tab");
    fs::write(&manifest, MANIFEST).unwrap();
    let csv = dir.path().join("no/such/dir/out.csv");

    let cli = parse(&["-c", csv.to_str().unwrap(), manifest.to_str().unwrap()]);
    let err = checksums2dups::run_app(cli).unwrap_err();

    match err.downcast_ref::<ProcessError>() {
        Some(ProcessError::Failed { path, .. }) => assert_eq!(path, &manifest),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(err.to_string().starts_with("Could not process"));
}

#[test]
fn test_explicit_config_applies_indent() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("manifest.tab");
    fs::write(&manifest, "h1\tf\n").unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "json_indent = 2\n").unwrap();
    let json = dir.path().join("tree.json");

    let cli = parse(&[
        "--config",
        config.to_str().unwrap(),
        "-j",
        json.to_str().unwrap(),
        manifest.to_str().unwrap(),
    ]);
    checksums2dups::run_app(cli).unwrap();

    let text = fs::read_to_string(&json).unwrap();
    assert!(text.contains("\n  \"children\""));
}

#[test]
fn test_missing_explicit_config_is_general_error() {
    let dir = tempdir().unwrap();
    let cli = parse(&[
        "--config",
        dir.path().join("absent.toml").to_str().unwrap(),
        "-j",
        "unused.json",
    ]);
    let err = checksums2dups::run_app(cli).unwrap_err();
    assert!(err.downcast_ref::<ProcessError>().is_none());
}

#[test]
fn test_no_manifests_is_success() {
    let cli = parse(&["-j", "unused.json"]);
    assert_eq!(checksums2dups::run_app(cli).unwrap(), ExitCode::Success);
}
