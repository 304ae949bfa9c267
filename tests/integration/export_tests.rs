use checksums2dups::output::{parse_tree, OutputTargets};
use checksums2dups::skip::SkipReason;
use checksums2dups::{process_manifest, ProcessOptions};
use std::fs::{self, File};
use tempfile::tempdir;

fn options(json: Option<std::path::PathBuf>, csv: Option<std::path::PathBuf>) -> ProcessOptions {
    ProcessOptions {
        targets: OutputTargets { json, csv },
        quiet: true,
        ..Default::default()
    }
}

#[test]
fn test_process_manifest_report() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("m.tab");
    fs::write(&manifest, "h1\ta/f1\nh1\ta/f2\nbroken line\nh2\tb/c/f3\n").unwrap();
    let json = dir.path().join("t.json");

    let report = process_manifest(&manifest, &options(Some(json.clone()), None)).unwrap();

    assert_eq!(report.files, 3);
    assert_eq!(report.duplicates, 2);
    assert_eq!(report.duplicate_groups, 1);
    // root, a, b, b/c
    assert_eq!(report.directories, 4);
    assert_eq!(report.skipped.count(SkipReason::MissingSeparator), 1);

    let tree = parse_tree(File::open(&json).unwrap()).unwrap();
    assert_eq!(tree.size, 3);
    assert_eq!(tree.directories().count(), 4);
}

#[cfg(unix)]
#[test]
fn test_json_file_exact_layout() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("m.tab");
    fs::write(&manifest, "h1\ta/f1\nh1\ta/f2\n").unwrap();
    let json = dir.path().join("t.json");

    process_manifest(&manifest, &options(Some(json.clone()), None)).unwrap();

    let expected = r#"{
    "children": [
        {
            "children": [
                {
                    "duped": true,
                    "name": "f1",
                    "path": "/a/f1"
                },
                {
                    "duped": true,
                    "name": "f2",
                    "path": "/a/f2"
                }
            ],
            "dup_count": 2,
            "name": "a",
            "path": "/a",
            "size": 2
        }
    ],
    "dup_count": 2,
    "name": "root",
    "path": "",
    "size": 2
}"#;
    assert_eq!(fs::read_to_string(&json).unwrap(), expected);
}

#[cfg(unix)]
#[test]
fn test_csv_file_exact_layout() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("m.tab");
    fs::write(
        &manifest,
        "h1\ta/b/f1.txt\nh1\ta/b/f2.txt\nh2\ta/c/f3.txt\n",
    )
    .unwrap();
    let csv = dir.path().join("t.csv");

    process_manifest(&manifest, &options(None, Some(csv.clone()))).unwrap();

    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        "path,file_count,duplication_count\n,3,2\n/a,3,2\n/a/b,2,2\n/a/c,1,0\n"
    );
}

#[test]
fn test_empty_manifest_outputs() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("empty.tab");
    File::create(&manifest).unwrap();
    let json = dir.path().join("t.json");
    let csv = dir.path().join("t.csv");

    let report =
        process_manifest(&manifest, &options(Some(json.clone()), Some(csv.clone()))).unwrap();
    assert_eq!(report.files, 0);
    assert_eq!(report.directories, 1);

    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        "path,file_count,duplication_count\n"
    );
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"children": [], "name": "root", "path": ""})
    );
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("m.tab");
    fs::write(&manifest, "h1\tx/f\n").unwrap();
    let csv = dir.path().join("t.csv");
    fs::write(&csv, "stale content that is much longer than the new output\n".repeat(10)).unwrap();

    process_manifest(&manifest, &options(None, Some(csv.clone()))).unwrap();

    let content = fs::read_to_string(&csv).unwrap();
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_no_output_selected_still_builds() {
    let dir = tempdir().unwrap();
    let manifest = dir.path().join("m.tab");
    fs::write(&manifest, "h1\ta/f1\nh1\ta/f2\nh2\ta/f3\nh2\tb/f4\n").unwrap();

    let report = process_manifest(&manifest, &options(None, None)).unwrap();
    assert_eq!(report.files, 4);
    assert_eq!(report.duplicate_groups, 2);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1, "nothing exported");
}

#[test]
fn test_unreadable_manifest_is_error() {
    let dir = tempdir().unwrap();
    let err = process_manifest(&dir.path().join("absent.tab"), &options(None, None)).unwrap_err();
    assert!(err.to_string().contains("absent.tab"));
}
