//! Tests for manifest module

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::common::fs::LocalFileSystem;
use crate::error::AcknowledgementsError;

const PACKAGE_RESOLVED: &str = r#"{
  "originHash" : "5c9b41d1b6f7e2b4d0c5f1e0f0f3a6b0d1c3e8a7",
  "pins" : [
    {
      "identity" : "swift-argument-parser",
      "kind" : "remoteSourceControl",
      "location" : "https://github.com/apple/swift-argument-parser.git",
      "state" : {
        "revision" : "46989693916f56d1186bd59ac15124caef896560",
        "version" : "1.3.1"
      }
    },
    {
      "identity" : "swift-log",
      "kind" : "remoteSourceControl",
      "location" : "https://github.com/apple/swift-log",
      "state" : {
        "revision" : "e97a6fcb1ab07462881ac165fdbb37f067e205d5",
        "version" : "1.5.4"
      }
    }
  ],
  "version" : 3
}"#;

fn write_project(root: &Path, name: &str, contents: &str) {
    let dir = MANIFEST_SUFFIX[..3]
        .iter()
        .fold(root.join(name), |path, c| path.join(c));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(MANIFEST_SUFFIX[3]), contents).unwrap();
}

#[test]
fn test_from_bytes_ignores_extra_keys() {
    let doc = ManifestDocument::from_bytes(PACKAGE_RESOLVED.as_bytes(), Path::new("x")).unwrap();
    assert_eq!(doc.version, 3);
    assert_eq!(
        doc.pins,
        vec![
            DependencyPin {
                identity: "swift-argument-parser".to_string(),
                source_location: "https://github.com/apple/swift-argument-parser.git".to_string(),
            },
            DependencyPin {
                identity: "swift-log".to_string(),
                source_location: "https://github.com/apple/swift-log".to_string(),
            },
        ]
    );
}

#[test]
fn test_from_bytes_rejects_missing_version() {
    let err = ManifestDocument::from_bytes(br#"{"pins": []}"#, Path::new("/p/Package.resolved"))
        .unwrap_err();
    match err {
        AcknowledgementsError::ManifestParseFailed { path, .. } => {
            assert_eq!(path, "/p/Package.resolved");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_json_reports_manifest_path() {
    let location = Path::new("/p/Package.resolved");
    let err = ManifestDocument::from_bytes(b"invalid json content", location).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("/p/Package.resolved"));
    assert!(!message.contains("unknown"));
}

#[test]
fn test_from_bytes_rejects_invalid_utf8() {
    let err = ManifestDocument::from_bytes(&[0xff, 0xfe, 0x00], Path::new("bad")).unwrap_err();
    assert!(matches!(
        err,
        AcknowledgementsError::ManifestParseFailed { .. }
    ));
}

#[test]
fn test_from_bytes_rejects_pin_without_location() {
    let json = r#"{"pins": [{"identity": "a"}], "version": 2}"#;
    assert!(ManifestDocument::from_bytes(json.as_bytes(), Path::new("x")).is_err());
}

#[test]
fn test_locate_appends_fixed_suffix() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("Sources")).unwrap();
    fs::create_dir(temp.path().join("App.xcodeproj")).unwrap();

    let path = locate(&LocalFileSystem, temp.path()).unwrap();
    assert_eq!(
        path,
        temp.path()
            .join("App.xcodeproj")
            .join("project.xcworkspace")
            .join("xcshareddata")
            .join("swiftpm")
            .join("Package.resolved")
    );
}

#[test]
fn test_locate_without_container_is_not_found() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("App.xcworkspace")).unwrap();

    let err = locate(&LocalFileSystem, temp.path()).unwrap_err();
    assert!(matches!(
        err,
        AcknowledgementsError::ManifestNotFound { .. }
    ));
}

#[test]
fn test_read_via_search_root() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path(), "App.xcodeproj", PACKAGE_RESOLVED);

    let doc = read(
        &LocalFileSystem,
        &ManifestLocation::SearchRoot(temp.path().to_path_buf()),
    )
    .unwrap();
    assert_eq!(doc.pins.len(), 2);
}

#[test]
fn test_read_explicit_path() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("Package.resolved");
    fs::write(&file, PACKAGE_RESOLVED).unwrap();

    let doc = read(&LocalFileSystem, &ManifestLocation::Explicit(file)).unwrap();
    assert_eq!(doc.pins[0].identity, "swift-argument-parser");
}

#[test]
fn test_read_missing_explicit_file_is_parse_failure() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("Package.resolved");

    let err = read(&LocalFileSystem, &ManifestLocation::Explicit(file.clone())).unwrap_err();
    match err {
        AcknowledgementsError::ManifestParseFailed { path, .. } => {
            assert_eq!(path, file.display().to_string());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_read_container_without_manifest_is_parse_failure() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("App.xcodeproj")).unwrap();

    let err = read(
        &LocalFileSystem,
        &ManifestLocation::SearchRoot(temp.path().to_path_buf()),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AcknowledgementsError::ManifestParseFailed { .. }
    ));
}
