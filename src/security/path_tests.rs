use super::PathSanitizer;
use std::path::Path;

#[test]
fn test_valid_asset_path() {
    let result = PathSanitizer::sanitize("P3R/Content/Xrd777/Event/BMD_E100.uasset");
    assert_eq!(result.unwrap(), "P3R/Content/Xrd777/Event/BMD_E100.uasset");
}

#[test]
fn test_backslashes_become_separators() {
    let result = PathSanitizer::sanitize("Xrd777\\Field\\BMD_F001.uasset");
    assert_eq!(result.unwrap(), "Xrd777/Field/BMD_F001.uasset");
}

#[test]
fn test_reject_parent_directory_traversal() {
    let result = PathSanitizer::sanitize("../../Engine/BMD_X.uasset");
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Parent directory traversal"));
}

#[test]
fn test_reject_parent_in_middle() {
    let result = PathSanitizer::sanitize("Xrd777/../../etc/passwd");
    assert!(result.is_err());
}

#[test]
fn test_reject_absolute_unix_path() {
    let result = PathSanitizer::sanitize("/Game/Xrd777/BMD_A.uasset");
    assert!(result.unwrap_err().to_string().contains("Absolute path"));
}

#[test]
fn test_reject_drive_letter() {
    let result = PathSanitizer::sanitize("C:\\Windows\\BMD_A.uasset");
    assert!(result.unwrap_err().to_string().contains("Absolute path"));
}

#[test]
fn test_reject_empty_path() {
    let result = PathSanitizer::sanitize("");
    assert!(result.unwrap_err().to_string().contains("Empty path"));
}

#[test]
fn test_normalize_current_dir_markers() {
    let result = PathSanitizer::sanitize("./L10N/./en/BMD_A.uasset");
    assert_eq!(result.unwrap(), "L10N/en/BMD_A.uasset");
}

#[test]
fn test_reject_only_current_dir() {
    let result = PathSanitizer::sanitize("./.");
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("No valid components"));
}

#[test]
fn test_path_with_unicode() {
    let result = PathSanitizer::sanitize("Xrd777/文字/BMD_A.uasset");
    assert_eq!(result.unwrap(), "Xrd777/文字/BMD_A.uasset");
}

#[test]
fn test_host_path_rooted_at_output() {
    let root = Path::new("out");
    let path = PathSanitizer::host_path(root, "L10N/en/BMD_Test.uasset").unwrap();
    assert_eq!(
        path,
        root.join("L10N").join("en").join("BMD_Test.uasset")
    );
    assert!(path.starts_with(root));
}

#[test]
fn test_host_path_rejects_escape() {
    assert!(PathSanitizer::host_path(Path::new("out"), "../BMD_Test.uasset").is_err());
}
