use super::*;
use std::fs;
use tempfile::TempDir;

fn fixture() -> (TempDir, PathBuf, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let compiler = dir.path().join("AtlusScriptCompiler.exe");
    fs::write(&compiler, b"").unwrap();
    let paks = dir.path().join("Paks");
    fs::create_dir(&paks).unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    (dir, compiler, paks, out)
}

#[test]
fn test_valid_paths() {
    let (_dir, compiler, paks, out) = fixture();
    let config = DumperConfig::new(&compiler, &paks, &out).unwrap();

    assert_eq!(config.compiler_path, compiler);
    assert_eq!(config.language, None);
    assert_eq!(config.catalog_kind, CatalogKind::Pak);
    assert_eq!(config.profile, GameProfile::default());
}

#[test]
fn test_missing_compiler_reported_first() {
    let (dir, _compiler, _paks, _out) = fixture();
    let missing = dir.path().join("nope.exe");
    let err = DumperConfig::new(&missing, dir.path().join("nope"), dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::FileNotFound { what: COMPILER, .. }));
    assert!(err.to_string().contains("nope.exe"));
}

#[test]
fn test_compiler_must_be_file() {
    let (_dir, _compiler, paks, out) = fixture();
    let err = DumperConfig::new(&paks, &paks, &out).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_archive_dir_must_exist() {
    let (dir, compiler, _paks, out) = fixture();
    let err = DumperConfig::new(&compiler, dir.path().join("missing"), &out).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::DirectoryNotFound {
            what: ARCHIVE_DIR,
            ..
        }
    ));
}

#[test]
fn test_output_dir_must_be_directory() {
    let (_dir, compiler, paks, _out) = fixture();
    let err = DumperConfig::new(&compiler, &paks, &compiler).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::DirectoryNotFound {
            what: OUTPUT_DIR,
            ..
        }
    ));
}

#[test]
fn test_empty_path_rejected() {
    let err = validate_dir(OUTPUT_DIR, Path::new("")).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyPath { .. }));
}

#[test]
fn test_language_normalized() {
    assert_eq!(normalize_language(None), None);
    assert_eq!(normalize_language(Some("")), None);
    assert_eq!(normalize_language(Some("   ")), None);
    assert_eq!(normalize_language(Some(" EN ")), Some("en".to_string()));
}

#[test]
fn test_builder_setters() {
    let (_dir, compiler, paks, out) = fixture();
    let config = DumperConfig::new(&compiler, &paks, &out)
        .unwrap()
        .language(Some("Ja"))
        .catalog_kind(CatalogKind::Loose)
        .output_mode(OutputMode::Capture)
        .launcher(Some(PathBuf::from("wine")));

    assert_eq!(config.language.as_deref(), Some("ja"));
    assert_eq!(config.catalog_kind, CatalogKind::Loose);
    assert_eq!(config.output_mode, OutputMode::Capture);
    assert_eq!(config.launcher, Some(PathBuf::from("wine")));
}

#[test]
fn test_profile_defaults() {
    let profile = GameProfile::default();
    assert_eq!(profile.file_prefix, "BMD");
    assert_eq!(profile.localization_root, "L10N");
    assert_eq!(profile.dump_file_name, "P3RMessageDump.txt");
    assert_eq!(profile.decompiler.library, "P3RE");
    assert_eq!(profile.decompiler.out_format, "V1RE");
}

#[test]
fn test_partial_profile_json() {
    let profile = GameProfile::from_json(
        r#"{ "name": "Other", "file_prefix": "BF", "decompiler": { "library": "P5R" } }"#,
    )
    .unwrap();

    assert_eq!(profile.name, "Other");
    assert_eq!(profile.file_prefix, "BF");
    assert_eq!(profile.decompiler.library, "P5R");
    assert_eq!(profile.decompiler.encoding, "UTF-8");
    assert_eq!(profile.dump_file_name, "P3RMessageDump.txt");
}

#[test]
fn test_profile_load_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        GameProfile::load(&missing),
        Err(ConfigError::ProfileRead { .. })
    ));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    let err = GameProfile::load(&broken).unwrap_err();
    assert!(matches!(err, ConfigError::ProfileParse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_loose_output_inside_archive_rejected() {
    let (_dir, compiler, paks, _out) = fixture();
    let nested = paks.join("dump");
    fs::create_dir(&nested).unwrap();

    for output in [&paks, &nested] {
        let config = DumperConfig::new(&compiler, &paks, output)
            .unwrap()
            .catalog_kind(CatalogKind::Loose);
        assert!(matches!(
            config.check_output_location(),
            Err(ConfigError::OutputInsideArchive { .. })
        ));
    }

    // Same folder through a relative detour
    let detour = nested.join("..");
    let config = DumperConfig::new(&compiler, &paks, &detour)
        .unwrap()
        .catalog_kind(CatalogKind::Loose);
    assert!(config.check_output_location().is_err());
}

#[test]
fn test_output_location_allowed() {
    let (_dir, compiler, paks, out) = fixture();

    let loose = DumperConfig::new(&compiler, &paks, &out)
        .unwrap()
        .catalog_kind(CatalogKind::Loose);
    assert!(loose.check_output_location().is_ok());

    // Archive nested in the output folder never overlaps extracted paths
    let inner = out.join("unpacked");
    fs::create_dir(&inner).unwrap();
    let nested = DumperConfig::new(&compiler, &inner, &out)
        .unwrap()
        .catalog_kind(CatalogKind::Loose);
    assert!(nested.check_output_location().is_ok());

    let pak = DumperConfig::new(&compiler, &paks, &paks).unwrap();
    assert!(pak.check_output_location().is_ok());
}
