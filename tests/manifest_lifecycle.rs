use std::fs;

use chrono::{TimeZone, Utc};
use virtual_array::{
    ArrayFingerprint, ArrayManifest, DerivationConfig, ManifestError, Seed, VirtualLargeArray,
};
use tempfile::tempdir;

#[test]
fn golden_fingerprint() {
    let v = VirtualLargeArray::new(100, "test-seed").unwrap();
    assert_eq!(
        v.fingerprint().unwrap().as_str(),
        "sha256:8bf7ea0a8662da52816367a463dcb0b34da89e45eb67cb40cd4bc0ce9ba83c21"
    );

    let computed =
        ArrayFingerprint::compute(&DerivationConfig::v0(), 100, &Seed::new("test-seed")).unwrap();
    assert_eq!(computed, v.fingerprint().unwrap());
}

#[test]
fn fingerprint_ignores_creation_time() {
    let v = VirtualLargeArray::new(42, "clock").unwrap();
    let mut a = ArrayManifest::describe(&v).unwrap();
    let mut b = ArrayManifest::describe(&v).unwrap();

    assert_eq!(a.fingerprint, b.fingerprint);

    let fixed_time = Utc.timestamp_opt(0, 0).unwrap();
    a.created_at = fixed_time;
    b.created_at = fixed_time;
    assert_eq!(a, b);
}

#[test]
fn write_read_rebuild() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("array.json");

    let original = VirtualLargeArray::new(1_000_000, "round-trip").unwrap();
    let manifest = ArrayManifest::describe(&original).unwrap();
    manifest.write(&path).unwrap();

    let loaded = ArrayManifest::read(&path).unwrap();
    assert_eq!(loaded, manifest);

    let rebuilt = loaded.into_array().unwrap();
    assert_eq!(rebuilt, original);
    assert_eq!(rebuilt.get(-1).unwrap(), original.get(-1).unwrap());
    assert_eq!(
        rebuilt.slice(Some(500), Some(510), 1).unwrap(),
        original.slice(Some(500), Some(510), 1).unwrap()
    );

    // No temp file left behind.
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn write_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("array.json");
    fs::write(&path, b"occupied").unwrap();

    let v = VirtualLargeArray::new(3, "x").unwrap();
    let err = ArrayManifest::describe(&v).unwrap().write(&path).unwrap_err();
    assert!(matches!(err, ManifestError::OutputExists(p) if p == path));

    assert_eq!(fs::read(&path).unwrap(), b"occupied");
}

#[test]
fn tampered_descriptor_is_rejected() {
    let v = VirtualLargeArray::new(10, "honest").unwrap();
    let mut manifest = ArrayManifest::describe(&v).unwrap();
    manifest.length = 11;

    match manifest.into_array() {
        Err(ManifestError::FingerprintMismatch { recorded, computed }) => {
            assert_eq!(recorded, v.fingerprint().unwrap());
            assert_ne!(recorded, computed);
        }
        other => panic!("expected FingerprintMismatch, got {other:?}"),
    }
}

#[test]
fn unsupported_config_is_rejected() {
    let v = VirtualLargeArray::new(10, "config").unwrap();
    let mut manifest = ArrayManifest::describe(&v).unwrap();
    manifest.config.value_width = 4;

    assert!(matches!(
        manifest.verify(),
        Err(ManifestError::UnsupportedConfig { .. })
    ));
}

#[test]
fn oversized_length_is_rejected() {
    let config = DerivationConfig::v0();
    let seed = Seed::new("huge");
    let length = u64::MAX;

    let manifest = ArrayManifest {
        fingerprint: ArrayFingerprint::compute(&config, length, &seed).unwrap(),
        config,
        created_at: Utc::now(),
        length,
        seed,
    };

    assert!(matches!(
        manifest.into_array(),
        Err(ManifestError::LengthTooLarge(u64::MAX))
    ));
}

#[test]
fn corrupt_file_is_a_serialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("array.json");
    fs::write(&path, b"{ not json").unwrap();

    assert!(matches!(
        ArrayManifest::read(&path),
        Err(ManifestError::Serialization(_))
    ));
    assert!(matches!(
        ArrayManifest::read(&dir.path().join("missing.json")),
        Err(ManifestError::Io(_))
    ));
}

#[test]
fn golden_manifest_serialization() {
    let v = VirtualLargeArray::new(100, "test-seed").unwrap();
    let mut manifest = ArrayManifest::describe(&v).unwrap();
    manifest.created_at = Utc.timestamp_opt(0, 0).unwrap();

    let json_str = serde_json::to_string_pretty(&manifest).unwrap();

    let expected = r#"{
  "fingerprint": "sha256:8bf7ea0a8662da52816367a463dcb0b34da89e45eb67cb40cd4bc0ce9ba83c21",
  "config": {
    "version": "1",
    "hash_algorithm": "sha256",
    "separator": "|",
    "value_width": 8
  },
  "created_at": "1970-01-01T00:00:00Z",
  "length": 100,
  "seed": "test-seed"
}"#;

    assert_eq!(json_str, expected, "Golden snapshot mismatch");
}
