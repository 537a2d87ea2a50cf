use std::fs;

use jobby_engine::{
    ensure_dir, AtomicFileWriter, CredentialError, CredentialStore, FileCredentialStore,
};
use tempfile::TempDir;

#[test]
fn creates_missing_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("token", "one").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "one");

    let second = writer.write("token", "two").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "two");
}

#[test]
fn no_partial_file_when_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("token", "data").is_err());
    assert!(!file_path.with_file_name("token").exists());
}

#[test]
fn file_store_round_trips_and_clears() {
    let temp = TempDir::new().unwrap();
    let store = FileCredentialStore::new(temp.path().join("nested").join("token"));
    assert_eq!(store.get(), None);

    store.set("  jwt-value\n").unwrap();
    assert_eq!(store.get(), Some("jwt-value".to_string()));

    store.clear();
    assert_eq!(store.get(), None);
    assert!(!store.path().exists());

    // Clearing twice is fine.
    store.clear();
    store.try_clear().unwrap();
}

#[test]
fn file_store_rejects_empty_token() {
    let temp = TempDir::new().unwrap();
    let store = FileCredentialStore::new(temp.path().join("token"));
    assert!(matches!(store.set("   "), Err(CredentialError::EmptyToken)));
    assert_eq!(store.get(), None);
}

#[test]
fn blank_token_file_reads_as_signed_out() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("token");
    fs::write(&path, "\n").unwrap();
    assert_eq!(FileCredentialStore::new(path).get(), None);
}

#[cfg(unix)]
#[test]
fn token_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let store = FileCredentialStore::new(temp.path().join("token"));
    store.set("jwt").unwrap();
    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o077, 0);
}
