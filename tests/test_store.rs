//! Tests for file-backed storage

use std::io::ErrorKind;

use courier::store::FileStore;
use tempfile::TempDir;

#[tokio::test]
async fn test_store_write_then_read_roundtrip() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());
    let bytes: Vec<u8> = (0..=255).collect();

    store.write("blob.bin", &bytes).await.unwrap();
    let read_back = store.read("blob.bin").await.unwrap();

    assert_eq!(read_back, bytes);
}

#[tokio::test]
async fn test_store_read_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let err = store.read("absent.txt").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_store_write_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    store.write("note.txt", b"a much longer first version").await.unwrap();
    store.write("note.txt", b"short").await.unwrap();

    assert_eq!(store.read("note.txt").await.unwrap(), b"short".to_vec());
}

#[tokio::test]
async fn test_store_write_empty_data_creates_empty_file() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    store.write("empty.txt", b"").await.unwrap();

    let metadata = std::fs::metadata(dir.path().join("empty.txt")).unwrap();
    assert_eq!(metadata.len(), 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_store_write_mode_never_exceeds_0644() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    store.write("perms.txt", b"content").await.unwrap();

    // 0644 is the requested creation mode; the process umask may clear
    // further bits but can never add any.
    let mode = std::fs::metadata(dir.path().join("perms.txt"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777 & !0o644, 0);
}

#[tokio::test]
async fn test_store_write_into_missing_directory_fails() {
    // Parent directories are not created on the fly.
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path());

    let result = store.write("sub/nested.txt", b"data").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_store_read_resolves_nested_names() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub/nested.txt"), b"deep").unwrap();
    let store = FileStore::new(dir.path());

    assert_eq!(store.read("sub/nested.txt").await.unwrap(), b"deep".to_vec());
}

#[test]
fn test_store_root_accessor() {
    let store = FileStore::new("/srv/files");

    assert_eq!(store.root(), std::path::Path::new("/srv/files"));
}
