/*!
 * Tests for file and directory utilities
 */

use gifscribe::file_utils::FileManager;
use crate::common;

#[test]
fn test_ensure_dir_withMissingDirectory_shouldCreateIt() {
    let temp_dir = common::create_temp_dir().unwrap();
    let nested = temp_dir.path().join("a").join("b");

    assert!(!FileManager::dir_exists(&nested));
    FileManager::ensure_dir(&nested).unwrap();
    assert!(FileManager::dir_exists(&nested));

    // Second call is a no-op
    FileManager::ensure_dir(&nested).unwrap();
}

#[test]
fn test_write_and_read_shouldRoundTrip() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("sub").join("file.txt");

    FileManager::write_to_file(&path, "hello").unwrap();
    assert!(FileManager::file_exists(&path));
    assert_eq!(FileManager::read_to_string(&path).unwrap(), "hello");
}

#[test]
fn test_remove_file_if_present_withExistingFile_shouldDelete() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(temp_dir.path(), "doomed.txt", "x").unwrap();

    assert!(FileManager::remove_file_if_present(&path).unwrap());
    assert!(!path.exists());
}

#[test]
fn test_remove_file_if_present_withMissingFile_shouldBeNoOp() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("never-existed.txt");

    assert!(!FileManager::remove_file_if_present(&path).unwrap());
}

#[test]
fn test_clear_directory_withFiles_shouldEmptyButKeepDirectory() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().join("gifs");
    FileManager::ensure_dir(&dir).unwrap();

    for i in 1..=3 {
        common::create_test_file(&dir, &format!("gif_{}.gif", i), "data").unwrap();
    }

    let removed = FileManager::clear_directory(&dir).unwrap();
    assert_eq!(removed, 3);
    assert!(FileManager::dir_exists(&dir));
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn test_clear_directory_withMissingDirectory_shouldReturnZero() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().join("nope");

    assert_eq!(FileManager::clear_directory(&dir).unwrap(), 0);
}
