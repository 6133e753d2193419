use std::fs;

use tempfile::TempDir;

use filesh::shell::DEFAULT_PATH;
use filesh::{ErrorKind, NavError, Navigator, SessionRegistry};

fn nav_in(dir: &TempDir) -> Navigator {
    Navigator::new(dir.path().to_string_lossy().into_owned())
}

fn base(dir: &TempDir) -> String {
    dir.path().to_string_lossy().into_owned()
}

fn names(nav: &Navigator, show_hidden: bool) -> Vec<String> {
    nav.ls(show_hidden)
        .unwrap()
        .into_iter()
        .map(|entry| entry.name)
        .collect()
}

#[test]
fn test_fresh_session_pwd_is_default() {
    let registry = SessionRegistry::default();
    let token = registry.create_session();
    assert_eq!(registry.lookup(&token).unwrap().pwd(), DEFAULT_PATH);
}

#[test]
fn test_cd_then_pwd_matches_resolution() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("one/two")).unwrap();
    let nav = nav_in(&dir);

    nav.cd("one/./two").unwrap();
    assert_eq!(nav.pwd(), format!("{}/one/two", base(&dir)));

    // Walk above the starting point
    nav.cd("../../..").unwrap();
    let parent = dir.path().parent().unwrap().to_string_lossy().into_owned();
    assert_eq!(nav.pwd(), parent);

    // Absolute fragments are taken as given
    let absolute = format!("{}/one", base(&dir));
    nav.cd(&absolute).unwrap();
    assert_eq!(nav.pwd(), absolute);
}

#[test]
fn test_cd_into_file_keeps_pwd() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("file.txt"), b"x").unwrap();
    let nav = nav_in(&dir);

    let err = nav.cd("file.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(nav.pwd(), base(&dir));
}

#[test]
fn test_cd_below_a_file_is_stat_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("file.txt"), b"x").unwrap();
    let nav = nav_in(&dir);

    let err = nav.cd("file.txt/inner").unwrap_err();
    assert!(matches!(err, NavError::StatError { .. }));
    assert!(err.detail().is_some());
    assert_eq!(nav.pwd(), base(&dir));
}

#[test]
fn test_touch_below_a_file_is_create_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("file.txt"), b"x").unwrap();
    let nav = nav_in(&dir);

    let err = nav.touch("file.txt/inner").unwrap_err();
    assert!(matches!(err, NavError::CreateError { .. }));
    assert_eq!(names(&nav, false), vec!["file.txt"]);
}

#[test]
fn test_ls_ordering() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("d2")).unwrap();
    fs::write(dir.path().join("b.txt"), b"").unwrap();
    fs::create_dir(dir.path().join("d1")).unwrap();
    fs::write(dir.path().join("a.txt"), b"").unwrap();
    fs::write(dir.path().join(".cfg"), b"").unwrap();
    let nav = nav_in(&dir);

    assert_eq!(names(&nav, false), vec!["d1", "d2", "a.txt", "b.txt"]);
    assert_eq!(names(&nav, true), vec!["d1", "d2", ".cfg", "a.txt", "b.txt"]);
}

#[test]
fn test_mkdir_nested_lists_top_once() {
    let dir = TempDir::new().unwrap();
    let nav = nav_in(&dir);

    nav.mkdir("a/b/c").unwrap();
    assert!(dir.path().join("a/b/c").is_dir());
    assert_eq!(names(&nav, true), vec!["a"]);
}

#[test]
fn test_mkdir_empty_leaves_listing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("only.txt"), b"").unwrap();
    let nav = nav_in(&dir);

    let err = nav.mkdir("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(names(&nav, true), vec!["only.txt"]);
}

#[test]
fn test_touch_existing_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("keep")).unwrap();
    let nav = nav_in(&dir);

    nav.touch("keep").unwrap();
    assert!(dir.path().join("keep").is_dir());
}

#[test]
fn test_rm_root_and_absent() {
    let dir = TempDir::new().unwrap();
    let nav = nav_in(&dir);

    assert_eq!(nav.rm("/").unwrap_err().kind(), ErrorKind::Forbidden);
    nav.rm("absent").unwrap();
}

#[test]
fn test_sessions_isolated() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("x")).unwrap();
    let registry = SessionRegistry::new(base(&dir), 16);
    let first = registry.lookup(&registry.create_session()).unwrap();
    let second = registry.lookup(&registry.create_session()).unwrap();

    first.cd("x").unwrap();
    assert_eq!(second.pwd(), base(&dir));
    assert_ne!(first.pwd(), second.pwd());
}
