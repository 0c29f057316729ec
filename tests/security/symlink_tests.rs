//! Symlink handling during the directory walk
//!
//! - Symlinks are skipped unless following is enabled
//! - Directory cycles terminate when following
//! - A file reachable twice is scanned once per path that leads to it

use git_scraper::{
    ContextRadius, CoordinatorConfig, DirectoryWalker, Keyword, ScanCoordinator, WalkConfig,
};
use std::fs;
use tempfile::TempDir;

#[cfg(unix)]
use std::os::unix::fs::symlink;

fn keyword(text: &str) -> Vec<Keyword> {
    vec![Keyword::new(text).unwrap()]
}

#[cfg(unix)]
#[test]
fn test_symlinks_skipped_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    fs::write(outside.path().join("secret.txt"), "token").unwrap();
    symlink(outside.path(), temp_dir.path().join("linked")).unwrap();
    symlink(
        outside.path().join("secret.txt"),
        temp_dir.path().join("file-link.txt"),
    )
    .unwrap();

    let outcome = ScanCoordinator::new(CoordinatorConfig::default())
        .unwrap()
        .scan_all(temp_dir.path(), &keyword("token"))
        .unwrap();

    assert!(outcome.result.is_empty(), "Should not follow symlinks by default");
    assert_eq!(outcome.summary.files_scanned, 0);
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_terminates() {
    let temp_dir = TempDir::new().unwrap();
    let sub = temp_dir.path().join("a").join("b");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("file.txt"), "token here").unwrap();
    symlink(temp_dir.path(), sub.join("loop")).unwrap();

    let walker = DirectoryWalker::new(WalkConfig::new().with_follow_symlinks(true));
    let files: Vec<_> = walker.walk(temp_dir.path()).collect();

    assert_eq!(files.len(), 1, "Cycle must not produce repeated files: {:?}", files);
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_scan_completes() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("d")).unwrap();
    fs::write(temp_dir.path().join("d").join("f.txt"), "TOKEN").unwrap();
    symlink(temp_dir.path().join("d"), temp_dir.path().join("d").join("self")).unwrap();

    let config = CoordinatorConfig::default()
        .with_workers(2)
        .with_radius(ContextRadius::new(0, 0))
        .with_walk(WalkConfig::new().with_follow_symlinks(true));
    let outcome = ScanCoordinator::new(config)
        .unwrap()
        .scan_all(temp_dir.path(), &keyword("token"))
        .unwrap();

    assert_eq!(outcome.result.len(), 1);
    assert_eq!(outcome.result.matches()[0].context, vec!["TOKEN"]);
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("real.txt"), "token").unwrap();
    symlink(
        temp_dir.path().join("gone.txt"),
        temp_dir.path().join("dangling.txt"),
    )
    .unwrap();

    let walker = DirectoryWalker::new(WalkConfig::new().with_follow_symlinks(true));
    let files: Vec<_> = walker.walk(temp_dir.path()).collect();

    assert_eq!(files, vec![temp_dir.path().join("real.txt")]);
}

#[test]
fn test_reads_file_with_unicode_content() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("unicode.txt"), "日本語 Tökén 🦀\n").unwrap();

    let outcome = ScanCoordinator::new(CoordinatorConfig::default())
        .unwrap()
        .scan_all(temp_dir.path(), &keyword("tökén"))
        .unwrap();

    assert_eq!(outcome.result.len(), 1);
}
