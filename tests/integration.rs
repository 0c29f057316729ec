use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Command running in `dir` so that no stray config file is discovered.
fn cmd(dir: &Path) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("git-scraper");
    c.current_dir(dir).env_remove("RUST_LOG").arg("--no-progress");
    c
}

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

mod local_scan {
    use super::*;

    #[test]
    fn test_scan_fixture_tree_html() {
        let out = TempDir::new().unwrap();
        let report = out.path().join("report.html");

        cmd(out.path())
            .arg("--root")
            .arg(fixtures_path().join("tree"))
            .arg("--keywords")
            .arg(fixtures_path().join("keywords.txt"))
            .arg("--output")
            .arg(&report)
            .assert()
            .success()
            .stdout(predicate::str::contains("Report written to"))
            .stdout(predicate::str::contains("Scanned 3 files"));

        let html = fs::read_to_string(&report).unwrap();
        assert!(html.contains(r#"data-keyword="password""#));
        assert!(html.contains(r#"data-keyword="API_KEY""#));
        assert!(!html.contains(r#"data-keyword="api_key""#));
        assert!(html.contains(r#"<mark class="highlight">PASSWORD</mark>"#));
        assert!(html.contains("settings.py</code> (Line: 6)"));
        assert!(html.contains("setup.md</code> (Line: 3)"));
    }

    #[test]
    fn test_scan_fixture_tree_json_is_deterministic() {
        let out = TempDir::new().unwrap();
        let first = out.path().join("first.json");
        let second = out.path().join("second.json");

        for (path, workers) in [(&first, "1"), (&second, "8")] {
            cmd(out.path())
                .arg("--root")
                .arg(fixtures_path().join("tree"))
                .arg("-k")
                .arg(fixtures_path().join("keywords.txt"))
                .arg("-o")
                .arg(path)
                .args(["--format", "json", "-j", workers])
                .assert()
                .success();
        }

        let a: serde_json::Value = serde_json::from_str(&fs::read_to_string(&first).unwrap()).unwrap();
        let b: serde_json::Value = serde_json::from_str(&fs::read_to_string(&second).unwrap()).unwrap();
        assert_eq!(a["matches"], b["matches"]);
        assert_eq!(a["summary"], b["summary"]);
        assert_eq!(a["keywords"], serde_json::json!(["password", "API_KEY", "token"]));

        let lines: Vec<u64> = a["matches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["line"].as_u64().unwrap())
            .collect();
        // docs/setup.md (token: 3, 6) then service/src/settings.py (password: 6, API_KEY: 8)
        assert_eq!(lines, vec![3, 6, 6, 8]);
    }

    #[test]
    fn test_context_flags() {
        let tree = TempDir::new().unwrap();
        fs::write(
            tree.path().join("a.txt"),
            "foo\nbar\nPASSWORD=123\nbaz\nqux\nquux\n",
        )
        .unwrap();
        let kw = tree.path().join("k.txt");
        fs::write(&kw, "password\n").unwrap();
        let out = TempDir::new().unwrap();
        let report = out.path().join("r.json");

        cmd(out.path())
            .arg("--root")
            .arg(tree.path())
            .arg("-k")
            .arg(&kw)
            .arg("-o")
            .arg(&report)
            .args(["--format", "json", "-B", "1", "-A", "1"])
            .assert()
            .success();

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        // k.txt itself is under the root and holds the keyword too
        let a_match = parsed["matches"]
            .as_array()
            .unwrap()
            .iter()
            .find(|m| m["path"].as_str().unwrap().ends_with("a.txt"))
            .unwrap()
            .clone();
        assert_eq!(a_match["context"], serde_json::json!(["bar", "PASSWORD=123", "baz"]));
        assert_eq!(a_match["context_start"], 2);
    }

    #[test]
    fn test_exclude_flag() {
        let out = TempDir::new().unwrap();
        let report = out.path().join("r.json");

        cmd(out.path())
            .arg("--root")
            .arg(fixtures_path().join("tree"))
            .arg("-k")
            .arg(fixtures_path().join("keywords.txt"))
            .arg("-o")
            .arg(&report)
            .args(["--format", "json", "--exclude", "docs"])
            .assert()
            .success();

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(parsed["summary"]["files_scanned"], 2);
        assert_eq!(parsed["summary"]["total_matches"], 2);
    }

    #[test]
    fn test_config_file_sets_format() {
        let out = TempDir::new().unwrap();
        fs::write(out.path().join(".git-scraper.yaml"), "report:\n  format: json\n  title: Audit\n").unwrap();
        let report = out.path().join("r.out");

        cmd(out.path())
            .arg("--root")
            .arg(fixtures_path().join("tree"))
            .arg("-k")
            .arg(fixtures_path().join("keywords.txt"))
            .arg("-o")
            .arg(&report)
            .assert()
            .success();

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(parsed["title"], "Audit");
    }
}

mod fatal_errors {
    use super::*;

    #[test]
    fn test_missing_inputs_without_terminal() {
        let out = TempDir::new().unwrap();

        cmd(out.path())
            .write_stdin("")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Missing required input"));
    }

    #[test]
    fn test_missing_keyword_file() {
        let out = TempDir::new().unwrap();

        cmd(out.path())
            .arg("--root")
            .arg(fixtures_path().join("tree"))
            .args(["-k", "does-not-exist.txt", "-o", "r.html"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Failed to read keyword list"));

        assert!(!out.path().join("r.html").exists());
    }

    #[test]
    fn test_scan_root_must_be_directory() {
        let out = TempDir::new().unwrap();

        cmd(out.path())
            .arg("--root")
            .arg(fixtures_path().join("keywords.txt"))
            .arg("-k")
            .arg(fixtures_path().join("keywords.txt"))
            .args(["-o", "r.html"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Scan root is not a directory"));
    }

    #[test]
    fn test_invalid_explicit_config() {
        let out = TempDir::new().unwrap();
        fs::write(out.path().join("bad.toml"), "[scan\nworkers = 1").unwrap();

        cmd(out.path())
            .args(["--config", "bad.toml", "--root", "."])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid TOML in git-scraper config"));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let out = TempDir::new().unwrap();

        cmd(out.path())
            .args(["-j", "0", "--root", "."])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("scan.workers"));
    }

    #[test]
    fn test_root_conflicts_with_repos() {
        let out = TempDir::new().unwrap();

        cmd(out.path())
            .args(["--root", ".", "--repos", "r.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used with"));
    }
}

mod cloning {
    use super::*;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
            .args(args)
            .current_dir(dir)
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    fn create_origin(root: &Path, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let repo = root.join(name);
        fs::create_dir_all(&repo).unwrap();
        git(&repo, &["init", "--quiet"]);
        for (rel, content) in files {
            let path = repo.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        git(&repo, &["add", "."]);
        git(&repo, &["commit", "--quiet", "-m", "initial"]);
        repo
    }

    #[test]
    fn test_clone_scan_and_cleanup() {
        if !git_available() {
            eprintln!("git not available, skipping");
            return;
        }

        let work = TempDir::new().unwrap();
        let origins = work.path().join("origins");
        let alpha = create_origin(&origins, "alpha", &[("config.env", "SECRET_TOKEN=abc\n")]);
        let beta = create_origin(&origins, "beta.git", &[("src/lib.rs", "// no token here? token!\n")]);

        let repos = work.path().join("repos.txt");
        fs::write(
            &repos,
            format!(
                "# origins\nfile://{}\n\nfile://{}\nfile://{}/missing\n",
                alpha.display(),
                beta.display(),
                origins.display()
            ),
        )
        .unwrap();
        let keywords = work.path().join("keywords.txt");
        fs::write(&keywords, "token\n").unwrap();
        let dest = work.path().join("clones");
        let report = work.path().join("report.json");

        cmd(work.path())
            .arg("--repos")
            .arg(&repos)
            .arg("--keywords")
            .arg(&keywords)
            .arg("--dest")
            .arg(&dest)
            .arg("--output")
            .arg(&report)
            .args(["--format", "json", "--exclude", ".git"])
            .assert()
            .success()
            .stdout(predicate::str::contains("2 of 3 repositories cloned"))
            .stdout(predicate::str::contains("missing"));

        assert!(!dest.exists(), "clone destination should be removed");

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
        let paths: Vec<&str> = parsed["matches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["path"].as_str().unwrap())
            .collect();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("alpha/config.env"));
        assert!(paths[1].ends_with("beta/src/lib.rs"));
    }
}
