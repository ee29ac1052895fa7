//! Integration tests for traverz


use harness::{TestDir, body_lines, run_traverz};

#[test]
fn test_basic_tree_output() {
    let dir = TestDir::new();
    dir.add_file("src/main.rs", "fn main() {}");
    dir.add_file("src/lib.rs", "");
    dir.add_file("Cargo.toml", "[package]");

    let (stdout, _stderr, success) = run_traverz(dir.path(), &[]);
    assert!(success, "traverz should succeed");

    let expected = format!(
        "📁 {}/\n├── 📁 src\n│   ├── 📄 lib.rs\n│   └── 📄 main.rs\n└── 📄 Cargo.toml\n",
        dir.root_name()
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_sibling_order_scenario() {
    let dir = TestDir::new();
    dir.add_file("b.txt", "");
    dir.add_dir("A");
    dir.add_file("a.txt", "");

    let (stdout, _stderr, success) = run_traverz(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        ["├── 📁 A", "├── 📄 a.txt", "└── 📄 b.txt"]
    );
}

#[test]
fn test_no_icons() {
    let dir = TestDir::new();
    dir.add_file("docs/guide.md", "");
    dir.add_file("zeta.txt", "");

    let (stdout, _stderr, success) = run_traverz(dir.path(), &["--no-icons"]);
    assert!(success);
    let expected = format!(
        "{}/\n├── docs\n│   └── guide.md\n└── zeta.txt\n",
        dir.root_name()
    );
    assert_eq!(stdout, expected);
    assert!(!stdout.contains('📁'));
    assert!(!stdout.contains('📄'));
}

#[test]
fn test_path_flag() {
    let dir = TestDir::new();
    dir.add_file("project/src/app.rs", "");

    let project = dir.path().join("project");
    let (stdout, _stderr, success) =
        run_traverz(dir.path(), &["-p", project.to_str().unwrap(), "--no-icons"]);
    assert!(success);
    assert_eq!(stdout, "project/\n└── src\n    └── app.rs\n");
}

#[test]
fn test_relative_path_with_parent_components() {
    let dir = TestDir::new();
    dir.add_file("project/file.txt", "");
    dir.add_dir("other");

    let other = dir.path().join("other");
    let (stdout, _stderr, success) = run_traverz(&other, &["-p", "../project", "--no-icons"]);
    assert!(success);
    assert_eq!(stdout, "project/\n└── file.txt\n");
}

#[test]
fn test_exclude_git_scenario() {
    let dir = TestDir::new();
    dir.add_file(".git/HEAD", "ref: refs/heads/main");
    dir.add_file(".git/objects/ab/cdef", "");
    dir.add_file("src/main.rs", "");

    let (stdout, _stderr, success) = run_traverz(dir.path(), &["-e", "\\.git", "--no-icons"]);
    assert!(success);
    assert_eq!(body_lines(&stdout), ["└── src", "    └── main.rs"]);
    assert!(!stdout.contains("HEAD"));
    assert!(!stdout.contains("objects"));
}

#[test]
fn test_exclude_comma_separated_and_repeated() {
    let dir = TestDir::new();
    dir.add_file("node_modules/pkg/index.js", "");
    dir.add_file("target/debug/app", "");
    dir.add_file("dist/bundle.js", "");
    dir.add_file("src/lib.rs", "");

    let (stdout, _stderr, success) = run_traverz(
        dir.path(),
        &[
            "-e",
            "node_modules,target",
            "--exclude",
            "^dist$",
            "--no-icons",
        ],
    );
    assert!(success);
    assert_eq!(body_lines(&stdout), ["└── src", "    └── lib.rs"]);
}

#[test]
fn test_excluded_root_prints_notice() {
    let dir = TestDir::new();
    dir.add_file("skip_me/file.txt", "");

    let root = dir.path().join("skip_me");
    let (stdout, _stderr, success) =
        run_traverz(dir.path(), &["-p", root.to_str().unwrap(), "-e", "^skip"]);
    assert!(success, "an excluded root is not an error");
    assert_eq!(
        stdout,
        "No files or directories to display (root might be excluded or unreadable).\n"
    );
}

#[test]
fn test_depth_zero_shows_root_only() {
    let dir = TestDir::new();
    dir.add_file("a/b/c.txt", "");
    dir.add_file("top.txt", "");

    let (stdout, _stderr, success) = run_traverz(dir.path(), &["-d", "0"]);
    assert!(success);
    assert_eq!(stdout, format!("📁 {}/\n", dir.root_name()));
}

#[test]
fn test_depth_one_shows_immediate_children_only() {
    let dir = TestDir::new();
    dir.add_file("level1/mid.txt", "");
    dir.add_file("level1/level2/deep.txt", "");
    dir.add_file("top.txt", "");

    let (stdout, _stderr, success) = run_traverz(dir.path(), &["--depth", "1", "--no-icons"]);
    assert!(success);
    assert_eq!(body_lines(&stdout), ["├── level1", "└── top.txt"]);
}

#[test]
fn test_negative_depth_is_unlimited() {
    let dir = TestDir::new();
    dir.add_file("a/b/c/d/e/f.txt", "");

    let (stdout, _stderr, success) = run_traverz(dir.path(), &["-d", "-1", "--no-icons"]);
    assert!(success);
    assert!(
        stdout.ends_with("                    └── f.txt\n"),
        "{}",
        stdout
    );
    assert_eq!(body_lines(&stdout).len(), 6);
}

#[test]
fn test_line_count_matches_entry_count() {
    let dir = TestDir::new();
    dir.populate(3, 2, 2);

    let (stdout, _stderr, success) = run_traverz(dir.path(), &[]);
    assert!(success);
    // 4 entries in each of the 1 + 2 + 4 upper dirs, 2 files in each of 8 leaves
    let expected = 4 + 2 * 4 + 4 * 4 + 8 * 2;
    assert_eq!(body_lines(&stdout).len(), expected);
}

#[test]
fn test_output_is_idempotent() {
    let dir = TestDir::new();
    dir.populate(2, 3, 2);
    dir.add_file("Mixed/CASE.txt", "");
    dir.add_file("mixed/case.txt", "");

    let (first, _, ok1) = run_traverz(dir.path(), &[]);
    let (second, _, ok2) = run_traverz(dir.path(), &[]);
    assert!(ok1 && ok2);
    assert_eq!(first, second);
}

#[test]
fn test_output_to_file() {
    let dir = TestDir::new();
    dir.add_file("src/main.rs", "");
    let target = dir.path().join("tree.md");
    let root = dir.path().join("src");

    let (stdout, _stderr, success) = run_traverz(
        dir.path(),
        &[
            "-p",
            root.to_str().unwrap(),
            "-o",
            target.to_str().unwrap(),
            "--no-icons",
        ],
    );
    assert!(success);
    assert_eq!(
        stdout.trim_end(),
        format!("Output successfully written to {}", target.display())
    );
    let written = std::fs::read_to_string(&target).unwrap();
    assert_eq!(written, "src/\n└── main.rs\n");
}

#[test]
fn test_paginate_without_terminal_prints_directly() {
    let dir = TestDir::new();
    dir.add_file("only.txt", "");

    let (stdout, _stderr, success) = run_traverz(
        dir.path(),
        &[
            "--paginate",
            "--pager",
            "definitely-not-a-real-pager",
            "--no-icons",
        ],
    );
    assert!(success);
    assert_eq!(body_lines(&stdout), ["└── only.txt"]);
}
