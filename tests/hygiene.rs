//! Hygiene: enforces coding standards at test time
//!
//! Scans the `folio` source tree for constructs that crash the page or drop
//! errors on the floor, and checks that browser APIs stay behind the `util`
//! seam. Every budget is zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Pattern, human name, and budget.
const BUDGETS: &[(&str, &str, usize)] = &[
    (".unwrap()", "unwrap", 0),
    (".expect(", "expect", 0),
    ("panic!(", "panic", 0),
    ("unreachable!(", "unreachable", 0),
    ("todo!(", "todo", 0),
    ("unimplemented!(", "unimplemented", 0),
    ("let _ =", "silent discard", 0),
    (".ok()", "dot ok", 0),
    ("#[allow(dead_code)]", "allow dead_code", 0),
];

/// Collect production `.rs` files under `src/`, excluding `*_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_found() {
    assert!(!source_files().is_empty(), "no sources under src/; run from the crate root");
}

#[test]
fn panic_and_discard_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, name, max) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *max {
            failures.push(format!("{name} budget exceeded: found {count}, max {max}.\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn web_sys_stays_behind_util() {
    let files = source_files();
    let found: Vec<_> = hits(&files, "web_sys::")
        .into_iter()
        .filter(|(path, _)| {
            let normalized = path.replace('\\', "/");
            !normalized.starts_with("src/util/")
        })
        .collect();
    assert!(found.is_empty(), "web_sys used outside src/util/:\n{}", format_hits(&found));
}
