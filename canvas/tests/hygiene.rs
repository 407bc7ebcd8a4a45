//! Hygiene: enforces coding standards at test time.
//!
//! Scans the board engine's production sources for patterns that either crash
//! the host page or lose information silently. Each pattern has a budget
//! (zero everywhere). The budget never grows; fix an existing hit first.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

// Panics take the whole page down with them.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "propagate or handle the None/Err" },
    Budget { pattern: ".expect(", max: 0, why: "propagate or handle the None/Err" },
    Budget { pattern: "panic!(", max: 0, why: "return an error instead" },
    Budget { pattern: "unreachable!(", max: 0, why: "make the match exhaustive" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
];

// Silent loss: results dropped without being looked at.
const SILENT: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, why: "inspect or log the value" },
    Budget { pattern: ".ok()", max: 0, why: "inspect or log the error" },
];

// Output goes through the `log` facade so the host picks the backend.
const OUTPUT: &[Budget] = &[
    Budget { pattern: "println!(", max: 0, why: "use log::info!/debug!" },
    Budget { pattern: "eprintln!(", max: 0, why: "use log::warn!/error!" },
    Budget { pattern: "dbg!(", max: 0, why: "use log::trace!" },
];

// Style / structure.
const STYLE: &[Budget] = &[Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete the unused code" }];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `_test.rs` siblings.
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

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");

    let mut failures = Vec::new();
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let listing = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!(
                "{} budget exceeded: found {count}, max {} ({}).\n{listing}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn panic_budgets() {
    check(PANICS);
}

#[test]
fn silent_discard_budgets() {
    check(SILENT);
}

#[test]
fn output_budgets() {
    check(OUTPUT);
}

#[test]
fn style_budgets() {
    check(STYLE);
}
