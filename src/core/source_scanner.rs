use std::{
    collections::HashSet,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::WalkDir;

use crate::reporter::Reporter;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of resolving source entries.
#[derive(Debug, Default)]
pub struct SourceScan {
    /// Source ids in reporting order, without duplicates.
    pub sources: Vec<String>,
    /// Directory entries that could not be read.
    pub skipped_count: usize,
}

/// Settings applied to directories found among the entries.
#[derive(Debug, Clone, Copy)]
pub struct ScanRules<'a> {
    pub extensions: &'a [String],
    pub ignores: &'a [String],
}

/// Turn command-line entries into source ids.
///
/// Entries keep their order. A directory expands to the matching files under
/// it, sorted by path. Anything else is passed through unchanged so that a
/// missing file surfaces as a read error later on.
pub fn resolve_sources(entries: &[String], rules: ScanRules<'_>, reporter: &Reporter) -> SourceScan {
    let mut scan = SourceScan::default();
    let mut seen: HashSet<String> = HashSet::new();

    let mut push = |scan: &mut SourceScan, id: String| {
        if seen.insert(id.clone()) {
            scan.sources.push(id);
        }
    };

    for entry in entries {
        let path = Path::new(entry);
        if !path.is_dir() {
            push(&mut scan, entry.clone());
            continue;
        }
        for file in scan_directory(path, rules, reporter, &mut scan.skipped_count) {
            push(&mut scan, file);
        }
    }

    scan
}

fn scan_directory(
    dir: &Path,
    rules: ScanRules<'_>,
    reporter: &Reporter,
    skipped_count: &mut usize,
) -> Vec<String> {
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in rules.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => reporter.warning(&format!("Invalid ignore pattern '{}': {}", p, e)),
            }
        } else {
            literal_ignore_paths.push(dir.join(p));
        }
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                *skipped_count += 1;
                reporter.warning(&format!("Cannot access path: {}", e));
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && has_extension(path, rules.extensions) {
            files.push(path_str.into_owned());
        }
    }
    files
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
}

/// Read source ids piped in on standard input, one per line.
///
/// Reads to end of stream. Surrounding whitespace is trimmed and blank lines
/// are skipped.
pub fn read_piped_sources<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut sources = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            sources.push(trimmed.to_string());
        }
    }
    Ok(sources)
}
