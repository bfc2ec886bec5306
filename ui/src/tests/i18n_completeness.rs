//! Every `t!("...")` key used under `src/` must exist in the fallback locale,
//! and every other locale must define every fallback key.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "foda-ui.ftl";
const I18N_DIR: &str = "i18n";
const FALLBACK: &str = "en-US";

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message ids declared as `id = ...`. Comments, terms and attributes are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['#', '-', '.']))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

/// Literal first arguments of `t!(` calls in every `.rs` file below `root`.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (start, needle) in content.match_indices("t!(\"") {
            let rest = &content[start + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join(FALLBACK).join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("fallback FTL file should be readable");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "no message keys parsed from {fallback_file:?}"
    );

    let used = referenced_keys(&crate_root.join("src"));
    let missing: Vec<_> = used.difference(&fallback_keys).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys used in sources but missing from {FALLBACK}:\n{}",
        missing.join("\n")
    );

    let mut gaps: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("locale {locale} is missing {path:?}"));
        let keys = parse_ftl_keys(&content);
        let absent: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        if !absent.is_empty() {
            gaps.insert(locale, absent);
        }
    }
    assert!(gaps.is_empty(), "locales with missing keys: {gaps:#?}");

    let unused: Vec<_> = fallback_keys.difference(&used).cloned().collect();
    if !unused.is_empty() {
        eprintln!("[i18n] fallback keys not referenced via t!: {}", unused.join(", "));
    }
}
