use std::collections::{BTreeSet, HashSet};

/// Every non-fallback locale must define at least the keys of the fallback
/// (en-US) `foda-ui.ftl`, and no file may define a key twice.
///
/// To add a locale, create `ui/i18n/<locale>/foda-ui.ftl` and register it in
/// `LOCALES` below.
const EN_US: &str = include_str!("../i18n/en-US/foda-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/foda-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES)];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys: BTreeSet<String> = message_keys(EN_US).into_iter().collect();
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let keys: HashSet<String> = message_keys(src).into_iter().collect();
        let missing: Vec<&str> = fallback_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}",
        failures.join("\n\n")
    );
}

#[test]
fn no_locale_defines_a_key_twice() {
    for (locale, src) in [("en-US", EN_US)].iter().chain(LOCALES) {
        let mut seen = HashSet::new();
        let dups: BTreeSet<String> = message_keys(src)
            .into_iter()
            .filter(|key| !seen.insert(key.clone()))
            .collect();
        assert!(dups.is_empty(), "Duplicate keys in {locale}: {dups:?}");
    }
}

#[test]
fn placeholders_match_fallback() {
    for (locale, src) in LOCALES {
        for key in ["filter-ideas-count", "dashboard-dataset-meta"] {
            assert_eq!(
                placeholders(EN_US, key),
                placeholders(src, key),
                "{locale}: placeholders differ for {key}"
            );
        }
    }
}

/// Message keys in file order (comments, attributes and terms skipped).
fn message_keys(src: &str) -> Vec<String> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['#', '.', '-']))
        .filter_map(|line| line.split_once('='))
        .map(|(key, _)| key.trim())
        .filter(|key| !key.is_empty() && !key.contains(char::is_whitespace))
        .map(str::to_string)
        .collect()
}

/// `$name` variables referenced by one message.
fn placeholders(src: &str, key: &str) -> BTreeSet<String> {
    let Some(value) = src.lines().find_map(|line| {
        line.split_once('=')
            .filter(|(k, _)| k.trim() == key)
            .map(|(_, v)| v)
    }) else {
        return BTreeSet::new();
    };
    value
        .split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect()
        })
        .collect()
}
