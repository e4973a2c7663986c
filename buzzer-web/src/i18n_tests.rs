//! Locale coverage: every key in the English bundle must exist in every other locale.

use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> Value {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"))
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let key = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            collect_keys(&key, v, out);
        }
    } else {
        out.insert(prefix.to_string());
    }
}

#[test]
fn all_locales_cover_english_keys() {
    let mut english = BTreeSet::new();
    collect_keys("", &load_locale("en"), &mut english);
    assert!(english.contains("code_entry.missing_code"));

    for locale in locale_codes() {
        let mut keys = BTreeSet::new();
        collect_keys("", &load_locale(&locale), &mut keys);
        let missing: Vec<_> = english.difference(&keys).collect();
        assert!(missing.is_empty(), "{locale} is missing keys: {missing:?}");
    }
}

#[test]
fn bundled_locales_match_files_on_disk() {
    let listed: Vec<String> = crate::i18n::locales()
        .iter()
        .map(|m| m.code.to_string())
        .collect();
    let mut listed_sorted = listed.clone();
    listed_sorted.sort();
    assert_eq!(listed_sorted, locale_codes());
}
