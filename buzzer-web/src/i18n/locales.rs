use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LocaleMeta {
    pub code: &'static str,
    pub rtl: bool,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        rtl: false,
    },
    LocaleMeta {
        code: "es",
        rtl: false,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("es", include_str!("../../i18n/es.json")),
];

/// Supported locales with their direction metadata.
#[cfg(test)]
#[must_use]
pub(crate) const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_rtl_lang(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang && m.rtl)
}

#[must_use]
pub fn is_known_lang(lang: &str) -> bool {
    LOCALE_TABLE.iter().any(|(code, _)| *code == lang)
}

/// Parse the bundle for `lang`, falling back to English for unknown codes.
pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    match serde_json::from_str(bundle) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("failed to parse locale bundle {lang}: {err}");
            None
        }
    }
}
