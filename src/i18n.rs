//! Localization of title keys
//!
//! Every title in the component tree is a key, not display text. Keys are
//! turned into text at render time by a [`Localizer`] that the host
//! supplies; [`BundledLocalizer`] resolves against the catalog shipped in
//! `locales/` and falls back to the key itself.

use rust_i18n::t;

const DEFAULT_LOCALE: &str = "en";

/// Resolves localization keys into display text
pub trait Localizer {
    /// Text for `key`. Unknown keys should be returned unchanged.
    fn localize(&self, key: &str) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String,
{
    fn localize(&self, key: &str) -> String {
        self(key)
    }
}

/// Localizer backed by the bundled `locales/` catalog
#[derive(Debug, Clone, Default)]
pub struct BundledLocalizer {
    /// Fixed locale; `None` follows the process-wide locale
    locale: Option<String>,
}

impl BundledLocalizer {
    /// Follow the process-wide locale set by [`init`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Always resolve against `locale`
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
        }
    }
}

impl Localizer for BundledLocalizer {
    fn localize(&self, key: &str) -> String {
        let locale = self
            .locale
            .clone()
            .unwrap_or_else(|| rust_i18n::locale().to_string());
        let text = t!(key, locale = locale.as_str());
        // Missing keys come back prefixed with the locale
        if text == format!("{}.{}", locale, key) {
            key.to_string()
        } else {
            text.into_owned()
        }
    }
}

/// Localizer that displays keys verbatim, for hosts that pass display text
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimLocalizer;

impl Localizer for VerbatimLocalizer {
    fn localize(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Pick and activate the process-wide locale.
///
/// Priority: explicit `locale`, then `LC_ALL` / `LC_MESSAGES` / `LANG`, then
/// English. Returns the locale that was activated.
pub fn init(locale: Option<&str>) -> String {
    let requested = locale
        .map(str::to_string)
        .or_else(locale_from_env)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    let chosen = normalize_locale(&requested).unwrap_or_else(|| {
        tracing::warn!("Locale '{}' is not bundled, using English", requested);
        DEFAULT_LOCALE.to_string()
    });

    rust_i18n::set_locale(&chosen);
    tracing::debug!("Activated locale {}", chosen);
    chosen
}

/// The process-wide locale
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Locale names that have a bundled catalog
pub fn available_locales() -> Vec<String> {
    rust_i18n::available_locales!()
        .into_iter()
        .map(|l| l.to_string())
        .collect()
}

/// Map a raw locale name (`zh_CN.UTF-8`, `en-US`, `zh`) onto a bundled one
pub fn normalize_locale(raw: &str) -> Option<String> {
    let cleaned = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");
    if cleaned.is_empty() {
        return None;
    }

    let available = available_locales();
    if let Some(exact) = available
        .iter()
        .find(|l| l.eq_ignore_ascii_case(&cleaned))
    {
        return Some(exact.clone());
    }

    let language = cleaned.split('-').next().unwrap_or_default();
    available
        .iter()
        .find(|l| {
            l.split('-')
                .next()
                .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
        })
        .cloned()
}

fn locale_from_env() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}
