//! Display locales and the process-wide default locale.
//!
//! The default is a single value behind one mutex: reads and writes from any
//! thread never tear. It starts as [`Locale::current`] and can be replaced
//! with [`set_default_locale`] or restored with [`reset_default_locale`].
//! Prefer passing a locale explicitly; the default only serves the
//! convenience call forms such as `Display`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

/// Environment variables consulted by [`Locale::current`], in order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

const NO_BREAK_SPACE: char = '\u{a0}';

static DEFAULT_LOCALE: Lazy<Mutex<Locale>> = Lazy::new(|| Mutex::new(Locale::current()));

/// Number formatting conventions for a language/region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    identifier: String,
    decimal_separator: char,
    grouping_separator: char,
}

impl Locale {
    /// Resolves a locale identifier such as `"da"`, `"en_US"` or `"de-DE.UTF-8"`.
    ///
    /// Matching is by language; unknown languages format like English.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        let language = identifier
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_lowercase();

        let (decimal_separator, grouping_separator) = match language.as_str() {
            "da" | "de" | "nb" | "nn" | "no" | "nl" | "es" | "it" | "pt" | "id" | "tr" => {
                (',', '.')
            }
            "fr" | "sv" | "fi" | "pl" | "cs" | "ru" | "uk" => (',', NO_BREAK_SPACE),
            _ => ('.', ','),
        };

        Self {
            identifier: identifier.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }

    /// English conventions: `1,000.25`.
    #[must_use]
    pub fn english() -> Self {
        Self::from_identifier("en")
    }

    /// Danish conventions: `1.000,25`.
    #[must_use]
    pub fn danish() -> Self {
        Self::from_identifier("da")
    }

    /// The locale of the running process, taken from `LC_ALL`, `LC_NUMERIC`
    /// or `LANG`. Falls back to English.
    #[must_use]
    pub fn current() -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
            .map_or_else(Self::english, |value| Self::from_identifier(&value))
    }

    /// Returns the identifier this locale was resolved from.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the decimal separator.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Returns the thousands grouping separator.
    #[must_use]
    pub const fn grouping_separator(&self) -> char {
        self.grouping_separator
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

fn lock_default() -> MutexGuard<'static, Locale> {
    DEFAULT_LOCALE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns a copy of the process-wide default locale.
#[must_use]
pub fn default_locale() -> Locale {
    lock_default().clone()
}

/// Replaces the process-wide default locale.
pub fn set_default_locale(locale: Locale) {
    tracing::debug!(identifier = %locale.identifier, "Default display locale changed");
    *lock_default() = locale;
}

/// Restores the process-wide default locale to [`Locale::current`].
pub fn reset_default_locale() {
    set_default_locale(Locale::current());
}

/// Serializes tests that read or write the process-wide default locale.
#[cfg(test)]
pub(crate) fn test_lock() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
