//! Language tags.
//!
//! # Responsibilities
//! - Parse BCP 47 tags of the form
//!   `language[-script][-region][-variant]*[-extension]*[-x-private]`, or `x-private` alone
//! - Normalize subtag case so equal tags compare equal
//!
//! # Design Decisions
//! - Extension and private-use sequences are kept in the order given; a repeated
//!   singleton is an error
//! - Grandfathered tags (`i-klingon`, `zh-min-nan`) are rejected
//! - Canonical casing: `Script` title, `REGION` upper, everything else lower
//! - Display output always parses back to an equal tag

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a [`LanguageTag`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageTagError {
    #[error("language tag is empty")]
    Empty,

    #[error("invalid primary language subtag `{0}`")]
    Language(String),

    #[error("unexpected subtag `{subtag}` at position {position}")]
    Subtag { subtag: String, position: usize },

    #[error("extension `{0}` appears more than once")]
    DuplicateExtension(char),
}

/// A normalized BCP 47 language tag, e.g. `en`, `zh-Hant-TW`, `de-CH-1996`,
/// `de-DE-u-co-phonebk`, `x-klingon`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
    variants: Vec<String>,
    extensions: Vec<String>,
    private_use: Vec<String>,
}

impl LanguageTag {
    /// Primary language subtag, lowercase. Empty for a private-use-only tag such as `x-klingon`.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Script subtag, title case.
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Region subtag, uppercase letters or three digits.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Extension sequences, singleton first, e.g. `u-ca-gregory`.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Private-use subtags following `x`, without the `x`.
    pub fn private_use(&self) -> &[String] {
        &self.private_use
    }
}

fn is_alpha(subtag: &str) -> bool {
    subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_language(subtag: &str) -> bool {
    matches!(subtag.len(), 2..=3 | 5..=8) && is_alpha(subtag)
}

fn is_script(subtag: &str) -> bool {
    subtag.len() == 4 && is_alpha(subtag)
}

fn is_region(subtag: &str) -> bool {
    (subtag.len() == 2 && is_alpha(subtag))
        || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()))
}

fn is_variant(subtag: &str) -> bool {
    let alphanumeric = subtag.bytes().all(|b| b.is_ascii_alphanumeric());
    match subtag.len() {
        5..=8 => alphanumeric,
        4 => alphanumeric && subtag.as_bytes()[0].is_ascii_digit(),
        _ => false,
    }
}

fn extension_singleton(subtag: &str) -> Option<char> {
    match subtag.as_bytes() {
        [b] if b.is_ascii_alphanumeric() && !b.eq_ignore_ascii_case(&b'x') => {
            Some(b.to_ascii_lowercase() as char)
        }
        _ => None,
    }
}

fn is_extension_subtag(subtag: &str) -> bool {
    (2..=8).contains(&subtag.len()) && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_private_use_marker(subtag: &str) -> bool {
    subtag.eq_ignore_ascii_case("x")
}

fn is_private_subtag(subtag: &str) -> bool {
    (1..=8).contains(&subtag.len()) && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn title_case(subtag: &str) -> String {
    let lower = subtag.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => lower,
    }
}

impl FromStr for LanguageTag {
    type Err = LanguageTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(LanguageTagError::Empty);
        }

        let subtags: Vec<&str> = s.split('-').collect();
        let mut tag = Self {
            language: String::new(),
            script: None,
            region: None,
            variants: Vec::new(),
            extensions: Vec::new(),
            private_use: Vec::new(),
        };
        let mut position = 0;

        if !is_private_use_marker(subtags[0]) {
            let language = subtags[0];
            if !is_language(language) {
                return Err(LanguageTagError::Language(language.to_string()));
            }
            tag.language = language.to_ascii_lowercase();
            position = 1;

            if let Some(subtag) = subtags.get(position).copied().filter(|s| is_script(s)) {
                tag.script = Some(title_case(subtag));
                position += 1;
            }
            if let Some(subtag) = subtags.get(position).copied().filter(|s| is_region(s)) {
                tag.region = Some(subtag.to_ascii_uppercase());
                position += 1;
            }
            while let Some(subtag) = subtags.get(position).copied().filter(|s| is_variant(s)) {
                tag.variants.push(subtag.to_ascii_lowercase());
                position += 1;
            }

            while let Some(singleton) = subtags.get(position).copied().and_then(extension_singleton) {
                if tag.extensions.iter().any(|e| e.starts_with(singleton)) {
                    return Err(LanguageTagError::DuplicateExtension(singleton));
                }
                let start = position;
                let mut extension = singleton.to_string();
                position += 1;
                while let Some(subtag) =
                    subtags.get(position).copied().filter(|s| is_extension_subtag(s))
                {
                    extension.push('-');
                    extension.push_str(&subtag.to_ascii_lowercase());
                    position += 1;
                }
                if position == start + 1 {
                    return Err(LanguageTagError::Subtag {
                        subtag: subtags[start].to_string(),
                        position: start,
                    });
                }
                tag.extensions.push(extension);
            }
        }

        if subtags.get(position).copied().is_some_and(is_private_use_marker) {
            let start = position;
            position += 1;
            while let Some(subtag) = subtags.get(position).copied().filter(|s| is_private_subtag(s)) {
                tag.private_use.push(subtag.to_ascii_lowercase());
                position += 1;
            }
            if tag.private_use.is_empty() {
                return Err(LanguageTagError::Subtag {
                    subtag: subtags[start].to_string(),
                    position: start,
                });
            }
        }

        match subtags.get(position) {
            Some(subtag) => Err(LanguageTagError::Subtag {
                subtag: subtag.to_string(),
                position,
            }),
            None => Ok(tag),
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut subtags: Vec<&str> = Vec::new();
        if !self.language.is_empty() {
            subtags.push(&self.language);
        }
        subtags.extend(self.script.as_deref());
        subtags.extend(self.region.as_deref());
        subtags.extend(self.variants.iter().map(String::as_str));
        subtags.extend(self.extensions.iter().map(String::as_str));
        if !self.private_use.is_empty() {
            subtags.push("x");
            subtags.extend(self.private_use.iter().map(String::as_str));
        }
        f.write_str(&subtags.join("-"))
    }
}
