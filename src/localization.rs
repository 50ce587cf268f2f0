//! Localised titles for the acknowledgements entry
//!
//! `Root.plist` names `Root` as its strings table, so a `Root.strings` file in
//! each `<code>.lproj` directory translates the "Acknowledgements" title.

use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::bundle::ACKNOWLEDGEMENTS_PAGE;
use crate::common::fs::FileSystem;
use crate::error::{Result, fs as fs_error};

/// Suffix of a language project directory
pub const LPROJ_SUFFIX: &str = ".lproj";

/// Strings file written into each language project
pub const STRINGS_FILE_NAME: &str = "Root.strings";

/// A language with a known translation of "Acknowledgements"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Es,
    Fr,
    Ka,
    Ja,
    ZhHans,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::Ka,
        Language::Ja,
        Language::ZhHans,
    ];

    /// Exact, case-sensitive lookup by language code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }

    /// Code as used in the `.lproj` directory name
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Ka => "ka",
            Language::Ja => "ja",
            Language::ZhHans => "zh_Hans",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "Acknowledgements",
            Language::Es => "Agradecimientos",
            Language::Fr => "Remerciements",
            Language::Ka => "ಕೃತಜ್ಞತಾ ಸೂಚನೆ",
            Language::Ja => "謝辞",
            Language::ZhHans => "致谢",
        }
    }

    pub fn lproj_dir_name(self) -> String {
        format!("{}{LPROJ_SUFFIX}", self.code())
    }

    /// The single line of this language's `Root.strings`
    pub fn strings_file_contents(self) -> String {
        format!("\"{ACKNOWLEDGEMENTS_PAGE}\" = \"{}\";", self.label())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// `code: label` lines for every known language
pub fn available_languages_description() -> String {
    Language::ALL
        .iter()
        .map(|language| format!("{}: {}", language.code(), language.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split a comma-separated list into trimmed codes, keeping order
///
/// Blank items are kept so they are reported like any other unknown code.
pub fn parse_language_codes(language_codes: &str) -> Vec<&str> {
    language_codes.split(',').map(str::trim).collect()
}

/// Write `<code>.lproj/Root.strings` under `bundle_dir` for every known code
///
/// Unknown codes are skipped with a warning. Returns the languages written,
/// in input order, duplicates included.
pub fn write_localizations(
    fs: &dyn FileSystem,
    bundle_dir: &Path,
    language_codes: &str,
) -> Result<Vec<Language>> {
    let codes = parse_language_codes(language_codes);
    info!("Got the following language codes: {codes:?}");

    let mut written = Vec::new();
    for code in codes {
        let Some(language) = Language::from_code(code) else {
            warn!("Could not find translation for language code {code}.");
            continue;
        };

        let lproj_dir = bundle_dir.join(language.lproj_dir_name());
        fs.create_dir_all(&lproj_dir)
            .map_err(|e| fs_error::directory_create_failed(&lproj_dir, &e))?;

        let strings_file = lproj_dir.join(STRINGS_FILE_NAME);
        fs.write(&strings_file, language.strings_file_contents().as_bytes())
            .map_err(|e| fs_error::write_failed(&strings_file, &e))?;

        info!("Wrote strings file for {language}");
        written.push(language);
    }

    Ok(written)
}
