//! Numerus (plural form) rules per language.
//!
//! Follows the rules Qt Linguist applies when it decides how many
//! `<numerusform>` elements a catalog needs and which one to pick for a count.

/// Plural rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumerusRule {
    /// No plural distinction (Japanese, Korean, Turkish, ...).
    Single,
    /// `n == 1` vs. everything else (English and the default).
    English,
    /// `n <= 1` vs. everything else (French, Brazilian Portuguese).
    French,
    Latvian,
    Irish,
    Romanian,
    Lithuanian,
    /// Russian, Ukrainian, Belarusian, Serbian, Croatian, Bosnian.
    EastSlavic,
    /// Czech and Slovak.
    Czech,
    Polish,
    Macedonian,
    Icelandic,
    Slovenian,
    Maltese,
    Welsh,
    Arabic,
}

const SINGLE_FORM: &[&str] = &[
    "bi", "bo", "dz", "fa", "fj", "gn", "hu", "id", "ja", "jv", "ko", "ms", "my", "na", "om",
    "su", "th", "tr", "tt", "vi", "yo", "za", "zh",
];

impl NumerusRule {
    /// Rule for a language tag such as "ka_GE", "pt-BR" or "sl".
    pub fn for_language(language: &str) -> Self {
        let normalized = language.replace('-', "_");
        let mut parts = normalized.split('_');
        let lang = parts.next().unwrap_or("").to_ascii_lowercase();
        let territory = parts.next().map(|t| t.to_ascii_uppercase());

        if SINGLE_FORM.contains(&lang.as_str()) {
            return NumerusRule::Single;
        }

        match (lang.as_str(), territory.as_deref()) {
            ("fr", _) | ("pt", Some("BR")) => NumerusRule::French,
            ("lv", _) => NumerusRule::Latvian,
            ("ga", _) | ("gd", _) => NumerusRule::Irish,
            ("ro", _) | ("mo", _) => NumerusRule::Romanian,
            ("lt", _) => NumerusRule::Lithuanian,
            ("ru", _) | ("uk", _) | ("be", _) | ("sr", _) | ("hr", _) | ("bs", _) => {
                NumerusRule::EastSlavic
            }
            ("cs", _) | ("sk", _) => NumerusRule::Czech,
            ("pl", _) => NumerusRule::Polish,
            ("mk", _) => NumerusRule::Macedonian,
            ("is", _) => NumerusRule::Icelandic,
            ("sl", _) => NumerusRule::Slovenian,
            ("mt", _) => NumerusRule::Maltese,
            ("cy", _) => NumerusRule::Welsh,
            ("ar", _) => NumerusRule::Arabic,
            _ => NumerusRule::English,
        }
    }

    /// Number of `<numerusform>` elements a catalog in this language carries.
    pub fn form_count(&self) -> usize {
        match self {
            NumerusRule::Single => 1,
            NumerusRule::English | NumerusRule::French | NumerusRule::Icelandic => 2,
            NumerusRule::Latvian
            | NumerusRule::Irish
            | NumerusRule::Romanian
            | NumerusRule::Lithuanian
            | NumerusRule::EastSlavic
            | NumerusRule::Czech
            | NumerusRule::Polish
            | NumerusRule::Macedonian => 3,
            NumerusRule::Slovenian | NumerusRule::Maltese | NumerusRule::Welsh => 4,
            NumerusRule::Arabic => 6,
        }
    }

    /// Index of the form to use for the count `n`.
    pub fn form_index(&self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let n10 = n % 10;
        let n100 = n % 100;
        match self {
            NumerusRule::Single => 0,
            NumerusRule::English => usize::from(n != 1),
            NumerusRule::French => usize::from(n > 1),
            NumerusRule::Latvian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n != 0 {
                    1
                } else {
                    2
                }
            }
            NumerusRule::Irish => match n {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            NumerusRule::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (n100 > 0 && n100 < 20) {
                    1
                } else {
                    2
                }
            }
            NumerusRule::Lithuanian => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if n10 >= 2 && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            NumerusRule::EastSlavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            NumerusRule::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            NumerusRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            NumerusRule::Macedonian => match n10 {
                1 => 0,
                2 => 1,
                _ => 2,
            },
            NumerusRule::Icelandic => usize::from(!(n10 == 1 && n100 != 11)),
            NumerusRule::Slovenian => match n100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            NumerusRule::Maltese => {
                if n == 1 {
                    0
                } else if n == 0 || (1..=10).contains(&n100) {
                    1
                } else if (11..=19).contains(&n100) {
                    2
                } else {
                    3
                }
            }
            NumerusRule::Welsh => match n {
                1 => 0,
                2 => 1,
                8 | 11 => 2,
                _ => 3,
            },
            NumerusRule::Arabic => {
                if n == 0 {
                    0
                } else if n == 1 {
                    1
                } else if n == 2 {
                    2
                } else if (3..=10).contains(&n100) {
                    3
                } else if n100 >= 11 {
                    4
                } else {
                    5
                }
            }
        }
    }
}

/// Number of numerus forms for a language; two when the language is unknown.
pub fn numerus_count(language: Option<&str>) -> usize {
    language
        .map(NumerusRule::for_language)
        .unwrap_or(NumerusRule::English)
        .form_count()
}

/// Form index for the count `n` in a language; default rule when unknown.
pub fn numerus_index(language: Option<&str>, n: i64) -> usize {
    language
        .map(NumerusRule::for_language)
        .unwrap_or(NumerusRule::English)
        .form_index(n)
}
