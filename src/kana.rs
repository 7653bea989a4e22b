use core::fmt;

use fixed_map::Key;
use serde::{Deserialize, Serialize};

use crate::concat::Concat;

/// The script a conjugation is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Key)]
#[serde(rename_all = "kebab-case")]
pub enum Script {
    /// Mixed kanji and kana, as the word is normally written.
    Text,
    /// Pure kana.
    Kana,
    /// Hepburn romaji.
    Romaji,
}

impl Script {
    pub const ALL: [Script; 3] = [Script::Text, Script::Kana, Script::Romaji];

    /// Name of the script.
    pub fn name(&self) -> &'static str {
        match self {
            Script::Text => "text",
            Script::Kana => "kana",
            Script::Romaji => "romaji",
        }
    }
}

impl fmt::Display for Script {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// A morpheme that is attached to a stem.
///
/// The kana form is used for both the text and the kana scripts unless an
/// explicit kanji form is present, which is only the case for irregular roots
/// such as `来る`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Morpheme {
    pub(crate) kanji: Option<&'static str>,
    pub(crate) kana: &'static str,
    pub(crate) romaji: &'static str,
    // Replaces whatever it is attached to.
    pub(crate) replace: bool,
}

impl Morpheme {
    /// The empty morpheme.
    pub const EMPTY: Morpheme = Morpheme::new("", "");

    /// Construct a regular kana morpheme.
    pub const fn new(kana: &'static str, romaji: &'static str) -> Self {
        Self {
            kanji: None,
            kana,
            romaji,
            replace: false,
        }
    }

    /// Construct a morpheme which has a distinct kanji spelling.
    pub const fn irregular(kanji: &'static str, kana: &'static str, romaji: &'static str) -> Self {
        Self {
            kanji: Some(kanji),
            kana,
            romaji,
            replace: false,
        }
    }

    /// Construct a morpheme which replaces the word it is attached to.
    pub const fn replacing(kana: &'static str, romaji: &'static str) -> Self {
        Self {
            kanji: None,
            kana,
            romaji,
            replace: true,
        }
    }

    /// Kana spelling of the morpheme.
    #[inline]
    pub fn kana(&self) -> &'static str {
        self.kana
    }

    /// Romaji spelling of the morpheme.
    #[inline]
    pub fn romaji(&self) -> &'static str {
        self.romaji
    }
}

/// A word spelled out in every script.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Word {
    /// Mixed kanji and kana.
    pub text: String,
    /// Kana reading.
    pub kana: String,
    /// Romaji transliteration.
    pub romaji: String,
}

impl Word {
    pub fn new<A, B, C>(text: A, kana: B, romaji: C) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
    {
        Self {
            text: text.into(),
            kana: kana.into(),
            romaji: romaji.into(),
        }
    }

    /// Get the word in the given script.
    pub fn get(&self, script: Script) -> &str {
        match script {
            Script::Text => &self.text,
            Script::Kana => &self.kana,
            Script::Romaji => &self.romaji,
        }
    }

    /// Append a morpheme.
    ///
    /// If `kanji` is set the kanji spelling of the morpheme is used for the
    /// text script when available.
    pub(crate) fn attach(&self, morpheme: &Morpheme, kanji: bool) -> Word {
        if morpheme.replace {
            return Word::new(morpheme.kana, morpheme.kana, morpheme.romaji);
        }

        let text = match morpheme.kanji {
            Some(k) if kanji => k,
            _ => morpheme.kana,
        };

        Word {
            text: Concat::<2>::new([self.text.as_str(), text]).to_owned_string(),
            kana: Concat::<2>::new([self.kana.as_str(), morpheme.kana]).to_owned_string(),
            romaji: Concat::<2>::new([self.romaji.as_str(), morpheme.romaji]).to_owned_string(),
        }
    }

    /// Append a regular morpheme.
    #[inline]
    pub(crate) fn concat(&self, morpheme: &Morpheme) -> Word {
        self.attach(morpheme, false)
    }

    /// Strip the given suffix from every script.
    ///
    /// The text and kana scripts must end with the kana `ending`, and the
    /// romaji script with `romaji`.
    pub(crate) fn strip(&self, ending: &str, romaji: &str) -> Option<Word> {
        Some(Word {
            text: self.text.strip_suffix(ending)?.to_owned(),
            kana: self.kana.strip_suffix(ending)?.to_owned(),
            romaji: self.romaji.strip_suffix(romaji)?.to_owned(),
        })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text != self.kana {
            write!(f, "{} ({}) {}", self.text, self.kana, self.romaji)
        } else {
            write!(f, "{} {}", self.text, self.romaji)
        }
    }
}
