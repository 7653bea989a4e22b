use crate::kana::Word;
use crate::romaji;

/// The decision of a lemma classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The class keyword, like `v5k`.
    pub part_of_speech: String,
    /// If the classifier could not decide between multiple classes.
    pub ambiguous: bool,
}

/// Something which can decide the conjugation class of a lexeme.
pub trait Classifier {
    /// Classify the given lexeme.
    fn classify(&self, lexeme: &Lexeme) -> Classification;
}

impl<F> Classifier for F
where
    F: Fn(&Lexeme) -> Classification,
{
    #[inline]
    fn classify(&self, lexeme: &Lexeme) -> Classification {
        self(lexeme)
    }
}

/// A dictionary lemma to conjugate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    word: Word,
    part_of_speech: Option<Box<str>>,
    ambiguous: bool,
}

impl Lexeme {
    /// Construct a new unclassified lexeme out of its spelling and kana
    /// reading. The romaji form is derived from the reading.
    pub fn new(spelling: &str, reading: &str) -> Self {
        Self {
            word: Word::new(spelling, reading, romaji::romanize(reading)),
            part_of_speech: None,
            ambiguous: false,
        }
    }

    /// Set the class of the lexeme.
    pub fn with_part_of_speech(self, part_of_speech: &str, ambiguous: bool) -> Self {
        Self {
            part_of_speech: Some(part_of_speech.into()),
            ambiguous,
            ..self
        }
    }

    /// Classify the lexeme using the given classifier.
    pub fn classify<C>(self, classifier: &C) -> Self
    where
        C: ?Sized + Classifier,
    {
        let Classification {
            part_of_speech,
            ambiguous,
        } = classifier.classify(&self);

        self.with_part_of_speech(&part_of_speech, ambiguous)
    }

    /// The dictionary form in every script.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The spelling, usually mixed kanji and kana.
    pub fn spelling(&self) -> &str {
        &self.word.text
    }

    /// The kana reading.
    pub fn reading(&self) -> &str {
        &self.word.kana
    }

    /// The romaji transliteration of the reading.
    pub fn romaji(&self) -> &str {
        &self.word.romaji
    }

    /// The class keyword, if classified.
    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref()
    }

    /// If the classifier flagged the lexeme as ambiguous.
    pub fn is_ambiguous(&self) -> bool {
        self.ambiguous
    }
}
