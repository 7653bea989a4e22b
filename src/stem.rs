use crate::class::{ClassMeta, Root, VerbClass};
use crate::error::{Error, ErrorKind};
use crate::kana::{Morpheme, Word};

/// The stems a verb conjugates from, in every script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StemSet {
    /// The continuative stem, like `探し`.
    pub(crate) stem: Word,
    /// The negative stem, like `探さ`.
    pub(crate) negative_stem: Word,
    /// The dictionary form with its final mora removed, like `探`.
    pub(crate) base: Word,
    // What class rows are attached to. Same as base unless the class has an
    // irregular root.
    anchor: Word,
    // Use the kanji spelling of irregular rows.
    kanji: bool,
}

impl StemSet {
    /// Derive stems for a lemma of the given verb class.
    pub(crate) fn derive(lemma: &Word, meta: &ClassMeta, verb: &VerbClass) -> Result<Self, Error> {
        let base = strip_base(lemma, meta)?;

        let (anchor, kanji) = match &verb.root {
            Some(root) => strip_root(lemma, root)?,
            None => (base.clone(), false),
        };

        let mut stems = Self {
            stem: Word::default(),
            negative_stem: Word::default(),
            base,
            anchor,
            kanji,
        };

        stems.stem = stems.attach(&verb.stem);
        stems.negative_stem = stems.attach(&verb.negative);

        tracing::trace!(
            lemma = %lemma.text,
            stem = %stems.stem.text,
            negative_stem = %stems.negative_stem.text,
            base = %stems.base.text,
            "stems"
        );

        Ok(stems)
    }

    /// Attach a class row to the anchor of the lemma.
    pub(crate) fn attach(&self, morpheme: &Morpheme) -> Word {
        self.anchor.attach(morpheme, self.kanji)
    }
}

fn invalid(lemma: &Word, reason: &'static str) -> Error {
    tracing::warn!(text = %lemma.text, reading = %lemma.kana, reason, "invalid lemma");

    Error::new(ErrorKind::InvalidLemma {
        text: lemma.text.as_str().into(),
        reading: lemma.kana.as_str().into(),
        reason,
    })
}

/// Strip the final mora of a lemma.
pub(crate) fn strip_base(lemma: &Word, meta: &ClassMeta) -> Result<Word, Error> {
    let Some(base) = lemma.strip(meta.ending, meta.romaji_ending) else {
        return Err(invalid(lemma, "does not end with the class ending"));
    };

    if base.text.is_empty() || base.kana.is_empty() || base.romaji.is_empty() {
        return Err(invalid(lemma, "too short"));
    }

    Ok(base)
}

/// Strip an irregular root, returning what is left and whether the text was
/// spelled with the kanji form of the root.
fn strip_root(lemma: &Word, root: &Root) -> Result<(Word, bool), Error> {
    let (text, kanji) = match root.kanji.and_then(|k| lemma.text.strip_suffix(k)) {
        Some(text) => (text, true),
        None => match lemma.text.strip_suffix(root.kana) {
            Some(text) => (text, false),
            None => return Err(invalid(lemma, "does not end with the irregular root")),
        },
    };

    let (Some(kana), Some(romaji)) = (
        lemma.kana.strip_suffix(root.kana),
        lemma.romaji.strip_suffix(root.romaji),
    ) else {
        return Err(invalid(lemma, "reading does not end with the irregular root"));
    };

    Ok((Word::new(text, kana, romaji), kanji))
}
