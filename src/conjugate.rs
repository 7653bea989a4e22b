use core::fmt;

use fixed_map::Map;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::adjective;
use crate::class::{self, Family};
use crate::entities::PartOfSpeech;
use crate::error::{Error, ErrorKind};
use crate::kana::{Script, Word};
use crate::lexeme::Lexeme;
use crate::tree::{Category, ConjugationTree, Tree};
use crate::verb;

static EMPTY: ConjugationTree = Tree::new();

/// Why a lexeme was not conjugated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Skip {
    /// The lexeme has not been classified.
    Unclassified,
    /// The classifier could not decide on a single class.
    Ambiguous,
    /// The class is not one which can be conjugated.
    UnsupportedClass(Box<str>),
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::Unclassified => write!(f, "lexeme has not been classified"),
            Skip::Ambiguous => write!(f, "lexeme has an ambiguous class"),
            Skip::UnsupportedClass(tag) => write!(f, "unsupported class `{tag}`"),
        }
    }
}

/// The outcome of processing a lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The lexeme was conjugated.
    Conjugated(Conjugations),
    /// The lexeme was skipped.
    Skipped(Skip),
}

impl Outcome {
    /// Get the conjugations, if any.
    pub fn conjugations(&self) -> Option<&Conjugations> {
        match self {
            Outcome::Conjugated(conjugations) => Some(conjugations),
            Outcome::Skipped(..) => None,
        }
    }
}

/// Parallel conjugation trees of a single word in every script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugations {
    word: Word,
    part_of_speech: Option<PartOfSpeech>,
    trees: Map<Script, ConjugationTree>,
}

impl Conjugations {
    /// Project a tree of words into one tree per script.
    pub(crate) fn new(word: Word, part_of_speech: Option<PartOfSpeech>, tree: &Tree<Word>) -> Self {
        let mut trees = Map::new();

        for script in Script::ALL {
            trees.insert(script, tree.map(|word| word.get(script).to_owned()));
        }

        Self {
            word,
            part_of_speech,
            trees,
        }
    }

    /// The dictionary form which was conjugated.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The class which was conjugated, if any.
    pub fn part_of_speech(&self) -> Option<PartOfSpeech> {
        self.part_of_speech
    }

    /// The conjugation tree in the given script.
    pub fn tree(&self, script: Script) -> &ConjugationTree {
        self.trees.get(script).unwrap_or(&EMPTY)
    }

    /// Iterate over every available tree.
    pub fn trees(&self) -> impl Iterator<Item = (Script, &ConjugationTree)> + '_ {
        self.trees.iter()
    }

    /// Get a single form along the given path.
    pub fn get(&self, script: Script, path: &[Category]) -> Option<&str> {
        self.tree(script).value(path)
    }

    /// Keep only the trees of the given scripts.
    pub fn retain_scripts(&mut self, scripts: &[Script]) {
        let mut trees = Map::new();

        for &script in scripts {
            if let Some(tree) = self.trees.remove(script) {
                trees.insert(script, tree);
            }
        }

        self.trees = trees;
    }

    /// Remove voice derivations from every tree.
    pub fn without_voices(mut self) -> Self {
        for (_, tree) in self.trees.iter_mut() {
            tree.retain(|category| !category.is_voice());
        }

        self
    }
}

impl Serialize for Conjugations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("word", &self.word)?;

        if let Some(pos) = &self.part_of_speech {
            map.serialize_entry("part_of_speech", pos)?;
        }

        for (script, tree) in self.trees.iter() {
            map.serialize_entry(script.name(), tree)?;
        }

        map.end()
    }
}

/// Conjugate a classified lexeme.
///
/// Lexemes which are unclassified, ambiguous, or of an unsupported class are
/// skipped. A lemma which does not fit its class results in an error.
pub fn process(lexeme: &Lexeme) -> Result<Outcome, Error> {
    let _span = tracing::debug_span!("process", spelling = lexeme.spelling()).entered();

    let Some(tag) = lexeme.part_of_speech() else {
        tracing::debug!("skipping unclassified lexeme");
        return Ok(Outcome::Skipped(Skip::Unclassified));
    };

    let meta = match class::lookup(tag) {
        Ok(meta) => meta,
        Err(error) => match error.kind() {
            ErrorKind::UnsupportedClass(tag) => {
                tracing::debug!(tag = &**tag, "skipping unsupported class");
                return Ok(Outcome::Skipped(Skip::UnsupportedClass(tag.clone())));
            }
            _ => return Err(error),
        },
    };

    if lexeme.is_ambiguous() {
        tracing::debug!(tag, "skipping ambiguous lexeme");
        return Ok(Outcome::Skipped(Skip::Ambiguous));
    }

    let word = lexeme.word();

    let tree = match &meta.family {
        Family::Verb(verb) => verb::conjugate(word, &meta, verb)?,
        Family::Adjective => adjective::conjugate(word, &meta)?,
    };

    tracing::debug!(tag, "conjugated");

    Ok(Outcome::Conjugated(Conjugations::new(
        word.clone(),
        Some(meta.part_of_speech()),
        &tree,
    )))
}
