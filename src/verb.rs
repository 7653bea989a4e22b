//! Conjugation of verbs.

#[cfg(test)]
mod tests;

use crate::class::{self, ClassMeta, Source, VerbClass, Voice};
use crate::error::Error;
use crate::kana::Word;
use crate::stem::{self, StemSet};
use crate::suffix;
use crate::tree::{Category, Tree};

/// What is being conjugated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// A dictionary lemma, which gets the full set of forms.
    Lemma,
    /// A derived voice, which only gets the forms it is used in.
    Voice,
}

/// Conjugate a verb lemma of the given class.
pub(crate) fn conjugate(lemma: &Word, meta: &ClassMeta, verb: &VerbClass) -> Result<Tree<Word>, Error> {
    build(lemma, meta, verb, Scope::Lemma)
}

fn build(lemma: &Word, meta: &ClassMeta, verb: &VerbClass, scope: Scope) -> Result<Tree<Word>, Error> {
    let stems = StemSet::derive(lemma, meta, verb)?;
    let te = stems.attach(&verb.te);
    let ta = stems.attach(&verb.ta);

    let mut tree = Tree::new();
    tree.insert(Category::Stem, stems.stem.clone());

    if scope == Scope::Lemma {
        tree.insert(Category::NegativeStem, stems.negative_stem.clone());
        tree.insert(Category::Base, stems.base.clone());
    }

    tree.insert(Category::TeForm, te.clone());
    tree.insert(Category::TaForm, ta);

    let mut polite = Tree::new();

    for (category, morpheme) in &suffix::POLITE {
        if *category == Category::Volitional {
            match scope {
                Scope::Voice => continue,
                Scope::Lemma if verb.volitional.is_none() => {
                    polite.insert_or_unavailable(*category, None);
                    continue;
                }
                Scope::Lemma => {}
            }
        }

        polite.insert(*category, stems.stem.concat(morpheme));
    }

    tree.insert_branch(Category::PoliteForms, polite);

    let mut negative = Tree::new();

    for (category, morpheme) in &suffix::NEGATIVE {
        negative.insert(*category, stems.negative_stem.concat(morpheme));
    }

    tree.insert_branch(Category::NegativePlainForms, negative);

    let mut continuous = Tree::new();

    for (category, morpheme) in &suffix::CONTINUOUS {
        continuous.insert(*category, te.concat(morpheme));
    }

    tree.insert_branch(Category::ContinuousForms, continuous);

    if scope == Scope::Lemma {
        let prohibitive = verb
            .prohibitive
            .then(|| lemma.concat(&suffix::PROHIBITIVE));
        tree.insert_or_unavailable(Category::Prohibitive, prohibitive);

        let potential = verb.potential.map(|m| stems.attach(&m));
        tree.insert_or_unavailable(Category::PlainPresentPotential, potential);
    }

    tree.insert(Category::Conditional, stems.attach(&verb.conditional));

    if scope == Scope::Voice {
        return Ok(tree);
    }

    let imperative = verb.imperative.map(|m| stems.attach(&m));
    tree.insert_or_unavailable(Category::Imperative, imperative);

    let volitional = verb.volitional.map(|m| stems.attach(&m));
    tree.insert_or_unavailable(Category::Volitional, volitional);

    voices(&mut tree, &stems, verb)?;
    Ok(tree)
}

/// Derive voice dictionary forms and conjugate them.
fn voices(tree: &mut Tree<Word>, stems: &StemSet, verb: &VerbClass) -> Result<(), Error> {
    let passive = dictionary_form(stems, verb.passive.as_ref(), None)?;
    let causative = dictionary_form(stems, verb.causative.as_ref(), None)?;
    let causative_passive =
        dictionary_form(stems, verb.causative_passive.as_ref(), causative.as_ref())?;

    let voices = [
        (
            Category::PassiveDictionaryForm,
            Category::PassiveForms,
            passive,
        ),
        (
            Category::CausativeDictionaryForm,
            Category::CausativeForms,
            causative,
        ),
        (
            Category::CausativePassiveDictionaryForm,
            Category::CausativePassiveForms,
            causative_passive,
        ),
    ];

    for (dictionary, forms, word) in voices {
        let Some(word) = word else {
            continue;
        };

        let conjugated = conjugate_voice(&word)?;
        tree.insert(dictionary, word);
        tree.insert_branch(forms, conjugated);
    }

    Ok(())
}

/// Build the dictionary form of a voice, if the class has it.
fn dictionary_form(
    stems: &StemSet,
    voice: Option<&Voice>,
    causative: Option<&Word>,
) -> Result<Option<Word>, Error> {
    let Some(voice) = voice else {
        return Ok(None);
    };

    let word = match voice.source {
        Source::Stem => stems.stem.concat(&voice.suffix),
        Source::NegativeStem => stems.negative_stem.concat(&voice.suffix),
        Source::Root => stems.attach(&voice.suffix),
        Source::Causative => {
            let Some(causative) = causative else {
                return Ok(None);
            };

            stem::strip_base(causative, &class::ICHIDAN)?.concat(&voice.suffix)
        }
    };

    Ok(Some(word))
}

/// Conjugate a voice dictionary form as an ichidan verb.
fn conjugate_voice(word: &Word) -> Result<Tree<Word>, Error> {
    let meta = class::ICHIDAN;

    match meta.verb() {
        Some(verb) => build(word, &meta, verb, Scope::Voice),
        None => Ok(Tree::new()),
    }
}
