//! Conjugation of i-adjectives and the copula.

#[cfg(test)]
mod tests;

use crate::class::ClassMeta;
use crate::conjugate::Conjugations;
use crate::error::Error;
use crate::kana::{Morpheme, Word};
use crate::stem;
use crate::suffix;
use crate::tree::{Category, Tree};

const ADVERBIAL: Morpheme = Morpheme::new("く", "ku");
const POLITE: Morpheme = Morpheme::new("です", " desu");
const PAST: Morpheme = Morpheme::new("かった", "katta");
const PAST_POLITE: Morpheme = Morpheme::new("でした", " deshita");
const TE: Morpheme = Morpheme::new("くて", "kute");

/// Conjugate an i-adjective.
pub(crate) fn conjugate(lemma: &Word, meta: &ClassMeta) -> Result<Tree<Word>, Error> {
    let base = stem::strip_base(lemma, meta)?;
    let adverbial = base.concat(&ADVERBIAL);

    let mut tree = Tree::new();
    tree.insert(Category::AdjectiveBase, base.clone());
    tree.insert(Category::AdverbialForm, adverbial.clone());

    let mut negative = Tree::new();

    for (category, morpheme) in &suffix::NEGATIVE_ADJECTIVE {
        negative.insert(*category, adverbial.concat(morpheme));
    }

    tree.insert_branch(Category::NegativeAdjectiveForms, negative);

    let mut plain = Tree::new();
    plain.insert(Category::Present, lemma.clone());
    plain.insert(Category::PresentPolite, lemma.concat(&POLITE));
    plain.insert(Category::Past, base.concat(&PAST));
    plain.insert(Category::PastPolite, lemma.concat(&PAST_POLITE));
    plain.insert(Category::TeForm, base.concat(&TE));
    tree.insert_branch(Category::AdjectiveConjugations, plain);

    Ok(tree)
}

/// The conjugations of the copula `だ`.
pub fn copula() -> Conjugations {
    let mut forms = Tree::new();

    for (category, morpheme) in &suffix::COPULA {
        forms.insert(
            *category,
            Word::new(morpheme.kana(), morpheme.kana(), morpheme.romaji()),
        );
    }

    let mut tree = Tree::new();
    tree.insert_branch(Category::Copula, forms);
    Conjugations::new(Word::new("だ", "だ", "da"), None, &tree)
}
