use crate::class::ClassMeta;
use crate::entities::PartOfSpeech;
use crate::kana::{Script, Word};
use crate::tree::{Category, Node, Tree};

use Category::*;

fn conjugate(text: &str, kana: &str, romaji: &str) -> Tree<Word> {
    let lemma = Word::new(text, kana, romaji);
    let meta = ClassMeta::of(PartOfSpeech::AdjectiveI);
    super::conjugate(&lemma, &meta).expect("failed to conjugate")
}

fn form(tree: &Tree<Word>, path: &[Category]) -> Word {
    match tree.lookup(path) {
        Some(Node::Form(word)) => word.clone(),
        node => panic!("expected form at {path:?}, got {node:?}"),
    }
}

fn w(text: &str, kana: &str, romaji: &str) -> Word {
    Word::new(text, kana, romaji)
}

#[test]
fn adjective() {
    let tree = conjugate("高い", "たかい", "takai");

    assert_eq!(form(&tree, &[AdjectiveBase]), w("高", "たか", "taka"));
    assert_eq!(form(&tree, &[AdverbialForm]), w("高く", "たかく", "takaku"));
    assert_eq!(
        form(&tree, &[NegativeAdjectiveForms, Present]),
        w("高くない", "たかくない", "takaku nai")
    );
    assert_eq!(
        form(&tree, &[NegativeAdjectiveForms, PastPolite]),
        w("高くありませんでした", "たかくありませんでした", "takaku arimasen deshita")
    );
    assert_eq!(
        form(&tree, &[NegativeAdjectiveForms, PastHonorific]),
        w("高くございませんでした", "たかくございませんでした", "takaku gozaimasen deshita")
    );
    assert_eq!(
        form(&tree, &[NegativeAdjectiveForms, TeFormHonorific]),
        w("高くございませんでして", "たかくございませんでして", "takaku gozaimasen deshite")
    );
    assert_eq!(form(&tree, &[AdjectiveConjugations, Present]), w("高い", "たかい", "takai"));
    assert_eq!(
        form(&tree, &[AdjectiveConjugations, PresentPolite]),
        w("高いです", "たかいです", "takai desu")
    );
    assert_eq!(
        form(&tree, &[AdjectiveConjugations, Past]),
        w("高かった", "たかかった", "takakatta")
    );
    assert_eq!(
        form(&tree, &[AdjectiveConjugations, TeForm]),
        w("高くて", "たかくて", "takakute")
    );
}

#[test]
fn negative_keys() {
    let tree = conjugate("高い", "たかい", "takai");

    let Some(Node::Branch(negative)) = tree.get(NegativeAdjectiveForms) else {
        panic!("missing negative forms");
    };

    assert_eq!(
        negative.keys().collect::<Vec<_>>(),
        [
            Present,
            PresentPolite,
            Past,
            PastPolite,
            TeForm,
            PresentHonorific,
            PastHonorific,
            TeFormHonorific,
        ]
    );
}

#[test]
fn copula() {
    let copula = super::copula();

    assert_eq!(copula.get(Script::Text, &[Copula, Present]), Some("だ"));
    assert_eq!(copula.get(Script::Romaji, &[Copula, PresentFormal]), Some("de aru"));
    assert_eq!(
        copula.get(Script::Kana, &[Copula, VolitionalHonorific]),
        Some("でございましょう")
    );
    assert_eq!(copula.get(Script::Romaji, &[Copula, ContinuousFormal]), Some("de ari"));

    let Some(Node::Branch(forms)) = copula.tree(Script::Text).get(Copula) else {
        panic!("missing copula");
    };

    assert_eq!(forms.len(), 17);
}
