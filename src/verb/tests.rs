use crate::class::ClassMeta;
use crate::entities::PartOfSpeech;
use crate::error::ErrorKind;
use crate::kana::Word;
use crate::romaji::romanize;
use crate::tree::{Category, Node, Tree};

use Category::*;

fn conjugate(text: &str, kana: &str, pos: PartOfSpeech) -> Tree<Word> {
    let lemma = Word::new(text, kana, romanize(kana));
    let meta = ClassMeta::of(pos);
    let verb = meta.verb().expect("not a verb");
    super::conjugate(&lemma, &meta, verb).expect("failed to conjugate")
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
fn godan_su() {
    let tree = conjugate("探す", "さがす", PartOfSpeech::VerbGodanS);

    assert_eq!(form(&tree, &[Stem]), w("探し", "さがし", "sagashi"));
    assert_eq!(form(&tree, &[NegativeStem]), w("探さ", "さがさ", "sagasa"));
    assert_eq!(form(&tree, &[Base]), w("探", "さが", "saga"));
    assert_eq!(form(&tree, &[TeForm]), w("探して", "さがして", "sagashite"));
    assert_eq!(form(&tree, &[TaForm]), w("探した", "さがした", "sagashita"));
    assert_eq!(
        form(&tree, &[PoliteForms, PastNegative]),
        w("探しませんでした", "さがしませんでした", "sagashimasen deshita")
    );
    assert_eq!(
        form(&tree, &[PoliteForms, Volitional]),
        w("探しましょう", "さがしましょう", "sagashimasho")
    );
    assert_eq!(
        form(&tree, &[NegativePlainForms, Present]),
        w("探さない", "さがさない", "sagasanai")
    );
    assert_eq!(form(&tree, &[Prohibitive]), w("探すな", "さがすな", "sagasu na"));
    assert_eq!(
        form(&tree, &[PlainPresentPotential]),
        w("探せる", "さがせる", "sagaseru")
    );
    assert_eq!(form(&tree, &[Conditional]), w("探せば", "さがせば", "sagaseba"));
    assert_eq!(form(&tree, &[Imperative]), w("探せ", "さがせ", "sagase"));
    assert_eq!(form(&tree, &[Volitional]), w("探そう", "さがそう", "sagaso"));
    assert_eq!(
        form(&tree, &[PassiveDictionaryForm]),
        w("探される", "さがされる", "sagasareru")
    );
    assert_eq!(
        form(&tree, &[CausativeDictionaryForm]),
        w("探させる", "さがさせる", "sagasaseru")
    );
    assert_eq!(
        form(&tree, &[CausativePassiveDictionaryForm]),
        w("探される", "さがされる", "sagasareru")
    );
}

#[test]
fn godan_onbin() {
    let cases = [
        ("書く", "かく", PartOfSpeech::VerbGodanK, "書いて", "かいて", "kaite"),
        ("泳ぐ", "およぐ", PartOfSpeech::VerbGodanG, "泳いで", "およいで", "oyoide"),
        ("飲む", "のむ", PartOfSpeech::VerbGodanM, "飲んで", "のんで", "nonde"),
        ("死ぬ", "しぬ", PartOfSpeech::VerbGodanN, "死んで", "しんで", "shinde"),
        ("遊ぶ", "あそぶ", PartOfSpeech::VerbGodanB, "遊んで", "あそんで", "asonde"),
        ("待つ", "まつ", PartOfSpeech::VerbGodanT, "待って", "まって", "matte"),
        ("買う", "かう", PartOfSpeech::VerbGodanU, "買って", "かって", "katte"),
        ("帰る", "かえる", PartOfSpeech::VerbGodanR, "帰って", "かえって", "kaette"),
        ("行く", "いく", PartOfSpeech::VerbGodanKS, "行って", "いって", "itte"),
        ("問う", "とう", PartOfSpeech::VerbGodanUS, "問うて", "とうて", "toute"),
    ];

    for (text, kana, pos, te_text, te_kana, te_romaji) in cases {
        let tree = conjugate(text, kana, pos);
        assert_eq!(
            form(&tree, &[TeForm]),
            w(te_text, te_kana, te_romaji),
            "te-form of {text}"
        );
    }
}

#[test]
fn godan_tsu_and_u() {
    let tree = conjugate("待つ", "まつ", PartOfSpeech::VerbGodanT);
    assert_eq!(form(&tree, &[Stem]), w("待ち", "まち", "machi"));
    assert_eq!(form(&tree, &[NegativeStem]), w("待た", "また", "mata"));
    assert_eq!(form(&tree, &[PlainPresentPotential]), w("待てる", "まてる", "materu"));

    let tree = conjugate("買う", "かう", PartOfSpeech::VerbGodanU);
    assert_eq!(form(&tree, &[Stem]), w("買い", "かい", "kai"));
    assert_eq!(form(&tree, &[NegativeStem]), w("買わ", "かわ", "kawa"));
    assert_eq!(form(&tree, &[Volitional]), w("買おう", "かおう", "kao"));
}

#[test]
fn ichidan() {
    let tree = conjugate("食べる", "たべる", PartOfSpeech::VerbIchidan);

    assert_eq!(form(&tree, &[Stem]), w("食べ", "たべ", "tabe"));
    assert_eq!(form(&tree, &[NegativeStem]), w("食べ", "たべ", "tabe"));
    assert_eq!(form(&tree, &[TeForm]), w("食べて", "たべて", "tabete"));
    assert_eq!(form(&tree, &[Imperative]), w("食べろ", "たべろ", "tabero"));
    assert_eq!(form(&tree, &[Volitional]), w("食べよう", "たべよう", "tabeyo"));
    assert_eq!(
        form(&tree, &[PlainPresentPotential]),
        w("食べられる", "たべられる", "taberareru")
    );
    assert_eq!(
        form(&tree, &[CausativePassiveDictionaryForm]),
        w("食べさせられる", "たべさせられる", "tabesaserareru")
    );
}

#[test]
fn kuru() {
    let tree = conjugate("来る", "くる", PartOfSpeech::VerbKuru);

    assert_eq!(form(&tree, &[Stem]), w("来", "き", "ki"));
    assert_eq!(form(&tree, &[Base]), w("来", "く", "ku"));
    assert_eq!(form(&tree, &[PoliteForms, Present]), w("来ます", "きます", "kimasu"));
    assert_eq!(form(&tree, &[NegativePlainForms, Present]), w("来ない", "こない", "konai"));
    assert_eq!(form(&tree, &[TeForm]), w("来て", "きて", "kite"));
    assert_eq!(form(&tree, &[Imperative]), w("来い", "こい", "koi"));
    assert_eq!(form(&tree, &[Conditional]), w("来れば", "くれば", "kureba"));
    assert_eq!(
        form(&tree, &[PlainPresentPotential]),
        w("来られる", "こられる", "korareru")
    );
    assert_eq!(
        form(&tree, &[CausativeDictionaryForm]),
        w("来させる", "こさせる", "kosaseru")
    );
    assert_eq!(
        form(&tree, &[CausativePassiveDictionaryForm]),
        w("来させられる", "こさせられる", "kosaserareru")
    );

    let tree = conjugate("くる", "くる", PartOfSpeech::VerbKuru);
    assert_eq!(form(&tree, &[TeForm]), w("きて", "きて", "kite"));
    assert_eq!(form(&tree, &[PassiveDictionaryForm]), w("こられる", "こられる", "korareru"));
}

#[test]
fn suru_compound() {
    let tree = conjugate("勉強する", "べんきょうする", PartOfSpeech::VerbSuru);

    assert_eq!(
        form(&tree, &[PoliteForms, Present]),
        w("勉強します", "べんきょうします", "benkyoushimasu")
    );
    assert_eq!(
        form(&tree, &[PlainPresentPotential]),
        w("勉強できる", "べんきょうできる", "benkyoudekiru")
    );
    assert_eq!(
        form(&tree, &[PassiveDictionaryForm]),
        w("勉強される", "べんきょうされる", "benkyousareru")
    );
}

#[test]
fn aru() {
    let tree = conjugate("ある", "ある", PartOfSpeech::VerbAru);

    assert_eq!(form(&tree, &[NegativeStem]), w("", "", ""));
    assert_eq!(form(&tree, &[NegativePlainForms, Present]), w("ない", "ない", "nai"));
    assert_eq!(form(&tree, &[NegativePlainForms, Past]), w("なかった", "なかった", "nakatta"));
    assert_eq!(form(&tree, &[TeForm]), w("あって", "あって", "atte"));
    assert_eq!(form(&tree, &[PoliteForms, Present]), w("あります", "あります", "arimasu"));
    assert_eq!(tree.lookup(&[PlainPresentPotential]), Some(&Node::Unavailable));
    assert_eq!(tree.lookup(&[Prohibitive]), Some(&Node::Unavailable));
    assert!(tree.get(PassiveDictionaryForm).is_none());
    assert!(tree.get(CausativeForms).is_none());
    assert!(tree.get(CausativePassiveForms).is_none());
}

#[test]
fn irregular_godan() {
    let tree = conjugate("いらっしゃる", "いらっしゃる", PartOfSpeech::VerbGodanRI);

    assert_eq!(
        form(&tree, &[PoliteForms, Present]),
        w("いらっしゃいます", "いらっしゃいます", "irasshaimasu")
    );
    assert_eq!(
        form(&tree, &[NegativePlainForms, Present]),
        w("いらっしゃらない", "いらっしゃらない", "irassharanai")
    );
    assert_eq!(tree.lookup(&[Volitional]), Some(&Node::Unavailable));
    assert_eq!(tree.lookup(&[PoliteForms, Volitional]), Some(&Node::Unavailable));
    assert_eq!(tree.lookup(&[Imperative]), Some(&Node::Unavailable));
    assert_eq!(tree.lookup(&[Prohibitive]), Some(&Node::Unavailable));
    assert!(tree.get(PassiveForms).is_some());

    let tree = conjugate("問う", "とう", PartOfSpeech::VerbGodanUS);
    assert_eq!(tree.lookup(&[Imperative]), Some(&Node::Unavailable));
    assert_eq!(tree.lookup(&[Volitional]), Some(&Node::Unavailable));
}

#[test]
fn voice_keys() {
    let tree = conjugate("探す", "さがす", PartOfSpeech::VerbGodanS);

    let expected = [
        Stem,
        TeForm,
        TaForm,
        PoliteForms,
        NegativePlainForms,
        ContinuousForms,
        Conditional,
    ];

    for voice in [PassiveForms, CausativeForms, CausativePassiveForms] {
        let Some(Node::Branch(forms)) = tree.get(voice) else {
            panic!("missing {voice}");
        };

        assert_eq!(forms.keys().collect::<Vec<_>>(), expected);

        let Some(Node::Branch(polite)) = forms.get(PoliteForms) else {
            panic!("missing polite forms in {voice}");
        };

        assert_eq!(
            polite.keys().collect::<Vec<_>>(),
            [Present, Past, PresentNegative, PastNegative, TeForm]
        );
    }

    assert_eq!(
        form(&tree, &[PassiveForms, PoliteForms, Present]),
        w("探されます", "さがされます", "sagasaremasu")
    );
    assert_eq!(
        form(&tree, &[PassiveForms, Conditional]),
        w("探されれば", "さがされれば", "sagasarereba")
    );
}

#[test]
fn lemma_keys() {
    let tree = conjugate("書く", "かく", PartOfSpeech::VerbGodanK);

    assert_eq!(
        tree.keys().collect::<Vec<_>>(),
        [
            Stem,
            NegativeStem,
            Base,
            TeForm,
            TaForm,
            PoliteForms,
            NegativePlainForms,
            ContinuousForms,
            Prohibitive,
            PlainPresentPotential,
            Conditional,
            Imperative,
            Volitional,
            PassiveDictionaryForm,
            PassiveForms,
            CausativeDictionaryForm,
            CausativeForms,
            CausativePassiveDictionaryForm,
            CausativePassiveForms,
        ]
    );
}

#[test]
fn invalid_lemma() {
    let lemma = Word::new("探す", "さがす", "sagasu");
    let meta = ClassMeta::of(PartOfSpeech::VerbGodanK);
    let verb = meta.verb().expect("not a verb");

    let error = super::conjugate(&lemma, &meta, verb).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::InvalidLemma { .. }));

    let lemma = Word::new("る", "る", "ru");
    let meta = ClassMeta::of(PartOfSpeech::VerbIchidan);
    let verb = meta.verb().expect("not a verb");

    let error = super::conjugate(&lemma, &meta, verb).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::InvalidLemma { .. }));
}
