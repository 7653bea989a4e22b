use crate::kana::Morpheme;

/// Okurigana rows of a godan verb class.
#[derive(Debug, Clone, Copy)]
pub(super) struct Godan {
    pub(super) ending: &'static str,
    pub(super) romaji: &'static str,
    pub(super) a: Morpheme,
    pub(super) i: Morpheme,
    pub(super) e: Morpheme,
    // Volitional row, the long vowel is not written in romaji.
    pub(super) o: Morpheme,
    pub(super) te: Morpheme,
    pub(super) ta: Morpheme,
    pub(super) conditional: Morpheme,
    pub(super) potential: Morpheme,
}

impl Godan {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        (ending, romaji): (&'static str, &'static str),
        a: Morpheme,
        i: Morpheme,
        e: Morpheme,
        o: Morpheme,
        te: Morpheme,
        ta: Morpheme,
        conditional: Morpheme,
        potential: Morpheme,
    ) -> Self {
        Self {
            ending,
            romaji,
            a,
            i,
            e,
            o,
            te,
            ta,
            conditional,
            potential,
        }
    }

    /// Replace the te and ta rows.
    const fn with_te(self, te: Morpheme, ta: Morpheme) -> Self {
        Self { te, ta, ..self }
    }
}

const fn m(kana: &'static str, romaji: &'static str) -> Morpheme {
    Morpheme::new(kana, romaji)
}

/// The U godan table.
pub(super) const U: Godan = Godan::new(
    ("う", "u"),
    m("わ", "wa"),
    m("い", "i"),
    m("え", "e"),
    m("おう", "o"),
    m("って", "tte"),
    m("った", "tta"),
    m("えば", "eba"),
    m("える", "eru"),
);
/// The TSU godan table.
pub(super) const TSU: Godan = Godan::new(
    ("つ", "tsu"),
    m("た", "ta"),
    m("ち", "chi"),
    m("て", "te"),
    m("とう", "to"),
    m("って", "tte"),
    m("った", "tta"),
    m("てば", "teba"),
    m("てる", "teru"),
);
/// The RU godan table.
pub(super) const RU: Godan = Godan::new(
    ("る", "ru"),
    m("ら", "ra"),
    m("り", "ri"),
    m("れ", "re"),
    m("ろう", "ro"),
    m("って", "tte"),
    m("った", "tta"),
    m("れば", "reba"),
    m("れる", "reru"),
);
/// The KU godan table.
pub(super) const KU: Godan = Godan::new(
    ("く", "ku"),
    m("か", "ka"),
    m("き", "ki"),
    m("け", "ke"),
    m("こう", "ko"),
    m("いて", "ite"),
    m("いた", "ita"),
    m("けば", "keba"),
    m("ける", "keru"),
);
/// The GU godan table.
pub(super) const GU: Godan = Godan::new(
    ("ぐ", "gu"),
    m("が", "ga"),
    m("ぎ", "gi"),
    m("げ", "ge"),
    m("ごう", "go"),
    m("いで", "ide"),
    m("いだ", "ida"),
    m("げば", "geba"),
    m("げる", "geru"),
);
/// The MU godan table.
pub(super) const MU: Godan = Godan::new(
    ("む", "mu"),
    m("ま", "ma"),
    m("み", "mi"),
    m("め", "me"),
    m("もう", "mo"),
    m("んで", "nde"),
    m("んだ", "nda"),
    m("めば", "meba"),
    m("める", "meru"),
);
/// The BU godan table.
pub(super) const BU: Godan = Godan::new(
    ("ぶ", "bu"),
    m("ば", "ba"),
    m("び", "bi"),
    m("べ", "be"),
    m("ぼう", "bo"),
    m("んで", "nde"),
    m("んだ", "nda"),
    m("べば", "beba"),
    m("べる", "beru"),
);
/// The NU godan table.
pub(super) const NU: Godan = Godan::new(
    ("ぬ", "nu"),
    m("な", "na"),
    m("に", "ni"),
    m("ね", "ne"),
    m("のう", "no"),
    m("んで", "nde"),
    m("んだ", "nda"),
    m("ねば", "neba"),
    m("ねる", "neru"),
);
/// The SU godan table.
pub(super) const SU: Godan = Godan::new(
    ("す", "su"),
    m("さ", "sa"),
    m("し", "shi"),
    m("せ", "se"),
    m("そう", "so"),
    m("して", "shite"),
    m("した", "shita"),
    m("せば", "seba"),
    m("せる", "seru"),
);
/// The IKU/YUKU godan table.
pub(super) const IKU: Godan = KU.with_te(m("って", "tte"), m("った", "tta"));
/// The TOU/KOU godan table.
pub(super) const TOU: Godan = U.with_te(m("うて", "ute"), m("うた", "uta"));
