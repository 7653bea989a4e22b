//! Conjugation metadata for every supported class.

mod godan;

use fixed_map::{Key, Set};
use serde::{Deserialize, Serialize};

use crate::entities::PartOfSpeech;
use crate::error::{Error, ErrorKind};
use crate::kana::Morpheme;

use self::godan::Godan;

/// Optional features a conjugation class might support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Key, Serialize, Deserialize)]
#[key(bitset)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    Imperative,
    Volitional,
    Potential,
    Prohibitive,
    Passive,
    Causative,
    CausativePassive,
}

impl Feature {
    pub const VALUES: [Feature; 7] = [
        Feature::Imperative,
        Feature::Volitional,
        Feature::Potential,
        Feature::Prohibitive,
        Feature::Passive,
        Feature::Causative,
        Feature::CausativePassive,
    ];

    /// Name of the feature.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Imperative => "imperative",
            Feature::Volitional => "volitional",
            Feature::Potential => "potential",
            Feature::Prohibitive => "prohibitive",
            Feature::Passive => "passive",
            Feature::Causative => "causative",
            Feature::CausativePassive => "causative-passive",
        }
    }
}

/// An irregular root which rows are attached in place of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Root {
    pub(crate) kanji: Option<&'static str>,
    pub(crate) kana: &'static str,
    pub(crate) romaji: &'static str,
}

/// What a voice dictionary form is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    /// The continuative stem.
    Stem,
    /// The negative stem.
    NegativeStem,
    /// The lemma with its irregular root removed.
    Root,
    /// The causative dictionary form with its final mora removed.
    Causative,
}

/// How to build a voice dictionary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Voice {
    pub(crate) source: Source,
    pub(crate) suffix: Morpheme,
}

impl Voice {
    const fn new(source: Source, kana: &'static str, romaji: &'static str) -> Self {
        Self {
            source,
            suffix: Morpheme::new(kana, romaji),
        }
    }
}

/// Rows of a verb class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VerbClass {
    pub(crate) root: Option<Root>,
    pub(crate) stem: Morpheme,
    pub(crate) negative: Morpheme,
    pub(crate) te: Morpheme,
    pub(crate) ta: Morpheme,
    pub(crate) conditional: Morpheme,
    pub(crate) imperative: Option<Morpheme>,
    pub(crate) volitional: Option<Morpheme>,
    pub(crate) potential: Option<Morpheme>,
    pub(crate) prohibitive: bool,
    pub(crate) passive: Option<Voice>,
    pub(crate) causative: Option<Voice>,
    pub(crate) causative_passive: Option<Voice>,
}

impl VerbClass {
    const fn godan(g: Godan) -> Self {
        Self {
            root: None,
            stem: g.i,
            negative: g.a,
            te: g.te,
            ta: g.ta,
            conditional: g.conditional,
            imperative: Some(g.e),
            volitional: Some(g.o),
            potential: Some(g.potential),
            prohibitive: true,
            passive: Some(Voice::new(Source::NegativeStem, "れる", "reru")),
            causative: Some(Voice::new(Source::NegativeStem, "せる", "seru")),
            causative_passive: Some(Voice::new(Source::NegativeStem, "される", "sareru")),
        }
    }
}

/// The family a class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Verb(VerbClass),
    Adjective,
}

/// Conjugation metadata for a single class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassMeta {
    part_of_speech: PartOfSpeech,
    pub(crate) ending: &'static str,
    pub(crate) romaji_ending: &'static str,
    pub(crate) family: Family,
}

impl ClassMeta {
    const fn new(
        part_of_speech: PartOfSpeech,
        ending: &'static str,
        romaji_ending: &'static str,
        family: Family,
    ) -> Self {
        Self {
            part_of_speech,
            ending,
            romaji_ending,
            family,
        }
    }

    const fn godan(part_of_speech: PartOfSpeech, g: Godan) -> Self {
        Self::new(
            part_of_speech,
            g.ending,
            g.romaji,
            Family::Verb(VerbClass::godan(g)),
        )
    }

    /// Get the metadata of the given class.
    pub fn of(part_of_speech: PartOfSpeech) -> Self {
        match part_of_speech {
            PartOfSpeech::VerbIchidan => ICHIDAN,
            PartOfSpeech::VerbGodanB => Self::godan(part_of_speech, godan::BU),
            PartOfSpeech::VerbGodanG => Self::godan(part_of_speech, godan::GU),
            PartOfSpeech::VerbGodanK => Self::godan(part_of_speech, godan::KU),
            PartOfSpeech::VerbGodanKS => Self::godan(part_of_speech, godan::IKU),
            PartOfSpeech::VerbGodanM => Self::godan(part_of_speech, godan::MU),
            PartOfSpeech::VerbGodanN => Self::godan(part_of_speech, godan::NU),
            PartOfSpeech::VerbGodanR => Self::godan(part_of_speech, godan::RU),
            PartOfSpeech::VerbGodanRI => GODAN_RI,
            PartOfSpeech::VerbGodanS => GODAN_S,
            PartOfSpeech::VerbGodanT => Self::godan(part_of_speech, godan::TSU),
            PartOfSpeech::VerbGodanU => Self::godan(part_of_speech, godan::U),
            PartOfSpeech::VerbGodanUS => GODAN_US,
            PartOfSpeech::VerbAru => ARU,
            PartOfSpeech::VerbKuru => KURU,
            PartOfSpeech::VerbSuru => SURU,
            PartOfSpeech::AdjectiveI => ADJECTIVE,
        }
    }

    /// The class this metadata belongs to.
    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.part_of_speech
    }

    /// Kana ending of the dictionary form.
    pub fn ending(&self) -> &'static str {
        self.ending
    }

    /// Romaji ending of the dictionary form.
    pub fn romaji_ending(&self) -> &'static str {
        self.romaji_ending
    }

    pub(crate) fn verb(&self) -> Option<&VerbClass> {
        match &self.family {
            Family::Verb(verb) => Some(verb),
            Family::Adjective => None,
        }
    }

    pub fn has_imperative(&self) -> bool {
        self.verb().map_or(false, |v| v.imperative.is_some())
    }

    pub fn has_volitional(&self) -> bool {
        self.verb().map_or(false, |v| v.volitional.is_some())
    }

    pub fn has_potential(&self) -> bool {
        self.verb().map_or(false, |v| v.potential.is_some())
    }

    pub fn has_prohibitive(&self) -> bool {
        self.verb().map_or(false, |v| v.prohibitive)
    }

    pub fn has_passive(&self) -> bool {
        self.verb().map_or(false, |v| v.passive.is_some())
    }

    pub fn has_causative(&self) -> bool {
        self.verb().map_or(false, |v| v.causative.is_some())
    }

    pub fn has_causative_passive(&self) -> bool {
        self.verb().map_or(false, |v| v.causative_passive.is_some())
    }

    /// The set of optional features supported by this class.
    pub fn features(&self) -> Set<Feature> {
        let mut set = Set::new();

        for feature in Feature::VALUES {
            let enabled = match feature {
                Feature::Imperative => self.has_imperative(),
                Feature::Volitional => self.has_volitional(),
                Feature::Potential => self.has_potential(),
                Feature::Prohibitive => self.has_prohibitive(),
                Feature::Passive => self.has_passive(),
                Feature::Causative => self.has_causative(),
                Feature::CausativePassive => self.has_causative_passive(),
            };

            if enabled {
                set.insert(feature);
            }
        }

        set
    }
}

/// Look up the metadata of a class by its keyword.
pub fn lookup(tag: &str) -> Result<ClassMeta, Error> {
    match PartOfSpeech::parse_keyword(tag) {
        Some(pos) => Ok(ClassMeta::of(pos)),
        None => Err(Error::new(ErrorKind::UnsupportedClass(tag.into()))),
    }
}

const fn m(kana: &'static str, romaji: &'static str) -> Morpheme {
    Morpheme::new(kana, romaji)
}

pub(crate) const ICHIDAN: ClassMeta = ClassMeta::new(
    PartOfSpeech::VerbIchidan,
    "る",
    "ru",
    Family::Verb(VerbClass {
        root: None,
        stem: Morpheme::EMPTY,
        negative: Morpheme::EMPTY,
        te: m("て", "te"),
        ta: m("た", "ta"),
        conditional: m("れば", "reba"),
        imperative: Some(m("ろ", "ro")),
        volitional: Some(m("よう", "yo")),
        potential: Some(m("られる", "rareru")),
        prohibitive: true,
        passive: Some(Voice::new(Source::Stem, "られる", "rareru")),
        causative: Some(Voice::new(Source::Stem, "させる", "saseru")),
        causative_passive: Some(Voice::new(Source::Causative, "られる", "rareru")),
    }),
);

const GODAN_RI: ClassMeta = {
    let g = godan::RU;

    ClassMeta::new(
        PartOfSpeech::VerbGodanRI,
        g.ending,
        g.romaji,
        Family::Verb(VerbClass {
            stem: m("い", "i"),
            imperative: None,
            volitional: None,
            potential: None,
            prohibitive: false,
            ..VerbClass::godan(g)
        }),
    )
};

const GODAN_S: ClassMeta = {
    let g = godan::SU;

    ClassMeta::new(
        PartOfSpeech::VerbGodanS,
        g.ending,
        g.romaji,
        Family::Verb(VerbClass {
            causative_passive: Some(Voice::new(Source::NegativeStem, "れる", "reru")),
            ..VerbClass::godan(g)
        }),
    )
};

const GODAN_US: ClassMeta = {
    let g = godan::TOU;

    ClassMeta::new(
        PartOfSpeech::VerbGodanUS,
        g.ending,
        g.romaji,
        Family::Verb(VerbClass {
            imperative: None,
            volitional: None,
            ..VerbClass::godan(g)
        }),
    )
};

const ARU: ClassMeta = {
    let g = godan::RU;

    ClassMeta::new(
        PartOfSpeech::VerbAru,
        g.ending,
        g.romaji,
        Family::Verb(VerbClass {
            negative: Morpheme::replacing("", ""),
            potential: None,
            prohibitive: false,
            passive: None,
            causative: None,
            causative_passive: None,
            ..VerbClass::godan(g)
        }),
    )
};

const KURU: ClassMeta = ClassMeta::new(
    PartOfSpeech::VerbKuru,
    "る",
    "ru",
    Family::Verb(VerbClass {
        root: Some(Root {
            kanji: Some("来る"),
            kana: "くる",
            romaji: "kuru",
        }),
        stem: Morpheme::irregular("来", "き", "ki"),
        negative: Morpheme::irregular("来", "こ", "ko"),
        te: Morpheme::irregular("来て", "きて", "kite"),
        ta: Morpheme::irregular("来た", "きた", "kita"),
        conditional: Morpheme::irregular("来れば", "くれば", "kureba"),
        imperative: Some(Morpheme::irregular("来い", "こい", "koi")),
        volitional: Some(Morpheme::irregular("来よう", "こよう", "koyo")),
        potential: Some(Morpheme::irregular("来られる", "こられる", "korareru")),
        prohibitive: true,
        passive: Some(Voice {
            source: Source::Root,
            suffix: Morpheme::irregular("来られる", "こられる", "korareru"),
        }),
        causative: Some(Voice {
            source: Source::Root,
            suffix: Morpheme::irregular("来させる", "こさせる", "kosaseru"),
        }),
        causative_passive: Some(Voice::new(Source::Causative, "られる", "rareru")),
    }),
);

const SURU: ClassMeta = ClassMeta::new(
    PartOfSpeech::VerbSuru,
    "る",
    "ru",
    Family::Verb(VerbClass {
        root: Some(Root {
            kanji: None,
            kana: "する",
            romaji: "suru",
        }),
        stem: m("し", "shi"),
        negative: m("し", "shi"),
        te: m("して", "shite"),
        ta: m("した", "shita"),
        conditional: m("すれば", "sureba"),
        imperative: Some(m("しろ", "shiro")),
        volitional: Some(m("しよう", "shiyo")),
        potential: Some(m("できる", "dekiru")),
        prohibitive: true,
        passive: Some(Voice::new(Source::Root, "される", "sareru")),
        causative: Some(Voice::new(Source::Root, "させる", "saseru")),
        causative_passive: Some(Voice::new(Source::Causative, "られる", "rareru")),
    }),
);

const ADJECTIVE: ClassMeta = ClassMeta::new(PartOfSpeech::AdjectiveI, "い", "i", Family::Adjective);
