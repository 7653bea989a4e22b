//! Fixed endings shared by every verb class.

use crate::kana::Morpheme;
use crate::tree::Category;

/// Endings attached to the stem to form polite conjugations.
pub(crate) static POLITE: [(Category, Morpheme); 6] = [
    (Category::Present, Morpheme::new("ます", "masu")),
    (Category::Past, Morpheme::new("ました", "mashita")),
    (Category::PresentNegative, Morpheme::new("ません", "masen")),
    (
        Category::PastNegative,
        Morpheme::new("ませんでした", "masen deshita"),
    ),
    (Category::Volitional, Morpheme::new("ましょう", "masho")),
    (Category::TeForm, Morpheme::new("まして", "mashite")),
];

/// Endings attached to the negative stem to form plain negative conjugations.
pub(crate) static NEGATIVE: [(Category, Morpheme); 3] = [
    (Category::Present, Morpheme::new("ない", "nai")),
    (Category::Past, Morpheme::new("なかった", "nakatta")),
    (Category::TeForm, Morpheme::new("なくて", "nakute")),
];

/// Endings attached to the te-form to form continuous conjugations.
///
/// The written variants are separated by a space in romaji.
pub(crate) static CONTINUOUS: [(Category, Morpheme); 14] = [
    (Category::PresentSpoken, Morpheme::new("る", "ru")),
    (Category::PresentWritten, Morpheme::new("いる", " iru")),
    (Category::PresentFormal, Morpheme::new("います", " imasu")),
    (Category::PresentFormalSpoken, Morpheme::new("ます", "masu")),
    (Category::PastSpoken, Morpheme::new("た", "ta")),
    (Category::PastWritten, Morpheme::new("いた", " ita")),
    (Category::PastFormal, Morpheme::new("いました", " imashita")),
    (Category::PastFormalSpoken, Morpheme::new("ました", "mashita")),
    (Category::TeFormSpoken, Morpheme::new("て", "te")),
    (Category::TeFormWritten, Morpheme::new("いて", " ite")),
    (Category::TeFormFormal, Morpheme::new("いまして", " imashite")),
    (Category::TeFormFormalSpoken, Morpheme::new("まして", "mashite")),
    (Category::NegativeTeFormSpoken, Morpheme::new("なくて", "nakute")),
    (
        Category::NegativeTeFormWritten,
        Morpheme::new("いなくて", " inakute"),
    ),
];

/// Prohibitive ending attached to the dictionary form.
pub(crate) const PROHIBITIVE: Morpheme = Morpheme::new("な", " na");

/// Endings attached to the adverbial form of an adjective.
pub(crate) static NEGATIVE_ADJECTIVE: [(Category, Morpheme); 8] = [
    (Category::Present, Morpheme::new("ない", " nai")),
    (Category::PresentPolite, Morpheme::new("ありません", " arimasen")),
    (Category::Past, Morpheme::new("なかった", " nakatta")),
    (
        Category::PastPolite,
        Morpheme::new("ありませんでした", " arimasen deshita"),
    ),
    (Category::TeForm, Morpheme::new("なくて", " nakute")),
    (
        Category::PresentHonorific,
        Morpheme::new("ございません", " gozaimasen"),
    ),
    (
        Category::PastHonorific,
        Morpheme::new("ございませんでした", " gozaimasen deshita"),
    ),
    (
        Category::TeFormHonorific,
        Morpheme::new("ございませんでして", " gozaimasen deshite"),
    ),
];

/// The conjugations of the copula.
pub(crate) static COPULA: [(Category, Morpheme); 17] = [
    (Category::Present, Morpheme::new("だ", "da")),
    (Category::PresentPolite, Morpheme::new("です", "desu")),
    (Category::PresentFormal, Morpheme::new("である", "de aru")),
    (
        Category::PresentHonorific,
        Morpheme::new("でございます", "de gozaimasu"),
    ),
    (Category::Past, Morpheme::new("だった", "datta")),
    (Category::PastPolite, Morpheme::new("でした", "deshita")),
    (Category::PastFormal, Morpheme::new("であった", "de atta")),
    (
        Category::PastHonorific,
        Morpheme::new("でございました", "de gozaimashita"),
    ),
    (Category::Volitional, Morpheme::new("だろう", "daro")),
    (Category::VolitionalPolite, Morpheme::new("でしょう", "desho")),
    (Category::VolitionalFormal, Morpheme::new("であろう", "de aro")),
    (
        Category::VolitionalHonorific,
        Morpheme::new("でございましょう", "de gozaimasho"),
    ),
    (Category::TeForm, Morpheme::new("で", "de")),
    (Category::TeFormPolite, Morpheme::new("でして", "deshite")),
    (Category::TeFormFormal, Morpheme::new("であって", "de atte")),
    (
        Category::TeFormHonorific,
        Morpheme::new("でございまして", "de gozaimashite"),
    ),
    (Category::ContinuousFormal, Morpheme::new("であり", "de ari")),
];
