use super::{analyze, romanize};

#[test]
fn segmentations() {
    assert_eq!(
        analyze("ひゃくりょく").collect::<Vec<_>>(),
        ["ひゃ", "く", "りょ", "く"]
    );

    assert_eq!(analyze("がっこう").collect::<Vec<_>>(), ["が", "っ", "こ", "う"]);
    assert_eq!(analyze("ティー").collect::<Vec<_>>(), ["ティ", "ー"]);
}

#[test]
fn segment_romanization() {
    assert_eq!(
        analyze("きょうと")
            .map(|segment| segment.romanize())
            .collect::<Vec<_>>(),
        ["kyo", "u", "to"]
    );

    assert_eq!(
        analyze("漢字").map(|segment| segment.romanize()).collect::<Vec<_>>(),
        ["漢", "字"]
    );
}

#[test]
fn dictionary_forms() {
    assert_eq!(romanize("さがす"), "sagasu");
    assert_eq!(romanize("まつ"), "matsu");
    assert_eq!(romanize("かう"), "kau");
    assert_eq!(romanize("する"), "suru");
    assert_eq!(romanize("くる"), "kuru");
    assert_eq!(romanize("いらっしゃる"), "irassharu");
    assert_eq!(romanize("たかい"), "takai");
}

#[test]
fn sokuon() {
    assert_eq!(romanize("まって"), "matte");
    assert_eq!(romanize("まっちゃ"), "matcha");
    assert_eq!(romanize("いっしょ"), "issho");
}

#[test]
fn syllabic_n() {
    assert_eq!(romanize("しんぶん"), "shinbun");
    assert_eq!(romanize("きんえん"), "kin'en");
    assert_eq!(romanize("こんや"), "kon'ya");
}

#[test]
fn katakana() {
    assert_eq!(romanize("カタカナ"), "katakana");
    assert_eq!(romanize("コーヒー"), "koohii");
    assert_eq!(romanize("パーティー"), "paatii");
}
