//! Hepburn romanization of kana.

#[cfg(test)]
mod tests;

/// Small kana which combine with the preceding kana.
macro_rules! small {
    () => {
        ('ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'ゃ' | 'ゅ' | 'ょ' | 'ゎ')
    };
}

/// Normalize katakana into the corresponding hiragana.
fn hiragana(c: char) -> char {
    match c {
        'ァ'..='ヶ' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        c => c,
    }
}

/// Perform an analysis.
pub fn analyze(input: &str) -> Analysis<'_> {
    Analysis { input }
}

/// A string being analyzed.
pub struct Analysis<'a> {
    input: &'a str,
}

impl<'a> Iterator for Analysis<'a> {
    type Item = Segment<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let mut it = self.input.chars();
        let a = it.next()?;
        let n = match it.next().map(hiragana) {
            Some(b @ small!()) if pair(hiragana(a), b).is_some() => a.len_utf8() + b.len_utf8(),
            _ => a.len_utf8(),
        };

        let (string, tail) = self.input.split_at(n);
        self.input = tail;
        Some(Segment { string })
    }
}

/// A section that can be romanized as a unit.
#[derive(Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    string: &'a str,
}

impl<'a> Segment<'a> {
    /// The string of the segment.
    pub fn as_str(&self) -> &'a str {
        self.string
    }

    /// Romanize the segment in isolation.
    ///
    /// Segments which are not kana are returned as-is.
    pub fn romanize(&self) -> &'a str {
        let mut it = self.string.chars().map(hiragana);

        let out: Option<&'a str> = match (it.next(), it.next()) {
            (Some(a), Some(b)) => pair(a, b),
            (Some(a), None) => single(a),
            _ => None,
        };

        out.unwrap_or(self.string)
    }

    fn is(&self, c: char) -> bool {
        let mut it = self.string.chars().map(hiragana);
        it.next() == Some(c) && it.next().is_none()
    }
}

impl PartialEq<&str> for Segment<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.string == *other
    }
}

/// Romanize a kana string.
///
/// A small `っ` doubles the following consonant, `ー` repeats the preceding
/// vowel and `ん` is followed by an apostrophe when it would otherwise merge
/// with a following vowel or `y`.
pub fn romanize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut geminate = false;
    let mut nasal = false;

    for segment in analyze(input) {
        if segment.is('っ') {
            geminate = true;
            continue;
        }

        if segment.is('ー') {
            if let Some(vowel) = out.chars().next_back().filter(|c| is_vowel(*c)) {
                out.push(vowel);
            }

            continue;
        }

        let romaji = segment.romanize();

        if nasal && romaji.starts_with(|c: char| is_vowel(c) || c == 'y') {
            out.push('\'');
        }

        if geminate {
            if romaji.starts_with("ch") {
                out.push('t');
            } else if let Some(c) = romaji.chars().next() {
                if c.is_ascii_alphabetic() && !is_vowel(c) {
                    out.push(c);
                }
            }
        }

        out.push_str(romaji);
        geminate = false;
        nasal = segment.is('ん');
    }

    out
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn single(c: char) -> Option<&'static str> {
    let out = match c {
        'あ' | 'ぁ' => "a",
        'い' | 'ぃ' => "i",
        'う' | 'ぅ' => "u",
        'え' | 'ぇ' => "e",
        'お' | 'ぉ' => "o",
        'か' | 'ゕ' => "ka",
        'き' => "ki",
        'く' => "ku",
        'け' | 'ゖ' => "ke",
        'こ' => "ko",
        'が' => "ga",
        'ぎ' => "gi",
        'ぐ' => "gu",
        'げ' => "ge",
        'ご' => "go",
        'さ' => "sa",
        'し' => "shi",
        'す' => "su",
        'せ' => "se",
        'そ' => "so",
        'ざ' => "za",
        'じ' => "ji",
        'ず' => "zu",
        'ぜ' => "ze",
        'ぞ' => "zo",
        'た' => "ta",
        'ち' => "chi",
        'つ' => "tsu",
        'て' => "te",
        'と' => "to",
        'だ' => "da",
        'ぢ' => "ji",
        'づ' => "zu",
        'で' => "de",
        'ど' => "do",
        'な' => "na",
        'に' => "ni",
        'ぬ' => "nu",
        'ね' => "ne",
        'の' => "no",
        'は' => "ha",
        'ひ' => "hi",
        'ふ' => "fu",
        'へ' => "he",
        'ほ' => "ho",
        'ば' => "ba",
        'び' => "bi",
        'ぶ' => "bu",
        'べ' => "be",
        'ぼ' => "bo",
        'ぱ' => "pa",
        'ぴ' => "pi",
        'ぷ' => "pu",
        'ぺ' => "pe",
        'ぽ' => "po",
        'ま' => "ma",
        'み' => "mi",
        'む' => "mu",
        'め' => "me",
        'も' => "mo",
        'や' | 'ゃ' => "ya",
        'ゆ' | 'ゅ' => "yu",
        'よ' | 'ょ' => "yo",
        'ら' => "ra",
        'り' => "ri",
        'る' => "ru",
        'れ' => "re",
        'ろ' => "ro",
        'わ' | 'ゎ' => "wa",
        'ゐ' => "i",
        'ゑ' => "e",
        'を' => "o",
        'ん' => "n",
        'ゔ' => "vu",
        '・' => " ",
        _ => return None,
    };

    Some(out)
}

fn pair(a: char, b: char) -> Option<&'static str> {
    let out = match (a, b) {
        ('き', 'ゃ') => "kya",
        ('き', 'ゅ') => "kyu",
        ('き', 'ょ') => "kyo",
        ('ぎ', 'ゃ') => "gya",
        ('ぎ', 'ゅ') => "gyu",
        ('ぎ', 'ょ') => "gyo",
        ('し', 'ゃ') => "sha",
        ('し', 'ゅ') => "shu",
        ('し', 'ょ') => "sho",
        ('し', 'ぇ') => "she",
        ('じ', 'ゃ') | ('ぢ', 'ゃ') => "ja",
        ('じ', 'ゅ') | ('ぢ', 'ゅ') => "ju",
        ('じ', 'ょ') | ('ぢ', 'ょ') => "jo",
        ('じ', 'ぇ') => "je",
        ('ち', 'ゃ') => "cha",
        ('ち', 'ゅ') => "chu",
        ('ち', 'ょ') => "cho",
        ('ち', 'ぇ') => "che",
        ('に', 'ゃ') => "nya",
        ('に', 'ゅ') => "nyu",
        ('に', 'ょ') => "nyo",
        ('ひ', 'ゃ') => "hya",
        ('ひ', 'ゅ') => "hyu",
        ('ひ', 'ょ') => "hyo",
        ('び', 'ゃ') => "bya",
        ('び', 'ゅ') => "byu",
        ('び', 'ょ') => "byo",
        ('ぴ', 'ゃ') => "pya",
        ('ぴ', 'ゅ') => "pyu",
        ('ぴ', 'ょ') => "pyo",
        ('み', 'ゃ') => "mya",
        ('み', 'ゅ') => "myu",
        ('み', 'ょ') => "myo",
        ('り', 'ゃ') => "rya",
        ('り', 'ゅ') => "ryu",
        ('り', 'ょ') => "ryo",
        ('て', 'ぃ') => "ti",
        ('で', 'ぃ') => "di",
        ('と', 'ぅ') => "tu",
        ('ど', 'ぅ') => "du",
        ('ふ', 'ぁ') => "fa",
        ('ふ', 'ぃ') => "fi",
        ('ふ', 'ぇ') => "fe",
        ('ふ', 'ぉ') => "fo",
        ('う', 'ぃ') => "wi",
        ('う', 'ぇ') => "we",
        ('う', 'ぉ') => "wo",
        ('ゔ', 'ぁ') => "va",
        ('ゔ', 'ぃ') => "vi",
        ('ゔ', 'ぇ') => "ve",
        ('ゔ', 'ぉ') => "vo",
        ('つ', 'ぁ') => "tsa",
        ('つ', 'ぇ') => "tse",
        ('つ', 'ぉ') => "tso",
        _ => return None,
    };

    Some(out)
}
