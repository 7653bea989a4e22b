use fixed_map::Key;
use serde::{Deserialize, Serialize};

macro_rules! entity {
    (
        $test:ident,

        $(#[$($meta:meta)*])*
        $vis:vis enum $name:ident {
            $(<$variant:ident $entity:literal $doc:literal>)*
        }
    ) => {
        $(#[$($meta)*])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key, Serialize, Deserialize)]
        #[key(bitset)]
        #[non_exhaustive]
        $vis enum $name {
            $(
                #[doc = $doc]
                #[serde(rename = $entity)]
                $variant,
            )*
        }

        impl $name {
            $vis const VALUES: &'static [$name] = &[
                $($name::$variant,)*
            ];

            /// Name of the variant.
            $vis fn variant(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)*
                }
            }

            /// The keyword used to tag the class, like `v5k`.
            $vis fn ident(&self) -> &'static str {
                match self {
                    $($name::$variant => $entity,)*
                }
            }

            /// Human readable description of the class.
            $vis fn help(&self) -> &'static str {
                match self {
                    $($name::$variant => $doc,)*
                }
            }

            /// Parse a class keyword.
            $vis fn parse_keyword(string: &str) -> Option<$name> {
                match string {
                    $($entity => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        #[test]
        fn $test() {
            $(
                assert_eq!($name::parse_keyword($entity), Some($name::$variant), "Failed to parse `{}`", $entity);
                assert_eq!($name::$variant.ident(), $entity);
            )*
        }
    }
}

entity! {
    test_part_of_speech,

    /// The closed set of conjugation classes.
    pub enum PartOfSpeech {
        <VerbIchidan "v1" "Ichidan verb">
        <VerbGodanB "v5b" "Godan verb with 'bu' ending">
        <VerbGodanG "v5g" "Godan verb with 'gu' ending">
        <VerbGodanK "v5k" "Godan verb with 'ku' ending">
        <VerbGodanKS "v5k-s" "Godan verb - Iku/Yuku special class">
        <VerbGodanM "v5m" "Godan verb with 'mu' ending">
        <VerbGodanN "v5n" "Godan verb with 'nu' ending">
        <VerbGodanR "v5r" "Godan verb with 'ru' ending">
        <VerbGodanRI "v5r-i" "Godan verb with 'ru' ending (irregular verb)">
        <VerbGodanS "v5s" "Godan verb with 'su' ending">
        <VerbGodanT "v5t" "Godan verb with 'tsu' ending">
        <VerbGodanU "v5u" "Godan verb with 'u' ending">
        <VerbGodanUS "v5u-s" "Godan verb with 'u' ending (special class)">
        <VerbAru "v-aru" "Aru verb - existence of inanimate things">
        <VerbKuru "v-kuru" "Kuru verb - special class">
        <VerbSuru "v-suru" "Suru verb - special class">
        <AdjectiveI "adj-i" "adjective (keiyoushi)">
    }
}
