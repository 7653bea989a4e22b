//! Conjugation tables for Japanese verbs and i-adjectives.
//!
//! A [`Lexeme`] is classified into one of a closed set of classes
//! ([`PartOfSpeech`]) and then passed to [`process`], which derives every
//! conjugated form in mixed kanji and kana, kana, and romaji.
//!
//! ```
//! use conjugator::{process, Category, Lexeme, Script};
//!
//! let lexeme = Lexeme::new("探す", "さがす").with_part_of_speech("v5s", false);
//! let outcome = process(&lexeme)?;
//! let conjugations = outcome.conjugations().unwrap();
//!
//! assert_eq!(
//!     conjugations.get(Script::Text, &[Category::PoliteForms, Category::Present]),
//!     Some("探します")
//! );
//! # Ok::<_, conjugator::Error>(())
//! ```

pub mod adjective;

pub mod class;
pub use self::class::{ClassMeta, Feature};

mod concat;

mod conjugate;
pub use self::conjugate::{process, Conjugations, Outcome, Skip};

pub mod config;
pub use self::config::Config;

mod entities;
pub use self::entities::PartOfSpeech;

mod error;
pub use self::error::{Error, ErrorKind};

mod kana;
pub use self::kana::{Morpheme, Script, Word};

mod lexeme;
pub use self::lexeme::{Classification, Classifier, Lexeme};

pub mod romaji;

mod stem;

mod suffix;

mod tree;
pub use self::tree::{Category, ConjugationTree, Node, Tree, UNAVAILABLE};

mod verb;
