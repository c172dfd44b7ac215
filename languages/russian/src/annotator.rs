use std::collections::HashSet;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use lemtag_core::dictionary::{CoarseTag, LoadError, WordFormTable};
use lemtag_core::language::{Annotation, LanguageAnnotator, Token};

use crate::opencorpora::OpenCorporaLoader;

/// Coordinating conjunctions and particles annotated without a lookup
const CONJUNCTIONS: [&str; 15] = [
    "а", "но", "да", "зато", "однако", "и", "также", "тоже", "или", "либо", "то", "ли", "же",
    "притом", "причём",
];

/// Simple prepositions annotated without a lookup
const PREPOSITIONS: [&str; 19] = [
    "без", "в", "для", "за", "из", "к", "на", "над", "о", "об", "от", "по", "под", "пред", "при",
    "про", "с", "у", "через",
];

/// Russian lemma annotator backed by an OpenCorpora word-form table
pub struct RussianAnnotator {
    table: WordFormTable,
    conjunctions: HashSet<&'static str>,
    prepositions: HashSet<&'static str>,
}

impl RussianAnnotator {
    pub fn new(table: WordFormTable) -> Self {
        Self {
            table,
            conjunctions: CONJUNCTIONS.into_iter().collect(),
            prepositions: PREPOSITIONS.into_iter().collect(),
        }
    }

    /// Build an annotator straight from an OpenCorpora dictionary file
    pub fn from_dictionary_file(path: &Path) -> Result<Self, LoadError> {
        Ok(Self::new(OpenCorporaLoader::load_from_file(path)?))
    }

    pub fn table(&self) -> &WordFormTable {
        &self.table
    }
}

impl LanguageAnnotator for RussianAnnotator {
    fn language_code(&self) -> &str {
        "ru"
    }

    /// NFC pass, then every character outside the kept set becomes a space.
    ///
    /// Kept set: а-я, ё, А-Я and Latin Ë (U+00CB). Uppercase Cyrillic Ё falls
    /// outside the set and is replaced like punctuation.
    fn normalize(&self, text: &str) -> String {
        text.nfc()
            .map(|c| if is_kept_letter(c) { c } else { ' ' })
            .collect()
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect()
    }

    fn lookup(&self, token: &Token) -> Annotation {
        let word = token.normalized.as_str();

        if self.conjunctions.contains(word) {
            return Annotation {
                lemma: word.to_string(),
                tag: CoarseTag::Conj,
            };
        }
        if self.prepositions.contains(word) {
            return Annotation {
                lemma: word.to_string(),
                tag: CoarseTag::Pr,
            };
        }
        if let Some(sense) = self.table.first(word) {
            return Annotation {
                lemma: sense.lemma.clone(),
                tag: sense.tag,
            };
        }

        Annotation {
            lemma: word.to_string(),
            tag: CoarseTag::Adv,
        }
    }
}

fn is_kept_letter(c: char) -> bool {
    matches!(c, 'а'..='я' | 'ё' | 'А'..='Я' | 'Ë')
}
