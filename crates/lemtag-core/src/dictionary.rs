use std::collections::HashMap;
use std::fmt;

/// Coarse part-of-speech tag written into annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoarseTag {
    /// Nouns and pronouns
    S,
    /// Adjectives
    A,
    /// Verbs, infinitives, participles, gerunds
    V,
    /// Adverbs and anything without a sharper class
    Adv,
    /// Prepositions
    Pr,
    /// Conjunctions
    Conj,
}

impl CoarseTag {
    pub fn as_str(self) -> &'static str {
        match self {
            CoarseTag::S => "S",
            CoarseTag::A => "A",
            CoarseTag::V => "V",
            CoarseTag::Adv => "ADV",
            CoarseTag::Pr => "PR",
            CoarseTag::Conj => "CONJ",
        }
    }
}

impl fmt::Display for CoarseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dictionary reading of a surface form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSense {
    pub lemma: String,
    pub tag: CoarseTag,
}

/// Surface form -> readings, in dictionary document order.
///
/// Several lemmas may inflect to the same surface form; every reading is kept
/// in append order and lookup takes the first one.
#[derive(Debug, Default)]
pub struct WordFormTable {
    forms: HashMap<String, Vec<WordSense>>,
}

impl WordFormTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading for a surface form
    pub fn push(&mut self, form: String, sense: WordSense) {
        self.forms.entry(form).or_default().push(sense);
    }

    /// First reading recorded for a surface form
    pub fn first(&self, form: &str) -> Option<&WordSense> {
        self.forms.get(form).and_then(|senses| senses.first())
    }

    /// Every reading recorded for a surface form
    pub fn senses(&self, form: &str) -> &[WordSense] {
        self.forms.get(form).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct surface forms
    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Errors raised while building the word-form table
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sense(lemma: &str, tag: CoarseTag) -> WordSense {
        WordSense {
            lemma: lemma.to_string(),
            tag,
        }
    }

    #[test]
    fn first_reading_wins() {
        let mut table = WordFormTable::new();
        table.push("стали".to_string(), sense("сталь", CoarseTag::S));
        table.push("стали".to_string(), sense("стать", CoarseTag::V));

        let first = table.first("стали").unwrap();
        assert_eq!(first.lemma, "сталь");
        assert_eq!(first.tag, CoarseTag::S);
        assert_eq!(table.senses("стали").len(), 2);
    }

    #[test]
    fn duplicate_readings_are_kept() {
        let mut table = WordFormTable::new();
        table.push("печь".to_string(), sense("печь", CoarseTag::S));
        table.push("печь".to_string(), sense("печь", CoarseTag::S));

        assert_eq!(table.senses("печь").len(), 2);
        assert_eq!(table.form_count(), 1);
    }

    #[test]
    fn missing_form_has_no_readings() {
        let table = WordFormTable::new();
        assert!(table.first("нет").is_none());
        assert!(table.senses("нет").is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn tag_wire_spelling() {
        assert_eq!(CoarseTag::S.to_string(), "S");
        assert_eq!(CoarseTag::Adv.to_string(), "ADV");
        assert_eq!(CoarseTag::Pr.to_string(), "PR");
        assert_eq!(CoarseTag::Conj.to_string(), "CONJ");
    }
}
