use crate::dictionary::CoarseTag;

/// Normalization, tokenization and lemma lookup for one language
pub trait LanguageAnnotator: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ru", "uk", etc.)
    fn language_code(&self) -> &str;

    /// Normalize raw text ahead of tokenization
    fn normalize(&self, text: &str) -> String;

    /// Break normalized text into tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Resolve one token to its lemma and coarse tag
    fn lookup(&self, token: &Token) -> Annotation;

    /// Annotate one line of text as `word{lemma=TAG}` per kept token.
    ///
    /// Tokens that are not purely alphabetic are dropped from the output, not
    /// merely left untagged. A line with nothing to keep comes back empty.
    fn annotate_line(&self, line: &str) -> String {
        let normalized = self.normalize(line);
        let tokens = self.tokenize(&normalized);

        let mut annotated = Vec::with_capacity(tokens.len());
        for token in &tokens {
            if !token.is_alphabetic() {
                continue;
            }
            let Annotation { lemma, tag } = self.lookup(token);
            annotated.push(format!("{}{{{}={}}}", token.surface, lemma, tag));
        }

        annotated.join(" ")
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    pub position: usize,
}

impl Token {
    pub fn new(surface: &str, position: usize) -> Self {
        Self {
            surface: surface.to_string(),
            normalized: surface.to_lowercase(),
            position,
        }
    }

    pub fn is_alphabetic(&self) -> bool {
        !self.surface.is_empty() && self.surface.chars().all(char::is_alphabetic)
    }
}

/// Lemma and coarse tag chosen for one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub lemma: String,
    pub tag: CoarseTag,
}
