use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use lemtag_core::dictionary::{CoarseTag, LoadError, WordFormTable, WordSense};

use crate::tags;

// Serde view of the OpenCorpora dictionary XML. Only the elements the
// word-form table needs are modeled; the deserializer skips the other
// document sections (grammemes, restrictions, link_types).
#[derive(Debug, Deserialize)]
struct DictionaryDoc {
    lemmata: Lemmata,
    #[serde(default)]
    links: Links,
}

#[derive(Debug, Deserialize)]
struct Lemmata {
    #[serde(default, rename = "lemma")]
    lemmas: Vec<LemmaElem>,
}

#[derive(Debug, Deserialize)]
struct LemmaElem {
    #[serde(rename = "@id")]
    id: u64,
    l: Headword,
    #[serde(default, rename = "f")]
    forms: Vec<WordForm>,
}

#[derive(Debug, Deserialize)]
struct Headword {
    #[serde(rename = "@t")]
    text: String,
    #[serde(default, rename = "g")]
    grammemes: Vec<Grammeme>,
}

#[derive(Debug, Deserialize)]
struct Grammeme {
    #[serde(rename = "@v")]
    value: String,
}

#[derive(Debug, Deserialize)]
struct WordForm {
    #[serde(rename = "@t")]
    text: String,
}

#[derive(Debug, Default, Deserialize)]
struct Links {
    #[serde(default, rename = "link")]
    links: Vec<LinkElem>,
}

#[derive(Debug, Deserialize)]
struct LinkElem {
    #[serde(rename = "@from")]
    from: u64,
    #[serde(rename = "@to")]
    to: u64,
}

/// Builds the word-form table from an OpenCorpora morphology dictionary
pub struct OpenCorporaLoader;

impl OpenCorporaLoader {
    /// Load and resolve the dictionary at `path`
    pub fn load_from_file(path: &Path) -> Result<WordFormTable, LoadError> {
        tracing::info!("parsing morphology dictionary: {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let doc: DictionaryDoc =
            quick_xml::de::from_reader(reader).map_err(|e| LoadError::Parse(e.to_string()))?;
        let table = build_table(&doc)?;
        tracing::info!("word-form table ready: {} surface forms", table.form_count());
        Ok(table)
    }

    /// Load a dictionary from an in-memory XML document
    pub fn load_from_str(xml: &str) -> Result<WordFormTable, LoadError> {
        let doc: DictionaryDoc =
            quick_xml::de::from_str(xml).map_err(|e| LoadError::Parse(e.to_string()))?;
        build_table(&doc)
    }
}

fn build_table(doc: &DictionaryDoc) -> Result<WordFormTable, LoadError> {
    let headwords: HashMap<u64, &str> = doc
        .lemmata
        .lemmas
        .iter()
        .map(|lemma| (lemma.id, lemma.l.text.as_str()))
        .collect();

    // A link points from a base lemma to a derived one (infinitive to
    // participle, full adjective to short form); the derived headword resolves
    // to the base headword. Later links overwrite earlier ones for the same
    // target.
    let mut full_lemmas: HashMap<&str, &str> = HashMap::new();
    for link in &doc.links.links {
        let from = resolve(&headwords, link.from)?;
        let to = resolve(&headwords, link.to)?;
        full_lemmas.insert(to, from);
    }

    let mut table = WordFormTable::new();
    for lemma in &doc.lemmata.lemmas {
        let tag = tags::select_tag(lemma.l.grammemes.iter().map(|g| g.value.as_str()));

        let mut text = lemma.l.text.as_str();
        if matches!(tag, CoarseTag::V | CoarseTag::A) {
            if let Some(full) = full_lemmas.get(text) {
                text = full;
            }
        }

        for form in &lemma.forms {
            table.push(
                form.text.clone(),
                WordSense {
                    lemma: text.to_string(),
                    tag,
                },
            );
        }
    }

    Ok(table)
}

fn resolve<'a>(headwords: &HashMap<u64, &'a str>, id: u64) -> Result<&'a str, LoadError> {
    headwords
        .get(&id)
        .copied()
        .ok_or_else(|| LoadError::Parse(format!("link references unknown lemma id {id}")))
}
