use lemtag_core::dictionary::CoarseTag;

/// Map an OpenCorpora grammeme value to its coarse tag.
///
/// Only part-of-speech grammemes are recognized; case, number, animacy and
/// the rest come back as `None` and are skipped during tag selection.
pub fn coarse_tag(grammeme: &str) -> Option<CoarseTag> {
    let tag = match grammeme {
        "NOUN" | "NPRO" => CoarseTag::S,
        "ADJF" | "ADJS" => CoarseTag::A,
        "VERB" | "INFN" | "PRTF" | "PRTS" | "GRND" => CoarseTag::V,
        "COMP" | "NUMR" | "PRED" | "PRCL" | "INTJ" => CoarseTag::Adv,
        "PREP" => CoarseTag::Pr,
        "CONJ" => CoarseTag::Conj,
        _ => return None,
    };
    Some(tag)
}

/// Pick a lemma's coarse tag: first recognized grammeme wins, ADV otherwise
pub fn select_tag<'a, I>(grammemes: I) -> CoarseTag
where
    I: IntoIterator<Item = &'a str>,
{
    grammemes
        .into_iter()
        .find_map(coarse_tag)
        .unwrap_or(CoarseTag::Adv)
}
