//! Lexical cue categories used by the marker assessors.
//!
//! Every phrase list the engine matches against lives here as a named,
//! enumerable category. Assessors never embed literal cue strings; they ask
//! the lexicon, which keeps each calibration reproducible and testable
//! category-by-category.
//!
//! Matching is boundary-aware substring search over pre-lowercased text:
//! `"but"` matches the word "but" and not "attribute".

use serde::{Deserialize, Serialize};

/// A named category of lexical cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CueCategory {
    /// Inferential connectives (thus, therefore, entails).
    InferentialConnective,
    /// Synthesis connectives (combines, integrates).
    SynthesisConnective,
    /// Definitional phrases (is defined as, refers to).
    DefinitionalPhrase,
    /// Strong inter-sentence links (therefore, it follows).
    StrongLink,
    /// Moderate inter-sentence links (moreover, furthermore).
    ModerateLink,
    /// Contrastive inter-sentence links (however, but).
    ContrastLink,
    /// Explicit causal markers (because, since, follows from).
    CausalMarker,
    /// Tautology markers that disqualify a sentence (obviously, of course).
    TautologyMarker,
    /// Contrary-to-expectation phrasing (paradoxically, in fact).
    ReinterpretationMarker,
    /// Logical operators counted for nesting depth (if, then, implies).
    LoadMarker,
    /// Paradox vocabulary (paradox, contradiction).
    ParadoxMarker,
    /// Self-reference vocabulary (itself, its own).
    SelfReferenceMarker,
    /// Surprise/counterintuitive vocabulary (unexpected, novel).
    NoveltyMarker,
    /// Precision qualifiers (precisely, strictly).
    PrecisionQualifier,
    /// Explicit distinctions (distinct from, as opposed to).
    DistinctionMarker,
    /// Reframing cues (put differently, in other words).
    ReframingMarker,
    /// Recursive/self-referential definition cues (defines itself).
    RecursionMarker,
    /// Explicit meta-level reference (this argument, meta-).
    LevelShiftMarker,
}

impl CueCategory {
    /// The static phrase list for this category, all lower-case.
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            CueCategory::InferentialConnective => &[
                "thus",
                "therefore",
                "consequently",
                "implies",
                "entails",
                "it follows",
                "hence",
            ],
            CueCategory::SynthesisConnective => &[
                "combines",
                "integrates",
                "synthesizes",
                "unifies",
                "taken together",
            ],
            CueCategory::DefinitionalPhrase => &[
                "is defined as",
                "means",
                "refers to",
                "denotes",
                "is characterized by",
            ],
            CueCategory::StrongLink => &["therefore", "thus", "consequently", "it follows"],
            CueCategory::ModerateLink => &["moreover", "furthermore", "in addition", "additionally"],
            CueCategory::ContrastLink => &[
                "however",
                "but",
                "yet",
                "nevertheless",
                "on the other hand",
            ],
            CueCategory::CausalMarker => &[
                "because",
                "since",
                "due to",
                "as a result",
                "follows from",
                "entails",
            ],
            CueCategory::TautologyMarker => &[
                "is important",
                "obviously",
                "of course",
                "everyone knows",
                "needless to say",
                "clearly",
            ],
            CueCategory::ReinterpretationMarker => &[
                "contrary to",
                "paradoxically",
                "counterintuitively",
                "in fact",
                "turns out",
                "despite appearances",
            ],
            CueCategory::LoadMarker => &["if", "then", "unless", "implies", "entails"],
            CueCategory::ParadoxMarker => &[
                "paradox",
                "contradiction",
                "self-defeating",
                "circular",
            ],
            CueCategory::SelfReferenceMarker => &[
                "itself",
                "its own",
                "self-referential",
            ],
            CueCategory::NoveltyMarker => &[
                "surprising",
                "unexpected",
                "counterintuitive",
                "remarkably",
                "novel",
            ],
            CueCategory::PrecisionQualifier => &[
                "precisely",
                "specifically",
                "strictly",
                "exactly",
                "in particular",
            ],
            CueCategory::DistinctionMarker => &[
                "distinct from",
                "as opposed to",
                "rather than",
                "unlike",
                "in contrast to",
            ],
            CueCategory::ReframingMarker => &[
                "let us consider",
                "put differently",
                "in other words",
                "reframe",
                "from another angle",
                "consider instead",
            ],
            CueCategory::RecursionMarker => &[
                "defines itself",
                "in terms of itself",
                "recursive",
                "self-referential",
            ],
            CueCategory::LevelShiftMarker => &[
                "this argument",
                "this reasoning",
                "meta-",
                "at a higher level",
                "the claim itself",
            ],
        }
    }
}

/// Boundary-aware phrase search over lower-cased text.
///
/// A match requires the characters immediately before and after the phrase
/// to be non-alphanumeric (or the string edge). A phrase ending in `-` only
/// checks its leading boundary, so `"meta-"` matches "meta-level".
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let mut start = 0;
    while let Some(pos) = text[start..].find(phrase) {
        let abs = start + pos;
        let before_ok = abs == 0
            || !text[..abs]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric());
        let end = abs + phrase.len();
        let after_ok = phrase.ends_with('-')
            || end == text.len()
            || !text[end..].chars().next().is_some_and(|c| c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = abs + phrase.len().max(1);
    }
    false
}

/// Does the lower-cased text contain any phrase from the category?
pub fn contains(text: &str, category: CueCategory) -> bool {
    category.phrases().iter().any(|p| contains_phrase(text, p))
}

/// Number of distinct category phrases present in the lower-cased text.
///
/// Counts each phrase at most once; repeated mentions of the same cue do
/// not inflate the count.
pub fn count(text: &str, category: CueCategory) -> usize {
    category
        .phrases()
        .iter()
        .filter(|p| contains_phrase(text, p))
        .count()
}

/// The correlative "both ... and" synthesis pattern.
///
/// Not expressible as a single literal phrase, so it gets its own matcher.
pub fn both_and(text: &str) -> bool {
    if let Some(pos) = text.find("both") {
        if contains_phrase(text, "both") {
            return text[pos..].contains(" and ");
        }
    }
    false
}
