//! Text segmentation: sentences, paragraphs, words, clause structure.
//!
//! All downstream markers consume the segment views produced here. Every
//! function is total: empty or whitespace-only input yields empty output,
//! never an error.

/// Split text into trimmed, non-empty sentences.
///
/// A sentence is a maximal substring bounded by one or more terminal
/// punctuation characters (`.`, `!`, `?`). Runs of terminators collapse,
/// so ellipses and "?!" do not produce empty sentences.
///
/// # Example
///
/// ```
/// use fingerprint_engine::segment::split_sentences;
///
/// let sentences = split_sentences("First. Second! Third?");
/// assert_eq!(sentences, vec!["First", "Second", "Third"]);
/// assert!(split_sentences("   ").is_empty());
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into trimmed, non-empty paragraphs.
///
/// Paragraphs are separated by blank lines (two or more consecutive line
/// breaks; a line containing only whitespace counts as blank). Single line
/// breaks stay inside the paragraph.
///
/// # Example
///
/// ```
/// use fingerprint_engine::segment::split_paragraphs;
///
/// let paragraphs = split_paragraphs("one\ntwo\n\nthree");
/// assert_eq!(paragraphs, vec!["one\ntwo".to_string(), "three".to_string()]);
/// ```
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    paragraphs
}

/// Lower-cased alphanumeric word tokens, used for term-overlap computations.
///
/// Punctuation is stripped; tokens that contain no alphanumeric character
/// are discarded.
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Content words: word tokens longer than three characters.
///
/// Short function words (the, a, of, is) carry no overlap signal, so the
/// overlap-based markers only compare content words.
pub fn content_words(text: &str) -> Vec<String> {
    words(text).into_iter().filter(|w| w.len() > 3).collect()
}

/// Number of clause separators (`,`, `;`, `:`) in a sentence.
pub fn clause_separators(sentence: &str) -> usize {
    sentence.chars().filter(|&c| matches!(c, ',' | ';' | ':')).count()
}

/// Number of parenthetical insertions in a sentence.
///
/// Counts opening parentheses plus paired em-dash asides.
pub fn parentheticals(sentence: &str) -> usize {
    let parens = sentence.chars().filter(|&c| c == '(').count();
    let dashes = sentence.matches('\u{2014}').count() / 2;
    parens + dashes
}
