//! Search-term extraction from generated text, used as the places keyword.
//!
//! The cause prompt asks for a comma-separated list of short terms, so each
//! list item is kept together as one term instead of being scattered into
//! single words.

const MIN_WORD_CHARS: usize = 4;

const TERM_SEPARATORS: &[char] = &[',', ';', '\n'];

const STOPWORDS: &[&str] = &[
    // pt
    "para", "como", "mais", "muito", "pode", "podem", "seria", "seriam", "este", "esta", "isso",
    "esse", "essa", "estes", "estas", "esses", "essas", "aquele", "aquela", "onde", "quando",
    "pelo", "pela", "pelos", "pelas", "entre", "sobre", "também", "ainda", "cada", "seus",
    "suas", "você", "vocês", "outro", "outra", "outros", "outras", "tipo", "tipos", "perfil",
    "organização", "organizações", "exemplo", "mesmo", "mesma", "tudo", "todos",
    "todas", "sendo", "está", "estão", "foram", "fazer", "locais", "local",
    // en
    "with", "that", "this", "these", "those", "from", "your", "their", "there", "which",
    "would", "could", "should", "about", "into", "also", "such", "other", "some", "they",
    "them", "what", "when", "where", "organization", "organizations",
];

/// Splits `text` into list items on commas, semicolons and newlines, then
/// normalizes each item into a lowercase search term. Words shorter than
/// four characters, numbers and stopwords are dropped inside each term.
/// Empty and repeated terms are skipped. Returns at most `limit` terms in
/// the order the text lists them.
pub fn extract_search_terms(text: &str, limit: usize) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();

    for item in text.split(TERM_SEPARATORS) {
        if terms.len() == limit {
            break;
        }
        let term = normalize_term(item);
        if !term.is_empty() && !terms.contains(&term) {
            terms.push(term);
        }
    }

    terms
}

fn normalize_term(item: &str) -> String {
    item.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|w| w.chars().count() >= MIN_WORD_CHARS)
        .filter(|w| !w.chars().all(|c| c.is_numeric()))
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}
