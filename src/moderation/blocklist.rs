/// Terms that reject content outright, before any AI classification
pub const BLOCKLIST_KEYWORDS: &[&str] = &[
    "n-word",
    "k-word",
    "racial slur",
    "kill all",
    "death to",
    "genocide",
    "mass shooting",
    "white supremacy",
    "nazi",
    "holocaust denial",
];

pub const PROHIBITED_TERMS_REASON: &str = "Content contains prohibited terms.";

/// Returns the first blocklisted term found in `text`, ignoring case
pub fn find_prohibited_term(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    BLOCKLIST_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword))
}
