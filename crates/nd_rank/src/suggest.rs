/// Common misspellings of the topics people actually search for. This is
/// a small fixed table, not a general spell-checker.
const CORRECTIONS: &[(&str, &str)] = &[
    ("tecnology", "technology"),
    ("bussiness", "business"),
    ("politcs", "politics"),
    ("sciense", "science"),
    ("healt", "health"),
    ("sport", "sports"),
    ("enviroment", "environment"),
    ("educacion", "education"),
    ("movie", "movies"),
    ("book", "books"),
    ("game", "gaming"),
];

/// Try to correct a query that returned zero articles. Each word is
/// looked up lowercased; unknown words pass through untouched. Returns
/// `Some` only when the corrected query differs from the original.
pub fn suggest_correction(query: &str) -> Option<String> {
    let corrected: Vec<&str> = query
        .split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            CORRECTIONS
                .iter()
                .find(|(wrong, _)| *wrong == lower)
                .map(|(_, right)| *right)
                .unwrap_or(word)
        })
        .collect();

    let corrected = corrected.join(" ");
    if corrected != query {
        Some(corrected)
    } else {
        None
    }
}

/// The user-visible message for an empty result set, quoting the original
/// query and the suggestion when one exists.
pub fn no_results_message(query: &str, suggestion: Option<&str>) -> String {
    match suggestion {
        Some(corrected) => format!(
            "No results found for \"{}\". Did you mean \"{}\"?",
            query, corrected
        ),
        None => format!(
            "No results found for \"{}\". Please try a different search term.",
            query
        ),
    }
}
