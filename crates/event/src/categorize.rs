//! Keyword rules that map an external event onto one of the local categories.

const RULES: [(&str, &[&str]); 7] = [
    ("music", &["concert", "music", "gig"]),
    ("art", &["art", "exhibition", "gallery"]),
    ("workshop", &["workshop", "class", "training"]),
    ("meetup", &["meetup", "network", "community"]),
    ("sports", &["sports", "game", "tournament"]),
    ("date", &["date"]),
    ("comedy", &["comedy"]),
];

pub const GENERAL: &str = "general";

/// First matching rule wins. `kind` is matched against every keyword of a
/// rule, `title` only against the category name.
pub fn map_event_category(kind: Option<&str>, title: Option<&str>) -> &'static str {
    let kind = kind.unwrap_or_default().to_lowercase();
    let title = title.unwrap_or_default().to_lowercase();

    for (category, keywords) in RULES {
        if keywords.iter().any(|k| kind.contains(k)) || title.contains(category) {
            return category;
        }
    }

    GENERAL
}
