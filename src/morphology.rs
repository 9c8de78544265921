// src/morphology.rs
//
// Best-effort English inflection. Irregular forms ("child" -> "children",
// "goose" -> "geese", "deer" -> "deer") are not handled.

/// Related form of a noun: the plural of a singular, or a singular guess for
/// something that already looks plural. First matching rule wins.
pub fn pluralize_noun(noun: &str) -> String {
    if let Some(stem) = noun.strip_suffix("ies") {
        format!("{}y", stem)
    } else if let Some(stem) = noun.strip_suffix("es") {
        // buses, foxes
        stem.to_string()
    } else if let Some(stem) = noun.strip_suffix('s') {
        // bananas
        stem.to_string()
    } else if let Some(stem) = noun.strip_suffix('y') {
        format!("{}ies", stem)
    } else if let Some(stem) = noun.strip_suffix('f') {
        format!("{}ves", stem)
    } else if let Some(stem) = noun.strip_suffix("fe") {
        format!("{}ves", stem)
    } else if noun.ends_with('o') {
        format!("{}es", noun)
    } else {
        format!("{}s", noun)
    }
}

/// Third-person singular of a verb.
pub fn conjugate_verb(verb: &str) -> String {
    const VOWEL_Y: [&str; 5] = ["ay", "ey", "iy", "oy", "uy"];
    const SIBILANT: [&str; 5] = ["o", "sh", "ch", "s", "x"];

    match verb.strip_suffix('y') {
        Some(stem) if !VOWEL_Y.iter().any(|s| verb.ends_with(s)) => format!("{}ies", stem),
        _ if SIBILANT.iter().any(|s| verb.ends_with(s)) => format!("{}es", verb),
        _ => format!("{}s", verb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_rules() {
        assert_eq!(pluralize_noun("city"), "cities");
        assert_eq!(pluralize_noun("leaf"), "leaves");
        assert_eq!(pluralize_noun("wife"), "wives");
        assert_eq!(pluralize_noun("potato"), "potatoes");
        assert_eq!(pluralize_noun("cat"), "cats");
    }

    #[test]
    fn plural_looking_nouns_are_stripped() {
        assert_eq!(pluralize_noun("cities"), "city");
        assert_eq!(pluralize_noun("foxes"), "fox");
        assert_eq!(pluralize_noun("bananas"), "banana");
        // Lossy on singulars ending in s.
        assert_eq!(pluralize_noun("bus"), "bu");
    }

    #[test]
    fn irregular_nouns_are_mishandled() {
        assert_eq!(pluralize_noun("child"), "childs");
    }

    #[test]
    fn verb_rules() {
        assert_eq!(conjugate_verb("fly"), "flies");
        assert_eq!(conjugate_verb("play"), "plays");
        assert_eq!(conjugate_verb("buy"), "buys");
        assert_eq!(conjugate_verb("go"), "goes");
        assert_eq!(conjugate_verb("wash"), "washes");
        assert_eq!(conjugate_verb("catch"), "catches");
        assert_eq!(conjugate_verb("fix"), "fixes");
        assert_eq!(conjugate_verb("pass"), "passes");
        assert_eq!(conjugate_verb("walk"), "walks");
    }

    #[test]
    fn verb_stems_keep_non_ascii() {
        assert_eq!(conjugate_verb("défy"), "défies");
        assert_eq!(conjugate_verb("y"), "ies");
        assert_eq!(conjugate_verb("ñay"), "ñays");
    }
}
