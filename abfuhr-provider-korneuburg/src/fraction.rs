//! Mapping of the calendar's German category labels to [`Fraction`]s.

use abfuhr_core::model::Fraction;

/// Known label prefixes, tested in order. First match wins.
static PREFIXES: [(&str, Fraction); 4] = [
    ("Bio", Fraction::Organic),
    ("Restmüll", Fraction::Residual),
    ("Gelber Sack", Fraction::YellowBag),
    ("Altpapier", Fraction::Paper),
];

/// Map a raw category label to a fraction. Never fails.
///
/// Labels are matched by prefix because the page sometimes appends a
/// description to the category word. Unknown labels become a lowercase slug
/// with spaces replaced by underscores.
#[must_use]
pub fn map_fraction(label: &str) -> Fraction {
    PREFIXES
        .iter()
        .find(|(prefix, _)| label.starts_with(prefix))
        .map_or_else(
            || Fraction::Other(label.to_lowercase().replace(' ', "_")),
            |(_, fraction)| fraction.clone(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_codes() {
        assert_eq!(map_fraction("Bio"), Fraction::Organic, "bio");
        assert_eq!(map_fraction("Restmüll"), Fraction::Residual, "residual");
        assert_eq!(map_fraction("Gelber Sack"), Fraction::YellowBag, "yellow bag");
        assert_eq!(map_fraction("Altpapier"), Fraction::Paper, "paper");
    }

    #[test]
    fn suffixes_do_not_matter() {
        assert_eq!(map_fraction("Biotonne"), Fraction::Organic, "appended word");
        assert_eq!(
            map_fraction("Restmüll 4-wöchentlich"),
            Fraction::Residual,
            "appended description"
        );
        assert_eq!(
            map_fraction("Altpapier (Container)"),
            Fraction::Paper,
            "appended parenthesis"
        );
    }

    #[test]
    fn matching_is_case_sensitive_prefix() {
        assert_eq!(
            map_fraction("bio"),
            Fraction::Other("bio".to_owned()),
            "lowercase falls through to the slug, which happens to agree"
        );
        assert_eq!(
            map_fraction("Der Gelbe Sack"),
            Fraction::Other("der_gelbe_sack".to_owned()),
            "not a prefix"
        );
    }

    #[test]
    fn unknown_labels_become_slugs() {
        assert_eq!(
            map_fraction("Sperrmüll Abholung"),
            Fraction::Other("sperrmüll_abholung".to_owned()),
            "lowercased, spaces replaced"
        );
        assert_eq!(map_fraction(""), Fraction::Other(String::new()), "empty label is still total");
    }
}
