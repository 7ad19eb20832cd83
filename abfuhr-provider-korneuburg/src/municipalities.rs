//! Municipalities served by the Korneuburg waste association.

use abfuhr_core::plugin::MunicipalityRegistry;

/// Display name and upstream `gem_nr` of every member municipality.
pub const MUNICIPALITIES: [(&str, &str); 12] = [
    ("Bisamberg", "31201"),
    ("Enzersfeld", "31202"),
    ("Ernstbrunn", "31203"),
    ("Großmugl", "31204"),
    ("Großrußbach", "31205"),
    ("Hagenbrunn", "31206"),
    ("Harmannsdorf", "31207"),
    ("Hausleiten", "31208"),
    ("Leobendorf", "31216"),
    ("Niederhollabrunn", "31234"),
    ("Rußbach", "31224"),
    ("Sierndorf", "31226"),
];

/// Registry over [`MUNICIPALITIES`].
#[must_use]
pub fn registry() -> MunicipalityRegistry {
    MunicipalityRegistry::new(MUNICIPALITIES)
}

#[cfg(test)]
mod tests {
    use abfuhr_core::model::MunicipalityId;

    use super::*;

    #[test]
    fn umlauts_resolve_exactly() {
        let registry = registry();
        assert_eq!(registry.names().count(), MUNICIPALITIES.len(), "no duplicate names");
        assert_eq!(
            registry.resolve("Großrußbach"),
            Some(&MunicipalityId("31205".to_owned())),
            "sharp s is kept"
        );
        assert_eq!(registry.resolve("Grossrussbach"), None, "no transliteration");
    }
}
