//! Domain data structures for municipalities and pickup schedules.

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
/// Upstream numeric identifier of a municipality, kept as text.
pub struct MunicipalityId(pub String);

impl fmt::Display for MunicipalityId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Waste fractions that can be collected.
///
/// Serialised as its machine-readable code, e.g. `"gelber_sack"`.
pub enum Fraction {
    /// Organic waste (`bio`).
    Organic,
    /// Residual waste (`restmuell`).
    Residual,
    /// Yellow-bag packaging recyclables (`gelber_sack`).
    YellowBag,
    /// Paper and cardboard (`altpapier`).
    Paper,
    /// Any other label, already slugified by the provider.
    Other(String),
}

impl Fraction {
    /// Machine-readable code used on the wire.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Fraction::Organic => "bio",
            Fraction::Residual => "restmuell",
            Fraction::YellowBag => "gelber_sack",
            Fraction::Paper => "altpapier",
            Fraction::Other(slug) => slug.as_str(),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Scheduled pickup for a specific day.
pub struct PickupEvent {
    /// Fully resolved date of the pickup.
    pub date: NaiveDate,
    /// Type of waste collected.
    #[serde(rename = "type")]
    pub fraction: Fraction,
    /// Affected areas in source order; never an empty list.
    #[serde(rename = "area")]
    pub areas: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
/// Everything extracted from one municipality page.
pub struct Schedule {
    /// Display name of the municipality as printed on the page.
    #[serde(rename = "gemeinde")]
    pub municipality: Option<String>,
    /// Pickups in the order they appear on the page.
    #[serde(rename = "data")]
    pub events: Vec<PickupEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_serialises_to_wire_shape() {
        let schedule = Schedule {
            municipality: Some("Bisamberg".to_owned()),
            events: vec![
                PickupEvent {
                    date: NaiveDate::from_ymd_opt(2026, 3, 5).expect("valid date"),
                    fraction: Fraction::Organic,
                    areas: Some(vec!["Zone A".to_owned(), "Zone B".to_owned()]),
                },
                PickupEvent {
                    date: NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date"),
                    fraction: Fraction::Other("sperrmüll_abholung".to_owned()),
                    areas: None,
                },
            ],
        };

        let json = serde_json::to_value(&schedule).expect("serialisable");

        assert_eq!(
            json,
            serde_json::json!({
                "gemeinde": "Bisamberg",
                "data": [
                    { "date": "2026-03-05", "type": "bio", "area": ["Zone A", "Zone B"] },
                    { "date": "2026-03-09", "type": "sperrmüll_abholung", "area": null },
                ]
            }),
            "wire format must match the published JSON shape"
        );
    }

    #[test]
    fn empty_schedule_serialises_with_null_name() {
        let json = serde_json::to_value(Schedule::default()).expect("serialisable");
        assert_eq!(
            json,
            serde_json::json!({ "gemeinde": null, "data": [] }),
            "absent name must become null"
        );
    }

    #[test]
    fn fraction_codes_are_stable() {
        assert_eq!(Fraction::Organic.code(), "bio", "organic code");
        assert_eq!(Fraction::Residual.code(), "restmuell", "residual code");
        assert_eq!(Fraction::YellowBag.code(), "gelber_sack", "yellow bag code");
        assert_eq!(Fraction::Paper.code(), "altpapier", "paper code");
        assert_eq!(
            Fraction::Other("glas".to_owned()).to_string(),
            "glas",
            "other passes its slug through"
        );
    }
}
