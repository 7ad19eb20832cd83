//! Extraction of pickup events from the association's legacy page layout.

use std::sync::OnceLock;

use abfuhr_core::{
    model::{PickupEvent, Schedule},
    ports::{ExtractError, ExtractPort},
};
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::dates::{resolve_day_month, resolve_day_month_at};
use crate::fraction::map_fraction;

/// Element id of the container holding every calendar entry.
pub const REGION_ID: &str = "lay_1";

fn region_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("div#lay_1").expect("valid region selector"))
}

fn name_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse("div[style*='padding-left'] > div > b").expect("valid name selector")
    })
}

fn entry_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse(r#"div[style*="padding:5px"]"#).expect("valid entry selector")
    })
}

fn area_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r",|\n|\bund\b").expect("valid area separator"))
}

/// Page parser for the Korneuburg waste association.
#[derive(Debug, Clone, Copy, Default)]
pub struct KorneuburgExtractor;

impl ExtractPort for KorneuburgExtractor {
    fn extract(&self, html: &str) -> Result<Schedule, ExtractError> {
        let year = Local::now().year();
        extract_with(html, |raw| resolve_day_month(raw, year))
    }
}

/// Parse a downloaded page, resolving year-less dates relative to `today`.
///
/// Events keep the vertical order of the page. Entries that cannot be split
/// into date and category, or whose date is not a real day, are skipped.
///
/// # Errors
///
/// Returns [`ExtractError::RegionNotFound`] when the page has no `lay_1` region.
pub fn extract_schedule(html: &str, today: NaiveDate) -> Result<Schedule, ExtractError> {
    extract_with(html, |raw| {
        resolve_day_month_at(raw, today.year(), today.month())
    })
}

fn extract_with<F>(html: &str, resolve_date: F) -> Result<Schedule, ExtractError>
where
    F: Fn(&str) -> Option<NaiveDate>,
{
    let document = Html::parse_document(html);
    let region = document
        .select(region_selector())
        .next()
        .ok_or_else(|| ExtractError::RegionNotFound(REGION_ID.to_owned()))?;

    let municipality = region
        .select(name_selector())
        .next()
        .map(|name| name.text().map(str::trim).collect::<String>())
        .filter(|name| !name.is_empty());

    let events = region
        .select(entry_selector())
        .filter_map(|entry| parse_entry(&flatten_text(entry), &resolve_date))
        .collect();

    Ok(Schedule {
        municipality,
        events,
    })
}

/// Join all non-blank text nodes of `element`, trimmed, with single spaces.
fn flatten_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_entry<F>(text: &str, resolve_date: &F) -> Option<PickupEvent>
where
    F: Fn(&str) -> Option<NaiveDate>,
{
    let Some((date_raw, rest)) = text
        .split_once(char::is_whitespace)
        .filter(|(date_raw, rest)| !date_raw.is_empty() && !rest.trim().is_empty())
    else {
        debug!(entry = text, "skipping entry without date and category");
        return None;
    };

    let Some(date) = resolve_date(date_raw) else {
        debug!(entry = text, "skipping entry with unusable date");
        return None;
    };

    let (label, areas) = match rest.split_once(',') {
        Some((label, area_raw)) => (label.trim(), split_areas(area_raw)),
        None => (rest.trim(), None),
    };

    Some(PickupEvent {
        date,
        fraction: map_fraction(label),
        areas,
    })
}

/// Split on commas, newlines, and the word "und"; `None` if nothing remains.
fn split_areas(raw: &str) -> Option<Vec<String>> {
    let areas: Vec<String> = area_separator()
        .split(raw)
        .map(str::trim)
        .filter(|area| !area.is_empty())
        .map(str::to_owned)
        .collect();

    (!areas.is_empty()).then_some(areas)
}
