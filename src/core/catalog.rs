//! Turns month ranges and the photo availability list into carousel items.

use crate::domain::model::CarouselItem;
use crate::domain::period::{resource_key, Period};
use crate::utils::error::{Result, SiteError};
use std::collections::HashSet;

pub const PHOTO_EXTENSION: &str = "jpeg";

/// `photos/February2026.jpeg`
pub fn asset_path(photo_dir: &str, label: &str) -> String {
    let dir = photo_dir.trim_end_matches('/');
    let file = format!("{}.{}", resource_key(label), PHOTO_EXTENSION);
    if dir.is_empty() {
        file
    } else {
        format!("{}/{}", dir, file)
    }
}

/// One item per month from `start` to `end`, inclusive.
pub fn build_items(
    start: Period,
    end: Period,
    available: &HashSet<Period>,
    photo_dir: &str,
) -> Result<Vec<CarouselItem>> {
    if start > end {
        return Err(SiteError::invalid_configuration(format!(
            "gallery starts at {} which is after its end {}",
            start, end
        )));
    }

    let items = Period::range_inclusive(start, end)
        .map(|period| {
            let label = period.label();
            if available.contains(&period) {
                let path = asset_path(photo_dir, &label);
                CarouselItem::present(label, path)
            } else {
                CarouselItem::absent(label)
            }
        })
        .collect();

    Ok(items)
}

/// Items for an already ordered label list; availability is matched on the label text.
pub fn build_items_from_labels<S: AsRef<str>>(
    labels: &[S],
    available: &HashSet<String>,
    photo_dir: &str,
) -> Vec<CarouselItem> {
    labels
        .iter()
        .map(|label| {
            let label = label.as_ref();
            if available.contains(label) {
                CarouselItem::present(label, asset_path(photo_dir, label))
            } else {
                CarouselItem::absent(label)
            }
        })
        .collect()
}

/// Parses photo labels. Labels that are not months are logged and skipped.
pub fn available_periods<S: AsRef<str>>(labels: &[S]) -> HashSet<Period> {
    labels
        .iter()
        .filter_map(|label| match label.as_ref().parse::<Period>() {
            Ok(period) => Some(period),
            Err(e) => {
                tracing::warn!("Skipping photo entry: {}", e);
                None
            }
        })
        .collect()
}

pub fn earliest(available: &HashSet<Period>) -> Option<Period> {
    available.iter().min().copied()
}
