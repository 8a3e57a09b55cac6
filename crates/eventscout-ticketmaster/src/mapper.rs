//! Maps one discovery event object to an [`Item`].
//!
//! Every field is extracted independently; a missing or mistyped piece only
//! leaves its own field unset.

use std::collections::BTreeSet;

use eventscout_core::{Item, ItemFields};
use serde_json::Value;

use crate::json::{array_at, f64_at, lookup, str_at};

/// Build an [`Item`] from a single event. Never fails; a non-object event
/// yields an item with every optional field absent.
#[must_use]
pub fn map_event(event: &Value) -> Item {
    let owned = |pointer: &str| str_at(event, pointer).map(str::to_string);

    Item::new(ItemFields {
        item_id: owned("/id"),
        name: owned("/name"),
        url: owned("/url"),
        rating: f64_at(event, "/rating"),
        distance: f64_at(event, "/distance"),
        categories: categories(event),
        image_url: image_url(event),
        address: address(event),
    })
}

/// `classifications[*].segment.name`, deduplicated.
fn categories(event: &Value) -> BTreeSet<String> {
    array_at(event, "/classifications")
        .into_iter()
        .flatten()
        .filter_map(|classification| str_at(classification, "/segment/name"))
        .map(str::to_string)
        .collect()
}

/// The `url` of the first image that has one.
fn image_url(event: &Value) -> Option<String> {
    array_at(event, "/images")?
        .iter()
        .find_map(|image| str_at(image, "/url"))
        .map(str::to_string)
}

/// Address of the first venue.
///
/// Lines are concatenated with no separator. A comma follows whenever the
/// venue has an `address` object, even one without lines, and the city name
/// comes right after it. A venue with neither piece produces `""`.
fn address(event: &Value) -> Option<String> {
    let venue = lookup(event, "/_embedded/venues/0").filter(|v| v.is_object())?;

    let mut out = String::new();
    if let Some(address) = lookup(venue, "/address").filter(|v| v.is_object()) {
        for line in ["/line1", "/line2", "/line3"] {
            if let Some(text) = str_at(address, line) {
                out.push_str(text);
            }
        }
        out.push(',');
    }
    if let Some(city) = str_at(venue, "/city/name") {
        out.push_str(city);
    }
    Some(out)
}
