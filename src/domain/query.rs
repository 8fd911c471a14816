// src/domain/query.rs

use crate::domain::filter::{FilterSpec, RoomTypeFilter, SortOrder};
use crate::domain::listing::Listing;

/// Apply a `FilterSpec` to a listing collection.
///
/// Filters run in a fixed order (text, price, room type, amenities) and the
/// survivors are stable-sorted, so listings that compare equal keep their
/// input order. The result borrows from `listings`; nothing is copied or
/// invented.
pub fn query<'a>(listings: &'a [Listing], spec: &FilterSpec) -> Vec<&'a Listing> {
    let needle = spec.search.trim().to_lowercase();

    let mut results: Vec<&Listing> = listings
        .iter()
        .filter(|l| needle.is_empty() || matches_text(l, &needle))
        .filter(|l| spec.price_range.contains(l.price))
        .filter(|l| matches_room_type(l, &spec.room_type))
        .filter(|l| matches_amenities(l, spec))
        .collect();

    match spec.sort {
        SortOrder::PriceLowHigh => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceHighLow => results.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::Newest => results.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Relevance => {}
    }

    results
}

/// `needle` must already be lowercased.
fn matches_text(listing: &Listing, needle: &str) -> bool {
    listing.location.city.to_lowercase().contains(needle)
        || listing.location.state.to_lowercase().contains(needle)
        || listing.title.to_lowercase().contains(needle)
}

fn matches_room_type(listing: &Listing, filter: &RoomTypeFilter) -> bool {
    match filter {
        RoomTypeFilter::Any => true,
        RoomTypeFilter::Named(name) => listing.room_type.as_str().eq_ignore_ascii_case(name),
    }
}

fn matches_amenities(listing: &Listing, spec: &FilterSpec) -> bool {
    spec.amenities.iter().all(|key| {
        let label = key.label().to_lowercase();
        listing
            .amenities
            .iter()
            .any(|a| a.to_lowercase().contains(&label))
    })
}
