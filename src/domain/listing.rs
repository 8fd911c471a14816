// src/domain/listing.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rentable room or unit, as published in the catalog.
///
/// Field names serialize in camelCase, which is the format of the seed dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Monthly rent in whole currency units. Always > 0 for listings that
    /// went through `ListingDraft` validation.
    pub price: u32,
    pub location: Location,
    pub room_type: RoomType,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub house_rules: Vec<String>,
    pub owner: Owner,
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub response_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: String,
    /// 0.0 ..= 5.0
    pub rating: f32,
    pub text: String,
    pub author: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Private,
    Shared,
    Studio,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Private,
        RoomType::Shared,
        RoomType::Studio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Private => "Private",
            RoomType::Shared => "Shared",
            RoomType::Studio => "Studio",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(s: &str) -> Option<RoomType> {
        let s = s.trim();
        RoomType::ALL
            .into_iter()
            .find(|rt| rt.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Listing {
    /// Mean review rating, or `None` when there are no reviews.
    pub fn average_rating(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: f32 = self.reviews.iter().map(|r| r.rating).sum();
        Some(total / self.reviews.len() as f32)
    }

    pub fn full_address(&self) -> String {
        let loc = &self.location;
        format!(
            "{}, {}, {} {}",
            loc.address, loc.city, loc.state, loc.zip_code
        )
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
