// src/domain/draft.rs

use crate::domain::listing::{Listing, Location, Owner, RoomType};
use chrono::NaiveDate;

/// Amenities an owner can tick on the listing form.
pub const FORM_AMENITIES: [&str; 10] = [
    "WiFi",
    "Shared Kitchen",
    "Private Kitchen",
    "Laundry",
    "Parking",
    "Study Desk",
    "Private Bathroom",
    "Air Conditioning",
    "TV",
    "Gym Access",
];

pub const MAX_IMAGES: usize = 5;

/// Stand-in photos used in place of real uploads.
pub const PLACEHOLDER_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?ixlib=rb-1.2.1&auto=format&fit=crop&w=640&q=80",
    "https://images.unsplash.com/photo-1574362848149-11496d93a7c7?ixlib=rb-1.2.1&auto=format&fit=crop&w=640&q=80",
    "https://images.unsplash.com/photo-1493809842364-78817add7ffb?ixlib=rb-1.2.1&auto=format&fit=crop&w=640&q=80",
    "https://images.unsplash.com/photo-1505691938895-1758d7feb511?ixlib=rb-1.2.1&auto=format&fit=crop&w=640&q=80",
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid price")]
    InvalidPrice,
    #[error("Unknown room type: {0}")]
    InvalidRoomType(String),
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("Maximum of {MAX_IMAGES} images allowed")]
    TooManyImages,
}

/// Raw listing form input, as submitted by an owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub room_type: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: String,
    pub longitude: String,
    pub amenities: Vec<String>,
    pub house_rules: String,
    pub images: Vec<String>,
}

impl ListingDraft {
    /// Collect a draft from decoded form pairs. `amenity` and `image` repeat.
    pub fn from_params(params: &[(String, String)]) -> Self {
        let mut d = ListingDraft::default();
        for (k, v) in params {
            match k.as_str() {
                "title" => d.title = v.clone(),
                "description" => d.description = v.clone(),
                "price" => d.price = v.clone(),
                "room_type" => d.room_type = v.clone(),
                "address" => d.address = v.clone(),
                "city" => d.city = v.clone(),
                "state" => d.state = v.clone(),
                "zip_code" => d.zip_code = v.clone(),
                "latitude" => d.latitude = v.clone(),
                "longitude" => d.longitude = v.clone(),
                "amenity" => {
                    if FORM_AMENITIES.contains(&v.as_str()) && !d.amenities.contains(v) {
                        d.amenities.push(v.clone());
                    }
                }
                "house_rules" => d.house_rules = v.clone(),
                "image" => {
                    if !v.trim().is_empty() {
                        d.images.push(v.trim().to_string());
                    }
                }
                _ => {}
            }
        }
        d
    }

    /// Pre-fill the form from an existing listing.
    pub fn from_listing(listing: &Listing) -> Self {
        ListingDraft {
            title: listing.title.clone(),
            description: listing.description.clone(),
            price: listing.price.to_string(),
            room_type: listing.room_type.as_str().to_string(),
            address: listing.location.address.clone(),
            city: listing.location.city.clone(),
            state: listing.location.state.clone(),
            zip_code: listing.location.zip_code.clone(),
            latitude: listing.location.latitude.to_string(),
            longitude: listing.location.longitude.to_string(),
            amenities: listing.amenities.clone(),
            house_rules: listing.house_rules.join("\n"),
            images: listing.images.clone(),
        }
    }

    /// Validate the draft and produce a listing.
    ///
    /// `placeholder` is used as the only image when the draft has none.
    /// Reviews are not part of the form; callers carry them over on edit.
    pub fn into_listing(
        self,
        id: String,
        owner: Owner,
        created_at: NaiveDate,
        placeholder: &str,
    ) -> Result<Listing, DraftError> {
        let required = [
            &self.title,
            &self.description,
            &self.price,
            &self.address,
            &self.city,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(DraftError::MissingFields);
        }

        let price: u32 = self
            .price
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidPrice)?;
        if price == 0 {
            return Err(DraftError::InvalidPrice);
        }

        let room_type = if self.room_type.trim().is_empty() {
            RoomType::Single
        } else {
            RoomType::parse(&self.room_type)
                .ok_or_else(|| DraftError::InvalidRoomType(self.room_type.clone()))?
        };

        let latitude = parse_coordinate(&self.latitude)?;
        let longitude = parse_coordinate(&self.longitude)?;

        if self.images.len() > MAX_IMAGES {
            return Err(DraftError::TooManyImages);
        }
        let images = if self.images.is_empty() {
            vec![placeholder.to_string()]
        } else {
            self.images
        };

        let house_rules = self
            .house_rules
            .lines()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Listing {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            location: Location {
                address: self.address.trim().to_string(),
                city: self.city.trim().to_string(),
                state: self.state.trim().to_string(),
                zip_code: self.zip_code.trim().to_string(),
                latitude,
                longitude,
            },
            room_type,
            images,
            amenities: self.amenities,
            house_rules,
            owner,
            reviews: Vec::new(),
            created_at,
        })
    }
}

/// Blank means 0.0.
fn parse_coordinate(raw: &str) -> Result<f64, DraftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DraftError::InvalidCoordinate(raw.to_string()))
}
