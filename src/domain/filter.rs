// src/domain/filter.rs

use std::collections::BTreeSet;

pub const DEFAULT_MIN_PRICE: u32 = 300;
pub const DEFAULT_MAX_PRICE: u32 = 1000;

/// Bounds offered by the price slider on the search form.
pub const PRICE_SLIDER_MIN: u32 = 100;
pub const PRICE_SLIDER_MAX: u32 = 2000;
pub const PRICE_SLIDER_STEP: u32 = 50;

/// Amenity toggles offered by the search form.
///
/// Each key maps to exactly one canonical label; a listing satisfies the
/// toggle when one of its amenity strings contains that label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AmenityKey {
    Wifi,
    Kitchen,
    Laundry,
    Parking,
    PrivateRoom,
    PrivateBathroom,
}

impl AmenityKey {
    pub const ALL: [AmenityKey; 6] = [
        AmenityKey::Wifi,
        AmenityKey::Kitchen,
        AmenityKey::Laundry,
        AmenityKey::Parking,
        AmenityKey::PrivateRoom,
        AmenityKey::PrivateBathroom,
    ];

    /// Toggle identifier used in query strings.
    pub fn key(&self) -> &'static str {
        match self {
            AmenityKey::Wifi => "wifi",
            AmenityKey::Kitchen => "kitchen",
            AmenityKey::Laundry => "laundry",
            AmenityKey::Parking => "parking",
            AmenityKey::PrivateRoom => "privateRoom",
            AmenityKey::PrivateBathroom => "privateBathroom",
        }
    }

    /// Canonical amenity label matched against listing amenities.
    pub fn label(&self) -> &'static str {
        match self {
            AmenityKey::Wifi => "WiFi",
            AmenityKey::Kitchen => "Kitchen",
            AmenityKey::Laundry => "Laundry",
            AmenityKey::Parking => "Parking",
            AmenityKey::PrivateRoom => "Private",
            AmenityKey::PrivateBathroom => "Private Bathroom",
        }
    }

    /// Checkbox caption on the search form.
    pub fn caption(&self) -> &'static str {
        match self {
            AmenityKey::PrivateRoom => "Private Room",
            AmenityKey::PrivateBathroom => "Private Bath",
            other => other.label(),
        }
    }

    pub fn parse(s: &str) -> Option<AmenityKey> {
        AmenityKey::ALL.into_iter().find(|a| a.key() == s.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Relevance,
    PriceLowHigh,
    PriceHighLow,
    Newest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Relevance,
        SortOrder::PriceLowHigh,
        SortOrder::PriceHighLow,
        SortOrder::Newest,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PriceLowHigh => "price_low_high",
            SortOrder::PriceHighLow => "price_high_low",
            SortOrder::Newest => "newest",
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "Relevance",
            SortOrder::PriceLowHigh => "Price: Low to High",
            SortOrder::PriceHighLow => "Price: High to Low",
            SortOrder::Newest => "Newest",
        }
    }

    /// Unknown values fall back to relevance.
    pub fn parse(s: &str) -> SortOrder {
        SortOrder::ALL
            .into_iter()
            .find(|o| o.key() == s.trim())
            .unwrap_or_default()
    }
}

/// Requested room type. A name that matches no `RoomType` is kept as-is and
/// simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoomTypeFilter {
    #[default]
    Any,
    Named(String),
}

impl RoomTypeFilter {
    pub fn parse(s: &str) -> RoomTypeFilter {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("any") {
            RoomTypeFilter::Any
        } else {
            RoomTypeFilter::Named(s.to_string())
        }
    }
}

/// Inclusive price bounds. `min > max` is accepted and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

impl PriceRange {
    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

/// User-selected constraints and sort order for one listings query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub search: String,
    pub price_range: PriceRange,
    pub room_type: RoomTypeFilter,
    pub amenities: BTreeSet<AmenityKey>,
    pub sort: SortOrder,
}

impl FilterSpec {
    /// Build a spec from decoded query-string pairs.
    ///
    /// Recognised keys: `location`, `min_price`, `max_price`, `room_type`,
    /// `amenity` (repeatable) and `sort`. Malformed values degrade to the
    /// defaults instead of failing.
    pub fn from_params(params: &[(String, String)]) -> FilterSpec {
        let mut spec = FilterSpec::default();

        for (k, v) in params {
            match k.as_str() {
                "location" => spec.search = v.trim().to_string(),
                "min_price" => {
                    if let Ok(n) = v.trim().parse() {
                        spec.price_range.min = n;
                    }
                }
                "max_price" => {
                    if let Ok(n) = v.trim().parse() {
                        spec.price_range.max = n;
                    }
                }
                "room_type" => spec.room_type = RoomTypeFilter::parse(v),
                "amenity" => {
                    if let Some(a) = AmenityKey::parse(v) {
                        spec.amenities.insert(a);
                    }
                }
                "sort" => spec.sort = SortOrder::parse(v),
                _ => {}
            }
        }

        spec
    }

    pub fn has_amenity(&self, key: AmenityKey) -> bool {
        self.amenities.contains(&key)
    }
}
