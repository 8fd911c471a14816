// src/domain/booking.rs
//
// Bookings are not persisted. The dashboards show a fixed sample set tied to
// seed listings, and owner actions on requests only log.

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Pending,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "Confirmed"),
            BookingStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// A student's stay at a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: &'static str,
    pub listing_id: &'static str,
    pub status: BookingStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: NaiveDate,
}

/// A student's request to book one of an owner's listings.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub id: &'static str,
    pub listing_id: &'static str,
    pub student_name: &'static str,
    pub student_email: &'static str,
    pub message: &'static str,
    pub created_at: NaiveDate,
}

/// What an owner can do with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    Accept,
    Contact,
    Decline,
}

impl RequestAction {
    pub fn parse(s: &str) -> Option<RequestAction> {
        match s {
            "accept" => Some(RequestAction::Accept),
            "contact" => Some(RequestAction::Contact),
            "decline" => Some(RequestAction::Decline),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestAction::Accept => "accept",
            RequestAction::Contact => "contact",
            RequestAction::Decline => "decline",
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Bookings shown on every student dashboard.
pub fn sample_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "booking-001",
            listing_id: "listing-001",
            status: BookingStatus::Confirmed,
            start_date: date(2023, 9, 1),
            end_date: date(2024, 5, 31),
            created_at: date(2023, 6, 15),
        },
        Booking {
            id: "booking-002",
            listing_id: "listing-003",
            status: BookingStatus::Pending,
            start_date: date(2023, 10, 1),
            end_date: date(2024, 6, 30),
            created_at: date(2023, 7, 22),
        },
    ]
}

/// Requests shown on every owner dashboard.
pub fn sample_requests() -> Vec<BookingRequest> {
    vec![
        BookingRequest {
            id: "request-001",
            listing_id: "listing-001",
            student_name: "Michael Chen",
            student_email: "michael.chen@example.com",
            message: "Hi, I'm interested in renting this room for the upcoming semester. Is it still available? I'd like to schedule a viewing.",
            created_at: date(2023, 7, 15),
        },
        BookingRequest {
            id: "request-002",
            listing_id: "listing-003",
            student_name: "Sarah Johnson",
            student_email: "sarah.j@example.com",
            message: "Hello, I'm a graduate student looking for a quiet place to stay. Your listing looks perfect. Can we discuss more details?",
            created_at: date(2023, 7, 20),
        },
    ]
}

pub fn find_request(id: &str) -> Option<BookingRequest> {
    sample_requests().into_iter().find(|r| r.id == id)
}
