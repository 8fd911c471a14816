use crate::auth::User;
use crate::domain::{BookingRequest, Listing};
use crate::templates::{
    components::{empty_state, notice_banner, profile_panel, Notice},
    desktop_layout, Nav,
};
use maud::{html, Markup};

/// Headline numbers on the owner dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerStats {
    pub total_listings: usize,
    pub active_requests: usize,
    pub total_views: u32,
}

const DEMO_PHONE: &str = "(555) 123-4567";
const DEMO_ABOUT: &str = "I'm a property owner with several student accommodations near major universities. I pride myself on maintaining clean, safe, and comfortable spaces for students.";

pub struct OwnerDashboardVm<'a> {
    pub user: &'a User,
    pub stats: OwnerStats,
    /// Listings the owner created.
    pub listings: &'a [Listing],
    /// Read-only catalog examples, shown while `listings` is empty.
    pub samples: &'a [Listing],
    pub requests: &'a [(BookingRequest, Listing)],
    pub notice: Option<Notice>,
}

pub fn owner_dashboard_page(nav: &Nav, vm: &OwnerDashboardVm) -> Markup {
    let OwnerDashboardVm {
        user,
        stats,
        listings,
        samples,
        requests,
        notice,
    } = *vm;

    desktop_layout(
        "Owner Dashboard",
        nav,
        html! {
            main class="container" {
                (notice_banner(notice))
                div class="row" {
                    h1 { "Owner Dashboard" }
                    a href="/owner/listings/new" class="btn" { "+ Add New Listing" }
                }
                p class="muted" { "Signed in as " strong { (user.name) } " (" (user.email) ")" }

                div class="stats" {
                    (stat("Total Listings", stats.total_listings.to_string()))
                    (stat("Active Requests", stats.active_requests.to_string()))
                    (stat("Total Views", stats.total_views.to_string()))
                }

                nav class="tabs" {
                    a href="#listings" { "My Listings" }
                    a href="#requests" { "Booking Requests" }
                    a href="#profile" { "Profile Settings" }
                }

                h2 id="listings" { "My Listings" }
                @if listings.is_empty() {
                    (empty_state(
                        "No listings yet",
                        "Create your first listing to start receiving booking requests.",
                        Some(("/owner/listings/new", "Add Listing")),
                    ))
                    @if !samples.is_empty() {
                        h3 { "Sample listings" }
                        p class="muted" { "How published listings look to students." }
                        ul class="sample-listings" {
                            @for l in samples {
                                li {
                                    a href=(format!("/listing/{}", l.id)) { (l.title) }
                                    " · " (l.location.city) ", " (l.location.state)
                                    " · $" (l.price) "/mo"
                                }
                            }
                        }
                    }
                } @else {
                    table class="listing-table" {
                        thead {
                            tr {
                                th { "Listing" }
                                th { "Location" }
                                th { "Price" }
                                th { "Type" }
                                th {}
                            }
                        }
                        tbody {
                            @for l in listings {
                                tr {
                                    td { a href=(format!("/listing/{}", l.id)) { (l.title) } }
                                    td { (l.location.city) ", " (l.location.state) }
                                    td { "$" (l.price) "/mo" }
                                    td { (l.room_type) }
                                    td class="actions" {
                                        a href=(format!("/owner/listings/{}/edit", l.id)) class="btn outline" { "Edit" }
                                        form method="post" action=(format!("/owner/listings/{}/delete", l.id)) class="inline" {
                                            button type="submit" class="btn danger" { "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                section id="requests" class="stack" {
                    h2 { "Booking Requests" }
                    @if requests.is_empty() {
                        (empty_state(
                            "No booking requests yet",
                            "When students request to book your properties, they'll appear here.",
                            None,
                        ))
                    } @else {
                        @for (request, listing) in requests {
                            (request_row(request, listing))
                        }
                    }
                }

                (profile_panel(
                    "Owner Profile Information",
                    user,
                    &[("Phone Number", DEMO_PHONE)],
                    Some(DEMO_ABOUT),
                ))
            }
        },
    )
}

fn request_row(request: &BookingRequest, listing: &Listing) -> Markup {
    let action = |name: &str| format!("/owner/requests/{}/{name}", request.id);
    html! {
        article class="card booking" data-request-id=(request.id) {
            @if let Some(src) = listing.cover_image() {
                img src=(src) alt=(listing.title) loading="lazy";
            }
            div class="stack" {
                div class="row" {
                    h3 {
                        "Request for: "
                        a href=(format!("/listing/{}", listing.id)) { (listing.title) }
                    }
                    span class="muted" { (request.created_at.format("%m/%d/%Y")) }
                }
                p { strong { (request.student_name) } br; span class="muted" { (request.student_email) } }
                blockquote { (request.message) }
                div class="row" {
                    form method="post" action=(action("accept")) class="inline" {
                        button type="submit" class="btn" { "Accept" }
                    }
                    form method="post" action=(action("contact")) class="inline" {
                        button type="submit" class="btn outline" { "Contact Student" }
                    }
                    form method="post" action=(action("decline")) class="inline" {
                        button type="submit" class="btn danger" { "Decline" }
                    }
                }
            }
        }
    }
}

fn stat(title: &str, value: String) -> Markup {
    html! {
        div class="stat card" {
            h3 { (title) }
            p class="stat-value" { (value) }
        }
    }
}
