use crate::auth::User;
use crate::domain::{Booking, Listing};
use crate::templates::{
    components::{empty_state, notice_banner, profile_panel, rating_badge, Notice},
    desktop_layout, Nav,
};
use maud::{html, Markup};

/// Student dashboard: welcome card, saved favorites, bookings and profile.
pub fn dashboard_page(
    nav: &Nav,
    user: &User,
    favorites: &[Listing],
    bookings: &[(Booking, Listing)],
    notice: Option<Notice>,
) -> Markup {
    desktop_layout(
        "Dashboard",
        nav,
        html! {
            main class="container" {
                (notice_banner(notice))
                h1 { "My Dashboard" }

                section class="card" {
                    h2 { "Welcome back, " (user.name) "!" }
                    p {
                        "Your student dashboard gives you access to your saved favorites and booking requests."
                    }
                    p class="muted" {
                        "Signed in as " strong { (user.email) }
                        " · member since " (user.created_at.format("%B %Y"))
                    }
                }

                nav class="tabs" {
                    a href="#favorites" { "Saved Favorites" }
                    a href="#bookings" { "My Bookings" }
                    a href="#profile" { "Profile Settings" }
                }

                section id="favorites" {
                    h2 { "Saved Favorites" }
                    @if favorites.is_empty() {
                        (empty_state(
                            "No saved favorites yet",
                            "Browse listings and click the heart icon to save them here.",
                            Some(("/listings", "Browse Listings")),
                        ))
                    } @else {
                        div class="grid" {
                            @for listing in favorites {
                                (favorite_row(listing))
                            }
                        }
                    }
                }

                section id="bookings" class="stack" {
                    h2 { "My Bookings" }
                    @if bookings.is_empty() {
                        (empty_state(
                            "No bookings yet",
                            "Once you request to book a property, you'll see it here.",
                            Some(("/listings", "Find Rooms")),
                        ))
                    } @else {
                        @for (booking, listing) in bookings {
                            (booking_row(booking, listing))
                        }
                    }
                }

                (profile_panel("Your Profile Information", user, &[], None))
            }
        },
    )
}

fn booking_row(booking: &Booking, listing: &Listing) -> Markup {
    let status_class = format!("badge {}", booking.status.as_str());
    html! {
        article class="card booking" data-booking-id=(booking.id) {
            @if let Some(src) = listing.cover_image() {
                img src=(src) alt=(listing.title) loading="lazy";
            }
            div class="stack" {
                div class="row" {
                    h3 { (listing.title) }
                    span class=(status_class) { (booking.status) }
                }
                p class="muted" { (listing.location.city) ", " (listing.location.state) }
                p {
                    (booking.start_date.format("%m/%d/%Y")) " - " (booking.end_date.format("%m/%d/%Y"))
                }
                p class="muted" { "Requested " (booking.created_at.format("%m/%d/%Y")) }
                div class="row" {
                    a href=(format!("/listing/{}", listing.id)) class="btn" { "View Listing" }
                    form method="post" action=(format!("/listing/{}/contact", listing.id)) class="inline" {
                        button type="submit" class="btn outline" { "Contact Owner" }
                    }
                }
            }
        }
    }
}

fn favorite_row(listing: &Listing) -> Markup {
    html! {
        article class="property-card" {
            a href=(format!("/listing/{}", listing.id)) {
                @if let Some(src) = listing.cover_image() {
                    img src=(src) alt=(listing.title) loading="lazy";
                }
            }
            div class="property-card-body" {
                h3 { a href=(format!("/listing/{}", listing.id)) { (listing.title) } }
                (rating_badge(listing))
                p class="muted" { (listing.location.city) ", " (listing.location.state) }
                p class="price" { "$" (listing.price) span class="muted" { "/month" } }
                form method="post" action=(format!("/listing/{}/favorite", listing.id)) {
                    input type="hidden" name="return_to" value="/dashboard";
                    button type="submit" class="btn outline" { "Remove" }
                }
            }
        }
    }
}
