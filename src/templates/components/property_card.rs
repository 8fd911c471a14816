use crate::domain::Listing;
use maud::{html, Markup};

/// "★ 4.8 (2)" or nothing when the listing has no reviews.
pub fn rating_badge(listing: &Listing) -> Markup {
    html! {
        @if let Some(avg) = listing.average_rating() {
            span class="rating" {
                "★ " (format!("{avg:.1}"))
                span class="muted" { " (" (listing.reviews.len()) ")" }
            }
        }
    }
}

/// Heart toggle; only rendered for signed-in visitors.
pub fn favorite_button(listing_id: &str, is_favorite: bool, return_to: &str) -> Markup {
    html! {
        form method="post" action=(format!("/listing/{listing_id}/favorite")) class="favorite-form" {
            input type="hidden" name="return_to" value=(return_to);
            button
                type="submit"
                class=(if is_favorite { "favorite is-favorite" } else { "favorite" })
                aria-label=(if is_favorite { "Remove from favorites" } else { "Add to favorites" })
            {
                (if is_favorite { "♥" } else { "♡" })
            }
        }
    }
}

/// Grid card linking to the listing detail page.
///
/// `favorite` is `Some(saved?)` for signed-in visitors and `None` otherwise.
pub fn property_card(listing: &Listing, favorite: Option<bool>, return_to: &str) -> Markup {
    html! {
        article class="property-card" {
            div class="property-card-media" {
                a href=(format!("/listing/{}", listing.id)) {
                    @if let Some(src) = listing.cover_image() {
                        img src=(src) alt=(listing.title) loading="lazy";
                    }
                }
                @if let Some(is_favorite) = favorite {
                    (favorite_button(&listing.id, is_favorite, return_to))
                }
                span class="badge room-type" { (listing.room_type) }
            }
            div class="property-card-body" {
                div class="row" {
                    h3 {
                        a href=(format!("/listing/{}", listing.id)) { (listing.title) }
                    }
                    (rating_badge(listing))
                }
                p class="muted" { (listing.location.city) ", " (listing.location.state) }
                p class="price" { "$" (listing.price) span class="muted" { "/month" } }
                ul class="amenity-chips" {
                    @for amenity in listing.amenities.iter().take(3) {
                        li { (amenity) }
                    }
                    @if listing.amenities.len() > 3 {
                        li class="muted" { "+" (listing.amenities.len() - 3) " more" }
                    }
                }
            }
        }
    }
}
