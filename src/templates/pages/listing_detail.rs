// templates/pages/listing_detail.rs

use crate::domain::Listing;
use crate::templates::{
    components::{favorite_button, notice_banner, rating_badge, Notice},
    desktop_layout, Nav,
};
use maud::{html, Markup};

pub struct ListingDetailVm<'a> {
    pub listing: &'a Listing,
    pub is_favorite: bool,
    /// The visitor owns this listing and may edit it.
    pub can_edit: bool,
    pub notice: Option<Notice>,
}

pub fn listing_detail_page(nav: &Nav, vm: &ListingDetailVm) -> Markup {
    let listing = vm.listing;
    let self_path = format!("/listing/{}", listing.id);

    desktop_layout(
        &listing.title,
        nav,
        html! {
            main class="container" {
                (notice_banner(vm.notice))
                p { a href="/listings" { "← Back to listings" } }

                div class="gallery" {
                    @for (i, src) in listing.images.iter().enumerate() {
                        img
                            src=(src)
                            alt=(format!("{} photo {}", listing.title, i + 1))
                            class=(if i == 0 { "gallery-main" } else { "gallery-thumb" });
                    }
                }

                div class="detail-layout" {
                    section class="detail-main" {
                        div class="row" {
                            h1 { (listing.title) }
                            (favorite_button(&listing.id, vm.is_favorite, &self_path))
                        }
                        p class="muted" { (listing.full_address()) }
                        p {
                            @if listing.reviews.is_empty() {
                                span class="muted" { "No reviews yet" }
                            } @else {
                                (rating_badge(listing))
                            }
                            " · "
                            span class="badge" { (listing.room_type) }
                        }
                        p class="price" { "$" (listing.price) span class="muted" { "/month" } }

                        h2 { "About This Space" }
                        p { (listing.description) }

                        h2 { "Amenities" }
                        ul class="amenity-list" {
                            @for amenity in &listing.amenities {
                                li { (amenity) }
                            }
                        }

                        @if !listing.house_rules.is_empty() {
                            h2 { "House Rules" }
                            ul {
                                @for rule in &listing.house_rules {
                                    li { (rule) }
                                }
                            }
                        }

                        h2 { "Reviews (" (listing.reviews.len()) ")" }
                        @for review in &listing.reviews {
                            article class="review" data-review-id=(review.id) {
                                div class="row" {
                                    strong { (review.author) }
                                    span class="muted" { (review.date.format("%Y-%m-%d")) }
                                }
                                p class="stars" aria-label=(format!("{} out of 5", review.rating)) {
                                    @for i in 0..5 {
                                        @if (i as f32) < review.rating { "★" } @else { "☆" }
                                    }
                                }
                                p { (review.text) }
                            }
                        }
                    }

                    aside class="detail-sidebar card" {
                        div class="owner" {
                            @if let Some(img) = &listing.owner.image {
                                img src=(img) alt=(listing.owner.name) class="avatar";
                            }
                            div {
                                h3 { "Hosted by " (listing.owner.name) }
                                p class="muted" { "Response rate: " (listing.owner.response_rate) }
                            }
                        }

                        form method="post" action=(format!("/listing/{}/contact", listing.id)) {
                            input type="hidden" name="channel" value="message";
                            button type="submit" class="btn block" { "Message Owner" }
                        }
                        form method="post" action=(format!("/listing/{}/contact", listing.id)) {
                            input type="hidden" name="channel" value="phone";
                            button type="submit" class="btn outline block" { "Request Phone Call" }
                        }

                        h4 { "Available From" }
                        p class="muted" { "Immediate" }
                        h4 { "Room Type" }
                        p class="muted" { (listing.room_type) }

                        @if vm.can_edit {
                            a href=(format!("/owner/listings/{}/edit", listing.id)) class="btn outline block" {
                                "Edit listing"
                            }
                        }
                    }
                }
            }
        },
    )
}
