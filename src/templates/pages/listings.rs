// templates/pages/listings.rs

use crate::domain::{FilterSpec, Listing};
use crate::templates::{
    components::{empty_state, notice_banner, property_card, search_filters, Notice},
    desktop_layout, Nav,
};
use maud::{html, Markup};

/// Search page. Anonymous visitors pass no favorites; their heart toggles lead to login.
pub fn listings_page(
    nav: &Nav,
    spec: &FilterSpec,
    results: &[Listing],
    favorites: &[String],
    return_to: &str,
    notice: Option<Notice>,
) -> Markup {
    desktop_layout(
        "Find Rooms",
        nav,
        html! {
            main class="container" {
                (notice_banner(notice))
                h1 { "Find Your Room" }

                div class="listings-layout" {
                    aside { (search_filters(spec)) }

                    section class="results" {
                        p class="result-count" {
                            (results.len()) " Result" @if results.len() != 1 { "s" }
                        }

                        @if results.is_empty() {
                            (empty_state(
                                "No listings found",
                                "Try adjusting your filters to see more results.",
                                Some(("/listings", "Clear filters")),
                            ))
                        } @else {
                            div class="grid" {
                                @for listing in results {
                                    (property_card(
                                        listing,
                                        Some(favorites.contains(&listing.id)),
                                        return_to,
                                    ))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
