// templates/pages/home.rs

use crate::domain::Listing;
use crate::templates::{
    components::{notice_banner, property_card, Notice},
    desktop_layout, Nav,
};
use maud::{html, Markup};

pub fn home_page(nav: &Nav, featured: &[Listing], notice: Option<Notice>) -> Markup {
    desktop_layout(
        "Home",
        nav,
        html! {
            (notice_banner(notice))

            section class="hero" {
                div class="hero-inner" {
                    h1 { "Welcome to MyDormSpace" }
                    p class="lead" { "Find Your Perfect Student Room" }

                    form method="get" action="/listings" class="hero-search" {
                        input
                            type="text"
                            name="location"
                            placeholder="Search by city, state or title"
                            aria-label="Location";
                        button type="submit" class="btn" { "Search" }
                    }

                    div class="row center" {
                        a href="/listings" class="btn" { "Browse Rooms" }
                        a href="/owner/listings/new" class="btn outline" { "List Your Room" }
                    }
                }
            }

            @if !featured.is_empty() {
                main class="container" {
                    h2 { "Latest rooms" }
                    div class="grid" {
                        @for listing in featured {
                            (property_card(listing, None, "/"))
                        }
                    }
                }
            }
        },
    )
}
