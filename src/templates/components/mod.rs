use maud::{html, Markup};

pub mod notice;
pub mod profile;
pub mod property_card;
pub mod search_filters;

pub use notice::{notice_banner, Notice};
pub use profile::profile_panel;
pub use property_card::{favorite_button, property_card, rating_badge};
pub use search_filters::search_filters;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Centered placeholder for empty lists.
pub fn empty_state(heading: &str, text: &str, action: Option<(&str, &str)>) -> Markup {
    html! {
        div class="empty-state" {
            h3 { (heading) }
            p { (text) }
            @if let Some((href, label)) = action {
                a href=(href) class="btn" { (label) }
            }
        }
    }
}
