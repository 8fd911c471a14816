// templates/pages/static_pages.rs

use crate::templates::{components::card, desktop_layout, Nav};
use maud::{html, Markup};

const FAQ: [(&str, &str); 5] = [
    (
        "How do I search for a room?",
        "Use the search bar on the homepage or the Find Rooms page. Enter a location, then narrow the results by price, room type and amenities.",
    ),
    (
        "How do I contact property owners?",
        "Open a listing and use Message Owner or Request Phone Call. You need to log in first.",
    ),
    (
        "How do I list my property on MyDormSpace?",
        "Sign up as a property owner. From your owner dashboard, click \"Add New Listing\".",
    ),
    (
        "Are there any fees for using MyDormSpace?",
        "MyDormSpace is free for students. Owners can create basic listings at no cost.",
    ),
    (
        "How do I reset my password?",
        "Contact support with the email address you signed up with and we will help you regain access.",
    ),
];

pub fn about_page(nav: &Nav) -> Markup {
    desktop_layout(
        "About",
        nav,
        html! {
            main class="container narrow prose" {
                h1 { "About MyDormSpace" }
                p {
                    "MyDormSpace connects students with affordable, convenient housing near their "
                    "universities, and helps property owners reach reliable student tenants."
                }

                h2 { "For Students" }
                ul {
                    li { "Search by location, price and amenities" }
                    li { "View detailed information about each property" }
                    li { "Contact property owners directly" }
                    li { "Save favorite listings for later" }
                    li { "Read reviews from previous student tenants" }
                }

                h2 { "For Property Owners" }
                ul {
                    li { "List your property for free" }
                    li { "Manage your listings from one dashboard" }
                    li { "Build a reputation through student reviews" }
                }

                h2 { "Contact Us" }
                p {
                    "Email: "
                    a href="mailto:info@mydormspace.com" { "info@mydormspace.com" }
                }
            }
        },
    )
}

pub fn help_page(nav: &Nav) -> Markup {
    desktop_layout(
        "Help",
        nav,
        html! {
            main class="container narrow" {
                h1 { "Help & FAQ" }

                (card("Frequently Asked Questions", html! {
                    @for (question, answer) in FAQ {
                        div class="faq" {
                            h3 { (question) }
                            p class="muted" { (answer) }
                        }
                    }
                }))

                (card("Need More Help?", html! {
                    p { strong { "Email: " } "support@mydormspace.com" }
                    p { strong { "Phone: " } "(555) 123-4567" }
                    p { strong { "Hours: " } "Monday - Friday, 9am - 5pm EST" }
                }))
            }
        },
    )
}
