use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

/// Rendered without visitor context; error paths don't touch the session.
pub fn error_page(status: u16, message: &str) -> Markup {
    let heading = match status {
        404 => "Page Not Found",
        400 => "Something's not right",
        403 => "Access denied",
        _ => "Something went wrong",
    };

    desktop_layout(
        heading,
        &Nav::default(),
        html! {
            main class="container narrow center" {
                p class="status-code" { (status) }
                h1 { (heading) }
                p class="lead" { (message) }
                a href="/" class="btn" { "Return to Home" }
            }
        },
    )
}
