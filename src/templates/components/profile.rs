use crate::auth::{User, UserType};
use maud::{html, Markup};

/// Read-only account details. Extra rows follow the standard four.
pub fn profile_panel(
    heading: &str,
    user: &User,
    extra: &[(&str, &str)],
    about: Option<&str>,
) -> Markup {
    let account_type = match user.user_type {
        UserType::Student => "Student",
        UserType::Owner => "Property Owner",
    };

    html! {
        section id="profile" class="card stack profile" {
            h2 { (heading) }
            div class="row" {
                (readonly_field("Full Name", &user.name))
                (readonly_field("Email", &user.email))
            }
            div class="row" {
                (readonly_field("Account Type", account_type))
                (readonly_field("Member Since", &user.created_at.format("%m/%d/%Y").to_string()))
            }
            @for (label, value) in extra {
                (readonly_field(label, value))
            }
            @if let Some(text) = about {
                label {
                    "About Me (Shown to Students)"
                    textarea rows="3" readonly { (text) }
                }
            }
            p class="muted" { "Profile editing is not available yet." }
        }
    }
}

fn readonly_field(label: &str, value: &str) -> Markup {
    html! {
        label {
            (label)
            input type="text" value=(value) readonly;
        }
    }
}
