// templates/pages/auth.rs

use crate::auth::UserType;
use crate::templates::{
    components::{notice_banner, Notice},
    desktop_layout, Nav,
};
use maud::{html, Markup};

/// Sticky form values and the message from the last failed attempt.
/// Passwords are never echoed back.
#[derive(Debug, Clone, Default)]
pub struct AuthFormVm {
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    pub error: Option<String>,
    pub notice: Option<Notice>,
}

pub fn login_page(nav: &Nav, vm: &AuthFormVm) -> Markup {
    desktop_layout(
        "Log in",
        nav,
        html! {
            main class="container narrow" {
                (notice_banner(vm.notice))
                h1 { "Welcome Back" }
                p class="lead" { "Log in to your MyDormSpace account" }

                (form_error(vm.error.as_deref()))

                form method="post" action="/login" class="card stack" {
                    (user_type_choice(vm.user_type))

                    label for="email" { "Email" }
                    input type="email" id="email" name="email" value=(vm.email) required;

                    label for="password" { "Password" }
                    input type="password" id="password" name="password" required;

                    button type="submit" class="btn block" { "Log in" }
                }

                p class="muted center" {
                    "Don't have an account? " a href="/signup" { "Sign up" }
                }
            }
        },
    )
}

pub fn signup_page(nav: &Nav, vm: &AuthFormVm) -> Markup {
    desktop_layout(
        "Sign up",
        nav,
        html! {
            main class="container narrow" {
                h1 { "Create an Account" }
                p class="lead" { "Join MyDormSpace to find or list student rooms" }

                (form_error(vm.error.as_deref()))

                form method="post" action="/signup" class="card stack" {
                    (user_type_choice(vm.user_type))

                    label for="name" { "Full Name" }
                    input type="text" id="name" name="name" value=(vm.name) required;

                    label for="email" { "Email" }
                    input type="email" id="email" name="email" value=(vm.email) required;

                    label for="password" { "Password" }
                    input type="password" id="password" name="password" minlength="6" required;

                    label for="confirm_password" { "Confirm Password" }
                    input type="password" id="confirm_password" name="confirm_password" required;

                    button type="submit" class="btn block" { "Create account" }
                }

                p class="muted center" {
                    "Already have an account? " a href="/login" { "Log in" }
                }
            }
        },
    )
}

fn form_error(message: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = message {
            div class="form-error" role="alert" { (msg) }
        }
    }
}

fn user_type_choice(selected: UserType) -> Markup {
    html! {
        fieldset class="segmented" {
            legend { "I am a" }
            label class="choice" {
                input
                    type="radio"
                    name="user_type"
                    value=(UserType::Student.as_str())
                    checked[selected == UserType::Student];
                " Student"
            }
            label class="choice" {
                input
                    type="radio"
                    name="user_type"
                    value=(UserType::Owner.as_str())
                    checked[selected == UserType::Owner];
                " Property Owner"
            }
        }
    }
}
