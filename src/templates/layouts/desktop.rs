use crate::auth::user::UserType;
use maud::{html, Markup, DOCTYPE};

/// What the header needs to know about the visitor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nav {
    pub user_type: Option<UserType>,
}

pub fn desktop_layout(title: &str, nav: &Nav, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | MyDormSpace" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="site-header" {
                  a href="/" class="brand" {
                      svg
                          xmlns="http://www.w3.org/2000/svg"
                          width="24"
                          height="24"
                          viewBox="0 0 24 24"
                          fill="none"
                          stroke="#524ed2"
                          stroke-width="2"
                          stroke-linecap="round"
                          stroke-linejoin="round"
                      {
                          path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                          path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                          path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                          path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                      }
                      span { "MyDormSpace" }
                  }
                  nav {
                      ul {
                          li { a href="/" { "Home" } }
                          li { a href="/listings" { "Find Rooms" } }
                          li { a href="/about" { "About" } }
                          li { a href="/help" { "Help" } }
                      }
                  }

                  div class="auth-links" {
                      @match nav.user_type {
                          Some(t) => {
                              a href=(t.dashboard_path()) class="btn outline" { "Dashboard" }
                              form method="post" action="/logout" class="inline" {
                                  button type="submit" class="btn" { "Logout" }
                              }
                          }
                          None => {
                              a href="/login" class="btn outline" { "Login" }
                              a href="/signup" class="btn" { "Sign Up" }
                          }
                      }
                  }
              }
                (content)
              footer class="site-footer" {
                  p { "MyDormSpace. Student housing made simple." }
              }
            }
        }
    }
}
