pub mod auth;
pub mod dashboard;
pub mod error;
pub mod home;
pub mod listing_detail;
pub mod listing_form;
pub mod listings;
pub mod owner_dashboard;
pub mod static_pages;

pub use auth::{login_page, signup_page, AuthFormVm};
pub use dashboard::dashboard_page;
pub use error::error_page;
pub use home::home_page;
pub use listing_detail::{listing_detail_page, ListingDetailVm};
pub use listing_form::{listing_form_page, ListingFormVm};
pub use listings::listings_page;
pub use owner_dashboard::{owner_dashboard_page, OwnerDashboardVm, OwnerStats};
pub use static_pages::{about_page, help_page};
