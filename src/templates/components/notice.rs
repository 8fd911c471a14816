use maud::{html, Markup};

/// One-shot confirmation shown after a redirect (`?notice=<key>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    FavoriteAdded,
    FavoriteRemoved,
    ContactSent,
    ListingCreated,
    ListingUpdated,
    ListingDeleted,
    RequestAccepted,
    StudentContacted,
    RequestDeclined,
    LoggedOut,
}

impl Notice {
    pub const ALL: [Notice; 10] = [
        Notice::FavoriteAdded,
        Notice::FavoriteRemoved,
        Notice::ContactSent,
        Notice::ListingCreated,
        Notice::ListingUpdated,
        Notice::ListingDeleted,
        Notice::RequestAccepted,
        Notice::StudentContacted,
        Notice::RequestDeclined,
        Notice::LoggedOut,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Notice::FavoriteAdded => "favorite_added",
            Notice::FavoriteRemoved => "favorite_removed",
            Notice::ContactSent => "contact_sent",
            Notice::ListingCreated => "listing_created",
            Notice::ListingUpdated => "listing_updated",
            Notice::ListingDeleted => "listing_deleted",
            Notice::RequestAccepted => "request_accepted",
            Notice::StudentContacted => "student_contacted",
            Notice::RequestDeclined => "request_declined",
            Notice::LoggedOut => "logged_out",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::FavoriteAdded => "Added to favorites",
            Notice::FavoriteRemoved => "Removed from favorites",
            Notice::ContactSent => "Contact request sent to owner (simulated)",
            Notice::ListingCreated => "Listing created successfully",
            Notice::ListingUpdated => "Listing updated successfully",
            Notice::ListingDeleted => "Listing deleted successfully",
            Notice::RequestAccepted => "Request accepted (simulated)",
            Notice::StudentContacted => "Message sent to student (simulated)",
            Notice::RequestDeclined => "Request declined (simulated)",
            Notice::LoggedOut => "Logged out successfully!",
        }
    }

    pub fn parse(key: &str) -> Option<Notice> {
        Notice::ALL.into_iter().find(|n| n.key() == key)
    }

    /// Set `notice=<key>` on a local path, replacing any earlier notice.
    pub fn append_to(&self, path: &str) -> String {
        let (base, query) = path.split_once('?').unwrap_or((path, ""));
        let pair = format!("notice={}", self.key());
        let mut parts: Vec<&str> = query
            .split('&')
            .filter(|p| !p.is_empty() && !p.starts_with("notice="))
            .collect();
        parts.push(&pair);
        format!("{base}?{}", parts.join("&"))
    }
}

pub fn notice_banner(notice: Option<Notice>) -> Markup {
    html! {
        @if let Some(n) = notice {
            div class="notice" role="status" { (n.message()) }
        }
    }
}
