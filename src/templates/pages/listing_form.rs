use crate::domain::draft::{ListingDraft, FORM_AMENITIES, MAX_IMAGES};
use crate::domain::RoomType;
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub struct ListingFormVm<'a> {
    /// `Some(id)` when editing an existing listing.
    pub listing_id: Option<&'a str>,
    pub draft: &'a ListingDraft,
    pub error: Option<String>,
}

impl ListingFormVm<'_> {
    fn action(&self) -> String {
        match self.listing_id {
            Some(id) => format!("/owner/listings/{id}"),
            None => "/owner/listings".to_string(),
        }
    }
}

pub fn listing_form_page(nav: &Nav, vm: &ListingFormVm) -> Markup {
    let d = vm.draft;
    let heading = if vm.listing_id.is_some() { "Edit Listing" } else { "Create New Listing" };

    desktop_layout(
        heading,
        nav,
        html! {
            main class="container narrow" {
                p { a href="/owner/dashboard" { "← Back to dashboard" } }
                h1 { (heading) }

                @if let Some(msg) = &vm.error {
                    div class="form-error" role="alert" { (msg) }
                }

                form method="post" action=(vm.action()) class="stack" {
                    section class="card stack" {
                        h2 { "Basic Information" }

                        label for="title" { "Listing Title *" }
                        input type="text" id="title" name="title" value=(d.title)
                            placeholder="e.g., Cozy Single Room near University Campus";

                        label for="description" { "Description *" }
                        textarea id="description" name="description" rows="5"
                            placeholder="Describe your space in detail..." { (d.description) }

                        div class="row" {
                            label {
                                "Monthly Price ($) *"
                                input type="number" name="price" min="1" value=(d.price) placeholder="e.g., 500";
                            }
                            label {
                                "Room Type"
                                select name="room_type" {
                                    @for rt in RoomType::ALL {
                                        option
                                            value=(rt.as_str())
                                            selected[rt.as_str().eq_ignore_ascii_case(d.room_type.trim())]
                                        { (rt) }
                                    }
                                }
                            }
                        }
                    }

                    section class="card stack" {
                        h2 { "Location" }

                        label for="address" { "Street Address *" }
                        input type="text" id="address" name="address" value=(d.address)
                            placeholder="e.g., 123 University Ave";

                        div class="row" {
                            label { "City *" input type="text" name="city" value=(d.city) placeholder="e.g., Boston"; }
                            label { "State" input type="text" name="state" value=(d.state) placeholder="e.g., Massachusetts"; }
                            label { "Zip Code" input type="text" name="zip_code" value=(d.zip_code) placeholder="e.g., 02115"; }
                        }
                        div class="row" {
                            label { "Latitude" input type="text" name="latitude" value=(d.latitude) placeholder="e.g., 42.350"; }
                            label { "Longitude" input type="text" name="longitude" value=(d.longitude) placeholder="e.g., -71.105"; }
                        }
                    }

                    section class="card stack" {
                        h2 { "Amenities & House Rules" }
                        div class="checkbox-grid" {
                            @for amenity in FORM_AMENITIES {
                                label class="choice" {
                                    input
                                        type="checkbox"
                                        name="amenity"
                                        value=(amenity)
                                        checked[d.amenities.iter().any(|a| a == amenity)];
                                    " " (amenity)
                                }
                            }
                        }

                        label for="house_rules" { "House Rules" }
                        textarea id="house_rules" name="house_rules" rows="4"
                            placeholder="List your house rules, one per line..." { (d.house_rules) }
                    }

                    section class="card stack" {
                        h2 { "Photos" }
                        p class="muted" {
                            "Up to " (MAX_IMAGES) " image URLs. A placeholder photo is used when none are given."
                        }
                        @for src in &d.images {
                            input type="url" name="image" value=(src);
                        }
                        @for _ in d.images.len()..MAX_IMAGES {
                            input type="url" name="image" placeholder="https://...";
                        }
                    }

                    div class="row" {
                        a href="/owner/dashboard" class="btn outline" { "Cancel" }
                        button type="submit" class="btn" {
                            @if vm.listing_id.is_some() { "Update Listing" } @else { "Create Listing" }
                        }
                    }
                }
            }
        },
    )
}
