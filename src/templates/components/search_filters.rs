use crate::domain::filter::{
    AmenityKey, FilterSpec, RoomTypeFilter, SortOrder, PRICE_SLIDER_MAX, PRICE_SLIDER_MIN,
    PRICE_SLIDER_STEP,
};
use crate::domain::RoomType;
use maud::{html, Markup};

/// Sidebar filter form. Submits as a plain GET so results are linkable.
pub fn search_filters(spec: &FilterSpec) -> Markup {
    html! {
        form method="get" action="/listings" class="filters card" {
            h2 { "Filters" }

            label for="location" { "Location" }
            input
                type="text"
                id="location"
                name="location"
                placeholder="City, state or title"
                value=(spec.search);

            fieldset {
                legend { "Price range" }
                div class="row" {
                    label {
                        "Min "
                        input
                            type="number"
                            name="min_price"
                            min=(PRICE_SLIDER_MIN)
                            max=(PRICE_SLIDER_MAX)
                            step=(PRICE_SLIDER_STEP)
                            value=(spec.price_range.min);
                    }
                    label {
                        "Max "
                        input
                            type="number"
                            name="max_price"
                            min=(PRICE_SLIDER_MIN)
                            max=(PRICE_SLIDER_MAX)
                            step=(PRICE_SLIDER_STEP)
                            value=(spec.price_range.max);
                    }
                }
                p class="muted" {
                    "$" (spec.price_range.min) " - $" (spec.price_range.max)
                }
            }

            fieldset {
                legend { "Room type" }
                label class="choice" {
                    input
                        type="radio"
                        name="room_type"
                        value="any"
                        checked[spec.room_type == RoomTypeFilter::Any];
                    " Any"
                }
                @for rt in RoomType::ALL {
                    label class="choice" {
                        input
                            type="radio"
                            name="room_type"
                            value=(rt.as_str().to_lowercase())
                            checked[room_type_selected(&spec.room_type, rt)];
                        " " (rt)
                    }
                }
            }

            fieldset {
                legend { "Amenities" }
                @for key in AmenityKey::ALL {
                    label class="choice" {
                        input
                            type="checkbox"
                            name="amenity"
                            value=(key.key())
                            checked[spec.has_amenity(key)];
                        " " (key.caption())
                    }
                }
            }

            label for="sort" { "Sort by" }
            select id="sort" name="sort" {
                @for order in SortOrder::ALL {
                    option value=(order.key()) selected[spec.sort == order] { (order.caption()) }
                }
            }

            div class="row" {
                button type="submit" class="btn" { "Apply" }
                a href="/listings" class="btn outline" { "Reset" }
            }
        }
    }
}

fn room_type_selected(filter: &RoomTypeFilter, rt: RoomType) -> bool {
    match filter {
        RoomTypeFilter::Any => false,
        RoomTypeFilter::Named(name) => rt.as_str().eq_ignore_ascii_case(name),
    }
}
