use crate::domain::listing::Listing;
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

/// Whole-unit price with thousands separators, e.g. `$1,250,000`.
pub fn format_price(price: i64) -> String {
    if price < 0 {
        format!("-${}", format_number(price.unsigned_abs()))
    } else {
        format!("${}", format_number(price.unsigned_abs()))
    }
}

pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// A labelled `<select>`; `selected` is compared against each option value.
pub fn select_field(label: &str, name: &str, selected: &str, options: &[(String, String)]) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            select id=(name) name=(name) {
                @for (value, text) in options {
                    option value=(value) selected[value == selected] { (text) }
                }
            }
        }
    }
}

pub fn listing_card(listing: &Listing, is_favorite: bool) -> Markup {
    html! {
        article class="listing-card" id={ "listing-" (listing.id) } {
            div class="listing-image" {
                @if !listing.image.is_empty() {
                    img src=(listing.image) alt=(listing.title) loading="lazy";
                }
                span class="badge" { (listing.status.as_str()) }
                form method="post" action={ "/favorites/" (listing.id) } class="favorite" {
                    button type="submit"
                        class=(if is_favorite { "heart active" } else { "heart" })
                        aria-pressed=(if is_favorite { "true" } else { "false" })
                        title=(if is_favorite { "Remove from favorites" } else { "Save to favorites" })
                    { "♥" }
                }
                p class="price" { (format_price(listing.price)) }
            }

            div class="listing-body" {
                h3 { (listing.title) }
                p class="location" { (listing.address) ", " (listing.city) }
                @if !listing.description.is_empty() {
                    p class="description" { (listing.description) }
                }

                ul class="details" {
                    @if listing.bedrooms > 0 {
                        li { (listing.bedrooms) " Bed" }
                    }
                    @if listing.bathrooms > 0.0 {
                        li { (listing.bathrooms) " Bath" }
                    }
                    @if listing.square_feet > 0 {
                        li { (format_number(u64::from(listing.square_feet))) " sqft" }
                    }
                }

                @if !listing.features.is_empty() {
                    ul class="features" {
                        @for feature in &listing.features {
                            li { (feature) }
                        }
                    }
                }

                p class="type" { (listing.property_type.as_str()) }
            }
        }
    }
}
