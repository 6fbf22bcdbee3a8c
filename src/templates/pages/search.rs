// templates/pages/search.rs

use crate::domain::favorites::Favorites;
use crate::domain::filter::{FilterSpec, SortKey};
use crate::domain::listing::{Listing, PropertyType};
use crate::templates::components::{format_price, listing_card, select_field};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct SearchVm<'a> {
    pub spec: &'a FilterSpec,
    pub results: &'a [&'a Listing],
    pub favorites: &'a Favorites,
    /// Current filters, URL-encoded, for the download links.
    pub query: &'a str,
    /// What "No Max" stands for in the price selector.
    pub default_max_price: i64,
}

/// Option list from fixed values, plus the current value if a hand-edited URL
/// picked something the form does not offer.
fn options_with_current<T, F>(values: &[T], current: T, text: F) -> Vec<(String, String)>
where
    T: PartialEq + Copy + ToString,
    F: Fn(T) -> String,
{
    let mut out: Vec<(String, String)> = values
        .iter()
        .map(|v| (v.to_string(), text(*v)))
        .collect();
    if !values.contains(&current) {
        out.push((current.to_string(), text(current)));
    }
    out
}

fn filter_form(vm: &SearchVm) -> Markup {
    let spec = vm.spec;

    let mut type_options = vec![("All".to_string(), "All Types".to_string())];
    type_options.extend(
        PropertyType::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), t.as_str().to_string())),
    );

    let bedroom_options = options_with_current(&[0, 1, 2, 3, 4, 5], spec.min_bedrooms, |n| {
        if n == 0 {
            "Any".to_string()
        } else {
            format!("{n}+")
        }
    });
    let bathroom_options =
        options_with_current(&[0.0, 1.0, 2.0, 3.0, 4.0], spec.min_bathrooms, |n| {
            if n == 0.0 {
                "Any".to_string()
            } else {
                format!("{n}+")
            }
        });
    let min_price_options = options_with_current(
        &[0, 100_000, 200_000, 300_000, 400_000, 500_000],
        spec.min_price,
        |p| {
            if p == 0 {
                "No Min".to_string()
            } else {
                format_price(p)
            }
        },
    );
    let max_price_options = options_with_current(
        &[
            vm.default_max_price,
            200_000,
            300_000,
            400_000,
            500_000,
            600_000,
        ],
        spec.max_price,
        |p| {
            if p == vm.default_max_price {
                "No Max".to_string()
            } else {
                format_price(p)
            }
        },
    );
    let sort_options: Vec<(String, String)> = SortKey::CHOICES
        .iter()
        .map(|k| (k.as_str().to_string(), k.label().to_string()))
        .collect();

    html! {
        form method="get" action="/" class="search-filters" {
            div class="field" {
                label for="location" { "Location" }
                input
                    type="text"
                    id="location"
                    name="location"
                    placeholder="City or Address"
                    value=(spec.location);
            }
            (select_field("Property Type", "type", spec.property_type.as_str(), &type_options))
            (select_field("Min Bedrooms", "bedrooms", &spec.min_bedrooms.to_string(), &bedroom_options))
            (select_field("Min Bathrooms", "bathrooms", &spec.min_bathrooms.to_string(), &bathroom_options))
            (select_field("Min Price", "min_price", &spec.min_price.to_string(), &min_price_options))
            (select_field("Max Price", "max_price", &spec.max_price.to_string(), &max_price_options))
            (select_field("Sort By", "sort", spec.sort.as_str(), &sort_options))

            button type="submit" class="primary" { "Search" }
        }
    }
}

pub fn search_page(vm: &SearchVm) -> Markup {
    desktop_layout(
        "Find Your Dream Home",
        html! {
            main class="container" id="properties" {
                h1 { "Find Your " span class="accent" { "Dream Home" } }
                p class="subtitle" { "Browse our collection of properties" }

                (filter_form(vm))

                div class="result-summary" {
                    p {
                        "Showing " strong { (vm.results.len()) } " properties"
                    }
                    @if !vm.favorites.is_empty() {
                        p class="favorites-count" { (vm.favorites.len()) " saved" }
                    }
                    @if !vm.results.is_empty() {
                        p class="downloads" {
                            a href={ "/listings.xlsx?" (vm.query) } { "Download spreadsheet" }
                            " · "
                            a href={ "/listings.json?" (vm.query) } { "JSON" }
                        }
                    }
                }

                @if vm.results.is_empty() {
                    div class="no-results" {
                        h3 { "No properties found" }
                        p { "Try adjusting your search filters" }
                        a href="/" class="button primary" { "Reset Filters" }
                    }
                } @else {
                    div class="listing-grid" {
                        @for listing in vm.results {
                            (listing_card(listing, vm.favorites.contains(listing.id)))
                        }
                    }
                }
            }
        },
    )
}
