// src/domain/filter.rs

//! The listing filter engine.
//!
//! A search is a [`FilterSpec`] applied to a borrowed collection of listings.
//! Every pass is a plain predicate, the survivors are stably sorted, and the
//! input is never touched. There is no failure mode: contradictory bounds just
//! produce an empty result.

use crate::domain::listing::{Listing, PropertyType};
use std::cmp::Ordering;

/// Upper price bound used by a freshly reset search ("No Max" in the form).
pub const DEFAULT_MAX_PRICE: i64 = 1_000_000;

/// Property-type constraint of a search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropertyTypeFilter {
    #[default]
    All,
    Only(PropertyType),
    /// A type name outside the closed set. Matches nothing.
    Unknown(String),
}

impl PropertyTypeFilter {
    /// "All" (or nothing) means no constraint; anything else is an exact name.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | "All" => PropertyTypeFilter::All,
            name => PropertyType::from_name(name)
                .map(PropertyTypeFilter::Only)
                .unwrap_or_else(|| PropertyTypeFilter::Unknown(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PropertyTypeFilter::All => "All",
            PropertyTypeFilter::Only(t) => t.as_str(),
            PropertyTypeFilter::Unknown(name) => name,
        }
    }

    pub fn matches(&self, property_type: PropertyType) -> bool {
        match self {
            PropertyTypeFilter::All => true,
            PropertyTypeFilter::Only(t) => *t == property_type,
            PropertyTypeFilter::Unknown(_) => false,
        }
    }
}

/// Result ordering. Ties always keep their incoming order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    PriceAsc,
    PriceDesc,
    BedroomsDesc,
    Newest,
    /// Unrecognized sort requests pass results through untouched.
    Unsorted,
}

impl SortKey {
    pub const CHOICES: [SortKey; 4] = [
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Newest,
        SortKey::BedroomsDesc,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "bedrooms" => SortKey::BedroomsDesc,
            "newest" => SortKey::Newest,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::BedroomsDesc => "bedrooms",
            SortKey::Newest => "newest",
            SortKey::Unsorted => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::BedroomsDesc => "Most Bedrooms",
            SortKey::Newest => "Newest First",
            SortKey::Unsorted => "Unsorted",
        }
    }

    fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
            SortKey::BedroomsDesc => b.bedrooms.cmp(&a.bedrooms),
            SortKey::Newest => b.year_built_or_zero().cmp(&a.year_built_or_zero()),
            SortKey::Unsorted => Ordering::Equal,
        }
    }
}

/// One search request: constraints plus ordering.
///
/// Zero values on the minimums mean "no constraint". The price bounds are
/// always applied literally and inclusively; callers that want an open range
/// pick `0` and a large upper bound.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub location: String,
    pub property_type: PropertyTypeFilter,
    pub min_bedrooms: i64,
    pub min_bathrooms: f64,
    pub min_price: i64,
    pub max_price: i64,
    pub sort: SortKey,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::with_max_price(DEFAULT_MAX_PRICE)
    }
}

impl FilterSpec {
    /// The reset state of the search form, with a caller-chosen price ceiling.
    pub fn with_max_price(max_price: i64) -> Self {
        Self {
            location: String::new(),
            property_type: PropertyTypeFilter::All,
            min_bedrooms: 0,
            min_bathrooms: 0.0,
            min_price: 0,
            max_price,
            sort: SortKey::default(),
        }
    }

    pub fn matches_location(&self, listing: &Listing) -> bool {
        if self.location.is_empty() {
            return true;
        }
        let needle = self.location.to_lowercase();
        listing.city.to_lowercase().contains(&needle)
            || listing.address.to_lowercase().contains(&needle)
    }

    pub fn matches_type(&self, listing: &Listing) -> bool {
        self.property_type.matches(listing.property_type)
    }

    pub fn matches_bedrooms(&self, listing: &Listing) -> bool {
        self.min_bedrooms == 0 || i64::from(listing.bedrooms) >= self.min_bedrooms
    }

    pub fn matches_bathrooms(&self, listing: &Listing) -> bool {
        self.min_bathrooms == 0.0 || listing.bathrooms >= self.min_bathrooms
    }

    pub fn matches_price(&self, listing: &Listing) -> bool {
        self.min_price <= listing.price && listing.price <= self.max_price
    }

    /// True when the listing survives every pass.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_location(listing)
            && self.matches_type(listing)
            && self.matches_bedrooms(listing)
            && self.matches_bathrooms(listing)
            && self.matches_price(listing)
    }

    /// True when nothing but the sort order differs from the reset state.
    pub fn is_unconstrained(&self, default_max_price: i64) -> bool {
        let reset = Self {
            sort: self.sort,
            ..Self::with_max_price(default_max_price)
        };
        *self == reset
    }
}

/// Filters and orders `listings` according to `spec`.
///
/// Returns borrowed references in a fresh vector, so the result of one call
/// can be fed straight back into another.
pub fn apply<'a, I>(listings: I, spec: &FilterSpec) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut matched: Vec<&Listing> = listings.into_iter().filter(|l| spec.matches(l)).collect();

    // sort_by is stable
    if spec.sort != SortKey::Unsorted {
        matched.sort_by(|a, b| spec.sort.compare(a, b));
    }

    matched
}
