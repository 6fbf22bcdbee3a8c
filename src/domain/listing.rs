// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of property kinds a listing can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Residential,
    Commercial,
    Land,
    Condo,
    Townhouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Residential,
        PropertyType::Commercial,
        PropertyType::Land,
        PropertyType::Condo,
        PropertyType::Townhouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residential => "Residential",
            PropertyType::Commercial => "Commercial",
            PropertyType::Land => "Land",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
        }
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market status shown on the card badge. Never filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    Sold,
    Pending,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::Sold => "Sold",
            ListingStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single property on the agent's books.
///
/// Field names on the wire are camelCase so the dataset stays readable by the
/// front-end tooling that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: u32,
    pub title: String,

    // Location
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    pub price: i64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    /// 0 when not applicable (land, some commercial lots).
    pub square_feet: u32,
    pub property_type: PropertyType,

    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    /// Acres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_size: Option<f64>,

    pub status: ListingStatus,
}

impl Listing {
    /// Year used for newest-first ordering; unknown years sort as oldest.
    pub fn year_built_or_zero(&self) -> i32 {
        self.year_built.unwrap_or(0)
    }
}
