// src/catalog.rs

use crate::domain::filter::{self, FilterSpec};
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const EMBEDDED_LISTINGS: &str = include_str!("../data/listings.json");

/// The fixed, read-only set of listings the site searches over.
///
/// Loaded once at startup and shared by every worker; nothing mutates it.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Listings compiled into the binary.
    pub fn embedded() -> Result<Self, ServerError> {
        Self::from_json(EMBEDDED_LISTINGS)
    }

    /// Listings from an operator-supplied JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            ServerError::Dataset(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ServerError> {
        let listings: Vec<Listing> = serde_json::from_str(raw)
            .map_err(|e| ServerError::Dataset(format!("Invalid listings JSON: {e}")))?;
        Self::from_listings(listings)
    }

    /// Wraps an already-built collection, rejecting duplicate ids.
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self, ServerError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(listing.id) {
                return Err(ServerError::Dataset(format!(
                    "Duplicate listing id {}",
                    listing.id
                )));
            }
        }
        Ok(Self { listings })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn search(&self, spec: &FilterSpec) -> Vec<&Listing> {
        filter::apply(self.listings(), spec)
    }
}
