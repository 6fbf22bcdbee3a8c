pub mod favorites;
pub mod filter;
pub mod listing;
