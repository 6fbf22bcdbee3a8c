mod export_tests;
mod favorites_tests;
mod search_tests;
