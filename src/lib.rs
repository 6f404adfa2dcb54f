// Library for tests to access modules

pub mod aggregator;
pub mod config;
pub mod fetcher;
pub mod google_fit;
pub mod models;
pub mod routes;
pub mod version;
