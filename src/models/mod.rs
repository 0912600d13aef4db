pub mod accounts;
pub mod attributes;
pub mod config;
pub mod coupons;
pub mod domains;
pub mod errors;
pub mod order_statuses;
pub mod orders;
pub mod products;
pub mod refunds;
pub mod sites;
pub mod stats;
pub mod tags;
