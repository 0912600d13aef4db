pub mod actions;
pub mod manager;
pub mod models;
pub mod network;
pub mod remote;
pub mod storage;
pub mod stores;
pub mod telemetry;
pub mod utils;
