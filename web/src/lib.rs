#![recursion_limit = "512"]

pub mod api;
pub mod app;
pub mod components;
pub mod geolocation;
pub mod storage;
pub mod views;
