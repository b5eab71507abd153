pub mod app;
pub mod common;
pub mod components;
pub mod config;
pub mod data;
pub mod routes;
