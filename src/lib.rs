pub mod api;
pub mod configuration;
pub mod db;
pub mod entity;
pub mod export;
pub mod migration;
pub mod model;
pub mod seed;
pub mod service;
pub mod telemetry;
