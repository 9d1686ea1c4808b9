//! Infrastructure layer: product storage, service orchestration, config.

pub mod config;
pub mod product_service;
pub mod repository;
