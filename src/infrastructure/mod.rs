//! Infrastructure layer - storage backends, cache backends and services

pub mod cache;
pub mod logging;
pub mod services;
pub mod storage;
