//! Core domain logic: auth form state, submission dispatch, session handling

pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
