//! Domain layer containing the todo model and its storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::Todo`] and friends)
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//! - [`policy`] - Configurable behaviour switches
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Request handling logic lives in [`crate::application::services`].

pub mod entities;
pub mod policy;
pub mod repositories;
