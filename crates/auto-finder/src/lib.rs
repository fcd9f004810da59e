//! Vehicle catalog scoring and recommendation.
//!
//! The [`catalog`] module loads and validates the vehicle table once; the
//! [`recommendation`] module scores, ranks, and explains vehicles against a
//! caller-supplied [`recommendation::PreferenceSet`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommendation;
pub mod telemetry;
