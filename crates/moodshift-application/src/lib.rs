//! Application layer for MoodShift.
//!
//! This crate provides the use case that coordinates the domain core with
//! the injected storage, discovery and launch collaborators.

pub mod recommendation_usecase;

pub use recommendation_usecase::{NextOutcome, RecommendationUseCase, SessionSnapshot, VisitSummary};
