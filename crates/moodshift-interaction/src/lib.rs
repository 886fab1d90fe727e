//! External service integrations for MoodShift.

pub mod gemini_discovery_agent;

pub use gemini_discovery_agent::{GeminiDiscoveryAgent, UnconfiguredDiscovery};
