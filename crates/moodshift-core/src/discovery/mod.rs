//! Discovery fallback: asks an external generative search for one suggestion
//! when the local catalog has nothing left to offer.

pub mod model;
pub mod parser;

use async_trait::async_trait;

use crate::error::Result;
use crate::tags::{Mood, Platform, SessionLength};

pub use model::{AI_DISCOVERY_ID, DiscoveryResult, MAX_SOURCES, SourceLink};
pub use parser::{parse_discovery, search_url};

/// External generative search that returns a single game suggestion.
///
/// Implementations fail with [`crate::error::MoodshiftError::DiscoveryUnavailable`]
/// on network or provider errors. A response that only partially follows the
/// requested format is not an error.
#[async_trait]
pub trait DiscoveryProvider: Send + Sync {
    async fn discover(
        &self,
        mood: Mood,
        length: SessionLength,
        platform: Platform,
    ) -> Result<DiscoveryResult>;
}

/// Builds the single-suggestion prompt sent to the provider.
pub fn build_prompt(mood: Mood, length: SessionLength, platform: Platform) -> String {
    format!(
        "Suggest exactly ONE specific, world-famous, extremely popular, and highly-rated game for {platform} \
         that perfectly fits a {mood} mood and a {time} break.\n\
         DO NOT suggest niche or obscure indie games. Focus on major titles with millions of players.\n\
         \n\
         Provide the result in this format:\n\
         Game Name: [Name]\n\
         Description: [One short catchy sentence explaining why this famous game is perfect for this exact mood]\n\
         Primary URL: [Direct Official Store link or official website link]",
        platform = platform.prompt_description(),
        mood = mood,
        time = length.prompt_description(),
    )
}
