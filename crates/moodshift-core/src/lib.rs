//! Domain core for MoodShift: a mood-driven game recommender.
//!
//! The crate holds everything that does not touch the network or the file
//! system directly: the curated catalog, history aggregates, the session
//! state machine, the selection engine and the discovery response decoder.
//! External collaborators sit behind the [`storage::BlobStore`],
//! [`discovery::DiscoveryProvider`], [`launch::Launcher`] and
//! [`secret::SecretService`] traits.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod device;
pub mod discovery;
pub mod error;
pub mod history;
pub mod launch;
pub mod secret;
pub mod selection;
pub mod session;
pub mod storage;
pub mod tags;

pub use error::{MoodshiftError, Result};
