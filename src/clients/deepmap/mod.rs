//! Session client for the DeepMap API.
//!
//! - [`DeepmapClient`]: Logs in once, then exposes one method per endpoint
//! - [`DeepmapError`]: The error of every client operation
//!
//! # Example
//!
//! ```rust,ignore
//! use deepmap_sdk::{DeepmapClient, DeepmapConfig, VehicleToken};
//!
//! let token = VehicleToken::new("vehicle-token")?;
//! let client = DeepmapClient::login(DeepmapConfig::default(), token).await?;
//! println!("{client}");
//! ```

mod client;
mod errors;

pub use client::DeepmapClient;
pub use errors::DeepmapError;
