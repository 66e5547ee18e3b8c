//! Client for the [hitbox.tv](https://www.hitbox.tv) REST API.
//!
//! ```no_run
//! # async fn run() -> Result<(), hitbox::Error> {
//! let client = hitbox::HitboxClient::new();
//! let (games, _raw) = client.games().await?;
//! for (i, game) in games.categories.iter().enumerate() {
//!     println!("[{}] {}", i + 1, game.category_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{
    Category, DEFAULT_BASE_URL, Error, GamesResponse, HitboxClient, LIBRARY_VERSION,
    ParseTimestampError, RawResponse, RequestInfo, Timestamp, USER_AGENT,
};
