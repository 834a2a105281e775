//! Player selection persistence.
//!
//! One row per `player_id` in the `player_jobs` table. The UNIQUE constraint
//! is the whole concurrency story: racing registrations resolve at the
//! storage layer instead of through application locks.

mod store;
mod types;


pub use store::{PlayerStore, PlayerStoreError};
pub use types::{RegisterPlayerRequest, UpdatePlayerRequest};
