mod client;
mod endpoint;
mod errors;
pub mod types;
mod user_agent;
pub use self::client::{Client, DEFAULT_API_URL};
pub use self::endpoint::{Endpoint, DEFAULT_TAG, SNAPSHOT_COMPANIES_FILE, SNAPSHOT_STATS_FILE};
pub use self::errors::Error;
