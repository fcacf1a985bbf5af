//! Fetch Legends of Runeterra Data Dragon documents
//!
//! ```no_run
//! use dd_fetch::dd::{Locale, Version};
//! use dd_fetch::Fetcher;
//!
//! # async fn run() -> Result<(), dd_fetch::FetchError> {
//! let fetcher = Fetcher::new()?;
//!
//! let locale = Locale::new("en", "US");
//! let version = Version::new([4, 9, 1]);
//!
//! if let Some(globals) = fetcher.fetch_globals(&locale, &version).await? {
//!     println!("{} sets", globals.sets.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod dd;
pub mod fetcher;
pub mod logger;
pub mod utils;

pub use fetcher::{FetchError, Fetcher, FetcherConfig, DATA_DRAGON_URL};
pub use logger::{Logger, RecordingLogger, TracingLogger};
