//! # ecb-rates
//!
//! Daily euro foreign-exchange reference rates from the European Central
//! Bank.
//!
//! The reference rates are usually updated around 16:00 CET on every working
//! day, except on TARGET closing days. They are based on a daily concertation
//! procedure between central banks across Europe, which normally takes place
//! at 14:15 CET.
//!
//! Every query fetches and parses the publication anew; nothing is cached.
//! When the network call fails or returns unparseable content, a configured
//! local copy of the same document is consulted instead.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ecb_rates::{Currency, RateFetcher};
//!
//! # async fn run() -> ecb_rates::Result<()> {
//! let fetcher = RateFetcher::with_fallback("eurofxref-daily.xml")?;
//!
//! let usd = fetcher.rate("USD").await?;
//! let jpy = fetcher.rate_for(Currency::JPY).await?;
//! let all = fetcher.all_rates().await?;
//! assert_eq!(all.get("USD"), Some(&usd));
//! # Ok(())
//! # }
//! ```

pub mod currency;
pub mod document;
pub mod error;
pub mod fetcher;

pub use currency::Currency;
pub use document::{RateDocument, RateEntry, Snapshot};
pub use error::{EcbError, Result};
pub use fetcher::{RateFetcher, ECB_DAILY_URL};
