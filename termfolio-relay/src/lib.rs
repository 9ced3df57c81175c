//! # termfolio-relay
//!
//! Delivery layer for termfolio's contact form. A [`FormRelay`] takes a
//! finished [`FormSubmission`] and posts it somewhere; the built-in
//! [`FormspreeRelay`] targets [Formspree](https://formspree.io/)-compatible
//! endpoints.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS
//!   implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use termfolio_relay::{FormRelay, FormSubmission, FormspreeRelay};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let relay = FormspreeRelay::new("https://formspree.io/f/abcd1234")?;
//!     let submission = FormSubmission::new(
//!         "Jordan Reyes",
//!         "jordan@example.com",
//!         "Hello from the terminal!",
//!     );
//!     relay.submit(&submission).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! [`submit`](FormRelay::submit) returns [`Result<T, RelayError>`](RelayError).
//! Exactly one request is made per call; the relay never retries on its own.
//! Transport faults surface as [`RelayError::Network`] or
//! [`RelayError::Timeout`], and a non-2xx answer as [`RelayError::Rejected`].

mod error;
mod formspree;
mod traits;
mod types;

// Re-export error types
pub use error::{RelayError, Result};

// Re-export core trait
pub use traits::FormRelay;

// Re-export types
pub use types::FormSubmission;

// Re-export the built-in backend
pub use formspree::FormspreeRelay;
