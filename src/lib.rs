//! # gratisdns
//!
//! Client library for the GratisDNS web control panel: enumerate an
//! account's domains, scrape the DNS records of a primary domain into typed
//! values, and push record changes back through the panel's update forms.
//!
//! The panel has no API; this crate drives the same HTML pages a browser
//! would. Parsing is therefore coupled to the panel's markup, confined to
//! one module, and the panel itself remains the source of truth for what a
//! record may contain.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gratisdns::{GratisDns, RecordData};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Log in; the session cookie lives as long as the client.
//!     let client = GratisDns::login("user", "password").await?;
//!
//!     // 2. List domains.
//!     for domain in client.get_primary_domains().await? {
//!         println!("{domain}");
//!     }
//!
//!     // 3. Fetch records and update one.
//!     let details = client.get_primary_domain_details("mytest.dk").await?;
//!     let mut record = details.a[0].clone();
//!     record.data = RecordData::A { ip: "13.13.13.13".to_string() };
//!     client.update_record(&record).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, GratisDnsError>`](GratisDnsError):
//!
//! - [`GratisDnsError::InvalidCredentials`] — login rejected, or the session
//!   expired and the panel answered with its login page
//! - [`GratisDnsError::NetworkError`] / [`GratisDnsError::Timeout`] —
//!   transport failures, surfaced as-is; the client never retries
//! - [`GratisDnsError::InvalidParameter`] — caller-side misuse, e.g.
//!   updating a record that carries no row identifier
//!
//! An absent record table or an empty domain list is not an error: listings
//! parse to empty sequences and detail fetches always yield all four record
//! sequences, possibly empty.

mod client;
mod error;
mod http;
mod scrape;
mod types;
mod utils;

// Re-export error types
pub use error::{GratisDnsError, Result};

// Re-export the client and its fixed endpoint
pub use client::{BACKEND_URL, GratisDns};

// Re-export the record model
pub use types::{DEFAULT_TTL, DnsRecord, DomainDetails, RecordData, RecordType};
