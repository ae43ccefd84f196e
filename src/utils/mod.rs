//! Utility functions used by request handlers.
//!
//! - [`client_metadata`] - Origin address, region and edge details from HTTP headers

pub mod client_metadata;
