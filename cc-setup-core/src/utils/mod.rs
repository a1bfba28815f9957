//! # Utility Functions and Helpers
//!
//! ### URL handling (`url`)
//! - **Normalization**: scheme-less input gets `https://`
//! - **Validation**: http(s) scheme and a host are required
//! - **Host extraction**: used for the token portal hint
//!
//! ### Secret display (`mask`)
//! - **Masking**: tokens are never echoed in full in summaries

pub mod mask;
pub mod url;

pub use mask::mask_token;
pub use url::{UrlError, ensure_scheme, extract_host, normalize_url, validate_url};
