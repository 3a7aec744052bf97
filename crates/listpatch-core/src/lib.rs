//! Core primitives shared by the listpatch services.

pub mod constants;
pub mod mentions;
pub mod odata;
pub mod transport;

pub use mentions::{apply_resolutions, extract_mentions, Mention};
pub use transport::{ApiResponse, HttpTransport, TransportError};
