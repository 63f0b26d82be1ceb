//! HTTP Handlers

mod lead;
mod ping;
mod rfp;
mod vendor;

pub use lead::*;
pub use ping::*;
pub use rfp::*;
pub use vendor::*;
