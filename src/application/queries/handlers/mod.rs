//! Query Handlers

mod vendor_handlers;

pub use vendor_handlers::SearchVendorsHandler;
