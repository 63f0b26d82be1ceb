//! Vendor Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::VendorCatalogPort;
use crate::application::queries::SearchVendors;
use crate::domain::Vendor;

/// SearchVendors Handler
pub struct SearchVendorsHandler {
    catalog: Arc<dyn VendorCatalogPort>,
}

impl SearchVendorsHandler {
    pub fn new(catalog: Arc<dyn VendorCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: SearchVendors) -> Result<Vec<Vendor>, ApplicationError> {
        let vendors = self.catalog.find_all().await?;

        let needle = query.query.as_deref().map(str::trim).unwrap_or_default();
        if needle.is_empty() {
            return Ok(vendors);
        }

        let needle = needle.to_lowercase();
        Ok(vendors
            .into_iter()
            .filter(|v| v.matches_query(&needle))
            .collect())
    }
}
