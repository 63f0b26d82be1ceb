//! Memory Layer - In-Memory State Management
//!
//! 所有 Port 的内存实现，进程退出即丢失；每个集合独立加锁

mod audit_log;
mod lead_repositories;
mod vendor_catalog;

pub use audit_log::InMemoryAuditLog;
pub use lead_repositories::{
    InMemoryContactRepository, InMemoryDemoRequestRepository, InMemorySubscriberRepository,
};
pub use vendor_catalog::StaticVendorCatalog;

use crate::application::ports::RepositoryError;

fn poisoned<T>(_: std::sync::PoisonError<T>) -> RepositoryError {
    RepositoryError::StorageError("lock poisoned".to_string())
}
