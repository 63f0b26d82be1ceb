//! In-Memory Lead Repositories

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Mutex;

use super::poisoned;
use crate::application::ports::{
    ContactRepositoryPort, DemoRequestRepositoryPort, RepositoryError, SubscriberRepositoryPort,
};
use crate::domain::{ContactMessage, DemoRequest, Subscriber};

// ============================================================================
// Subscribers
// ============================================================================

/// 内存订阅者仓储（键为小写邮箱）
pub struct InMemorySubscriberRepository {
    subscribers: DashMap<String, Subscriber>,
}

impl InMemorySubscriberRepository {
    pub fn new() -> Self {
        Self {
            subscribers: DashMap::new(),
        }
    }
}

impl Default for InMemorySubscriberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriberRepositoryPort for InMemorySubscriberRepository {
    async fn upsert(&self, subscriber: &Subscriber) -> Result<(), RepositoryError> {
        let key = subscriber.email.normalized().as_str().to_string();
        let replaced = self.subscribers.insert(key, subscriber.clone()).is_some();
        tracing::debug!(email = %subscriber.email, replaced, "Subscriber upserted");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Subscriber>, RepositoryError> {
        Ok(self.subscribers.iter().map(|e| e.value().clone()).collect())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.subscribers.len())
    }
}

// ============================================================================
// Contacts
// ============================================================================

/// 内存联系留言仓储
#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<Vec<ContactMessage>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepositoryPort for InMemoryContactRepository {
    async fn append(&self, contact: &ContactMessage) -> Result<(), RepositoryError> {
        self.contacts.lock().map_err(poisoned)?.push(contact.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        Ok(self.contacts.lock().map_err(poisoned)?.clone())
    }
}

// ============================================================================
// Demo requests
// ============================================================================

/// 内存演示预约仓储
#[derive(Default)]
pub struct InMemoryDemoRequestRepository {
    demos: Mutex<Vec<DemoRequest>>,
}

impl InMemoryDemoRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DemoRequestRepositoryPort for InMemoryDemoRequestRepository {
    async fn append(&self, demo: &DemoRequest) -> Result<(), RepositoryError> {
        self.demos.lock().map_err(poisoned)?.push(demo.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<DemoRequest>, RepositoryError> {
        Ok(self.demos.lock().map_err(poisoned)?.clone())
    }
}
