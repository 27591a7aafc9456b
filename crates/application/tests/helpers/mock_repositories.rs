#![allow(dead_code)]

use async_trait::async_trait;
use scrapbook_application::ports::{CacheStats, CacheStore, EntityRepository};
use scrapbook_domain::{DomainError, NewScrap, NewUser, Scrap, ScrapPatch, User, UserPatch};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, Notify, RwLock};

const NOW: &str = "2024-01-01 00:00:00";

pub fn make_scrap(uid: &str, user_uid: &str) -> Scrap {
    Scrap {
        uid: uid.to_string(),
        title: "any_title".to_string(),
        description: "any_description".to_string(),
        user_uid: user_uid.to_string(),
        created_at: NOW.to_string(),
        updated_at: NOW.to_string(),
    }
}

pub fn make_user(uid: &str) -> User {
    User {
        uid: uid.to_string(),
        username: format!("user-{uid}"),
        email: format!("{uid}@example.com"),
        created_at: NOW.to_string(),
        updated_at: NOW.to_string(),
    }
}

// ============================================================================
// Mock ScrapRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockScrapRepository {
    scraps: Arc<RwLock<Vec<Scrap>>>,
    should_fail: Arc<AtomicBool>,
    next_uid: Arc<AtomicUsize>,
    find_calls: Arc<AtomicUsize>,
    list_calls: Arc<AtomicUsize>,
    created: Arc<RwLock<Vec<NewScrap>>>,
    find_gate: Arc<Mutex<Option<ReadGate>>>,
    list_gate: Arc<Mutex<Option<ReadGate>>>,
}

/// Holds the next gated read after it has read its row and before it
/// returns. `reached` fires once the row is read; `release` lets it return.
#[derive(Clone, Default)]
pub struct ReadGate {
    pub reached: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl MockScrapRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_scraps(scraps: Vec<Scrap>) -> Self {
        let repo = Self::new();
        *repo.scraps.write().await = scraps;
        repo
    }

    /// Every call fails with a persistence error from now on.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn pause_next_find(&self) -> ReadGate {
        let gate = ReadGate::default();
        *self.find_gate.lock().await = Some(gate.clone());
        gate
    }

    /// Same as [`Self::pause_next_find`] for the next `list_all`.
    pub async fn pause_next_list(&self) -> ReadGate {
        let gate = ReadGate::default();
        *self.list_gate.lock().await = Some(gate.clone());
        gate
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub async fn created_drafts(&self) -> Vec<NewScrap> {
        self.created.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.scraps.read().await.len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EntityRepository<Scrap> for MockScrapRepository {
    async fn create(&self, draft: NewScrap) -> Result<Scrap, DomainError> {
        self.check_failure()?;
        self.created.write().await.push(draft.clone());

        let uid = draft.uid.unwrap_or_else(|| {
            format!("generated-{}", self.next_uid.fetch_add(1, Ordering::SeqCst))
        });
        let scrap = Scrap {
            uid,
            title: draft.title,
            description: draft.description,
            user_uid: draft.user_uid,
            created_at: NOW.to_string(),
            updated_at: NOW.to_string(),
        };
        self.scraps.write().await.push(scrap.clone());
        Ok(scrap)
    }

    async fn find_by_uid(&self, uid: &str) -> Result<Option<Scrap>, DomainError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let found = self.scraps.read().await.iter().find(|s| s.uid == uid).cloned();

        let gate = self.find_gate.lock().await.take();
        if let Some(gate) = gate {
            gate.reached.notify_one();
            gate.release.notified().await;
        }
        Ok(found)
    }

    async fn update(&self, uid: &str, patch: ScrapPatch) -> Result<Option<Scrap>, DomainError> {
        self.check_failure()?;
        let mut scraps = self.scraps.write().await;
        let Some(scrap) = scraps.iter_mut().find(|s| s.uid == uid) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            scrap.title = title;
        }
        if let Some(description) = patch.description {
            scrap.description = description;
        }
        scrap.updated_at = "2024-01-02 00:00:00".to_string();
        Ok(Some(scrap.clone()))
    }

    async fn delete(&self, uid: &str) -> Result<Option<Scrap>, DomainError> {
        self.check_failure()?;
        let mut scraps = self.scraps.write().await;
        let position = scraps.iter().position(|s| s.uid == uid);
        Ok(position.map(|i| scraps.remove(i)))
    }

    async fn list_all(&self) -> Result<Vec<Scrap>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let scraps = self.scraps.read().await.clone();

        let gate = self.list_gate.lock().await.take();
        if let Some(gate) = gate {
            gate.reached.notify_one();
            gate.release.notified().await;
        }
        Ok(scraps)
    }
}

// ============================================================================
// Mock UserRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl MockUserRepository {
    pub async fn with_users(users: Vec<User>) -> Self {
        let repo = Self::default();
        *repo.users.write().await = users;
        repo
    }
}

#[async_trait]
impl EntityRepository<User> for MockUserRepository {
    async fn create(&self, draft: NewUser) -> Result<User, DomainError> {
        let user = User {
            uid: draft.uid.unwrap_or_else(|| "generated-user".to_string()),
            username: draft.username,
            email: draft.email,
            created_at: NOW.to_string(),
            updated_at: NOW.to_string(),
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.iter().find(|u| u.uid == uid).cloned())
    }

    async fn update(&self, uid: &str, patch: UserPatch) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|u| u.uid == uid) else {
            return Ok(None);
        };
        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        Ok(Some(user.clone()))
    }

    async fn delete(&self, uid: &str) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;
        let position = users.iter().position(|u| u.uid == uid);
        Ok(position.map(|i| users.remove(i)))
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.read().await.clone())
    }
}

// ============================================================================
// Mock CacheStore
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOp {
    Get(String),
    Set(String),
    Del(String),
    DelPrefix(String),
}

impl CacheOp {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, CacheOp::Get(_))
    }
}

/// In-memory cache that records every operation it receives.
#[derive(Clone, Default)]
pub struct MockCacheStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    ops: Arc<RwLock<Vec<CacheOp>>>,
    fail_reads: Arc<AtomicBool>,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Seeds an entry without recording an operation.
    pub async fn seed(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub async fn ops(&self) -> Vec<CacheOp> {
        self.ops.read().await.clone()
    }

    pub async fn mutations(&self) -> Vec<CacheOp> {
        self.ops
            .read()
            .await
            .iter()
            .filter(|op| op.is_mutation())
            .cloned()
            .collect()
    }

    pub async fn clear_ops(&self) {
        self.ops.write().await.clear();
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.ops.write().await.push(CacheOp::Get(key.to_string()));
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Cache("cache unavailable".to_string()));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), DomainError> {
        self.ops.write().await.push(CacheOp::Set(key.to_string()));
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), DomainError> {
        self.ops.write().await.push(CacheOp::Del(key.to_string()));
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn del_prefix(&self, prefix: &str) -> Result<u64, DomainError> {
        self.ops
            .write()
            .await
            .push(CacheOp::DelPrefix(prefix.to_string()));
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|k, _| !k.starts_with(prefix));
        Ok((before - entries.len()) as u64)
    }

    fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}
