//! In-memory repository fakes for service tests.

use crate::entities::{User, Watchlist, WatchlistType};
use crate::errors::DomainError;
use crate::repositories::{UserRepository, WatchlistRepository};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    pub inserts: AtomicUsize,
    pub fail_writes: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::RepositoryError("users table is locked".into()));
        }
        let mut users = self.users.lock().unwrap();
        let mut saved = user.clone();
        saved.id = Some(users.len() as i32 + 1);
        users.push(saved.clone());
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(saved)
    }
}

#[derive(Default)]
pub struct InMemoryWatchlistRepository {
    watchlists: Mutex<Vec<Watchlist>>,
    pub inserts: AtomicUsize,
    pub updates: AtomicUsize,
    pub fail_writes: AtomicBool,
}

impl InMemoryWatchlistRepository {
    pub fn all(&self) -> Vec<Watchlist> {
        self.watchlists.lock().unwrap().clone()
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::RepositoryError("watchlists table is locked".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl WatchlistRepository for InMemoryWatchlistRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Watchlist>, DomainError> {
        let watchlists = self.watchlists.lock().unwrap();
        Ok(watchlists.iter().find(|w| w.id == Some(id)).cloned())
    }

    async fn find_by_user_and_type(
        &self,
        user_id: i32,
        watchlist_type: WatchlistType,
    ) -> Result<Option<Watchlist>, DomainError> {
        let watchlists = self.watchlists.lock().unwrap();
        Ok(watchlists
            .iter()
            .find(|w| w.user_id == user_id && w.watchlist_type == watchlist_type)
            .cloned())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Watchlist>, DomainError> {
        let watchlists = self.watchlists.lock().unwrap();
        Ok(watchlists
            .iter()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn save(&self, watchlist: &Watchlist) -> Result<Watchlist, DomainError> {
        self.check_writable()?;
        let mut watchlists = self.watchlists.lock().unwrap();
        let mut saved = watchlist.clone();
        saved.id = Some(watchlists.len() as i32 + 1);
        watchlists.push(saved.clone());
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(saved)
    }

    async fn update(&self, watchlist: &Watchlist) -> Result<Watchlist, DomainError> {
        self.check_writable()?;
        let id = watchlist.id.ok_or_else(|| {
            DomainError::ValidationError("Watchlist ID is required for updates".to_string())
        })?;
        let mut watchlists = self.watchlists.lock().unwrap();
        let stored = watchlists
            .iter_mut()
            .find(|w| w.id == Some(id))
            .ok_or(DomainError::WatchlistNotFound(id))?;
        *stored = watchlist.clone();
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(watchlist.clone())
    }
}
