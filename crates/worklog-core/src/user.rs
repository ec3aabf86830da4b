use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub passport_number: String,
}

#[derive(Debug, Default)]
struct UserTable {
    users: Vec<User>,
    last_id: i64,
}

/// In-memory user directory.
///
/// Users keep insertion order. IDs come from a counter that only grows, so
/// a deleted user's ID is never handed out again.
#[derive(Debug, Default)]
pub struct UserStore {
    inner: RwLock<UserTable>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// List users, optionally filtered by exact passport number, then
    /// paginated by `skip`/`limit`.
    pub async fn list(&self, passport_number: Option<&str>, skip: usize, limit: usize) -> Vec<User> {
        let table = self.inner.read().await;

        table
            .users
            .iter()
            .filter(|user| passport_number.map_or(true, |p| user.passport_number == p))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i64) -> Result<User> {
        let table = self.inner.read().await;
        table
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found("User not found"))
    }

    pub async fn create(&self, passport_number: String) -> User {
        let mut table = self.inner.write().await;
        table.last_id += 1;

        let user = User {
            id: table.last_id,
            passport_number,
        };
        table.users.push(user.clone());

        tracing::info!("Created user {}", user.id);
        user
    }

    pub async fn update(&self, id: i64, passport_number: String) -> Result<User> {
        let mut table = self.inner.write().await;

        let user = table
            .users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| Error::not_found("User not found"))?;
        user.passport_number = passport_number;

        tracing::info!("Updated user {}", id);
        Ok(user.clone())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut table = self.inner.write().await;

        let index = table
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| Error::not_found("User not found"))?;
        table.users.remove(index);

        tracing::info!("Deleted user {}", id);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
