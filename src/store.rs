//! User store: in-memory user collection with snapshot publication.
//!
//! DESIGN
//! ======
//! The store owns the authoritative `Vec<User>` behind a mutex, plus a
//! `watch` channel carrying the latest immutable snapshot. Every successful
//! mutation republishes the full collection while still holding the lock,
//! so subscribers observe snapshots in mutation order.
//!
//! Lookups that miss return `None` (or `false` for deletes). `add` also
//! returns `None` once the id space is exhausted. There is no other failure
//! mode: nothing here touches I/O.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

/// Immutable point-in-time copy of the user collection.
pub type Snapshot = Arc<[User]>;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

/// Fields for a user that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

impl NewUser {
    fn into_user(self, id: u32) -> User {
        User { id, name: self.name, email: self.email, role: self.role, is_active: self.is_active }
    }
}

/// Partial update. `None` leaves the field untouched; the id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

impl UserPatch {
    fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
    }
}

/// Number of users sharing a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCount {
    pub name: String,
    pub count: usize,
}

/// Group users by role, keeping roles in order of first appearance.
#[must_use]
pub fn role_counts(users: &[User]) -> Vec<RoleCount> {
    let mut counts: Vec<RoleCount> = Vec::new();
    for user in users {
        match counts.iter_mut().find(|entry| entry.name == user.role) {
            Some(entry) => entry.count += 1,
            None => counts.push(RoleCount { name: user.role.clone(), count: 1 }),
        }
    }
    counts
}

fn seed_user(id: u32, name: &str, email: &str, role: &str, is_active: bool) -> User {
    User { id, name: name.into(), email: email.into(), role: role.into(), is_active }
}

/// The five records every fresh store starts with.
#[must_use]
pub fn seed_users() -> Vec<User> {
    vec![
        seed_user(1, "John Doe", "john@example.com", "Admin", true),
        seed_user(2, "Jane Smith", "jane@example.com", "User", true),
        seed_user(3, "Bob Johnson", "bob@example.com", "Manager", false),
        seed_user(4, "Alice Williams", "alice@example.com", "Developer", true),
        seed_user(5, "Charlie Brown", "charlie@example.com", "Designer", true),
    ]
}

// =============================================================================
// STORE
// =============================================================================

/// Shared handle to the user collection. Clones point at the same store.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    users: Mutex<Vec<User>>,
    publisher: watch::Sender<Snapshot>,
}

impl UserStore {
    /// Create a store holding the seed records.
    #[must_use]
    pub fn new() -> Self {
        Self::with_users(seed_users())
    }

    /// Create a store holding `users`, published as the initial snapshot.
    /// Records repeating an earlier id are dropped.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        let mut seen = HashSet::with_capacity(users.len());
        let users: Vec<User> = users
            .into_iter()
            .filter(|user| {
                let first = seen.insert(user.id);
                if !first {
                    debug!(id = user.id, "duplicate user id dropped");
                }
                first
            })
            .collect();
        let (publisher, _) = watch::channel(Snapshot::from(users.as_slice()));
        Self { inner: Arc::new(StoreInner { users: Mutex::new(users), publisher }) }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.inner
            .users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, users: &[User]) {
        self.inner.publisher.send_replace(Snapshot::from(users));
    }

    // -------------------------------------------------------------------------
    // READS
    // -------------------------------------------------------------------------

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.inner.publisher.borrow().clone()
    }

    /// Subscribe to snapshot publications. The receiver starts at the
    /// current snapshot and is notified after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.publisher.subscribe()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<User> {
        self.lock().iter().find(|user| user.id == id).cloned()
    }

    /// Users whose role matches `role`, ignoring case.
    #[must_use]
    pub fn by_role(&self, role: &str) -> Vec<User> {
        let role = role.to_lowercase();
        self.lock()
            .iter()
            .filter(|user| user.role.to_lowercase() == role)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn active(&self) -> Vec<User> {
        self.lock()
            .iter()
            .filter(|user| user.is_active)
            .cloned()
            .collect()
    }

    /// Users whose name or email contains `term`, ignoring case.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<User> {
        let term = term.to_lowercase();
        self.lock()
            .iter()
            .filter(|user| user.name.to_lowercase().contains(&term) || user.email.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn count_by_role(&self) -> Vec<RoleCount> {
        role_counts(&self.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // -------------------------------------------------------------------------
    // MUTATIONS
    // -------------------------------------------------------------------------

    /// Append a user with the next id (`max + 1`, or 1 when empty).
    /// Returns `None` without publishing when `u32::MAX` is already taken.
    pub fn add(&self, new_user: NewUser) -> Option<User> {
        let mut users = self.lock();
        let id = match users.iter().map(|user| user.id).max() {
            Some(max) => max.checked_add(1)?,
            None => 1,
        };
        let user = new_user.into_user(id);
        users.push(user.clone());
        self.publish(&users);
        debug!(id, "user added");
        Some(user)
    }

    /// Merge `patch` into the user with `id`. Returns the updated user.
    pub fn update(&self, id: u32, patch: UserPatch) -> Option<User> {
        self.modify(id, |user| patch.apply(user))
    }

    /// Flip `is_active` on the user with `id`. Returns the updated user.
    pub fn toggle_status(&self, id: u32) -> Option<User> {
        self.modify(id, |user| {
            let patch = UserPatch { is_active: Some(!user.is_active), ..UserPatch::default() };
            patch.apply(user);
        })
    }

    /// Remove the user with `id`. Returns whether a user was removed.
    pub fn delete(&self, id: u32) -> bool {
        let mut users = self.lock();
        let Some(index) = users.iter().position(|user| user.id == id) else {
            return false;
        };
        users.remove(index);
        self.publish(&users);
        debug!(id, "user deleted");
        true
    }

    fn modify(&self, id: u32, f: impl FnOnce(&mut User)) -> Option<User> {
        let mut users = self.lock();
        let user = users.iter_mut().find(|user| user.id == id)?;
        f(user);
        let updated = user.clone();
        self.publish(&users);
        debug!(id, "user updated");
        Some(updated)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
