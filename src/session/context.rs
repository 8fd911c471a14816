// src/session/context.rs
use crate::auth::user::{User, UserType};
use crate::errors::ServerError;
use crate::session::store::KvStore;

pub const USER_KEY: &str = "dormspaceUser";
pub const FAVORITES_KEY: &str = "dormspaceFavorites";

/// Visitor state for one request: who is signed in and which listings they
/// saved. Views receive this explicitly; all persistence goes through `S`.
pub struct SessionContext<S: KvStore> {
    store: S,
    user: Option<User>,
}

impl<S: KvStore> SessionContext<S> {
    /// Restore the session from the store. A stored user that no longer
    /// parses is discarded and the visitor is treated as signed out.
    pub fn load(store: S) -> Result<Self, ServerError> {
        let user = match store.get(USER_KEY)? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(u) => Some(u),
                Err(e) => {
                    tracing::warn!(error = %e, "discarding unreadable stored user");
                    store.remove(USER_KEY)?;
                    None
                }
            },
            None => None,
        };
        Ok(Self { store, user })
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.user.as_ref().map(|u| u.user_type)
    }

    pub fn sign_in(&mut self, user: User) -> Result<(), ServerError> {
        let raw = serde_json::to_string(&user).map_err(|_| ServerError::InternalError)?;
        self.store.set(USER_KEY, &raw)?;
        tracing::info!(user_id = %user.id, user_type = user.user_type.as_str(), "signed in");
        self.user = Some(user);
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<(), ServerError> {
        self.store.remove(USER_KEY)?;
        if let Some(u) = self.user.take() {
            tracing::info!(user_id = %u.id, "signed out");
        }
        Ok(())
    }

    /// Saved listing ids in the order they were added.
    pub fn favorites(&self) -> Result<Vec<String>, ServerError> {
        let Some(raw) = self.store.get(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable favorites");
                self.store.remove(FAVORITES_KEY)?;
                Ok(Vec::new())
            }
        }
    }

    pub fn is_favorite(&self, listing_id: &str) -> Result<bool, ServerError> {
        Ok(self.favorites()?.iter().any(|id| id == listing_id))
    }

    /// Add or remove a listing; returns whether it is now a favorite.
    pub fn toggle_favorite(&self, listing_id: &str) -> Result<bool, ServerError> {
        let mut ids = self.favorites()?;
        let now_favorite = if let Some(pos) = ids.iter().position(|id| id == listing_id) {
            ids.remove(pos);
            false
        } else {
            ids.push(listing_id.to_string());
            true
        };
        self.save_favorites(&ids)?;
        Ok(now_favorite)
    }

    pub fn remove_favorite(&self, listing_id: &str) -> Result<(), ServerError> {
        let mut ids = self.favorites()?;
        ids.retain(|id| id != listing_id);
        self.save_favorites(&ids)
    }

    fn save_favorites(&self, ids: &[String]) -> Result<(), ServerError> {
        let raw = serde_json::to_string(ids).map_err(|_| ServerError::InternalError)?;
        self.store.set(FAVORITES_KEY, &raw)
    }
}
