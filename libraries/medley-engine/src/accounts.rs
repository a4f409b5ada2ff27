//! Account service
//!
//! Account records are created lazily on first login; identity comes from
//! the external token subject, never from the store. Linked-service tokens
//! live in a fixed set of slots on the account record.

use crate::auth::{self, TokenVerifier};
use medley_core::error::{MedleyError, Result};
use medley_core::types::{Account, AccountId, ServiceLink};
use medley_core::Storage;
use std::sync::Arc;
use tracing::{info, warn};

/// Owns account records and their linked-service slots
pub struct AccountService<S, V> {
    store: Arc<S>,
    verifier: V,
}

impl<S: Storage, V: TokenVerifier> AccountService<S, V> {
    /// Create an account service over the given store and token verifier
    pub fn new(store: Arc<S>, verifier: V) -> Self {
        Self { store, verifier }
    }

    /// Find an account by id
    pub async fn get(&self, uid: &AccountId) -> Result<Option<Account>> {
        self.store.find_account(uid).await
    }

    /// Create the account on first login; later logins return it unchanged
    pub async fn save_new_login(
        &self,
        uid: &AccountId,
        username: &str,
    ) -> Result<Account> {
        if let Some(existing) = self.store.find_account(uid).await? {
            info!("account {} already known", uid);
            return Ok(existing);
        }

        let account = Account::new(uid.clone(), username);
        self.store.persist_account(account.clone()).await?;
        info!("account {} created for {}", uid, username);
        Ok(account)
    }

    /// Change the display name
    pub async fn set_username(&self, uid: &AccountId, username: &str) -> Result<Account> {
        let mut account = self.require(uid).await?;
        account.username = username.to_string();
        self.store.persist_account(account.clone()).await?;
        Ok(account)
    }

    /// Check a raw token resolves to a known account
    ///
    /// Unverifiable tokens are a plain `false`, not an error: this backs a
    /// yes/no credential probe.
    pub async fn validate_credentials(&self, token: &str) -> Result<bool> {
        if token.trim().is_empty() {
            return Ok(false);
        }
        let uid = match self.verifier.verify(token) {
            Ok(uid) => uid,
            Err(_) => return Ok(false),
        };
        Ok(self.store.find_account(&uid).await?.is_some())
    }

    /// Resolve an `Authorization` header to its account, if any
    ///
    /// A missing or malformed header is `None`; a well-formed bearer token
    /// that fails verification is an error.
    pub async fn resolve_bearer(&self, header: Option<&str>) -> Result<Option<Account>> {
        let Some(token) = header.and_then(auth::extract_bearer) else {
            return Ok(None);
        };
        let uid = self.verifier.verify(token)?;
        self.store.find_account(&uid).await
    }

    /// Store a linked-service token
    ///
    /// An existing slot for the same service is updated in place; otherwise
    /// the first free slot is taken. With all slots occupied by other
    /// services the request is rejected.
    pub async fn save_service_token(&self, uid: &AccountId, link: ServiceLink) -> Result<Account> {
        let mut account = self.require(uid).await?;

        let slot = account
            .slot_of(&link.service_name)
            .or_else(|| account.free_slot());
        let Some(slot) = slot else {
            warn!(
                "account {} has no free slot for service {}",
                uid, link.service_name
            );
            return Err(MedleyError::invalid_input(
                "no free slot to save service token",
            ));
        };

        info!("service {} saved for account {}", link.service_name, uid);
        account.services[slot] = Some(link);
        self.store.persist_account(account.clone()).await?;
        Ok(account)
    }

    /// Clear the slot holding the given service; absent links are a no-op
    pub async fn remove_service_token(
        &self,
        uid: &AccountId,
        service_name: &str,
    ) -> Result<Account> {
        let mut account = self.require(uid).await?;

        if let Some(slot) = account.slot_of(service_name) {
            account.services[slot] = None;
            self.store.persist_account(account.clone()).await?;
            info!("service {} removed from account {}", service_name, uid);
        }
        Ok(account)
    }

    /// Currently linked services, in slot order
    pub async fn connected_services(&self, uid: &AccountId) -> Result<Vec<ServiceLink>> {
        let account = self.require(uid).await?;
        Ok(account.linked_services().cloned().collect())
    }

    async fn require(&self, uid: &AccountId) -> Result<Account> {
        self.store
            .find_account(uid)
            .await?
            .ok_or_else(|| MedleyError::not_found("account", uid))
    }
}
