/// Account domain type
use crate::types::AccountId;
use serde::{Deserialize, Serialize};

/// Number of linked-service slots per account
pub const SERVICE_SLOTS: usize = 3;

/// A linked streaming service (name, external account id, opaque token)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLink {
    /// Service name (e.g. "spotify")
    pub service_name: String,

    /// Account id on the external service
    pub account_id: String,

    /// Opaque auth token for the external service
    pub auth_token: String,
}

/// User account
///
/// Identity is the externally issued subject id; library memberships are kept
/// in the storage-level relationship table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Externally issued subject id
    pub uid: AccountId,

    /// Display name
    pub username: String,

    /// Up to three linked-service slots
    pub services: [Option<ServiceLink>; SERVICE_SLOTS],
}

impl Account {
    /// Create a new account with empty service slots
    pub fn new(uid: AccountId, username: impl Into<String>) -> Self {
        Self {
            uid,
            username: username.into(),
            services: Default::default(),
        }
    }

    /// Slot index holding the given service, if any
    pub fn slot_of(&self, service_name: &str) -> Option<usize> {
        self.services
            .iter()
            .position(|s| s.as_ref().is_some_and(|l| l.service_name == service_name))
    }

    /// First unoccupied slot index, if any
    pub fn free_slot(&self) -> Option<usize> {
        self.services.iter().position(Option::is_none)
    }

    /// Occupied slots in order
    pub fn linked_services(&self) -> impl Iterator<Item = &ServiceLink> {
        self.services.iter().filter_map(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(name: &str) -> ServiceLink {
        ServiceLink {
            service_name: name.to_string(),
            account_id: format!("{name}-acct"),
            auth_token: "token".to_string(),
        }
    }

    #[test]
    fn slot_lookup() {
        let mut account = Account::new(AccountId::new("uid-1"), "alice");
        account.services[0] = Some(link("spotify"));
        account.services[2] = Some(link("audius"));

        assert_eq!(account.slot_of("spotify"), Some(0));
        assert_eq!(account.slot_of("audius"), Some(2));
        assert_eq!(account.slot_of("tidal"), None);
        assert_eq!(account.free_slot(), Some(1));
        assert_eq!(account.linked_services().count(), 2);
    }
}
