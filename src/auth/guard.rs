//! Role-gated view reachability, consolidated into one guard instead of
//! per-view checks.

use crate::error::StoreError;
use crate::model::{Account, Role};
use crate::store::Store;

/// Where a navigation attempt lands.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessDecision {
    /// Proceed, acting as this account.
    Granted(Account),
    /// Not authenticated: send to the login view.
    ToLogin,
    /// Authenticated but the role is not allowed: send to the home view.
    /// The session itself stays intact.
    ToHome,
}

/// Gate a view behind an optional role allow-list.
///
/// `None` only requires a logged-in account; `Some(roles)` additionally
/// requires the account's role to be in the list. A failed role check never
/// clears the session, it only redirects.
pub fn check_access(
    store: &Store,
    allowed: Option<&[Role]>,
) -> Result<AccessDecision, StoreError> {
    let Some(account) = store.current_account()? else {
        return Ok(AccessDecision::ToLogin);
    };
    if let Some(roles) = allowed {
        if !roles.contains(&account.role) {
            return Ok(AccessDecision::ToHome);
        }
    }
    Ok(AccessDecision::Granted(account))
}
