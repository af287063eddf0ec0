//! Request identity resolved by the upstream gateway.
//!
//! The gateway authenticates callers and forwards `(user id, role)` as
//! headers; this layer only reads that fact. Owner-scoped endpoints treat
//! a missing or malformed identity as an authentication error.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

const USER_ID_HEADER: &str = "x-user-id";
const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Guest,
    Tenant,
}

impl Role {
    fn parse(raw: &str) -> Option<Role> {
        match raw {
            "guest" => Some(Role::Guest),
            "tenant" => Some(Role::Tenant),
            _ => None,
        }
    }
}

/// Authenticated caller identity
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: i32,
    pub role: Role,
}

impl CurrentUser {
    /// Caller's id when they hold the tenant role.
    pub fn require_tenant(&self) -> Result<i32, AppError> {
        match self.role {
            Role::Tenant => Ok(self.id),
            Role::Guest => Err(AppError::Forbidden),
        }
    }

    /// Tenant id for optional scoping, `None` for guests.
    pub fn tenant_id(&self) -> Option<i32> {
        match self.role {
            Role::Tenant => Some(self.id),
            Role::Guest => None,
        }
    }
}

fn extract_user(parts: &Parts) -> Option<CurrentUser> {
    let id = parts
        .headers
        .get(USER_ID_HEADER)?
        .to_str()
        .ok()?
        .parse::<i32>()
        .ok()?;
    if id <= 0 {
        return None;
    }

    let role = Role::parse(parts.headers.get(USER_ROLE_HEADER)?.to_str().ok()?)?;
    Some(CurrentUser { id, role })
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_user(parts).ok_or(AppError::Unauthorized)
    }
}

/// Optional caller identity for endpoints that serve both anonymous and
/// signed-in callers.
#[derive(Debug, Clone, Copy)]
pub struct MaybeUser(pub Option<CurrentUser>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(extract_user(parts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_extracts_tenant_identity() {
        let parts = parts(&[("x-user-id", "7"), ("x-user-role", "tenant")]);
        let user = extract_user(&parts).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Tenant);
        assert_eq!(user.require_tenant().unwrap(), 7);
    }

    #[test]
    fn test_guest_cannot_pass_tenant_gate() {
        let parts = parts(&[("x-user-id", "7"), ("x-user-role", "guest")]);
        let user = extract_user(&parts).unwrap();
        assert!(user.require_tenant().is_err());
        assert_eq!(user.tenant_id(), None);
    }

    #[test]
    fn test_missing_or_malformed_headers_yield_no_identity() {
        assert!(extract_user(&parts(&[])).is_none());
        assert!(extract_user(&parts(&[("x-user-id", "7")])).is_none());
        assert!(extract_user(&parts(&[("x-user-id", "abc"), ("x-user-role", "tenant")])).is_none());
        assert!(extract_user(&parts(&[("x-user-id", "0"), ("x-user-role", "tenant")])).is_none());
        assert!(extract_user(&parts(&[("x-user-id", "7"), ("x-user-role", "admin")])).is_none());
    }
}
