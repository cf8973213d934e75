//! Authorization rules for every mutating endpoint.
//!
//! Handlers resolve the target entity first (so a missing target is a 404)
//! and then call one of these checks before touching the facade.

use crate::domain::models::{auth::CurrentUser, place::Place, user::UserChanges};
use crate::error::AppError;

pub const ADMIN_REQUIRED: &str = "Admin privileges required";
pub const UNAUTHORIZED_ACTION: &str = "Unauthorized action";

pub fn ensure_admin(actor: &CurrentUser) -> Result<(), AppError> {
    if actor.is_admin {
        Ok(())
    } else {
        Err(AppError::Forbidden(ADMIN_REQUIRED.into()))
    }
}

/// Places belong to their owner, reviews to their author. Admins bypass both.
pub fn ensure_owner_or_admin(actor: &CurrentUser, owner_id: &str) -> Result<(), AppError> {
    if actor.is_admin || actor.id == owner_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(UNAUTHORIZED_ACTION.into()))
    }
}

pub fn ensure_can_update_user(actor: &CurrentUser, target_id: &str, changes: &UserChanges) -> Result<(), AppError> {
    if actor.is_admin {
        return Ok(());
    }
    if actor.id != target_id {
        return Err(AppError::Forbidden(UNAUTHORIZED_ACTION.into()));
    }
    if changes.touches_credentials() {
        return Err(AppError::validation("You cannot modify email or password"));
    }
    if changes.is_admin.is_some() {
        return Err(AppError::Forbidden(ADMIN_REQUIRED.into()));
    }
    Ok(())
}

/// Owners may not review their own listing; this holds for admins too.
pub fn ensure_can_review(actor: &CurrentUser, place: &Place) -> Result<(), AppError> {
    if place.owner_id == actor.id {
        return Err(AppError::validation("You cannot review your own place"));
    }
    Ok(())
}

pub fn ensure_not_self(actor: &CurrentUser, target_id: &str) -> Result<(), AppError> {
    if actor.id == target_id {
        return Err(AppError::Conflict("Cannot delete yourself".into()));
    }
    Ok(())
}
