use std::fmt;

use crate::entities::{ProfileUpdate, UserCredentials};

pub(crate) const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProfileValidationError {
    IncorrectCurrentPassword,
    MissingUsername,
    PasswordTooShort { min_length: usize },
    PasswordMismatch,
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileValidationError::IncorrectCurrentPassword => {
                write!(f, "the current password is incorrect")
            }
            ProfileValidationError::MissingUsername => write!(f, "the username is required"),
            ProfileValidationError::PasswordTooShort { min_length } => {
                write!(f, "the new password must be at least {} characters", min_length)
            }
            ProfileValidationError::PasswordMismatch => write!(f, "the new passwords do not match"),
        }
    }
}

/// Checks a profile update against the stored record and returns the record
/// that should replace it.
///
/// Checks run in order: current password, a non-empty username, then (only
/// when a new password is given) its length and its confirmation. The
/// username is always replaced; the password only when a new one is given.
pub(crate) fn validate_profile_update(
    stored: &UserCredentials,
    update: &ProfileUpdate,
) -> Result<UserCredentials, ProfileValidationError> {
    if update.current_password != stored.password {
        return Err(ProfileValidationError::IncorrectCurrentPassword);
    }
    if update.new_username.is_empty() {
        return Err(ProfileValidationError::MissingUsername);
    }
    if !update.new_password.is_empty() {
        if update.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ProfileValidationError::PasswordTooShort {
                min_length: MIN_PASSWORD_LENGTH,
            });
        }
        if update.new_password != update.confirm_password {
            return Err(ProfileValidationError::PasswordMismatch);
        }
    }
    let password = if update.new_password.is_empty() {
        stored.password.clone()
    } else {
        update.new_password.clone()
    };
    Ok(UserCredentials {
        username: update.new_username.clone(),
        password,
    })
}
