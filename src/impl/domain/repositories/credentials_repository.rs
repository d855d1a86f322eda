use crate::entities::UserCredentials;

/// Holds the singleton credential record. There is always exactly one.
pub trait CredentialsRepository {
    fn credentials(&self) -> &UserCredentials;

    /// Replaces the record wholesale.
    fn replace(&mut self, credentials: UserCredentials);
}
