use crate::entities::UserCredentials;

/// Persisted shape of the credential record under `userCredentials`.
#[derive(Clone, serde_derive::Serialize, serde_derive::Deserialize)]
pub(crate) struct CredentialsModel {
    pub username: String,
    pub password: String,
}

impl From<CredentialsModel> for UserCredentials {
    fn from(m: CredentialsModel) -> Self {
        UserCredentials {
            username: m.username,
            password: m.password,
        }
    }
}

impl From<&UserCredentials> for CredentialsModel {
    fn from(c: &UserCredentials) -> Self {
        CredentialsModel {
            username: c.username.clone(),
            password: c.password.clone(),
        }
    }
}
