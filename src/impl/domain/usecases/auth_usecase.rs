use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::key_value_datasource::KeyValueDatasource,
        repositories::{
            credentials_repository_impl::CredentialsRepositoryImpl,
            session_repository_impl::SessionRepositoryImpl, storage_adapter::StorageAdapter,
        },
    },
    domain::{
        logic::profile_validation::{validate_profile_update, ProfileValidationError},
        repositories::{
            credentials_repository::CredentialsRepository, session_repository::SessionRepository,
        },
    },
    entities::{AppState, Page, ProfileUpdate, ProfileUpdated},
    errors::{
        IncorrectCurrentPassword, InvalidLogin, MissingRequiredField, PasswordMismatch,
        PasswordTooShort,
    },
};

pub(crate) const PROFILE_UPDATED_MESSAGE: &str =
    "Perfil atualizado com sucesso! Você será deslogado por segurança.";

/// Two-state session flow: Unauthenticated <-> Authenticated.
pub trait AuthUsecase {
    /// State to start from, restored from storage.
    fn restore_state(&self) -> AppState;

    fn username(&self) -> &str;

    /// Succeeds iff both fields equal the stored record exactly. A failed
    /// attempt leaves `state` untouched.
    fn login(&mut self, state: &mut AppState, username: &str, password: &str)
        -> Result<(), ServerError>;

    fn logout(&mut self, state: &mut AppState);

    /// Validates and applies a profile change, then logs out so the new
    /// credentials must be used. A rejected update changes nothing.
    fn update_profile(
        &mut self,
        state: &mut AppState,
        update: &ProfileUpdate,
    ) -> Result<ProfileUpdated, ServerError>;
}

pub(crate) struct AuthUsecaseImpl<R1, R2>
where
    R1: CredentialsRepository,
    R2: SessionRepository,
{
    credentials_repository: R1,
    session_repository: R2,
}

impl<R1, R2> AuthUsecase for AuthUsecaseImpl<R1, R2>
where
    R1: CredentialsRepository,
    R2: SessionRepository,
{
    fn restore_state(&self) -> AppState {
        AppState {
            authenticated: self.session_repository.is_authenticated(),
            page: Page::Stock,
        }
    }

    fn username(&self) -> &str {
        &self.credentials_repository.credentials().username
    }

    fn login(
        &mut self,
        state: &mut AppState,
        username: &str,
        password: &str,
    ) -> Result<(), ServerError> {
        if !self
            .credentials_repository
            .credentials()
            .matches(username, password)
        {
            log::info!("login rejected for user '{}'", username);
            return Err(InvalidLogin::new());
        }
        self.session_repository.set_authenticated(true);
        state.authenticated = true;
        state.page = Page::Stock;
        log::info!("user '{}' logged in", username);
        Ok(())
    }

    fn logout(&mut self, state: &mut AppState) {
        self.session_repository.set_authenticated(false);
        state.authenticated = false;
        log::info!("logged out");
    }

    fn update_profile(
        &mut self,
        state: &mut AppState,
        update: &ProfileUpdate,
    ) -> Result<ProfileUpdated, ServerError> {
        let updated =
            validate_profile_update(self.credentials_repository.credentials(), update).map_err(
                |e| {
                    log::info!("profile update rejected: {}", e);
                    match e {
                        ProfileValidationError::IncorrectCurrentPassword => {
                            IncorrectCurrentPassword::new()
                        }
                        ProfileValidationError::MissingUsername => {
                            MissingRequiredField::new("username")
                        }
                        ProfileValidationError::PasswordTooShort { min_length } => {
                            PasswordTooShort::new(min_length)
                        }
                        ProfileValidationError::PasswordMismatch => PasswordMismatch::new(),
                    }
                },
            )?;
        let username = updated.username.clone();
        self.credentials_repository.replace(updated);
        log::info!("profile updated for user '{}'", username);
        self.logout(state);
        Ok(ProfileUpdated {
            username,
            message: PROFILE_UPDATED_MESSAGE.to_string(),
        })
    }
}

impl<R1, R2> AuthUsecaseImpl<R1, R2>
where
    R1: CredentialsRepository,
    R2: SessionRepository,
{
    pub(crate) fn with_repositories(credentials_repository: R1, session_repository: R2) -> Self {
        AuthUsecaseImpl {
            credentials_repository,
            session_repository,
        }
    }
}

impl<DS> AuthUsecaseImpl<CredentialsRepositoryImpl<DS>, SessionRepositoryImpl<DS>>
where
    DS: KeyValueDatasource,
{
    pub(crate) fn new(storage: StorageAdapter<DS>) -> Self {
        Self::with_repositories(
            CredentialsRepositoryImpl::new(storage.clone()),
            SessionRepositoryImpl::new(storage),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::datasources::key_value_datasource::MemoryDatasource, entities::UserCredentials,
    };

    type MemoryAuthUsecase = AuthUsecaseImpl<
        CredentialsRepositoryImpl<MemoryDatasource>,
        SessionRepositoryImpl<MemoryDatasource>,
    >;

    fn usecase() -> (MemoryAuthUsecase, StorageAdapter<MemoryDatasource>) {
        let storage = StorageAdapter::new(MemoryDatasource::new());
        (AuthUsecaseImpl::new(storage.clone()), storage)
    }

    fn logged_in() -> (MemoryAuthUsecase, AppState) {
        let (mut auth, _) = usecase();
        let mut state = auth.restore_state();
        auth.login(&mut state, "admin", "admin123").unwrap();
        (auth, state)
    }

    fn update(current: &str, new: &str, confirm: &str) -> ProfileUpdate {
        ProfileUpdate {
            new_username: "admin".to_string(),
            current_password: current.to_string(),
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_login_requires_exact_match() {
        let (mut auth, _) = usecase();
        let mut state = auth.restore_state();
        assert!(!state.authenticated);

        for (u, p) in [
            ("Admin", "admin123"),
            ("admin", "ADMIN123"),
            ("admin ", "admin123"),
            ("", ""),
            ("admin", "admin1234"),
        ] {
            assert!(auth.login(&mut state, u, p).is_err());
            assert_eq!(state, AppState::default());
        }

        auth.login(&mut state, "admin", "admin123").unwrap();
        assert!(state.authenticated);
        assert_eq!(state.page, Page::Stock);
    }

    #[test]
    fn test_authentication_flag_is_restored() {
        let (mut auth, storage) = usecase();
        let mut state = auth.restore_state();
        auth.login(&mut state, "admin", "admin123").unwrap();

        let restored = AuthUsecaseImpl::new(storage.clone()).restore_state();
        assert!(restored.authenticated);

        auth.logout(&mut state);
        assert!(!state.authenticated);
        assert!(!AuthUsecaseImpl::new(storage).restore_state().authenticated);
    }

    #[test]
    fn test_short_password_rejected_without_changes() {
        let (mut auth, mut state) = logged_in();
        let before = state.clone();
        assert!(auth
            .update_profile(&mut state, &update("admin123", "abc", "abc"))
            .is_err());
        assert_eq!(state, before);
        assert_eq!(
            auth.credentials_repository.credentials(),
            &UserCredentials::new("admin", "admin123")
        );
    }

    #[test]
    fn test_wrong_current_password_rejected() {
        let (mut auth, mut state) = logged_in();
        assert!(auth
            .update_profile(&mut state, &update("nope", "abcdef", "abcdef"))
            .is_err());
        assert!(state.authenticated);
    }

    #[test]
    fn test_successful_update_logs_out_and_persists() {
        let (mut auth, storage) = usecase();
        let mut state = auth.restore_state();
        auth.login(&mut state, "admin", "admin123").unwrap();

        let result = auth
            .update_profile(&mut state, &update("admin123", "abcdef", "abcdef"))
            .unwrap();
        assert_eq!(result.username, "admin");
        assert!(!state.authenticated);
        assert_eq!(auth.credentials_repository.credentials().password, "abcdef");

        let mut reloaded = AuthUsecaseImpl::new(storage);
        let mut fresh = reloaded.restore_state();
        assert!(!fresh.authenticated);
        assert!(reloaded.login(&mut fresh, "admin", "admin123").is_err());
        reloaded.login(&mut fresh, "admin", "abcdef").unwrap();
    }

    #[test]
    fn test_blank_username_rejected_without_changes() {
        let (mut auth, mut state) = logged_in();
        let mut u = update("admin123", "abcdef", "abcdef");
        u.new_username = String::new();
        assert!(auth.update_profile(&mut state, &u).is_err());
        assert!(state.authenticated);
        assert_eq!(auth.credentials_repository.credentials(), &UserCredentials::default());
    }

    #[test]
    fn test_username_change_keeps_password() {
        let (mut auth, mut state) = logged_in();
        let mut u = update("admin123", "", "");
        u.new_username = "estoquista".to_string();
        auth.update_profile(&mut state, &u).unwrap();
        assert_eq!(auth.username(), "estoquista");
        auth.login(&mut state, "estoquista", "admin123").unwrap();
    }
}
