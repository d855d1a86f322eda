/// Submitted profile form.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub new_username: String,
    pub current_password: String,
    /// Empty means "keep the current password".
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdated {
    pub username: String,
    pub message: String,
}
