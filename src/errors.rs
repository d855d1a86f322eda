use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_internal_error!(StorageError, "Error accessing storage key '{key}'.", { key: &str });
define_internal_error!(
    ExportWriteError,
    "Error writing exported file '{file_name}'.",
    { file_name: &str }
);

// Parsing-related.
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });

// Session-related.
define_client_error!(InvalidLogin, "Invalid username or password.");
define_client_error!(NotAuthenticated, "Login required.");
define_client_error!(IncorrectCurrentPassword, "The current password is incorrect.");
define_client_error!(
    PasswordTooShort,
    "The new password must be at least {min_length} characters long.",
    { min_length: usize }
);
define_client_error!(PasswordMismatch, "The new passwords do not match.");

// Transaction-related.
define_client_error!(MissingRequiredField, "Field '{field}' is required.", { field: &str });
define_client_error!(TransactionNotFound, "No transaction with id '{id}'.", { id: &str });

// Export-related.
define_internal_error!(
    ExportRenderError,
    "Failed to render {format} export.",
    { format: &str }
);
