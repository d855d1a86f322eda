// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod key_value_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod credentials_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod transaction_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod credentials_repository_impl;
        pub(crate) mod session_repository_impl;
        pub(crate) mod storage_adapter;
        pub(crate) mod transactions_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod app_state;
        pub(crate) mod credentials;
        pub(crate) mod editor;
        pub(crate) mod export;
        pub(crate) mod inventory_transaction;
        pub(crate) mod profile;
        pub(crate) mod view;
    }
    pub(crate) mod logic {
        pub(crate) mod form_parsing;
        pub(crate) mod id_generator;
        pub(crate) mod pipeline;
        pub(crate) mod profile_validation;
    }
    pub(crate) mod repositories {
        pub(crate) mod credentials_repository;
        pub(crate) mod session_repository;
        pub(crate) mod transactions_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod auth_usecase;
        pub(crate) mod export_usecase;
        pub(crate) mod transactions_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod csv_renderer;
    pub(crate) mod document_renderer;
    pub(crate) mod export_row;
    pub(crate) mod spreadsheet_renderer;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::app_state::*;
        pub use crate::domain::entities::credentials::*;
        pub use crate::domain::entities::editor::*;
        pub use crate::domain::entities::export::*;
        pub use crate::domain::entities::inventory_transaction::*;
        pub use crate::domain::entities::profile::*;
        pub use crate::domain::entities::view::*;
    }

    pub mod storage {
        pub use crate::data::datasources::key_value_datasource::*;
    }
}
