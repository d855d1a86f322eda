use uuid::Uuid;

use crate::entities::TransactionId;

/// Mints a fresh opaque id for a new transaction.
pub(crate) fn mint_transaction_id() -> TransactionId {
    TransactionId(Uuid::new_v4().to_string())
}
