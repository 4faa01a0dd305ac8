pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Store lifecycle errors
    #[error("Failed to open the appointment store: {0}")]
    StoreUnavailable(sqlx::Error),
    #[error("Failed to create the citas table: {0}")]
    SchemaError(sqlx::Error),
    // Repository errors
    #[error("Failed to insert appointment: {0}")]
    InsertFailed(sqlx::Error),
    #[error("Store did not report an id for the inserted appointment")]
    MissingInsertId,
}
