use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Carries the store's own message; callers surface it to clients unchanged.
    #[error("{0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Db(e.to_string())
    }
}
