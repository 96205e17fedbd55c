use crate::models::{FormData, Message};
use crate::services::store::SubmissionStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use tokio::sync::RwLock;
use validator::Validate;

/// How an [`InMemoryStore`] answers writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreMode {
    #[default]
    Available,
    /// Every write and health check fails, as if the server were gone.
    Unavailable,
    /// Writes never complete. Health checks still pass.
    Stalled,
}

/// Process-local store for tests and database-less local runs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    mode: RwLock<StoreMode>,
    messages: RwLock<Vec<Message>>,
    form_data: RwLock<Vec<FormData>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_mode(&self, mode: StoreMode) {
        *self.mode.write().await = mode;
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    pub async fn form_data(&self) -> Vec<FormData> {
        self.form_data.read().await.clone()
    }

    async fn admit_write(&self) -> Result<(), AppError> {
        let mode = *self.mode.read().await;
        match mode {
            StoreMode::Available => Ok(()),
            StoreMode::Unavailable => Err(unavailable()),
            StoreMode::Stalled => std::future::pending().await,
        }
    }
}

fn unavailable() -> AppError {
    AppError::DatabaseError(anyhow::anyhow!("in-memory store is unavailable"))
}

#[async_trait]
impl SubmissionStore for InMemoryStore {
    async fn insert_message(&self, message: &Message) -> Result<String, AppError> {
        self.admit_write().await?;
        message.validate()?;

        let id = ObjectId::new();
        let mut record = message.clone();
        record.id = Some(id);
        self.messages.write().await.push(record);
        Ok(id.to_hex())
    }

    async fn insert_form_data(&self, form: &FormData) -> Result<String, AppError> {
        self.admit_write().await?;
        form.validate()?;

        let id = ObjectId::new();
        let mut record = form.clone();
        record.id = Some(id);
        self.form_data.write().await.push(record);
        Ok(id.to_hex())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        match *self.mode.read().await {
            StoreMode::Unavailable => Err(unavailable()),
            StoreMode::Available | StoreMode::Stalled => Ok(()),
        }
    }
}
