use crate::models::{FormData, Message, FORM_DATA_COLLECTION, MESSAGE_COLLECTION};
use crate::services::store::SubmissionStore;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, Bson, Document},
    error::ErrorKind,
    options::{ClientOptions, CreateCollectionOptions},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;
use std::time::Duration;
use validator::Validate;

/// MongoDB error code for "collection already exists".
const NAMESPACE_EXISTS: i32 = 48;

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    /// Open the process-wide client and confirm the server answers.
    ///
    /// The database named in `uri` wins over `database`. `timeout` bounds
    /// server selection, so an unreachable server fails here instead of on
    /// the first write.
    pub async fn connect(uri: &str, database: &str, timeout: Duration) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let mut client_options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        client_options.app_name = Some("contact-service".to_string());
        client_options.server_selection_timeout = Some(timeout);

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(database));

        let store = Self { client, db };
        store.health_check().await?;
        tracing::info!(database = %store.db.name(), "Successfully connected to MongoDB database");
        Ok(store)
    }

    /// Create both collections with a schema validator that requires every
    /// field as a non-empty string. Existing collections are left as they are.
    pub async fn initialize_collections(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB collections for contact-service");

        for (name, fields) in [
            (MESSAGE_COLLECTION, Message::REQUIRED_FIELDS),
            (FORM_DATA_COLLECTION, FormData::REQUIRED_FIELDS),
        ] {
            self.create_validated_collection(name, fields).await?;
        }

        Ok(())
    }

    async fn create_validated_collection(
        &self,
        name: &str,
        fields: &[&str],
    ) -> Result<(), AppError> {
        let existing = self
            .db
            .list_collection_names(doc! { "name": name })
            .await
            .map_err(|e| {
                tracing::error!("Failed to list collections: {}", e);
                AppError::from(e)
            })?;
        if !existing.is_empty() {
            tracing::info!(collection = %name, "Collection exists, leaving its validator untouched");
            return Ok(());
        }

        let options = CreateCollectionOptions::builder()
            .validator(required_strings_schema(fields))
            .build();

        match self.db.create_collection(name, options).await {
            Ok(()) => {
                tracing::info!(collection = %name, "Created collection with schema validator");
                Ok(())
            }
            // Another instance created it between the listing and now.
            Err(e) if matches!(*e.kind, ErrorKind::Command(ref c) if c.code == NAMESPACE_EXISTS) => {
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to create collection {}: {}", name, e);
                Err(AppError::from(e))
            }
        }
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn messages(&self) -> Collection<Message> {
        self.db.collection(MESSAGE_COLLECTION)
    }

    pub fn form_data(&self) -> Collection<FormData> {
        self.db.collection(FORM_DATA_COLLECTION)
    }
}

#[async_trait]
impl SubmissionStore for MongoStore {
    async fn insert_message(&self, message: &Message) -> Result<String, AppError> {
        message.validate()?;
        let result = self
            .messages()
            .insert_one(message, None)
            .await
            .map_err(AppError::from)?;
        Ok(id_to_string(&result.inserted_id))
    }

    async fn insert_form_data(&self, form: &FormData) -> Result<String, AppError> {
        form.validate()?;
        let result = self
            .form_data()
            .insert_one(form, None)
            .await
            .map_err(AppError::from)?;
        Ok(id_to_string(&result.inserted_id))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}

fn required_strings_schema(fields: &[&str]) -> Document {
    let mut properties = Document::new();
    for field in fields {
        properties.insert(*field, doc! { "bsonType": "string", "minLength": 1 });
    }

    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": fields.to_vec(),
            "properties": properties,
        }
    }
}

fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}
