use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Teacher};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn create(&self, teacher: Teacher) -> AppResult<Teacher>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Teacher>>;
}

pub struct MongoTeacherRepository {
    collection: Collection<Teacher>,
}

impl MongoTeacherRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("teachers");
        Self { collection }
    }

    /// Unique index on email; the store is the final authority on duplicates.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for teachers collection");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(email_index).await?;
        Ok(())
    }
}

#[async_trait]
impl TeacherRepository for MongoTeacherRepository {
    async fn create(&self, teacher: Teacher) -> AppResult<Teacher> {
        self.collection.insert_one(&teacher).await?;
        Ok(teacher)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Teacher>> {
        let teacher = self.collection.find_one(doc! { "email": email }).await?;
        Ok(teacher)
    }
}
