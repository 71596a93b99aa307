use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Quiz};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// One atomic write of the full quiz document; readers never observe a
    /// partially written quiz.
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn find_by_share_id(&self, share_id: &str) -> AppResult<Option<Quiz>>;
    async fn list_by_teacher(&self, teacher_id: &str) -> AppResult<Vec<Quiz>>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(id_index).await?;

        let share_index = IndexModel::builder()
            .keys(doc! { "shareId": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("share_id_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(share_index).await?;

        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn insert(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn find_by_share_id(&self, share_id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self
            .collection
            .find_one(doc! { "shareId": share_id })
            .await?;
        Ok(quiz)
    }

    async fn list_by_teacher(&self, teacher_id: &str) -> AppResult<Vec<Quiz>> {
        let cursor = self
            .collection
            .find(doc! { "teacherId": teacher_id })
            .await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.collection.delete_one(doc! { "id": id }).await?;
        Ok(())
    }
}
