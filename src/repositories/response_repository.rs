use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::QuizResponse};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    async fn insert(&self, response: QuizResponse) -> AppResult<QuizResponse>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizResponse>>;
    async fn find_by_correction_id(&self, correction_id: &str)
        -> AppResult<Option<QuizResponse>>;
    /// Responses for one quiz, newest first.
    async fn list_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizResponse>>;
    /// Responses across several quizzes, newest first.
    async fn list_by_quiz_ids(&self, quiz_ids: &[String]) -> AppResult<Vec<QuizResponse>>;
    /// Bulk removal when the parent quiz is deleted.
    async fn delete_by_quiz(&self, quiz_id: &str) -> AppResult<u64>;
}

pub struct MongoResponseRepository {
    collection: Collection<QuizResponse>,
}

impl MongoResponseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("responses");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for responses collection");

        let correction_index = IndexModel::builder()
            .keys(doc! { "correctionId": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("correction_id_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(correction_index).await?;

        let quiz_index = IndexModel::builder()
            .keys(doc! { "quizId": 1 })
            .options(IndexOptions::builder().name("quiz_id".to_string()).build())
            .build();
        self.collection.create_index(quiz_index).await?;

        Ok(())
    }

    fn newest_first() -> FindOptions {
        FindOptions::builder()
            .sort(doc! { "submittedAt": -1 })
            .build()
    }
}

#[async_trait]
impl ResponseRepository for MongoResponseRepository {
    async fn insert(&self, response: QuizResponse) -> AppResult<QuizResponse> {
        self.collection.insert_one(&response).await?;
        Ok(response)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizResponse>> {
        let response = self.collection.find_one(doc! { "id": id }).await?;
        Ok(response)
    }

    async fn find_by_correction_id(
        &self,
        correction_id: &str,
    ) -> AppResult<Option<QuizResponse>> {
        let response = self
            .collection
            .find_one(doc! { "correctionId": correction_id })
            .await?;
        Ok(response)
    }

    async fn list_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizResponse>> {
        let cursor = self
            .collection
            .find(doc! { "quizId": quiz_id })
            .with_options(Self::newest_first())
            .await?;
        let responses: Vec<QuizResponse> = cursor.try_collect().await?;
        Ok(responses)
    }

    async fn list_by_quiz_ids(&self, quiz_ids: &[String]) -> AppResult<Vec<QuizResponse>> {
        let cursor = self
            .collection
            .find(doc! { "quizId": { "$in": quiz_ids } })
            .with_options(Self::newest_first())
            .await?;
        let responses: Vec<QuizResponse> = cursor.try_collect().await?;
        Ok(responses)
    }

    async fn delete_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "quizId": quiz_id })
            .await?;
        Ok(result.deleted_count)
    }
}
