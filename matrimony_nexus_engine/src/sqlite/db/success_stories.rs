use sqlx::SqliteConnection;

use crate::{
    db_types::{NewSuccessStory, SuccessStory},
    traits::SuccessStoryError,
};

pub async fn fetch_all_success_stories(conn: &mut SqliteConnection) -> Result<Vec<SuccessStory>, SuccessStoryError> {
    let stories = sqlx::query_as("SELECT * FROM success_stories ORDER BY id").fetch_all(conn).await?;
    Ok(stories)
}

pub async fn insert_success_story(story: NewSuccessStory, conn: &mut SqliteConnection) -> Result<i64, SuccessStoryError> {
    let result = sqlx::query(
        r#"
        INSERT INTO success_stories (self_biodata_id, partner_biodata_id, couple_image, review, marriage_date)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(story.self_biodata_id)
    .bind(story.partner_biodata_id)
    .bind(story.couple_image)
    .bind(story.review)
    .bind(story.marriage_date)
    .execute(conn)
    .await?;
    Ok(result.last_insert_rowid())
}
