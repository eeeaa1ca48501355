use sqlx::PgPool;
use storage::{
    dto::user_weight::{CreateUserWeightRequest, UpdateUserWeightRequest, UserWeightResponse},
    repository::user_weight::UserWeightRepository,
};
use uuid::Uuid;

use crate::error::WebResult;

pub async fn list_user_weights(pool: &PgPool, user_id: Uuid) -> WebResult<Vec<UserWeightResponse>> {
    let weights = UserWeightRepository::new(pool).list(user_id).await?;

    Ok(weights.into_iter().map(UserWeightResponse::from).collect())
}

pub async fn get_user_weight(
    pool: &PgPool,
    user_id: Uuid,
    user_weight_id: Uuid,
) -> WebResult<UserWeightResponse> {
    let weight = UserWeightRepository::new(pool)
        .find_by_id(user_id, user_weight_id)
        .await?;

    Ok(UserWeightResponse::from(weight))
}

pub async fn create_user_weight(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreateUserWeightRequest,
) -> WebResult<UserWeightResponse> {
    let weight = UserWeightRepository::new(pool).create(user_id, req).await?;

    Ok(UserWeightResponse::from(weight))
}

pub async fn update_user_weight(
    pool: &PgPool,
    user_id: Uuid,
    user_weight_id: Uuid,
    req: &UpdateUserWeightRequest,
) -> WebResult<UserWeightResponse> {
    let weight = UserWeightRepository::new(pool)
        .update(user_id, user_weight_id, req)
        .await?;

    Ok(UserWeightResponse::from(weight))
}

pub async fn delete_user_weight(
    pool: &PgPool,
    user_id: Uuid,
    user_weight_id: Uuid,
) -> WebResult<()> {
    UserWeightRepository::new(pool)
        .delete(user_id, user_weight_id)
        .await?;

    Ok(())
}
