use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::{get_all_categories, get_category_type_rows},
            questions::{count_questions, get_questions_for_category},
        },
        Question,
    },
    server::{
        app::AppState,
        extractors::{ApiPath, ApiQuery},
    },
};

use super::{category_map, paginate, ApiResponse, PageQuery};

#[derive(Serialize)]
struct CategoriesList {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    // one single-column row per matching category: [["Science"]]
    current_category: Vec<(String,)>,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesList> {
    let categories = get_all_categories(&pool).await?;
    Ok(Json(CategoriesList {
        success: true,
        categories: category_map(categories),
    }))
}

async fn questions_by_category(
    State(pool): State<SqlitePool>,
    ApiPath(cat_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<CategoryQuestions> {
    let questions = get_questions_for_category(&pool, cat_id).await?;
    let current_category = get_category_type_rows(&pool, cat_id).await?;
    // counts every stored question, not only the category's
    let total_questions = count_questions(&pool).await?;

    Ok(Json(CategoryQuestions {
        success: true,
        questions: paginate(questions, query.page()),
        total_questions,
        current_category,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{cat_id}/questions", get(questions_by_category))
        .with_state(state)
}
