use serde_json::Number;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::SqlitePool;

use super::ExecOutcome;
use crate::models::{Course, CourseDuration, CourseInput, Image};

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

pub async fn fetch_courses(db: &SqlitePool) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "SELECT id, name, price, typeof(price) AS price_type, start, duration, \
         typeof(duration) AS duration_type, type_id FROM courses ORDER BY id",
    )
    .fetch_all(db)
    .await
}

pub async fn find_course_by_id(db: &SqlitePool, id: i64) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "SELECT id, name, price, typeof(price) AS price_type, start, duration, \
         typeof(duration) AS duration_type, type_id FROM courses WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn insert_course(db: &SqlitePool, req: CourseInput) -> Result<Course, sqlx::Error> {
    let query = sqlx::query(
        "INSERT INTO courses (name, price, start, duration, type_id) VALUES (?, ?, ?, ?, ?)",
    );
    let outcome: ExecOutcome = bind_course(query, &req).execute(db).await?.into();

    Ok(Course::from_input(outcome.insert_id, req))
}

/// Replaces every writable field. Zero affected rows means no such course.
pub async fn update_course(
    db: &SqlitePool,
    id: i64,
    req: &CourseInput,
) -> Result<ExecOutcome, sqlx::Error> {
    let query = sqlx::query(
        "UPDATE courses SET name = ?, price = ?, start = ?, duration = ?, type_id = ? WHERE id = ?",
    );
    let result = bind_course(query, req).bind(id).execute(db).await?;

    Ok(result.into())
}

// Binds the five writable fields in column order.
fn bind_course<'q>(query: SqliteQuery<'q>, req: &CourseInput) -> SqliteQuery<'q> {
    let query = bind_number(query.bind(req.name.clone()), &req.price).bind(req.start.clone());
    let query = match &req.duration {
        CourseDuration::Number(n) => bind_number(query, n),
        CourseDuration::Text(text) => query.bind(text.clone()),
    };
    query.bind(req.type_id)
}

// Integers stay integers in the store; everything else goes in as a real.
fn bind_number<'q>(query: SqliteQuery<'q>, n: &Number) -> SqliteQuery<'q> {
    match n.as_i64() {
        Some(i) => query.bind(i),
        None => query.bind(n.as_f64()),
    }
}

pub async fn delete_course(db: &SqlitePool, id: i64) -> Result<ExecOutcome, sqlx::Error> {
    let result = sqlx::query("DELETE FROM courses WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.into())
}

pub async fn insert_image(db: &SqlitePool, image: &str) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO images (image) VALUES (?)")
        .bind(image)
        .execute(db)
        .await?;

    Ok(result.last_insert_rowid())
}

pub async fn fetch_images(db: &SqlitePool) -> Result<Vec<Image>, sqlx::Error> {
    sqlx::query_as::<_, Image>("SELECT id, image FROM images ORDER BY id")
        .fetch_all(db)
        .await
}
