use sqlx::SqliteConnection;

use crate::models::{Course, CoursePayload};

pub async fn fetch_courses(conn: &mut SqliteConnection) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        r#"
        SELECT id, name, description
        FROM course_db
        "#,
    )
    .fetch_all(conn)
    .await
}

pub async fn fetch_course(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        r#"
        SELECT id, name, description
        FROM course_db
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Inserts a course and returns the id the table assigned to it.
pub async fn insert_course(
    conn: &mut SqliteConnection,
    req: CoursePayload,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO course_db (name, description)
        VALUES (?1, ?2)
        "#,
    )
    .bind(req.name)
    .bind(req.description)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrites both columns. Returns the number of rows touched, zero when
/// no course has this id.
pub async fn update_course(
    conn: &mut SqliteConnection,
    id: i64,
    req: CoursePayload,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE course_db
        SET name = ?1, description = ?2
        WHERE id = ?3
        "#,
    )
    .bind(req.name)
    .bind(req.description)
    .bind(id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_course(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM course_db WHERE id = ?1")
        .bind(id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}
