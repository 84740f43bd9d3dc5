//! Course subject repository: CRUD over the `course_subjects` table.

use async_trait::async_trait;
use tracing::{debug, info};

use gestor_core::{CourseSubject, DEFAULT_AREA, SubjectDraft};

use crate::GestorDb;
use crate::error::StoreError;
use crate::store::SubjectStore;

const SELECT_COLS: &str = "id, name, code, credits, component_cd, component_cp, component_aa, \
                           total_hours, area";

fn row_to_subject(row: &libsql::Row) -> Result<CourseSubject, StoreError> {
    Ok(CourseSubject {
        id: row.get(0)?,
        name: row.get(1)?,
        code: row.get(2)?,
        credits: row.get(3)?,
        component_cd: row.get(4)?,
        component_cp: row.get(5)?,
        component_aa: row.get(6)?,
        total_hours: row.get(7)?,
        area: area_or_default(row, 8)?,
    })
}

/// Read the nullable `area` column. NULL and blank both mean the default area.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
fn area_or_default(row: &libsql::Row, idx: i32) -> Result<String, StoreError> {
    match row.get::<Option<String>>(idx)? {
        Some(area) if !area.trim().is_empty() => Ok(area),
        _ => Ok(DEFAULT_AREA.to_string()),
    }
}

#[async_trait]
impl SubjectStore for GestorDb {
    async fn find_by_id(&self, id: i64) -> Result<Option<CourseSubject>, StoreError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM course_subjects WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let subject = match rows.next().await? {
            Some(row) => Some(row_to_subject(&row)?),
            None => None,
        };
        debug!(id, found = subject.is_some(), "subject lookup");
        Ok(subject)
    }

    async fn list_all(&self) -> Result<Vec<CourseSubject>, StoreError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM course_subjects ORDER BY id"),
                (),
            )
            .await?;

        let mut subjects = Vec::new();
        while let Some(row) = rows.next().await? {
            subjects.push(row_to_subject(&row)?);
        }
        Ok(subjects)
    }

    async fn insert(&self, draft: &SubjectDraft) -> Result<CourseSubject, StoreError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                &format!(
                    "INSERT INTO course_subjects \
                     (name, code, credits, component_cd, component_cp, component_aa, total_hours, area) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
                     RETURNING {SELECT_COLS}"
                ),
                libsql::params![
                    draft.name.as_str(),
                    draft.code.as_str(),
                    draft.credits,
                    draft.component_cd,
                    draft.component_cp,
                    draft.component_aa,
                    draft.total_hours,
                    draft.area.as_str()
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        let subject = row_to_subject(&row)?;

        info!(id = subject.id, code = %subject.code, "subject created");
        Ok(subject)
    }

    async fn replace(&self, id: i64, draft: &SubjectDraft) -> Result<CourseSubject, StoreError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                &format!(
                    "UPDATE course_subjects SET \
                     name = ?1, code = ?2, credits = ?3, component_cd = ?4, component_cp = ?5, \
                     component_aa = ?6, total_hours = ?7, area = ?8 \
                     WHERE id = ?9 \
                     RETURNING {SELECT_COLS}"
                ),
                libsql::params![
                    draft.name.as_str(),
                    draft.code.as_str(),
                    draft.credits,
                    draft.component_cd,
                    draft.component_cp,
                    draft.component_aa,
                    draft.total_hours,
                    draft.area.as_str(),
                    id
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NotFound { id })?;
        let subject = row_to_subject(&row)?;

        info!(id, code = %subject.code, "subject replaced");
        Ok(subject)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.connect()?;
        let affected = conn
            .execute(
                "DELETE FROM course_subjects WHERE id = ?1",
                libsql::params![id],
            )
            .await?;
        if affected == 0 {
            return Err(StoreError::NotFound { id });
        }

        info!(id, "subject deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MEMORY_PATH;
    use pretty_assertions::assert_eq;

    async fn test_db() -> GestorDb {
        GestorDb::open_local(MEMORY_PATH).await.unwrap()
    }

    fn draft(code: &str) -> SubjectDraft {
        SubjectDraft {
            name: format!("Asignatura {code}"),
            code: code.into(),
            credits: 3,
            component_cd: 5,
            component_cp: 2,
            component_aa: 2,
            total_hours: 9,
            area: "Ingeniería".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn insert_subject_roundtrip() {
        let db = test_db().await;

        let created = db.insert(&draft("MAT101")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created, draft("MAT101").into_subject(created.id));

        let fetched = db.find_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn insert_ignores_draft_id() {
        let db = test_db().await;

        let created = db
            .insert(&SubjectDraft {
                id: Some(500),
                ..draft("MAT101")
            })
            .await
            .unwrap();
        assert_ne!(created.id, 500);
    }

    #[tokio::test]
    async fn find_missing_subject_returns_none() {
        let db = test_db().await;
        assert_eq!(db.find_by_id(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_all_orders_by_id() {
        let db = test_db().await;

        let a = db.insert(&draft("AAA100")).await.unwrap();
        let b = db.insert(&draft("BBB200")).await.unwrap();

        let ids: Vec<i64> = db.list_all().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn replace_overwrites_every_column() {
        let db = test_db().await;
        let created = db.insert(&draft("MAT101")).await.unwrap();

        let edited = SubjectDraft {
            name: "Cálculo II".into(),
            code: "MAT102".into(),
            credits: 4,
            component_cd: 6,
            component_cp: 3,
            component_aa: 3,
            total_hours: 12,
            area: "Matemáticas".into(),
            id: Some(created.id),
        };
        let replaced = db.replace(created.id, &edited).await.unwrap();

        assert_eq!(replaced, edited.into_subject(created.id));
        assert_eq!(db.find_by_id(created.id).await.unwrap(), Some(replaced));
    }

    #[tokio::test]
    async fn replace_missing_subject_is_not_found_and_creates_nothing() {
        let db = test_db().await;

        let result = db.replace(77, &draft("MAT101")).await;
        assert!(matches!(result, Err(StoreError::NotFound { id: 77 })));
        assert!(db.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_subject() {
        let db = test_db().await;
        let created = db.insert(&draft("MAT101")).await.unwrap();

        db.delete(created.id).await.unwrap();
        assert_eq!(db.find_by_id(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_missing_subject_leaves_store_unchanged() {
        let db = test_db().await;
        let kept = db.insert(&draft("MAT101")).await.unwrap();

        let result = db.delete(kept.id + 1).await;
        assert!(result.unwrap_err().is_not_found());
        assert_eq!(db.list_all().await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn null_area_reads_as_default() {
        let db = test_db().await;
        db.connect()
            .unwrap()
            .execute(
                "INSERT INTO course_subjects (name, code, credits, component_cd, component_cp, component_aa, total_hours, area) \
                 VALUES ('Ética', 'HUM100', 1, 1, 1, 1, 3, NULL)",
                (),
            )
            .await
            .unwrap();

        let subjects = db.list_all().await.unwrap();
        assert_eq!(subjects[0].area, DEFAULT_AREA);
    }
}
