//! # Generic CRUD Repository
//!
//! One repository implementation shared by every CRUD-exposed entity. The
//! resource contract supplies the entity's SeaORM types; the database
//! connection is injected by the caller rather than read from process-wide
//! state.

use crate::error::RepositoryError;
use crate::resource::{CrudResource, active_model_from_payload, payload_id};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Iterable, PrimaryKeyToColumn,
    TransactionTrait,
};
use serde_json::Value as JsonValue;
use std::marker::PhantomData;

/// Repository for one entity's database operations
pub struct CrudRepository<'a, R: CrudResource> {
    db: &'a DatabaseConnection,
    resource: PhantomData<R>,
}

impl<'a, R: CrudResource> CrudRepository<'a, R> {
    /// Create a new repository over the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }

    /// Insert one record built from a JSON payload, returning the stored row
    /// including the generated id and database-defaulted columns.
    pub async fn insert_one(&self, payload: &JsonValue) -> Result<R::Model, RepositoryError> {
        let active = active_model_from_payload::<R>(payload)?;
        let model = active.insert(self.db).await?;
        Ok(model)
    }

    /// Insert a batch of records, all-or-nothing: the batch runs in one
    /// transaction and any failure rolls the whole batch back. An empty
    /// batch succeeds with an empty result.
    pub async fn insert_many(
        &self,
        payloads: &[JsonValue],
    ) -> Result<Vec<R::Model>, RepositoryError> {
        let mut actives = Vec::with_capacity(payloads.len());
        for payload in payloads {
            actives.push(active_model_from_payload::<R>(payload)?);
        }

        let txn = self.db.begin().await?;
        let mut stored = Vec::with_capacity(actives.len());
        for active in actives {
            match active.insert(&txn).await {
                Ok(model) => stored.push(model),
                Err(error) => {
                    // Surface the insert failure, not any rollback failure.
                    let _ = txn.rollback().await;
                    return Err(error.into());
                }
            }
        }
        txn.commit().await?;

        Ok(stored)
    }

    /// List every record in the table, persistence-native order
    pub async fn find_all(&self) -> Result<Vec<R::Model>, RepositoryError> {
        let models = R::Entity::find().all(self.db).await?;
        Ok(models)
    }

    /// Get the record matching the primary key
    pub async fn find_by_id(&self, id: i32) -> Result<Option<R::Model>, RepositoryError> {
        let model = R::Entity::find_by_id(id).one(self.db).await?;
        Ok(model)
    }

    /// Update the row matching the primary key carried in the payload,
    /// overwriting only the fields the payload provides. `None` means no
    /// row matched: the id was missing from the payload, non-integer, or
    /// absent from the table.
    pub async fn update_from_payload(
        &self,
        payload: &JsonValue,
    ) -> Result<Option<R::Model>, RepositoryError> {
        let Some(id) = payload_id::<R>(payload) else {
            return Ok(None);
        };

        let active = active_model_from_payload::<R>(payload)?;

        // A payload carrying only the id has nothing to write; report the
        // stored row as-is.
        let has_changes = <<R::Entity as EntityTrait>::Column as Iterable>::iter()
            .filter(|column| R::PrimaryKey::from_column(*column).is_none())
            .any(|column| active.get(column).is_set());
        if !has_changes {
            return self.find_by_id(id).await;
        }

        match active.update(self.db).await {
            Ok(model) => Ok(Some(model)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    /// Delete the row matching `id`. Returns whether a row was removed.
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, RepositoryError> {
        let result = R::Entity::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{client, department};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;
    use serde_json::json;

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to test DB");
        Migrator::up(&db, None)
            .await
            .expect("Failed to apply migrations");
        db
    }

    #[tokio::test]
    async fn insert_one_returns_stored_row_with_generated_fields() {
        let db = setup_test_db().await;
        let repo = CrudRepository::<department::Entity>::new(&db);

        let created = repo
            .insert_one(&json!({"departmentName": "IT"}))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.department_name, "IT");
        // Filled by the database default, not by the payload
        assert!(created.date.timestamp() > 0);
    }

    #[tokio::test]
    async fn insert_one_rejects_constraint_violations() {
        let db = setup_test_db().await;
        let repo = CrudRepository::<department::Entity>::new(&db);

        // departmentName is NOT NULL and has no default
        let result = repo.insert_one(&json!({})).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn insert_many_assigns_ids_in_order() {
        let db = setup_test_db().await;
        let repo = CrudRepository::<department::Entity>::new(&db);

        let stored = repo
            .insert_many(&[
                json!({"departmentName": "IT"}),
                json!({"departmentName": "HR"}),
                json!({"departmentName": "Sales"}),
            ])
            .await
            .unwrap();

        assert_eq!(stored.len(), 3);
        assert_eq!(stored[0].department_name, "IT");
        assert_eq!(stored[2].department_name, "Sales");
        assert!(stored[0].id < stored[1].id && stored[1].id < stored[2].id);
    }

    #[tokio::test]
    async fn insert_many_is_all_or_nothing() {
        let db = setup_test_db().await;
        let repo = CrudRepository::<client::Entity>::new(&db);

        let result = repo
            .insert_many(&[
                json!({"firstName": "Ana", "email": "dup@example.com"}),
                json!({"firstName": "Bo", "email": "dup@example.com"}),
            ])
            .await;
        assert!(result.is_err());

        // The first row must have been rolled back with the batch
        let remaining = repo.find_all().await.unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn insert_many_accepts_an_empty_batch() {
        let db = setup_test_db().await;
        let repo = CrudRepository::<department::Entity>::new(&db);

        let stored = repo.insert_many(&[]).await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn find_all_returns_every_row() {
        let db = setup_test_db().await;
        let repo = CrudRepository::<department::Entity>::new(&db);

        for name in ["IT", "HR", "Sales", "Legal"] {
            repo.insert_one(&json!({"departmentName": name}))
                .await
                .unwrap();
        }

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn find_by_id_reports_absence_as_none() {
        let db = setup_test_db().await;
        let repo = CrudRepository::<department::Entity>::new(&db);

        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_overwrites_only_provided_fields() {
        let db = setup_test_db().await;
        let repo = CrudRepository::<department::Entity>::new(&db);

        let created = repo
            .insert_one(&json!({"departmentName": "IT"}))
            .await
            .unwrap();

        let updated = repo
            .update_from_payload(&json!({"id": created.id, "departmentName": "Platform"}))
            .await
            .unwrap()
            .expect("row should match");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.department_name, "Platform");
        // date was not in the payload and must keep its stored value
        assert_eq!(updated.date, created.date);
    }

    #[tokio::test]
    async fn update_without_matching_row_is_none() {
        let db = setup_test_db().await;
        let repo = CrudRepository::<department::Entity>::new(&db);

        let missing = repo
            .update_from_payload(&json!({"id": 99, "departmentName": "Ghost"}))
            .await
            .unwrap();
        assert!(missing.is_none());

        // No id in the payload counts as "no row matched" too
        let no_id = repo
            .update_from_payload(&json!({"departmentName": "Ghost"}))
            .await
            .unwrap();
        assert!(no_id.is_none());

        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_with_only_an_id_returns_the_row_unchanged() {
        let db = setup_test_db().await;
        let repo = CrudRepository::<department::Entity>::new(&db);

        let created = repo
            .insert_one(&json!({"departmentName": "IT"}))
            .await
            .unwrap();

        let untouched = repo
            .update_from_payload(&json!({"id": created.id}))
            .await
            .unwrap()
            .expect("row should match");

        assert_eq!(untouched, created);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let db = setup_test_db().await;
        let repo = CrudRepository::<department::Entity>::new(&db);

        let created = repo
            .insert_one(&json!({"departmentName": "IT"}))
            .await
            .unwrap();

        assert!(repo.delete_by_id(created.id).await.unwrap());
        assert!(!repo.delete_by_id(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }
}
