//! # Resource contract
//!
//! One trait ties an entity's SeaORM types to the route and message
//! vocabulary of its HTTP surface. The repository and handler layers are
//! written once against this contract and instantiated per entity, instead
//! of repeating near-identical CRUD plumbing for every table.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, EntityTrait, FromQueryResult,
    IdenStatic, IntoActiveModel, Iterable, ModelTrait, PrimaryKeyToColumn, PrimaryKeyTrait,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// Contract implemented by every CRUD-exposed entity.
///
/// The associated types are the entity's own SeaORM types; the constants
/// supply the naming used when wiring routes and rendering messages:
///
/// - `NAME` is the camelCase singular used in path segments (`department`
///   gives `/departments/departmentById/{id}`),
/// - `NAME_PASCAL` is the Pascal-cased singular used in route verbs
///   (`addDepartment`, `updateDepartment`, `deleteDepartment`),
/// - `DISPLAY_NAME` is the human-readable name used in response messages
///   (`"Department not found"`).
pub trait CrudResource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, PrimaryKey = Self::PrimaryKey>;
    type Model: ModelTrait<Entity = Self::Entity>
        + IntoActiveModel<Self::ActiveModel>
        + FromQueryResult
        + Serialize
        + DeserializeOwned
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + 'static;
    type PrimaryKey: PrimaryKeyTrait<ValueType = i32>
        + PrimaryKeyToColumn<Column = <Self::Entity as EntityTrait>::Column>;

    const NAME: &'static str;
    const NAME_PASCAL: &'static str;
    const DISPLAY_NAME: &'static str;
}

/// Builds an ActiveModel from a JSON payload.
///
/// Fields present in the payload become `Set` (an explicit `null` sets a
/// nullable column to NULL); absent fields stay `NotSet` so inserts fall
/// back to database defaults and updates leave the stored value alone. The
/// serde defaults on the models only exist to make partial payloads
/// deserialize; a defaulted placeholder is never bound because its key was
/// not in the payload.
pub fn active_model_from_payload<R: CrudResource>(
    payload: &JsonValue,
) -> Result<R::ActiveModel, serde_json::Error> {
    let model: R::Model = serde_json::from_value(payload.clone())?;
    let mut active: R::ActiveModel = model.into_active_model();

    let fields = payload.as_object();
    for column in <<R::Entity as EntityTrait>::Column as Iterable>::iter() {
        let provided = fields.is_some_and(|map| map.contains_key(column.as_str()));
        if provided {
            match active.take(column) {
                ActiveValue::Set(value) | ActiveValue::Unchanged(value) => {
                    active.set(column, value);
                }
                ActiveValue::NotSet => {}
            }
        } else {
            active.not_set(column);
        }
    }

    Ok(active)
}

/// Name of the primary-key field as it appears in payloads.
pub fn primary_key_field<R: CrudResource>() -> String {
    <R::PrimaryKey as Iterable>::iter()
        .next()
        .map(|key| key.into_column().as_str().to_owned())
        .unwrap_or_else(|| "id".to_owned())
}

/// Extracts the primary key from an update payload. An absent or
/// non-integer key is reported as `None`, which callers surface as "no row
/// matched".
pub fn payload_id<R: CrudResource>(payload: &JsonValue) -> Option<i32> {
    payload
        .get(primary_key_field::<R>().as_str())
        .and_then(JsonValue::as_i64)
        .and_then(|id| i32::try_from(id).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{client, department};
    use sea_orm::ActiveValue::{NotSet, Set};
    use serde_json::json;

    #[test]
    fn payload_fields_become_set_and_absent_fields_not_set() {
        let payload = json!({"departmentName": "IT"});
        let active = active_model_from_payload::<department::Entity>(&payload).unwrap();

        assert_eq!(
            active,
            department::ActiveModel {
                id: NotSet,
                department_name: Set("IT".to_string()),
                date: NotSet,
            }
        );
    }

    #[test]
    fn explicit_id_and_timestamp_are_bound() {
        let date = "2024-01-15T10:30:00+00:00";
        let payload = json!({"id": 7, "departmentName": "IT", "date": date});
        let active = active_model_from_payload::<department::Entity>(&payload).unwrap();

        assert_eq!(active.id, Set(7));
        assert_eq!(active.department_name, Set("IT".to_string()));
        assert_eq!(active.date, Set(date.parse().unwrap()));
    }

    #[test]
    fn explicit_null_binds_null() {
        let payload = json!({"email": "kim@example.com", "phone": null});
        let active = active_model_from_payload::<client::Entity>(&payload).unwrap();

        assert_eq!(active.email, Set("kim@example.com".to_string()));
        assert_eq!(active.phone, Set(None));
        assert_eq!(active.company, NotSet);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload = json!({"departmentName": "IT", "headcount": 12});
        let active = active_model_from_payload::<department::Entity>(&payload).unwrap();

        assert_eq!(active.department_name, Set("IT".to_string()));
    }

    #[test]
    fn non_object_payloads_are_rejected() {
        assert!(active_model_from_payload::<department::Entity>(&json!(["IT"])).is_err());
        assert!(active_model_from_payload::<department::Entity>(&json!("IT")).is_err());
        assert!(active_model_from_payload::<department::Entity>(&json!(null)).is_err());
    }

    #[test]
    fn mistyped_fields_are_rejected() {
        let payload = json!({"departmentName": 42});
        assert!(active_model_from_payload::<department::Entity>(&payload).is_err());
    }

    #[test]
    fn primary_key_field_names_the_id_column() {
        assert_eq!(primary_key_field::<department::Entity>(), "id");
        assert_eq!(primary_key_field::<client::Entity>(), "id");
    }

    #[test]
    fn payload_id_requires_an_integer() {
        assert_eq!(payload_id::<department::Entity>(&json!({"id": 3})), Some(3));
        assert_eq!(payload_id::<department::Entity>(&json!({"id": "3"})), None);
        assert_eq!(payload_id::<department::Entity>(&json!({"id": 2.5})), None);
        assert_eq!(payload_id::<department::Entity>(&json!({})), None);
    }
}
