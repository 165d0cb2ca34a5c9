use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::onboarding::application::domain::draft::ProfileDraft;
use crate::modules::onboarding::application::domain::entities::{
    Address, EmergencyContact, ProfileStatus, Reference, ResidentType, UserProfile, VisaCategory,
    WorkAuthorization,
};
use crate::modules::onboarding::application::ports::outgoing::profile_repository::{
    ProfileRepository, ProfileRepositoryError,
};

use super::sea_orm_entity::user_profiles::{
    ActiveModel as ProfileActiveModel, Column, Entity as ProfileEntity, Model as ProfileModel,
};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub(super) fn map_to_profile(model: ProfileModel) -> Result<UserProfile, String> {
        let status = ProfileStatus::parse(&model.status)
            .ok_or_else(|| format!("Unknown profile status in store: {}", model.status))?;

        // Address and work authorization exist only once a submission has
        // filled them in; skeleton rows leave every column NULL.
        let address = model.address_street.as_ref().map(|_| Address {
            building: model.address_building.clone().unwrap_or_default(),
            street: model.address_street.clone().unwrap_or_default(),
            city: model.address_city.clone().unwrap_or_default(),
            state: model.address_state.clone().unwrap_or_default(),
            zip: model.address_zip.clone().unwrap_or_default(),
        });

        let work_authorization = if model.is_permanent_resident || model.visa_type.is_some() {
            Some(WorkAuthorization {
                is_permanent_resident: model.is_permanent_resident,
                resident_type: model.resident_type.as_deref().and_then(ResidentType::parse),
                visa_type: model.visa_type.as_deref().map(VisaCategory::parse),
                visa_title_other: model.visa_title_other.clone(),
                start_date: model.visa_start_date,
                end_date: model.visa_end_date,
            })
        } else {
            None
        };

        let reference: Option<Reference> = model
            .reference
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| format!("Malformed reference json: {}", e))?;

        let emergency_contacts: Vec<EmergencyContact> =
            serde_json::from_value(model.emergency_contacts)
                .map_err(|e| format!("Malformed emergency contacts json: {}", e))?;

        Ok(UserProfile {
            id: model.id,
            user_id: model.user_id,
            status,
            feedback: model.feedback,
            first_name: model.first_name,
            last_name: model.last_name,
            middle_name: model.middle_name,
            preferred_name: model.preferred_name,
            email: model.email,
            cell_phone: model.cell_phone,
            work_phone: model.work_phone,
            ssn: model.ssn,
            date_of_birth: model.date_of_birth,
            gender: model.gender,
            address,
            work_authorization,
            reference,
            emergency_contacts,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn create_initial(
        &self,
        user_id: Uuid,
        email: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<UserProfile, ProfileRepositoryError> {
        let active = ProfileActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            status: Set(ProfileStatus::NeverSubmitted.as_str().to_string()),
            feedback: Set(String::new()),
            first_name: Set(first_name),
            last_name: Set(last_name),
            email: Set(email),
            emergency_contacts: Set(serde_json::json!([])),
            middle_name: NotSet,
            preferred_name: NotSet,
            cell_phone: NotSet,
            work_phone: NotSet,
            ssn: NotSet,
            date_of_birth: NotSet,
            gender: NotSet,
            address_building: NotSet,
            address_street: NotSet,
            address_city: NotSet,
            address_state: NotSet,
            address_zip: NotSet,
            is_permanent_resident: Set(false),
            resident_type: NotSet,
            visa_type: NotSet,
            visa_title_other: NotSet,
            visa_start_date: NotSet,
            visa_end_date: NotSet,
            reference: NotSet,
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return ProfileRepositoryError::ProfileAlreadyExists;
            }
            ProfileRepositoryError::DatabaseError(e.to_string())
        })?;

        Self::map_to_profile(inserted).map_err(ProfileRepositoryError::DatabaseError)
    }

    async fn apply_submission(
        &self,
        user_id: Uuid,
        draft: ProfileDraft,
    ) -> Result<UserProfile, ProfileRepositoryError> {
        let existing = ProfileEntity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;

        let reference = draft
            .reference
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;
        let emergency_contacts = serde_json::to_value(&draft.emergency_contacts)
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        let mut active: ProfileActiveModel = existing.into();
        active.status = Set(ProfileStatus::Pending.as_str().to_string());
        active.feedback = Set(String::new());
        active.first_name = Set(Some(draft.first_name));
        active.last_name = Set(Some(draft.last_name));
        active.middle_name = Set(draft.middle_name);
        active.preferred_name = Set(draft.preferred_name);
        active.email = Set(draft.email);
        active.cell_phone = Set(draft.cell_phone);
        active.work_phone = Set(draft.work_phone);
        active.ssn = Set(draft.ssn);
        active.date_of_birth = Set(draft.date_of_birth);
        active.gender = Set(draft.gender);
        active.address_building = Set(Some(draft.address.building));
        active.address_street = Set(Some(draft.address.street));
        active.address_city = Set(Some(draft.address.city));
        active.address_state = Set(Some(draft.address.state));
        active.address_zip = Set(Some(draft.address.zip));
        active.is_permanent_resident = Set(draft.work_authorization.is_permanent_resident);
        active.resident_type = Set(draft
            .work_authorization
            .resident_type
            .map(|r| r.as_str().to_string()));
        active.visa_type = Set(draft
            .work_authorization
            .visa_type
            .as_ref()
            .map(|v| v.as_str().to_string()));
        active.visa_title_other = Set(draft.work_authorization.visa_title_other);
        active.visa_start_date = Set(draft.work_authorization.start_date);
        active.visa_end_date = Set(draft.work_authorization.end_date);
        active.reference = Set(reference);
        active.emergency_contacts = Set(emergency_contacts);
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_to_profile(updated).map_err(ProfileRepositoryError::DatabaseError)
    }

    async fn set_review(
        &self,
        profile_id: Uuid,
        status: ProfileStatus,
        feedback: String,
    ) -> Result<(), ProfileRepositoryError> {
        let existing = ProfileEntity::find_by_id(profile_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProfileRepositoryError::ProfileNotFound)?;

        let mut active: ProfileActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.feedback = Set(feedback);
        active.updated_at = Set(chrono::Utc::now().into());

        active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn skeleton_model(user_id: Uuid) -> ProfileModel {
        ProfileModel {
            id: Uuid::new_v4(),
            user_id,
            status: "never_submitted".to_string(),
            feedback: String::new(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            middle_name: None,
            preferred_name: None,
            email: "ada@x.com".to_string(),
            cell_phone: None,
            work_phone: None,
            ssn: None,
            date_of_birth: None,
            gender: None,
            address_building: None,
            address_street: None,
            address_city: None,
            address_state: None,
            address_zip: None,
            is_permanent_resident: false,
            resident_type: None,
            visa_type: None,
            visa_title_other: None,
            visa_start_date: None,
            visa_end_date: None,
            reference: None,
            emergency_contacts: serde_json::json!([]),
            created_at: Utc::now().fixed_offset(),
            updated_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn test_skeleton_row_maps_without_address_or_work_auth() {
        let profile =
            ProfileRepositoryPostgres::map_to_profile(skeleton_model(Uuid::new_v4())).unwrap();

        assert_eq!(profile.status, ProfileStatus::NeverSubmitted);
        assert!(profile.address.is_none());
        assert!(profile.work_authorization.is_none());
        assert!(profile.emergency_contacts.is_empty());
    }

    #[test]
    fn test_submitted_row_maps_visa_fields() {
        let mut model = skeleton_model(Uuid::new_v4());
        model.status = "pending".to_string();
        model.address_building = Some("12".to_string());
        model.address_street = Some("Main St".to_string());
        model.address_city = Some("Springfield".to_string());
        model.address_state = Some("IL".to_string());
        model.address_zip = Some("62704".to_string());
        model.visa_type = Some("F1(CPT/OPT)".to_string());

        let profile = ProfileRepositoryPostgres::map_to_profile(model).unwrap();

        assert!(profile.is_visa_tracked());
        assert_eq!(profile.address.unwrap().city, "Springfield");
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let mut model = skeleton_model(Uuid::new_v4());
        model.status = "archived".to_string();

        assert!(ProfileRepositoryPostgres::map_to_profile(model).is_err());
    }

    #[tokio::test]
    async fn test_set_review_missing_profile() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<ProfileModel>::new()])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .set_review(Uuid::new_v4(), ProfileStatus::Approved, String::new())
            .await;
        assert!(matches!(result, Err(ProfileRepositoryError::ProfileNotFound)));
    }

    #[tokio::test]
    async fn test_set_review_updates_status_and_feedback() {
        let model = skeleton_model(Uuid::new_v4());
        let mut reviewed = model.clone();
        reviewed.status = "rejected".to_string();
        reviewed.feedback = "SSN missing".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .append_query_results(vec![vec![reviewed]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .set_review(model.id, ProfileStatus::Rejected, "SSN missing".to_string())
            .await;
        assert!(result.is_ok());
    }
}
