use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub status: String,
    pub feedback: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub preferred_name: Option<String>,
    pub email: String,
    pub cell_phone: Option<String>,
    pub work_phone: Option<String>,
    pub ssn: Option<String>,
    pub date_of_birth: Option<Date>,
    pub gender: Option<String>,
    pub address_building: Option<String>,
    pub address_street: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub is_permanent_resident: bool,
    pub resident_type: Option<String>,
    pub visa_type: Option<String>,
    pub visa_title_other: Option<String>,
    pub visa_start_date: Option<Date>,
    pub visa_end_date: Option<Date>,
    pub reference: Option<Json>,
    pub emergency_contacts: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
