use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::Status)
                            .string_len(20)
                            .not_null()
                            .default("never_submitted"),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::Feedback)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(UserProfiles::FirstName).string_len(100))
                    .col(ColumnDef::new(UserProfiles::LastName).string_len(100))
                    .col(ColumnDef::new(UserProfiles::MiddleName).string_len(100))
                    .col(ColumnDef::new(UserProfiles::PreferredName).string_len(100))
                    .col(
                        ColumnDef::new(UserProfiles::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserProfiles::CellPhone).string_len(20))
                    .col(ColumnDef::new(UserProfiles::WorkPhone).string_len(20))
                    .col(ColumnDef::new(UserProfiles::Ssn).string_len(11))
                    .col(ColumnDef::new(UserProfiles::DateOfBirth).date())
                    .col(ColumnDef::new(UserProfiles::Gender).string_len(20))
                    .col(ColumnDef::new(UserProfiles::AddressBuilding).string_len(50))
                    .col(ColumnDef::new(UserProfiles::AddressStreet).string_len(255))
                    .col(ColumnDef::new(UserProfiles::AddressCity).string_len(100))
                    .col(ColumnDef::new(UserProfiles::AddressState).string_len(50))
                    .col(ColumnDef::new(UserProfiles::AddressZip).string_len(10))
                    .col(
                        ColumnDef::new(UserProfiles::IsPermanentResident)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(UserProfiles::ResidentType).string_len(20))
                    .col(ColumnDef::new(UserProfiles::VisaType).string_len(50))
                    .col(ColumnDef::new(UserProfiles::VisaTitleOther).string_len(100))
                    .col(ColumnDef::new(UserProfiles::VisaStartDate).date())
                    .col(ColumnDef::new(UserProfiles::VisaEndDate).date())
                    .col(ColumnDef::new(UserProfiles::Reference).json_binary())
                    .col(
                        ColumnDef::new(UserProfiles::EmergencyContacts)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profiles_user")
                            .from(UserProfiles::Table, UserProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // HR triage lists filter by status; search scans names/email.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_user_profiles_status ON user_profiles (status);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserProfiles {
    Table,
    Id,
    UserId,
    Status,
    Feedback,
    FirstName,
    LastName,
    MiddleName,
    PreferredName,
    Email,
    CellPhone,
    WorkPhone,
    Ssn,
    DateOfBirth,
    Gender,
    AddressBuilding,
    AddressStreet,
    AddressCity,
    AddressState,
    AddressZip,
    IsPermanentResident,
    ResidentType,
    VisaType,
    VisaTitleOther,
    VisaStartDate,
    VisaEndDate,
    Reference,
    EmergencyContacts,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
