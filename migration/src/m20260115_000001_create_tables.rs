use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Tabela de turmas
        manager
            .create_table(
                Table::create()
                    .table(Turmas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Turmas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Turmas::Code).string().not_null().unique_key())
                    .col(ColumnDef::new(Turmas::Name).string().not_null())
                    .col(
                        ColumnDef::new(Turmas::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Turmas::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Turmas::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Tabela de alunos
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Surname).string().not_null())
                    .col(
                        ColumnDef::new(Students::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::TurmaCode).string().null())
                    .col(
                        ColumnDef::new(Students::Credits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Students::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Tabela de corretores
        manager
            .create_table(
                Table::create()
                    .table(Correctors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Correctors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Correctors::Name).string().not_null())
                    .col(
                        ColumnDef::new(Correctors::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Correctors::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Correctors::Visible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Correctors::AuthorizedTurmas).text().null())
                    .col(
                        ColumnDef::new(Correctors::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Correctors::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de simulados
        manager
            .create_table(
                Table::create()
                    .table(Simulados::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Simulados::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Simulados::Theme).string().not_null())
                    .col(ColumnDef::new(Simulados::Date).string().not_null())
                    .col(
                        ColumnDef::new(Simulados::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Simulados::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Simulados::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Tabela de redações
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::TrackingCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Submissions::StudentName).string().not_null())
                    .col(
                        ColumnDef::new(Submissions::StudentEmail)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::TurmaCode).string().null())
                    .col(ColumnDef::new(Submissions::Category).string().not_null())
                    .col(ColumnDef::new(Submissions::SimuladoId).big_integer().null())
                    .col(ColumnDef::new(Submissions::Theme).string().not_null())
                    .col(ColumnDef::new(Submissions::Content).text().not_null())
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::Corrected)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Submissions::CorrectorId1).big_integer().null())
                    .col(ColumnDef::new(Submissions::StatusCorrector1).string().null())
                    .col(
                        ColumnDef::new(Submissions::Competency1Corrector1)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::Competency2Corrector1)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::Competency3Corrector1)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::Competency4Corrector1)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::Competency5Corrector1)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Submissions::TotalCorrector1).integer().null())
                    .col(ColumnDef::new(Submissions::CorrectorId2).big_integer().null())
                    .col(ColumnDef::new(Submissions::StatusCorrector2).string().null())
                    .col(
                        ColumnDef::new(Submissions::Competency1Corrector2)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::Competency2Corrector2)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::Competency3Corrector2)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::Competency4Corrector2)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::Competency5Corrector2)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Submissions::TotalCorrector2).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::SimuladoId)
                            .to(Simulados::Table, Simulados::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::CorrectorId1)
                            .to(Correctors::Table, Correctors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::CorrectorId2)
                            .to(Correctors::Table, Correctors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de aulas ao vivo
        manager
            .create_table(
                Table::create()
                    .table(LiveClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LiveClasses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LiveClasses::Title).string().not_null())
                    .col(ColumnDef::new(LiveClasses::Date).string().not_null())
                    .col(ColumnDef::new(LiveClasses::StartTime).string().not_null())
                    .col(ColumnDef::new(LiveClasses::EndTime).string().not_null())
                    .col(ColumnDef::new(LiveClasses::MeetingUrl).string().not_null())
                    .col(
                        ColumnDef::new(LiveClasses::AuthorizedTurmas)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LiveClasses::VisitorAllowed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LiveClasses::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(LiveClasses::IsLiveFormat)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(LiveClasses::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LiveClasses::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de presenças (registro autoritativo por aula + aluno)
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::LiveClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::StudentEmail)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::StudentName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::EntryAt).big_integer().null())
                    .col(ColumnDef::new(AttendanceRecords::ExitAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceRecords::Table, AttendanceRecords::LiveClassId)
                            .to(LiveClasses::Table, LiveClasses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de acessos negados
        manager
            .create_table(
                Table::create()
                    .table(AccessDenials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessDenials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AccessDenials::LiveClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AccessDenials::Email).string().not_null())
                    .col(ColumnDef::new(AccessDenials::Reason).string().not_null())
                    .col(
                        ColumnDef::new(AccessDenials::AttemptedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AccessDenials::Table, AccessDenials::LiveClassId)
                            .to(LiveClasses::Table, LiveClasses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de anotações de correção
        manager
            .create_table(
                Table::create()
                    .table(Annotations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Annotations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Annotations::SubmissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Annotations::CorrectorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Annotations::Competency).integer().null())
                    .col(ColumnDef::new(Annotations::PosX).double().not_null())
                    .col(ColumnDef::new(Annotations::PosY).double().not_null())
                    .col(ColumnDef::new(Annotations::Comment).text().not_null())
                    .col(
                        ColumnDef::new(Annotations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Annotations::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Annotations::Table, Annotations::SubmissionId)
                            .to(Submissions::Table, Submissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Annotations::Table, Annotations::CorrectorId)
                            .to(Correctors::Table, Correctors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de repertórios compartilhados
        manager
            .create_table(
                Table::create()
                    .table(RepertoireEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RepertoireEntries::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RepertoireEntries::AuthorName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RepertoireEntries::AuthorEmail)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RepertoireEntries::Category)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RepertoireEntries::Theme).string().not_null())
                    .col(
                        ColumnDef::new(RepertoireEntries::Content)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RepertoireEntries::Approved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RepertoireEntries::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Índices //

        // Unicidade por (aula, aluno): entradas duplicadas concorrentes
        // colapsam em uma única linha
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_class_email")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::LiveClassId)
                    .col(AttendanceRecords::StudentEmail)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_student_email")
                    .table(Submissions::Table)
                    .col(Submissions::StudentEmail)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_simulado_id")
                    .table(Submissions::Table)
                    .col(Submissions::SimuladoId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_category")
                    .table(Submissions::Table)
                    .col(Submissions::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_turma_code")
                    .table(Students::Table)
                    .col(Students::TurmaCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_annotations_submission_id")
                    .table(Annotations::Table)
                    .col(Annotations::SubmissionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_access_denials_live_class_id")
                    .table(AccessDenials::Table)
                    .col(AccessDenials::LiveClassId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Remove na ordem inversa da criação
        manager
            .drop_table(Table::drop().table(RepertoireEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Annotations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AccessDenials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LiveClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Simulados::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Correctors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Turmas::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Turmas {
    #[sea_orm(iden = "turmas")]
    Table,
    Id,
    Code,
    Name,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    Surname,
    Email,
    TurmaCode,
    Credits,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Correctors {
    #[sea_orm(iden = "correctors")]
    Table,
    Id,
    Name,
    Email,
    Active,
    Visible,
    AuthorizedTurmas,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Simulados {
    #[sea_orm(iden = "simulados")]
    Table,
    Id,
    Theme,
    Date,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    TrackingCode,
    StudentName,
    StudentEmail,
    TurmaCode,
    Category,
    SimuladoId,
    Theme,
    Content,
    SubmittedAt,
    Corrected,
    CorrectorId1,
    StatusCorrector1,
    Competency1Corrector1,
    Competency2Corrector1,
    Competency3Corrector1,
    Competency4Corrector1,
    Competency5Corrector1,
    TotalCorrector1,
    CorrectorId2,
    StatusCorrector2,
    Competency1Corrector2,
    Competency2Corrector2,
    Competency3Corrector2,
    Competency4Corrector2,
    Competency5Corrector2,
    TotalCorrector2,
}

#[derive(DeriveIden)]
enum LiveClasses {
    #[sea_orm(iden = "live_classes")]
    Table,
    Id,
    Title,
    Date,
    StartTime,
    EndTime,
    MeetingUrl,
    AuthorizedTurmas,
    VisitorAllowed,
    Active,
    IsLiveFormat,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AttendanceRecords {
    #[sea_orm(iden = "attendance_records")]
    Table,
    Id,
    LiveClassId,
    StudentEmail,
    StudentName,
    EntryAt,
    ExitAt,
}

#[derive(DeriveIden)]
enum AccessDenials {
    #[sea_orm(iden = "access_denials")]
    Table,
    Id,
    LiveClassId,
    Email,
    Reason,
    AttemptedAt,
}

#[derive(DeriveIden)]
enum Annotations {
    #[sea_orm(iden = "annotations")]
    Table,
    Id,
    SubmissionId,
    CorrectorId,
    Competency,
    PosX,
    PosY,
    Comment,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RepertoireEntries {
    #[sea_orm(iden = "repertoire_entries")]
    Table,
    Id,
    AuthorName,
    AuthorEmail,
    Category,
    Theme,
    Content,
    Approved,
    CreatedAt,
}
