//! Implementação do storage em SeaORM
//!
//! Camada única de persistência, com suporte a SQLite, PostgreSQL e MySQL.

mod annotations;
mod attendance;
mod correctors;
mod live_classes;
mod repertoire;
mod simulados;
mod students;
mod submissions;
mod turmas;

use crate::config::AppConfig;
use crate::errors::{RedacaoError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// Storage SeaORM
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// Cria a instância e roda as migrações
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // Conexão conforme o tipo de banco
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Migração falhou: {e}")))?;

        info!("Storage SeaORM inicializado, banco: {}", db_url);

        Ok(Self { db })
    }

    /// Conexão SQLite (WAL + pragmas)
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| RedacaoError::database_config(format!("URL SQLite inválida: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| RedacaoError::database_connection(format!("Conexão SQLite falhou: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Conexão genérica (PostgreSQL, MySQL)
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| RedacaoError::database_connection(format!("Não foi possível conectar: {e}")))
    }

    /// Infere o tipo de banco a partir da URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(RedacaoError::database_config(format!(
                "Não foi possível inferir o tipo do banco: {url}. Suportados: sqlite://, postgres://, mysql://, ou arquivo .db/.sqlite"
            )))
        }
    }
}

// Implementação do trait Storage
use crate::errors::Result as StorageResult;
use crate::models::{
    PaginationInfo,
    annotations::{
        entities::Annotation,
        requests::{AnnotationListQuery, CreateAnnotationRequest, UpdateAnnotationRequest},
    },
    attendance::{entities::AttendanceRecord, responses::AccessDenial},
    correctors::{
        entities::Corrector,
        requests::{CorrectorListQuery, CreateCorrectorRequest, UpdateCorrectorRequest},
        responses::CorrectorListResponse,
    },
    grading::consolidate::COMPETENCY_COUNT,
    live_classes::{
        entities::LiveClass,
        requests::{CreateLiveClassRequest, LiveClassListQuery, UpdateLiveClassRequest},
    },
    repertoire::{
        entities::RepertoireEntry,
        requests::{CreateRepertoireRequest, RepertoireListQuery},
        responses::RepertoireListResponse,
    },
    simulados::{
        entities::Simulado,
        requests::{CreateSimuladoRequest, SimuladoListQuery, UpdateSimuladoRequest},
        responses::SimuladoListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    submissions::{
        entities::Submission,
        requests::{CorrectedSubmissionQuery, CreateSubmissionRequest, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
    turmas::{
        entities::Turma,
        requests::{CreateTurmaRequest, TurmaListQuery, UpdateTurmaRequest},
        responses::TurmaListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Turmas
    async fn create_turma(&self, turma: CreateTurmaRequest, code: String) -> StorageResult<Turma> {
        self.create_turma_impl(turma, code).await
    }

    async fn get_turma_by_id(&self, id: i64) -> StorageResult<Option<Turma>> {
        self.get_turma_by_id_impl(id).await
    }

    async fn get_turma_by_code(&self, code: &str) -> StorageResult<Option<Turma>> {
        self.get_turma_by_code_impl(code).await
    }

    async fn list_turmas_with_pagination(
        &self,
        query: TurmaListQuery,
    ) -> StorageResult<TurmaListResponse> {
        self.list_turmas_with_pagination_impl(query).await
    }

    async fn update_turma(
        &self,
        id: i64,
        update: UpdateTurmaRequest,
    ) -> StorageResult<Option<Turma>> {
        self.update_turma_impl(id, update).await
    }

    async fn delete_turma(&self, id: i64) -> StorageResult<bool> {
        self.delete_turma_impl(id).await
    }

    // Alunos
    async fn create_student(&self, student: CreateStudentRequest) -> StorageResult<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> StorageResult<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_email(&self, email: &str) -> StorageResult<Option<Student>> {
        self.get_student_by_email_impl(email).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> StorageResult<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn list_students_by_turmas(
        &self,
        turma_codes: &[String],
    ) -> StorageResult<Vec<Student>> {
        self.list_students_by_turmas_impl(turma_codes).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> StorageResult<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> StorageResult<bool> {
        self.delete_student_impl(id).await
    }

    async fn grant_credits(&self, id: i64, amount: i32) -> StorageResult<Option<Student>> {
        self.grant_credits_impl(id, amount).await
    }

    async fn consume_credit(&self, id: i64) -> StorageResult<bool> {
        self.consume_credit_impl(id).await
    }

    // Corretores
    async fn create_corrector(
        &self,
        corrector: CreateCorrectorRequest,
    ) -> StorageResult<Corrector> {
        self.create_corrector_impl(corrector).await
    }

    async fn get_corrector_by_id(&self, id: i64) -> StorageResult<Option<Corrector>> {
        self.get_corrector_by_id_impl(id).await
    }

    async fn get_corrector_by_email(&self, email: &str) -> StorageResult<Option<Corrector>> {
        self.get_corrector_by_email_impl(email).await
    }

    async fn list_correctors_with_pagination(
        &self,
        query: CorrectorListQuery,
    ) -> StorageResult<CorrectorListResponse> {
        self.list_correctors_with_pagination_impl(query).await
    }

    async fn update_corrector(
        &self,
        id: i64,
        update: UpdateCorrectorRequest,
    ) -> StorageResult<Option<Corrector>> {
        self.update_corrector_impl(id, update).await
    }

    async fn delete_corrector(&self, id: i64) -> StorageResult<bool> {
        self.delete_corrector_impl(id).await
    }

    // Simulados
    async fn create_simulado(&self, simulado: CreateSimuladoRequest) -> StorageResult<Simulado> {
        self.create_simulado_impl(simulado).await
    }

    async fn get_simulado_by_id(&self, id: i64) -> StorageResult<Option<Simulado>> {
        self.get_simulado_by_id_impl(id).await
    }

    async fn list_simulados_with_pagination(
        &self,
        query: SimuladoListQuery,
    ) -> StorageResult<SimuladoListResponse> {
        self.list_simulados_with_pagination_impl(query).await
    }

    async fn update_simulado(
        &self,
        id: i64,
        update: UpdateSimuladoRequest,
    ) -> StorageResult<Option<Simulado>> {
        self.update_simulado_impl(id, update).await
    }

    async fn delete_simulado(&self, id: i64) -> StorageResult<bool> {
        self.delete_simulado_impl(id).await
    }

    // Redações
    async fn create_submission(
        &self,
        submission: CreateSubmissionRequest,
        tracking_code: String,
    ) -> StorageResult<Submission> {
        self.create_submission_impl(submission, tracking_code).await
    }

    async fn get_submission_by_id(&self, id: i64) -> StorageResult<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn get_submission_by_tracking_code(
        &self,
        code: &str,
    ) -> StorageResult<Option<Submission>> {
        self.get_submission_by_tracking_code_impl(code).await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> StorageResult<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    async fn list_corrected_submissions(
        &self,
        query: CorrectedSubmissionQuery,
    ) -> StorageResult<Vec<Submission>> {
        self.list_corrected_submissions_impl(query).await
    }

    async fn list_pending_submissions_for_corrector(
        &self,
        corrector_id: i64,
    ) -> StorageResult<Vec<Submission>> {
        self.list_pending_submissions_for_corrector_impl(corrector_id)
            .await
    }

    async fn assign_corrector(
        &self,
        submission_id: i64,
        slot: u8,
        corrector_id: i64,
    ) -> StorageResult<Option<Submission>> {
        self.assign_corrector_impl(submission_id, slot, corrector_id)
            .await
    }

    async fn record_corrector_grades(
        &self,
        submission_id: i64,
        slot: u8,
        competencies: [i32; COMPETENCY_COUNT],
        total: i32,
    ) -> StorageResult<Option<Submission>> {
        self.record_corrector_grades_impl(submission_id, slot, competencies, total)
            .await
    }

    async fn delete_submission(&self, id: i64) -> StorageResult<bool> {
        self.delete_submission_impl(id).await
    }

    // Aulas ao vivo
    async fn create_live_class(&self, class: CreateLiveClassRequest) -> StorageResult<LiveClass> {
        self.create_live_class_impl(class).await
    }

    async fn get_live_class_by_id(&self, id: i64) -> StorageResult<Option<LiveClass>> {
        self.get_live_class_by_id_impl(id).await
    }

    async fn list_live_classes_with_pagination(
        &self,
        query: LiveClassListQuery,
    ) -> StorageResult<(Vec<LiveClass>, PaginationInfo)> {
        self.list_live_classes_with_pagination_impl(query).await
    }

    async fn list_active_live_classes(&self) -> StorageResult<Vec<LiveClass>> {
        self.list_active_live_classes_impl().await
    }

    async fn update_live_class(
        &self,
        id: i64,
        update: UpdateLiveClassRequest,
    ) -> StorageResult<Option<LiveClass>> {
        self.update_live_class_impl(id, update).await
    }

    async fn delete_live_class(&self, id: i64) -> StorageResult<bool> {
        self.delete_live_class_impl(id).await
    }

    // Presenças
    async fn get_attendance_record(
        &self,
        live_class_id: i64,
        student_email: &str,
    ) -> StorageResult<Option<AttendanceRecord>> {
        self.get_attendance_record_impl(live_class_id, student_email)
            .await
    }

    async fn insert_attendance_entry(
        &self,
        live_class_id: i64,
        student_email: &str,
        student_name: &str,
        entry_at: i64,
    ) -> StorageResult<(AttendanceRecord, bool)> {
        self.insert_attendance_entry_impl(live_class_id, student_email, student_name, entry_at)
            .await
    }

    async fn set_attendance_exit(
        &self,
        record_id: i64,
        exit_at: i64,
    ) -> StorageResult<Option<AttendanceRecord>> {
        self.set_attendance_exit_impl(record_id, exit_at).await
    }

    async fn list_attendance_records(
        &self,
        live_class_id: i64,
    ) -> StorageResult<Vec<AttendanceRecord>> {
        self.list_attendance_records_impl(live_class_id).await
    }

    async fn log_access_denial(
        &self,
        live_class_id: i64,
        email: &str,
        reason: &str,
        attempted_at: i64,
    ) -> StorageResult<AccessDenial> {
        self.log_access_denial_impl(live_class_id, email, reason, attempted_at)
            .await
    }

    async fn list_access_denials(&self, live_class_id: i64) -> StorageResult<Vec<AccessDenial>> {
        self.list_access_denials_impl(live_class_id).await
    }

    // Anotações
    async fn create_annotation(
        &self,
        submission_id: i64,
        annotation: CreateAnnotationRequest,
    ) -> StorageResult<Annotation> {
        self.create_annotation_impl(submission_id, annotation).await
    }

    async fn get_annotation_by_id(&self, id: i64) -> StorageResult<Option<Annotation>> {
        self.get_annotation_by_id_impl(id).await
    }

    async fn list_annotations(
        &self,
        submission_id: i64,
        query: AnnotationListQuery,
    ) -> StorageResult<Vec<Annotation>> {
        self.list_annotations_impl(submission_id, query).await
    }

    async fn update_annotation(
        &self,
        id: i64,
        update: UpdateAnnotationRequest,
    ) -> StorageResult<Option<Annotation>> {
        self.update_annotation_impl(id, update).await
    }

    async fn delete_annotation(&self, id: i64) -> StorageResult<bool> {
        self.delete_annotation_impl(id).await
    }

    // Repertório
    async fn create_repertoire_entry(
        &self,
        entry: CreateRepertoireRequest,
    ) -> StorageResult<RepertoireEntry> {
        self.create_repertoire_entry_impl(entry).await
    }

    async fn list_repertoire_with_pagination(
        &self,
        query: RepertoireListQuery,
    ) -> StorageResult<RepertoireListResponse> {
        self.list_repertoire_with_pagination_impl(query).await
    }

    async fn set_repertoire_approved(
        &self,
        id: i64,
        approved: bool,
    ) -> StorageResult<Option<RepertoireEntry>> {
        self.set_repertoire_approved_impl(id, approved).await
    }

    async fn delete_repertoire_entry(&self, id: i64) -> StorageResult<bool> {
        self.delete_repertoire_entry_impl(id).await
    }
}
