use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Turmas
    // Cria turma com o código já resolvido
    async fn create_turma(&self, turma: CreateTurmaRequest, code: String) -> Result<Turma>;
    // Busca por ID
    async fn get_turma_by_id(&self, id: i64) -> Result<Option<Turma>>;
    // Busca por código
    async fn get_turma_by_code(&self, code: &str) -> Result<Option<Turma>>;
    // Listagem paginada
    async fn list_turmas_with_pagination(&self, query: TurmaListQuery)
    -> Result<TurmaListResponse>;
    // Atualização parcial
    async fn update_turma(&self, id: i64, update: UpdateTurmaRequest) -> Result<Option<Turma>>;
    // Remoção
    async fn delete_turma(&self, id: i64) -> Result<bool>;

    /// Alunos
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // Roster das turmas autorizadas de uma aula
    async fn list_students_by_turmas(&self, turma_codes: &[String]) -> Result<Vec<Student>>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // Concede créditos de correção
    async fn grant_credits(&self, id: i64, amount: i32) -> Result<Option<Student>>;
    // Consome um crédito; false quando o saldo já está zerado
    async fn consume_credit(&self, id: i64) -> Result<bool>;

    /// Corretores
    async fn create_corrector(&self, corrector: CreateCorrectorRequest) -> Result<Corrector>;
    async fn get_corrector_by_id(&self, id: i64) -> Result<Option<Corrector>>;
    async fn get_corrector_by_email(&self, email: &str) -> Result<Option<Corrector>>;
    async fn list_correctors_with_pagination(
        &self,
        query: CorrectorListQuery,
    ) -> Result<CorrectorListResponse>;
    async fn update_corrector(
        &self,
        id: i64,
        update: UpdateCorrectorRequest,
    ) -> Result<Option<Corrector>>;
    async fn delete_corrector(&self, id: i64) -> Result<bool>;

    /// Simulados
    async fn create_simulado(&self, simulado: CreateSimuladoRequest) -> Result<Simulado>;
    async fn get_simulado_by_id(&self, id: i64) -> Result<Option<Simulado>>;
    async fn list_simulados_with_pagination(
        &self,
        query: SimuladoListQuery,
    ) -> Result<SimuladoListResponse>;
    async fn update_simulado(
        &self,
        id: i64,
        update: UpdateSimuladoRequest,
    ) -> Result<Option<Simulado>>;
    async fn delete_simulado(&self, id: i64) -> Result<bool>;

    /// Redações
    // Cria com o código de acompanhamento já gerado
    async fn create_submission(
        &self,
        submission: CreateSubmissionRequest,
        tracking_code: String,
    ) -> Result<Submission>;
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    async fn get_submission_by_tracking_code(&self, code: &str) -> Result<Option<Submission>>;
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // Pool de redações corrigidas (divergências e ranking)
    async fn list_corrected_submissions(
        &self,
        query: CorrectedSubmissionQuery,
    ) -> Result<Vec<Submission>>;
    // Fila de um corretor: designadas e ainda pendentes para ele
    async fn list_pending_submissions_for_corrector(
        &self,
        corrector_id: i64,
    ) -> Result<Vec<Submission>>;
    // Ocupa o slot (1 ou 2) com o corretor
    async fn assign_corrector(
        &self,
        submission_id: i64,
        slot: u8,
        corrector_id: i64,
    ) -> Result<Option<Submission>>;
    // Fecha as notas de um slot; recalcula a flag `corrected`
    async fn record_corrector_grades(
        &self,
        submission_id: i64,
        slot: u8,
        competencies: [i32; COMPETENCY_COUNT],
        total: i32,
    ) -> Result<Option<Submission>>;
    async fn delete_submission(&self, id: i64) -> Result<bool>;

    /// Aulas ao vivo
    async fn create_live_class(&self, class: CreateLiveClassRequest) -> Result<LiveClass>;
    async fn get_live_class_by_id(&self, id: i64) -> Result<Option<LiveClass>>;
    async fn list_live_classes_with_pagination(
        &self,
        query: LiveClassListQuery,
    ) -> Result<(Vec<LiveClass>, PaginationInfo)>;
    // Aulas ativas; o corte pela janela de exibição fica no serviço
    async fn list_active_live_classes(&self) -> Result<Vec<LiveClass>>;
    async fn update_live_class(
        &self,
        id: i64,
        update: UpdateLiveClassRequest,
    ) -> Result<Option<LiveClass>>;
    async fn delete_live_class(&self, id: i64) -> Result<bool>;

    /// Presenças
    async fn get_attendance_record(
        &self,
        live_class_id: i64,
        student_email: &str,
    ) -> Result<Option<AttendanceRecord>>;
    // Insert com on-conflict-do-nothing no índice único (aula, e-mail);
    // o bool indica se a linha foi criada agora
    async fn insert_attendance_entry(
        &self,
        live_class_id: i64,
        student_email: &str,
        student_name: &str,
        entry_at: i64,
    ) -> Result<(AttendanceRecord, bool)>;
    async fn set_attendance_exit(
        &self,
        record_id: i64,
        exit_at: i64,
    ) -> Result<Option<AttendanceRecord>>;
    async fn list_attendance_records(&self, live_class_id: i64) -> Result<Vec<AttendanceRecord>>;
    async fn log_access_denial(
        &self,
        live_class_id: i64,
        email: &str,
        reason: &str,
        attempted_at: i64,
    ) -> Result<AccessDenial>;
    async fn list_access_denials(&self, live_class_id: i64) -> Result<Vec<AccessDenial>>;

    /// Anotações
    async fn create_annotation(
        &self,
        submission_id: i64,
        annotation: CreateAnnotationRequest,
    ) -> Result<Annotation>;
    async fn get_annotation_by_id(&self, id: i64) -> Result<Option<Annotation>>;
    async fn list_annotations(
        &self,
        submission_id: i64,
        query: AnnotationListQuery,
    ) -> Result<Vec<Annotation>>;
    async fn update_annotation(
        &self,
        id: i64,
        update: UpdateAnnotationRequest,
    ) -> Result<Option<Annotation>>;
    async fn delete_annotation(&self, id: i64) -> Result<bool>;

    /// Repertório
    async fn create_repertoire_entry(
        &self,
        entry: CreateRepertoireRequest,
    ) -> Result<RepertoireEntry>;
    async fn list_repertoire_with_pagination(
        &self,
        query: RepertoireListQuery,
    ) -> Result<RepertoireListResponse>;
    async fn set_repertoire_approved(
        &self,
        id: i64,
        approved: bool,
    ) -> Result<Option<RepertoireEntry>>;
    async fn delete_repertoire_entry(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
