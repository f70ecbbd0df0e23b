//! Operações de storage de redações

use super::SeaOrmStorage;
use crate::config::AppConfig;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{RedacaoError, Result};
use crate::models::{
    PaginationInfo,
    grading::consolidate::COMPETENCY_COUNT,
    submissions::{
        entities::{CorrectorReviewStatus, Submission},
        requests::{CorrectedSubmissionQuery, CreateSubmissionRequest, SubmissionListQuery},
        responses::{SubmissionListItem, SubmissionListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_submission_impl(
        &self,
        req: CreateSubmissionRequest,
        tracking_code: String,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            tracking_code: Set(tracking_code),
            student_name: Set(req.student_name),
            student_email: Set(req.student_email),
            turma_code: Set(req.turma_code),
            category: Set(req.category.as_str().to_string()),
            simulado_id: Set(req.simulado_id),
            theme: Set(req.theme),
            content: Set(req.content),
            submitted_at: Set(now),
            corrected: Set(false),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Criar redação falhou: {e}")))?;

        Ok(result.into_submission())
    }

    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Consultar redação falhou: {e}"))
            })?;

        Ok(result.map(|m| m.into_submission()))
    }

    pub async fn get_submission_by_tracking_code_impl(
        &self,
        code: &str,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::TrackingCode.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Consultar redação falhou: {e}"))
            })?;

        Ok(result.map(|m| m.into_submission()))
    }

    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let mut select = Submissions::find();

        if let Some(category) = query.category {
            select = select.filter(Column::Category.eq(category.as_str()));
        }
        if let Some(simulado_id) = query.simulado_id {
            select = select.filter(Column::SimuladoId.eq(simulado_id));
        }
        if let Some(turma_code) = &query.turma_code {
            select = select.filter(Column::TurmaCode.eq(turma_code));
        }
        if let Some(student_email) = &query.student_email {
            select = select.filter(Column::StudentEmail.eq(student_email));
        }
        if let Some(corrected) = query.corrected {
            select = select.filter(Column::Corrected.eq(corrected));
        }

        select = select.order_by_desc(Column::SubmittedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            RedacaoError::database_operation(format!("Contar redações falhou: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            RedacaoError::database_operation(format!("Paginar redações falhou: {e}"))
        })?;
        let submissions = paginator.fetch_page(page - 1).await.map_err(|e| {
            RedacaoError::database_operation(format!("Listar redações falhou: {e}"))
        })?;

        let threshold = AppConfig::get().grading.divergence_threshold;
        let items = submissions
            .into_iter()
            .map(|m| {
                let submission = m.into_submission();
                SubmissionListItem::from_submission(&submission, threshold)
            })
            .collect();

        Ok(SubmissionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_corrected_submissions_impl(
        &self,
        query: CorrectedSubmissionQuery,
    ) -> Result<Vec<Submission>> {
        let mut select = Submissions::find().filter(Column::Corrected.eq(true));

        if let Some(category) = query.category {
            select = select.filter(Column::Category.eq(category.as_str()));
        }
        if let Some(simulado_id) = query.simulado_id {
            select = select.filter(Column::SimuladoId.eq(simulado_id));
        }

        let submissions = select
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Listar corrigidas falhou: {e}"))
            })?;

        Ok(submissions.into_iter().map(|m| m.into_submission()).collect())
    }

    pub async fn list_pending_submissions_for_corrector_impl(
        &self,
        corrector_id: i64,
    ) -> Result<Vec<Submission>> {
        let pendente = CorrectorReviewStatus::Pendente.as_str();

        let submissions = Submissions::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(Column::CorrectorId1.eq(corrector_id))
                            .add(Column::StatusCorrector1.eq(pendente)),
                    )
                    .add(
                        Condition::all()
                            .add(Column::CorrectorId2.eq(corrector_id))
                            .add(Column::StatusCorrector2.eq(pendente)),
                    ),
            )
            .order_by_asc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Listar fila do corretor falhou: {e}"))
            })?;

        Ok(submissions.into_iter().map(|m| m.into_submission()).collect())
    }

    pub async fn assign_corrector_impl(
        &self,
        submission_id: i64,
        slot: u8,
        corrector_id: i64,
    ) -> Result<Option<Submission>> {
        if self.get_submission_by_id_impl(submission_id).await?.is_none() {
            return Ok(None);
        }

        let pendente = CorrectorReviewStatus::Pendente.as_str().to_string();
        let mut model = ActiveModel {
            id: Set(submission_id),
            ..Default::default()
        };

        match slot {
            1 => {
                model.corrector_id_1 = Set(Some(corrector_id));
                model.status_corrector_1 = Set(Some(pendente));
            }
            2 => {
                model.corrector_id_2 = Set(Some(corrector_id));
                model.status_corrector_2 = Set(Some(pendente));
            }
            _ => {
                return Err(RedacaoError::validation(format!(
                    "Slot de corretor inválido: {slot}"
                )));
            }
        }

        model.update(&self.db).await.map_err(|e| {
            RedacaoError::database_operation(format!("Designar corretor falhou: {e}"))
        })?;

        self.get_submission_by_id_impl(submission_id).await
    }

    pub async fn record_corrector_grades_impl(
        &self,
        submission_id: i64,
        slot: u8,
        competencies: [i32; COMPETENCY_COUNT],
        total: i32,
    ) -> Result<Option<Submission>> {
        let Some(current) = self.get_submission_by_id_impl(submission_id).await? else {
            return Ok(None);
        };

        let corrigida = CorrectorReviewStatus::Corrigida.as_str().to_string();
        let mut model = ActiveModel {
            id: Set(submission_id),
            ..Default::default()
        };

        match slot {
            1 => {
                model.status_corrector_1 = Set(Some(corrigida));
                model.competency_1_corrector_1 = Set(Some(competencies[0]));
                model.competency_2_corrector_1 = Set(Some(competencies[1]));
                model.competency_3_corrector_1 = Set(Some(competencies[2]));
                model.competency_4_corrector_1 = Set(Some(competencies[3]));
                model.competency_5_corrector_1 = Set(Some(competencies[4]));
                model.total_corrector_1 = Set(Some(total));
            }
            2 => {
                model.status_corrector_2 = Set(Some(corrigida));
                model.competency_1_corrector_2 = Set(Some(competencies[0]));
                model.competency_2_corrector_2 = Set(Some(competencies[1]));
                model.competency_3_corrector_2 = Set(Some(competencies[2]));
                model.competency_4_corrector_2 = Set(Some(competencies[3]));
                model.competency_5_corrector_2 = Set(Some(competencies[4]));
                model.total_corrector_2 = Set(Some(total));
            }
            _ => {
                return Err(RedacaoError::validation(format!(
                    "Slot de corretor inválido: {slot}"
                )));
            }
        }

        // A flag `corrected` sobe quando todos os slots designados fecham
        let slot_1_done = if slot == 1 {
            current.corrector_1.is_some()
        } else {
            match &current.corrector_1 {
                None => true,
                Some(c) => c.status == CorrectorReviewStatus::Corrigida,
            }
        };
        let slot_2_done = if slot == 2 {
            current.corrector_2.is_some()
        } else {
            match &current.corrector_2 {
                None => true,
                Some(c) => c.status == CorrectorReviewStatus::Corrigida,
            }
        };
        let any_assigned = current.corrector_count() > 0;
        model.corrected = Set(any_assigned && slot_1_done && slot_2_done);

        model.update(&self.db).await.map_err(|e| {
            RedacaoError::database_operation(format!("Registrar correção falhou: {e}"))
        })?;

        self.get_submission_by_id_impl(submission_id).await
    }

    pub async fn delete_submission_impl(&self, id: i64) -> Result<bool> {
        let result = Submissions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Remover redação falhou: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
