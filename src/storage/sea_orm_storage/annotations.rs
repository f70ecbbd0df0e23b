//! Operações de storage de anotações

use super::SeaOrmStorage;
use crate::entity::annotations::{ActiveModel, Column, Entity as Annotations};
use crate::errors::{RedacaoError, Result};
use crate::models::annotations::{
    entities::Annotation,
    requests::{AnnotationListQuery, CreateAnnotationRequest, UpdateAnnotationRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_annotation_impl(
        &self,
        submission_id: i64,
        req: CreateAnnotationRequest,
    ) -> Result<Annotation> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            submission_id: Set(submission_id),
            corrector_id: Set(req.corrector_id),
            competency: Set(req.competency),
            pos_x: Set(req.pos_x),
            pos_y: Set(req.pos_y),
            comment: Set(req.comment),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Criar anotação falhou: {e}")))?;

        Ok(result.into_annotation())
    }

    pub async fn get_annotation_by_id_impl(&self, id: i64) -> Result<Option<Annotation>> {
        let result = Annotations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Consultar anotação falhou: {e}"))
            })?;

        Ok(result.map(|m| m.into_annotation()))
    }

    pub async fn list_annotations_impl(
        &self,
        submission_id: i64,
        query: AnnotationListQuery,
    ) -> Result<Vec<Annotation>> {
        let mut select = Annotations::find().filter(Column::SubmissionId.eq(submission_id));

        if let Some(corrector_id) = query.corrector_id {
            select = select.filter(Column::CorrectorId.eq(corrector_id));
        }

        let annotations = select
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Listar anotações falhou: {e}"))
            })?;

        Ok(annotations.into_iter().map(|m| m.into_annotation()).collect())
    }

    pub async fn update_annotation_impl(
        &self,
        id: i64,
        update: UpdateAnnotationRequest,
    ) -> Result<Option<Annotation>> {
        if self.get_annotation_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(competency) = update.competency {
            model.competency = Set(Some(competency));
        }
        if let Some(pos_x) = update.pos_x {
            model.pos_x = Set(pos_x);
        }
        if let Some(pos_y) = update.pos_y {
            model.pos_y = Set(pos_y);
        }
        if let Some(comment) = update.comment {
            model.comment = Set(comment);
        }

        model.update(&self.db).await.map_err(|e| {
            RedacaoError::database_operation(format!("Atualizar anotação falhou: {e}"))
        })?;

        self.get_annotation_by_id_impl(id).await
    }

    pub async fn delete_annotation_impl(&self, id: i64) -> Result<bool> {
        let result = Annotations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Remover anotação falhou: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
