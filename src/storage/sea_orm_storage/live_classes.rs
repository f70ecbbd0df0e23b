//! Operações de storage de aulas ao vivo

use super::SeaOrmStorage;
use crate::entity::live_classes::{ActiveModel, Column, Entity as LiveClasses};
use crate::errors::{RedacaoError, Result};
use crate::models::{
    PaginationInfo,
    live_classes::{
        entities::LiveClass,
        requests::{CreateLiveClassRequest, LiveClassListQuery, UpdateLiveClassRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_live_class_impl(
        &self,
        req: CreateLiveClassRequest,
    ) -> Result<LiveClass> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            date: Set(req.date),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            meeting_url: Set(req.meeting_url),
            authorized_turmas: Set(serde_json::to_string(&req.authorized_turmas)?),
            visitor_allowed: Set(req.visitor_allowed),
            active: Set(true),
            is_live_format: Set(req.is_live_format),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Criar aula falhou: {e}")))?;

        Ok(result.into_live_class())
    }

    pub async fn get_live_class_by_id_impl(&self, id: i64) -> Result<Option<LiveClass>> {
        let result = LiveClasses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Consultar aula falhou: {e}")))?;

        Ok(result.map(|m| m.into_live_class()))
    }

    pub async fn list_live_classes_with_pagination_impl(
        &self,
        query: LiveClassListQuery,
    ) -> Result<(Vec<LiveClass>, PaginationInfo)> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let mut select = LiveClasses::find();

        if let Some(active) = query.active {
            select = select.filter(Column::Active.eq(active));
        }
        if let Some(turma_code) = &query.turma_code {
            // authorized_turmas é JSON em texto; filtro por substring entre aspas
            let pattern = format!("%\"{}\"%", turma_code.replace('%', "").replace('_', ""));
            select = select.filter(Column::AuthorizedTurmas.like(pattern));
        }

        select = select
            .order_by_desc(Column::Date)
            .order_by_desc(Column::StartTime);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Contar aulas falhou: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Paginar aulas falhou: {e}")))?;
        let classes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Listar aulas falhou: {e}")))?;

        Ok((
            classes.into_iter().map(|m| m.into_live_class()).collect(),
            PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        ))
    }

    pub async fn list_active_live_classes_impl(&self) -> Result<Vec<LiveClass>> {
        let classes = LiveClasses::find()
            .filter(Column::Active.eq(true))
            .order_by_asc(Column::Date)
            .order_by_asc(Column::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Listar aulas ativas falhou: {e}"))
            })?;

        Ok(classes.into_iter().map(|m| m.into_live_class()).collect())
    }

    pub async fn update_live_class_impl(
        &self,
        id: i64,
        update: UpdateLiveClassRequest,
    ) -> Result<Option<LiveClass>> {
        if self.get_live_class_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }
        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time);
        }
        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time);
        }
        if let Some(meeting_url) = update.meeting_url {
            model.meeting_url = Set(meeting_url);
        }
        if let Some(turmas) = update.authorized_turmas {
            model.authorized_turmas = Set(serde_json::to_string(&turmas)?);
        }
        if let Some(visitor_allowed) = update.visitor_allowed {
            model.visitor_allowed = Set(visitor_allowed);
        }
        if let Some(active) = update.active {
            model.active = Set(active);
        }
        if let Some(is_live_format) = update.is_live_format {
            model.is_live_format = Set(is_live_format);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Atualizar aula falhou: {e}")))?;

        self.get_live_class_by_id_impl(id).await
    }

    pub async fn delete_live_class_impl(&self, id: i64) -> Result<bool> {
        let result = LiveClasses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Remover aula falhou: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
