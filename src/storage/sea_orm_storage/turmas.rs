//! Operações de storage de turmas

use super::SeaOrmStorage;
use crate::entity::turmas::{ActiveModel, Column, Entity as Turmas};
use crate::errors::{RedacaoError, Result};
use crate::models::{
    PaginationInfo,
    turmas::{
        entities::Turma,
        requests::{CreateTurmaRequest, TurmaListQuery, UpdateTurmaRequest},
        responses::TurmaListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_turma_impl(
        &self,
        req: CreateTurmaRequest,
        code: String,
    ) -> Result<Turma> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            code: Set(code),
            name: Set(req.name),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Criar turma falhou: {e}")))?;

        Ok(result.into_turma())
    }

    pub async fn get_turma_by_id_impl(&self, id: i64) -> Result<Option<Turma>> {
        let result = Turmas::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Consultar turma falhou: {e}")))?;

        Ok(result.map(|m| m.into_turma()))
    }

    pub async fn get_turma_by_code_impl(&self, code: &str) -> Result<Option<Turma>> {
        let result = Turmas::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Consultar turma falhou: {e}")))?;

        Ok(result.map(|m| m.into_turma()))
    }

    pub async fn list_turmas_with_pagination_impl(
        &self,
        query: TurmaListQuery,
    ) -> Result<TurmaListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let mut select = Turmas::find();

        if let Some(active) = query.active {
            select = select.filter(Column::Active.eq(active));
        }

        if let Some(search) = &query.search {
            let pattern = format!("%{}%", escape_like_pattern(search));
            select = select.filter(
                Column::Name
                    .like(pattern.clone())
                    .or(Column::Code.like(pattern)),
            );
        }

        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            RedacaoError::database_operation(format!("Contar turmas falhou: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            RedacaoError::database_operation(format!("Paginar turmas falhou: {e}"))
        })?;
        let turmas = paginator.fetch_page(page - 1).await.map_err(|e| {
            RedacaoError::database_operation(format!("Listar turmas falhou: {e}"))
        })?;

        Ok(TurmaListResponse {
            items: turmas.into_iter().map(|m| m.into_turma()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_turma_impl(
        &self,
        id: i64,
        update: UpdateTurmaRequest,
    ) -> Result<Option<Turma>> {
        if self.get_turma_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(active) = update.active {
            model.active = Set(active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Atualizar turma falhou: {e}")))?;

        self.get_turma_by_id_impl(id).await
    }

    pub async fn delete_turma_impl(&self, id: i64) -> Result<bool> {
        let result = Turmas::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Remover turma falhou: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
