//! Operações de storage de corretores

use super::SeaOrmStorage;
use crate::entity::correctors::{ActiveModel, Column, Entity as Correctors};
use crate::errors::{RedacaoError, Result};
use crate::models::{
    PaginationInfo,
    correctors::{
        entities::Corrector,
        requests::{CorrectorListQuery, CreateCorrectorRequest, UpdateCorrectorRequest},
        responses::CorrectorListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

fn encode_turmas(turmas: &Option<Vec<String>>) -> Result<Option<String>> {
    match turmas {
        None => Ok(None),
        Some(list) => Ok(Some(serde_json::to_string(list)?)),
    }
}

impl SeaOrmStorage {
    pub async fn create_corrector_impl(&self, req: CreateCorrectorRequest) -> Result<Corrector> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            active: Set(true),
            visible: Set(true),
            authorized_turmas: Set(encode_turmas(&req.authorized_turmas)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Criar corretor falhou: {e}")))?;

        Ok(result.into_corrector())
    }

    pub async fn get_corrector_by_id_impl(&self, id: i64) -> Result<Option<Corrector>> {
        let result = Correctors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Consultar corretor falhou: {e}"))
            })?;

        Ok(result.map(|m| m.into_corrector()))
    }

    pub async fn get_corrector_by_email_impl(&self, email: &str) -> Result<Option<Corrector>> {
        let result = Correctors::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Consultar corretor falhou: {e}"))
            })?;

        Ok(result.map(|m| m.into_corrector()))
    }

    pub async fn list_correctors_with_pagination_impl(
        &self,
        query: CorrectorListQuery,
    ) -> Result<CorrectorListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let mut select = Correctors::find();

        if let Some(active) = query.active {
            select = select.filter(Column::Active.eq(active));
        }
        if let Some(visible) = query.visible {
            select = select.filter(Column::Visible.eq(visible));
        }
        if let Some(search) = &query.search {
            let pattern = format!("%{}%", escape_like_pattern(search));
            select = select.filter(
                Column::Name
                    .like(pattern.clone())
                    .or(Column::Email.like(pattern)),
            );
        }

        select = select.order_by_asc(Column::Name);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            RedacaoError::database_operation(format!("Contar corretores falhou: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            RedacaoError::database_operation(format!("Paginar corretores falhou: {e}"))
        })?;
        let correctors = paginator.fetch_page(page - 1).await.map_err(|e| {
            RedacaoError::database_operation(format!("Listar corretores falhou: {e}"))
        })?;

        Ok(CorrectorListResponse {
            items: correctors.into_iter().map(|m| m.into_corrector()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_corrector_impl(
        &self,
        id: i64,
        update: UpdateCorrectorRequest,
    ) -> Result<Option<Corrector>> {
        if self.get_corrector_by_id_impl(id).await?.is_none() {
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
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(active) = update.active {
            model.active = Set(active);
        }
        if let Some(visible) = update.visible {
            model.visible = Set(visible);
        }
        if let Some(turmas) = update.authorized_turmas {
            model.authorized_turmas = Set(Some(serde_json::to_string(&turmas)?));
        }

        model.update(&self.db).await.map_err(|e| {
            RedacaoError::database_operation(format!("Atualizar corretor falhou: {e}"))
        })?;

        self.get_corrector_by_id_impl(id).await
    }

    pub async fn delete_corrector_impl(&self, id: i64) -> Result<bool> {
        let result = Correctors::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Remover corretor falhou: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
