//! Operações de storage de repertório

use super::SeaOrmStorage;
use crate::entity::repertoire_entries::{ActiveModel, Column, Entity as RepertoireEntries};
use crate::errors::{RedacaoError, Result};
use crate::models::{
    PaginationInfo,
    repertoire::{
        entities::RepertoireEntry,
        requests::{CreateRepertoireRequest, RepertoireListQuery},
        responses::RepertoireListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_repertoire_entry_impl(
        &self,
        req: CreateRepertoireRequest,
    ) -> Result<RepertoireEntry> {
        let model = ActiveModel {
            author_name: Set(req.author_name),
            author_email: Set(req.author_email),
            category: Set(req.category),
            theme: Set(req.theme),
            content: Set(req.content),
            approved: Set(false),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            RedacaoError::database_operation(format!("Criar repertório falhou: {e}"))
        })?;

        Ok(result.into_repertoire_entry())
    }

    pub async fn list_repertoire_with_pagination_impl(
        &self,
        query: RepertoireListQuery,
    ) -> Result<RepertoireListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let mut select = RepertoireEntries::find();

        if let Some(category) = &query.category {
            select = select.filter(Column::Category.eq(category));
        }
        if let Some(approved) = query.approved {
            select = select.filter(Column::Approved.eq(approved));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            RedacaoError::database_operation(format!("Contar repertórios falhou: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            RedacaoError::database_operation(format!("Paginar repertórios falhou: {e}"))
        })?;
        let entries = paginator.fetch_page(page - 1).await.map_err(|e| {
            RedacaoError::database_operation(format!("Listar repertórios falhou: {e}"))
        })?;

        Ok(RepertoireListResponse {
            items: entries
                .into_iter()
                .map(|m| m.into_repertoire_entry())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn set_repertoire_approved_impl(
        &self,
        id: i64,
        approved: bool,
    ) -> Result<Option<RepertoireEntry>> {
        let existing = RepertoireEntries::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Consultar repertório falhou: {e}"))
            })?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            approved: Set(approved),
            ..Default::default()
        };

        let updated = model.update(&self.db).await.map_err(|e| {
            RedacaoError::database_operation(format!("Aprovar repertório falhou: {e}"))
        })?;

        Ok(Some(updated.into_repertoire_entry()))
    }

    pub async fn delete_repertoire_entry_impl(&self, id: i64) -> Result<bool> {
        let result = RepertoireEntries::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Remover repertório falhou: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
