//! Operações de storage de simulados

use super::SeaOrmStorage;
use crate::entity::simulados::{ActiveModel, Column, Entity as Simulados};
use crate::errors::{RedacaoError, Result};
use crate::models::{
    PaginationInfo,
    simulados::{
        entities::Simulado,
        requests::{CreateSimuladoRequest, SimuladoListQuery, UpdateSimuladoRequest},
        responses::SimuladoListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_simulado_impl(&self, req: CreateSimuladoRequest) -> Result<Simulado> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            theme: Set(req.theme),
            date: Set(req.date),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Criar simulado falhou: {e}")))?;

        Ok(result.into_simulado())
    }

    pub async fn get_simulado_by_id_impl(&self, id: i64) -> Result<Option<Simulado>> {
        let result = Simulados::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Consultar simulado falhou: {e}"))
            })?;

        Ok(result.map(|m| m.into_simulado()))
    }

    pub async fn list_simulados_with_pagination_impl(
        &self,
        query: SimuladoListQuery,
    ) -> Result<SimuladoListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let mut select = Simulados::find();

        if let Some(active) = query.active {
            select = select.filter(Column::Active.eq(active));
        }

        select = select.order_by_desc(Column::Date);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            RedacaoError::database_operation(format!("Contar simulados falhou: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            RedacaoError::database_operation(format!("Paginar simulados falhou: {e}"))
        })?;
        let simulados = paginator.fetch_page(page - 1).await.map_err(|e| {
            RedacaoError::database_operation(format!("Listar simulados falhou: {e}"))
        })?;

        Ok(SimuladoListResponse {
            items: simulados.into_iter().map(|m| m.into_simulado()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_simulado_impl(
        &self,
        id: i64,
        update: UpdateSimuladoRequest,
    ) -> Result<Option<Simulado>> {
        if self.get_simulado_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(theme) = update.theme {
            model.theme = Set(theme);
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }
        if let Some(active) = update.active {
            model.active = Set(active);
        }

        model.update(&self.db).await.map_err(|e| {
            RedacaoError::database_operation(format!("Atualizar simulado falhou: {e}"))
        })?;

        self.get_simulado_by_id_impl(id).await
    }

    pub async fn delete_simulado_impl(&self, id: i64) -> Result<bool> {
        let result = Simulados::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Remover simulado falhou: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
