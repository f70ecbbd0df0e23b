//! Operações de storage de alunos

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{RedacaoError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            surname: Set(req.surname),
            email: Set(req.email),
            turma_code: Set(req.turma_code),
            credits: Set(req.credits),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Criar aluno falhou: {e}")))?;

        Ok(result.into_student())
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Consultar aluno falhou: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Consultar aluno falhou: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let mut select = Students::find();

        if let Some(turma_code) = &query.turma_code {
            select = select.filter(Column::TurmaCode.eq(turma_code));
        }
        if let Some(active) = query.active {
            select = select.filter(Column::Active.eq(active));
        }
        if let Some(search) = &query.search {
            let pattern = format!("%{}%", escape_like_pattern(search));
            select = select.filter(
                Column::Name
                    .like(pattern.clone())
                    .or(Column::Surname.like(pattern.clone()))
                    .or(Column::Email.like(pattern)),
            );
        }

        select = select.order_by_asc(Column::Name).order_by_asc(Column::Surname);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            RedacaoError::database_operation(format!("Contar alunos falhou: {e}"))
        })?;
        let pages = paginator.num_pages().await.map_err(|e| {
            RedacaoError::database_operation(format!("Paginar alunos falhou: {e}"))
        })?;
        let students = paginator.fetch_page(page - 1).await.map_err(|e| {
            RedacaoError::database_operation(format!("Listar alunos falhou: {e}"))
        })?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn list_students_by_turmas_impl(
        &self,
        turma_codes: &[String],
    ) -> Result<Vec<Student>> {
        if turma_codes.is_empty() {
            return Ok(Vec::new());
        }

        let students = Students::find()
            .filter(Column::TurmaCode.is_in(turma_codes.to_vec()))
            .filter(Column::Active.eq(true))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Listar roster falhou: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        if self.get_student_by_id_impl(id).await?.is_none() {
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
        if let Some(surname) = update.surname {
            model.surname = Set(surname);
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(turma_code) = update.turma_code {
            model.turma_code = Set(Some(turma_code));
        }
        if let Some(active) = update.active {
            model.active = Set(active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Atualizar aluno falhou: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RedacaoError::database_operation(format!("Remover aluno falhou: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn grant_credits_impl(&self, id: i64, amount: i32) -> Result<Option<Student>> {
        let result = Students::update_many()
            .col_expr(Column::Credits, Expr::col(Column::Credits).add(amount))
            .col_expr(
                Column::UpdatedAt,
                Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Conceder créditos falhou: {e}"))
            })?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_student_by_id_impl(id).await
    }

    /// Decremento condicional: só consome quando há saldo, numa única
    /// escrita, para que requisições concorrentes não fiquem negativas
    pub async fn consume_credit_impl(&self, id: i64) -> Result<bool> {
        let result = Students::update_many()
            .col_expr(Column::Credits, Expr::col(Column::Credits).sub(1))
            .col_expr(
                Column::UpdatedAt,
                Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::Credits.gt(0))
            .exec(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Consumir crédito falhou: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
