//! Operações de storage de presenças e acessos negados

use super::SeaOrmStorage;
use crate::entity::access_denials::{
    ActiveModel as AccessDenialActiveModel, Column as AccessDenialColumn,
    Entity as AccessDenials,
};
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{RedacaoError, Result};
use crate::models::attendance::{entities::AttendanceRecord, responses::AccessDenial};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn get_attendance_record_impl(
        &self,
        live_class_id: i64,
        student_email: &str,
    ) -> Result<Option<AttendanceRecord>> {
        let result = AttendanceRecords::find()
            .filter(Column::LiveClassId.eq(live_class_id))
            .filter(Column::StudentEmail.eq(student_email))
            .one(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Consultar presença falhou: {e}"))
            })?;

        Ok(result.map(|m| m.into_attendance_record()))
    }

    /// Entrada com on-conflict-do-nothing no índice único (aula, e-mail)
    ///
    /// Duas entradas quase simultâneas colapsam em uma linha: a que perdeu
    /// a corrida lê a linha existente e devolve created = false.
    pub async fn insert_attendance_entry_impl(
        &self,
        live_class_id: i64,
        student_email: &str,
        student_name: &str,
        entry_at: i64,
    ) -> Result<(AttendanceRecord, bool)> {
        let model = ActiveModel {
            live_class_id: Set(live_class_id),
            student_email: Set(student_email.to_string()),
            student_name: Set(student_name.to_string()),
            entry_at: Set(Some(entry_at)),
            exit_at: Set(None),
            ..Default::default()
        };

        let created = match AttendanceRecords::insert(model)
            .on_conflict(
                OnConflict::columns([Column::LiveClassId, Column::StudentEmail])
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await
        {
            Ok(_) => true,
            Err(DbErr::RecordNotInserted) => false,
            Err(e) => {
                return Err(RedacaoError::database_operation(format!(
                    "Registrar entrada falhou: {e}"
                )));
            }
        };

        let record = self
            .get_attendance_record_impl(live_class_id, student_email)
            .await?
            .ok_or_else(|| {
                RedacaoError::database_operation(
                    "Presença sumiu logo após o insert".to_string(),
                )
            })?;

        Ok((record, created))
    }

    pub async fn set_attendance_exit_impl(
        &self,
        record_id: i64,
        exit_at: i64,
    ) -> Result<Option<AttendanceRecord>> {
        let existing = AttendanceRecords::find_by_id(record_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Consultar presença falhou: {e}"))
            })?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(record_id),
            exit_at: Set(Some(exit_at)),
            ..Default::default()
        };

        let updated = model.update(&self.db).await.map_err(|e| {
            RedacaoError::database_operation(format!("Registrar saída falhou: {e}"))
        })?;

        Ok(Some(updated.into_attendance_record()))
    }

    pub async fn list_attendance_records_impl(
        &self,
        live_class_id: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        let records = AttendanceRecords::find()
            .filter(Column::LiveClassId.eq(live_class_id))
            .order_by_asc(Column::StudentName)
            .all(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Listar presenças falhou: {e}"))
            })?;

        Ok(records
            .into_iter()
            .map(|m| m.into_attendance_record())
            .collect())
    }

    pub async fn log_access_denial_impl(
        &self,
        live_class_id: i64,
        email: &str,
        reason: &str,
        attempted_at: i64,
    ) -> Result<AccessDenial> {
        let model = AccessDenialActiveModel {
            live_class_id: Set(live_class_id),
            email: Set(email.to_string()),
            reason: Set(reason.to_string()),
            attempted_at: Set(attempted_at),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            RedacaoError::database_operation(format!("Registrar acesso negado falhou: {e}"))
        })?;

        Ok(result.into_access_denial())
    }

    pub async fn list_access_denials_impl(
        &self,
        live_class_id: i64,
    ) -> Result<Vec<AccessDenial>> {
        let denials = AccessDenials::find()
            .filter(AccessDenialColumn::LiveClassId.eq(live_class_id))
            .order_by_desc(AccessDenialColumn::AttemptedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                RedacaoError::database_operation(format!("Listar acessos negados falhou: {e}"))
            })?;

        Ok(denials.into_iter().map(|m| m.into_access_denial()).collect())
    }
}
