//! Entidade de aluno

use sea_orm::entity::prelude::*;

use crate::models::students::entities::Student;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub surname: String,
    #[sea_orm(unique)]
    pub email: String,
    pub turma_code: Option<String>,
    pub credits: i32,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> Student {
        Student {
            id: self.id,
            name: self.name,
            surname: self.surname,
            email: self.email,
            turma_code: self.turma_code,
            credits: self.credits,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
