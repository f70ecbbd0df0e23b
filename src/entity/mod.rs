//! Entidades SeaORM
//!
//! Usadas apenas pelo storage; as linhas do banco são convertidas para os
//! modelos de negócio de `models` antes de subir para os serviços.

pub mod prelude;

pub mod access_denials;
pub mod annotations;
pub mod attendance_records;
pub mod correctors;
pub mod live_classes;
pub mod repertoire_entries;
pub mod simulados;
pub mod students;
pub mod submissions;
pub mod turmas;
