//! Pré-importações das entidades

pub use super::access_denials::{
    ActiveModel as AccessDenialActiveModel, Entity as AccessDenials, Model as AccessDenialModel,
};
pub use super::annotations::{
    ActiveModel as AnnotationActiveModel, Entity as Annotations, Model as AnnotationModel,
};
pub use super::attendance_records::{
    ActiveModel as AttendanceRecordActiveModel, Entity as AttendanceRecords,
    Model as AttendanceRecordModel,
};
pub use super::correctors::{
    ActiveModel as CorrectorActiveModel, Entity as Correctors, Model as CorrectorModel,
};
pub use super::live_classes::{
    ActiveModel as LiveClassActiveModel, Entity as LiveClasses, Model as LiveClassModel,
};
pub use super::repertoire_entries::{
    ActiveModel as RepertoireEntryActiveModel, Entity as RepertoireEntries,
    Model as RepertoireEntryModel,
};
pub use super::simulados::{
    ActiveModel as SimuladoActiveModel, Entity as Simulados, Model as SimuladoModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::turmas::{ActiveModel as TurmaActiveModel, Entity as Turmas, Model as TurmaModel};
