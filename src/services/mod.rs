pub mod annotations;
pub mod attendance;
pub mod correctors;
pub mod live_classes;
pub mod ranking;
pub mod repertoire;
pub mod simulados;
pub mod students;
pub mod submissions;
pub mod turmas;

pub use annotations::AnnotationService;
pub use attendance::AttendanceService;
pub use correctors::CorrectorService;
pub use live_classes::LiveClassService;
pub use ranking::RankingService;
pub use repertoire::RepertoireService;
pub use simulados::SimuladoService;
pub use students::StudentService;
pub use submissions::SubmissionService;
pub use turmas::TurmaService;
