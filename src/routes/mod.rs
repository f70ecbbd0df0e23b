pub mod annotations;
pub mod correctors;
pub mod live_classes;
pub mod ranking;
pub mod repertoire;
pub mod simulados;
pub mod students;
pub mod submissions;
pub mod turmas;

pub use annotations::configure_annotations_routes;
pub use correctors::configure_correctors_routes;
pub use live_classes::configure_live_classes_routes;
pub use ranking::configure_ranking_routes;
pub use repertoire::configure_repertoire_routes;
pub use simulados::configure_simulados_routes;
pub use students::configure_students_routes;
pub use submissions::configure_submissions_routes;
pub use turmas::configure_turmas_routes;
