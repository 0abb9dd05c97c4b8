//! StudyPlan server — HTTP routes, shared state, HTML rendering.

pub mod package;
pub mod render;
pub mod routes;
pub mod state;

pub use package::{build_study_package, StudyPackage};
pub use routes::build_router;
pub use state::AppState;
