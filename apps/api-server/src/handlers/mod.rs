//! HTTP handlers and route configuration.

mod health;
mod resource;

#[cfg(test)]
mod tests;

use actix_web::web;

use crate::middleware::error::{json_config, path_config};
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(json_config()).app_data(path_config()).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(resource::scope("/users", state.users.clone()))
            .service(resource::scope("/posts", state.posts.clone()))
            .service(resource::scope("/messages", state.messages.clone()))
            .service(resource::scope("/skills", state.skills.clone()))
            .service(resource::scope(
                "/academic_trainings",
                state.academic_trainings.clone(),
            )),
    );
}
