//! Generic CRUD handlers, mounted once per resource.

use actix_web::{HttpResponse, Scope, web};

use vitae_core::{Resource, ResourceService};

use crate::middleware::error::AppResult;

/// `GET`, `POST` on `path` and `GET`, `PATCH`, `DELETE` on `path/{id}`.
pub fn scope<R: Resource>(path: &str, service: ResourceService<R>) -> Scope {
    web::scope(path)
        .app_data(web::Data::new(service))
        .route("", web::get().to(list::<R>))
        .route("", web::post().to(create::<R>))
        .route("/{id}", web::get().to(get::<R>))
        .route("/{id}", web::patch().to(update::<R>))
        .route("/{id}", web::delete().to(delete::<R>))
}

/// GET /api/{resource}
async fn list<R: Resource>(service: web::Data<ResourceService<R>>) -> AppResult<HttpResponse> {
    let rows = service.list().await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /api/{resource}/{id}
async fn get<R: Resource>(
    service: web::Data<ResourceService<R>>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let row = service.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(row))
}

/// POST /api/{resource}
async fn create<R: Resource>(
    service: web::Data<ResourceService<R>>,
    body: web::Json<R::Payload>,
) -> AppResult<HttpResponse> {
    let created = service.create(body.into_inner()).await?;

    tracing::info!(resource = R::LABEL, id = created.id(), "Created");
    Ok(HttpResponse::Created().json(created))
}

/// PATCH /api/{resource}/{id}
async fn update<R: Resource>(
    service: web::Data<ResourceService<R>>,
    id: web::Path<i32>,
    body: web::Json<R::Payload>,
) -> AppResult<HttpResponse> {
    let updated = service.update(id.into_inner(), body.into_inner()).await?;

    tracing::info!(resource = R::LABEL, id = updated.id(), "Updated");
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/{resource}/{id}
async fn delete<R: Resource>(
    service: web::Data<ResourceService<R>>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    service.delete(id).await?;

    tracing::info!(resource = R::LABEL, id, "Deleted");
    Ok(HttpResponse::NoContent().finish())
}
