mod setup;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use async_graphql::{
    http::{playground_source, GraphQLPlaygroundConfig},
    EmptySubscription, Schema,
};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use graphql::mutations::Mutations as MutationRoot;
use graphql::queries::Queries as QueryRoot;
use setup::{set_up_db, GRAPHQL_PATH, LISTEN_PORT};

type SchemaType = Schema<QueryRoot, MutationRoot, EmptySubscription>;

async fn graphql_playground() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new(GRAPHQL_PATH)))
}

async fn graphql_request(schema: web::Data<SchemaType>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db = set_up_db().await.map_err(std::io::Error::other)?;

    // The connection lives in the GraphQL context and is shared by every resolver.
    let schema = Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(db.clone())
        .finish();

    tracing::info!(port = LISTEN_PORT, path = GRAPHQL_PATH, "starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(schema.clone()))
            .route(GRAPHQL_PATH, web::post().to(graphql_request))
            .route(GRAPHQL_PATH, web::get().to(graphql_playground))
    })
    .bind(("0.0.0.0", LISTEN_PORT))?
    .run()
    .await?;

    // Server stopped accepting requests; release the pooled connections.
    db.close().await.map_err(std::io::Error::other)?;
    tracing::info!("DB connection closed");
    Ok(())
}
