use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::dispatcher::Dispatcher;
use crate::handlers;
use crate::speech::Speaker;

pub fn create_app(
    dispatcher: Arc<Dispatcher>,
    speaker: Arc<dyn Speaker>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .wrap(Cors::permissive())
        .app_data(Data::from(dispatcher))
        .app_data(Data::from(speaker))
        .route("/command", web::post().to(handlers::command))
        .route("/say", web::post().to(handlers::say))
}
