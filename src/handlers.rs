use actix_web::web::{Bytes, Data};
use actix_web::{HttpResponse, Responder};

use crate::dispatcher::Dispatcher;
use crate::messages;
use crate::models::{CommandReply, SayReply, text_from_body};
use crate::speech::Speaker;

pub async fn command(
    dispatcher: Data<Dispatcher>,
    speaker: Data<dyn Speaker>,
    body: Bytes,
) -> impl Responder {
    let text = text_from_body(&body);
    let text = text.trim();

    if text.is_empty() {
        log::debug!("empty command");
        return HttpResponse::Ok().json(CommandReply {
            reply: messages::EMPTY_COMMAND.to_string(),
        });
    }

    log::info!("command: {:?}", text);
    let reply = dispatcher.dispatch(&text.to_lowercase()).await;
    log::info!("reply: {:?}", reply);

    speaker.speak(&reply).await;

    HttpResponse::Ok().json(CommandReply { reply })
}

pub async fn say(speaker: Data<dyn Speaker>, body: Bytes) -> impl Responder {
    let text = text_from_body(&body);
    speaker.speak(&text).await;

    HttpResponse::Ok().json(SayReply { ok: true })
}
