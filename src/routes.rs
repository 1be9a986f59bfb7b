use actix_web::{get, post, web, HttpRequest, HttpResponse};
use formdata::FormData;
use ingress::IngressError;
use serde_json::json;

use crate::config::ServerConfig;

pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(mail_form);
}

#[get("/")]
async fn index() -> &'static str {
    "Hello, formcheck!"
}

/// Rules for the outgoing-mail form.
pub(crate) fn validate_mail(form: &mut FormData, attachment_required: bool) {
    form.validate("from").required().has_n(1).matches_email();
    form.validate("to").required().has_n_min(1).matches_all_email();
    form.validate("subject").required().has_n(1);

    if attachment_required {
        form.validate_file("attachment").required().has_n_min(1);
    }
}

#[post("/forms/mail")]
async fn mail_form(
    req: HttpRequest,
    payload: web::Payload,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, IngressError> {
    let mut form = ingress::parse_with(req.headers(), payload, &config.ingress).await?;

    validate_mail(&mut form, config.attachment_required);

    if form.has_errors() {
        tracing::info!(errors = form.validation_errors().len(), "mail form rejected");
        return Ok(HttpResponse::UnprocessableEntity().json(json!({ "errors": form.errors() })));
    }

    let files: Vec<serde_json::Value> = form
        .file_keys()
        .into_iter()
        .flat_map(|key| {
            form.get_file(key).iter().map(move |file| {
                json!({ "field": key, "filename": file.filename(), "size": file.size() })
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(json!({ "fields": form.keys(), "files": files })))
}
