use crate::utils::webutils::validate_admin_token;
use actix_web::web;

pub mod group;
pub mod health;
pub mod quest;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let admin_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_admin_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/user")
            .service(
                web::scope("/create")
                    .service(user::create::create)
                    .wrap(admin_auth),
            )
            .service(user::current::current),
    );
    cfg.service(
        web::scope("/groups")
            .service(group::create::create)
            .service(quest::invite::invite)
            .service(quest::accept::accept)
            .service(quest::reject::reject),
    );
}
