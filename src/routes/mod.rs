use actix_web::web;

pub mod cricket;
pub mod health;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").service(health::health).service(
            web::scope("/cricket")
                .service(cricket::live_matches)
                .service(cricket::match_detail)
                .service(cricket::recent_matches)
                .service(cricket::test_matches),
        ),
    );
}
