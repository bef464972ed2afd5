pub mod academic;

pub mod assignments;

pub mod profiles;

pub mod submissions;

pub mod uploads;

pub use academic::configure_academic_routes;
pub use assignments::configure_assignments_routes;
pub use profiles::configure_profile_routes;
pub use submissions::configure_submissions_routes;
pub use uploads::configure_upload_routes;

/// 注册全部路由
pub fn configure_all_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.configure(configure_assignments_routes)
        .configure(configure_submissions_routes)
        .configure(configure_profile_routes)
        .configure(configure_academic_routes)
        .configure(configure_upload_routes);
}
