#[macro_use]
extern crate rocket;

pub mod config;
pub mod models;
pub mod notify;
pub mod routes;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Arc;

use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

use crate::config::AppConfig;
use crate::models::movie::Catalog;
use crate::notify::{HttpTopicNotifier, NoopNotifier, Notifier};
use crate::services::booking_service::BookingService;
use crate::services::user_service::UserService;
use crate::storage::memory::MemoryStore;
use crate::storage::table::TableStore;
use crate::storage::{BookingStore, UserStore};

/// Build the site from configuration: table-backed stores and an HTTP topic
/// notifier when configured, in-memory stores and no notifications otherwise.
pub fn rocket(config: AppConfig) -> Rocket<Build> {
    let notifier: Arc<dyn Notifier> = match &config.notify_topic_url {
        Some(url) => Arc::new(HttpTopicNotifier::new(url.clone())),
        None => Arc::new(NoopNotifier),
    };

    let (user_store, booking_store): (Arc<dyn UserStore>, Arc<dyn BookingStore>) =
        match &config.table_endpoint {
            Some(endpoint) => {
                let store = Arc::new(TableStore::new(endpoint.clone()));
                (store.clone() as Arc<dyn UserStore>, store as Arc<dyn BookingStore>)
            }
            None => {
                let store = Arc::new(MemoryStore::new());
                (store.clone() as Arc<dyn UserStore>, store as Arc<dyn BookingStore>)
            }
        };

    let user_service = UserService::new(user_store, Arc::clone(&notifier));
    let booking_service = BookingService::new(booking_store, notifier);

    let mut building = rocket::build();
    if let Some(secret_key) = &config.secret_key {
        building =
            building.configure(rocket::Config::figment().merge(("secret_key", secret_key.clone())));
    }

    site(building, user_service, booking_service, Catalog::sample())
}

/// Mount routes and services onto an existing Rocket instance. Split out so
/// tests can inject their own stores and notifiers.
pub fn site(
    building: Rocket<Build>,
    user_service: UserService,
    booking_service: BookingService,
    catalog: Catalog,
) -> Rocket<Build> {
    building
        .manage(user_service)
        .manage(booking_service)
        .manage(catalog)
        .attach(Template::fairing())
        .mount(
            "/",
            routes![
                routes::user_route::index,
                routes::user_route::login_page,
                routes::user_route::login,
                routes::user_route::signup_page,
                routes::user_route::signup,
                routes::user_route::logout,
                routes::movie_route::home1,
                routes::movie_route::home1_unauthorized,
                routes::movie_route::about,
                routes::movie_route::contact_us,
                routes::movie_route::b1,
                routes::movie_route::b1_unauthorized,
                routes::ticket_route::tickets,
                routes::ticket_route::tickets_unauthorized,
            ],
        )
}
