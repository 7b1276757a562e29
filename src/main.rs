use actix_cors::Cors;
use actix_identity::IdentityMiddleware;
use actix_web::cookie::Key;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use log::{info, warn};
use mentorship_core::args::Args;
use mentorship_core::data_model::user::{Role, User};
use mentorship_core::server;
use mentorship_core::state::data::Data;
use mentorship_core::state::state::State;
use mentorship_core::state::store::{Store, StoreError};
use mentorship_core::state::store_local::StoreLocal;
use mentorship_core::state::store_mongo::StoreMongo;
use mentorship_core::util::crypto::get_password_hash;

fn session_key(args: &Args) -> Key {
    if args.session_secret.len() >= 32 {
        return Key::derive_from(args.session_secret.as_bytes());
    }
    if !args.session_secret.is_empty() {
        warn!("Session secret shorter than 32 bytes, generating a fresh key instead");
    }
    Key::generate()
}

/// First-run bootstrap: registration is admin-only, so an empty store gets
/// one admin account to start from.
async fn seed_admin(srv: &mut Data) -> Result<(), StoreError> {
    if !srv.rw.get_users().await?.is_empty() {
        info!("Users already present, not seeding an admin");
        return Ok(());
    }
    let usr = User::new(
        &srv.args.admin_email,
        &get_password_hash(&srv.args.admin_password),
        Role::Admin,
    );
    let id = srv.rw.put_user(&usr).await?;
    info!("Seeded admin {} as user {}", usr.email, id);
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rw: Box<dyn Store> = if args.db_url.is_empty() {
        Box::new(StoreLocal::new(&args.data_path))
    } else {
        Box::new(StoreMongo::new(&args.db_url, &args.db_name))
    };
    rw.connect().await.map_err(std::io::Error::other)?;

    let mut srv = Data::new(rw, args.clone());
    if args.first_run {
        seed_admin(&mut srv).await.map_err(std::io::Error::other)?;
    }

    let data = web::Data::new(State::new(srv));
    let key = session_key(&args);
    info!("Starting server on {}:{}", args.host, args.port);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Cors::permissive())
            .wrap(IdentityMiddleware::default())
            .wrap(server::session_middleware(key.clone()))
            .configure(server::configure)
    })
    .bind((args.host.clone(), args.port))?
    .run()
    .await
}
