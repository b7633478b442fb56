use actix_web::{web, App, HttpServer};
use clap::Parser;

mod models;
mod services;
mod state;
mod api;
mod cli;

use cli::CommandArgs;
use services::TrackingAllocator;
use state::{new_state, PROCESS_STARTED};

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 尽早记录启动时间, uptime 从这里开始计算
    lazy_static::initialize(&PROCESS_STARTED);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandArgs::parse();
    let bind_address = format!("{}:{}", args.address, args.port);
    let health_path = args.route_path();

    let state = new_state(args.environment.clone());

    log::info!("Process started at {}", models::health::iso_timestamp(*PROCESS_STARTED));
    log::info!("Environment: {}", state.environment());
    log::info!("Binding to {}, health route mounted at {}", bind_address, health_path);

    print_banner(&args, &health_path);

    HttpServer::new(move || {
        let path = health_path.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(move |cfg| api::configure(cfg, &path))
    })
        .bind(&bind_address)?
        .run()
        .await
}

fn print_banner(args: &CommandArgs, health_path: &str) {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║      Health Probe v{:<39}║", env!("CARGO_PKG_VERSION"));
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("🚀 Server starting on http://{}:{}", args.address, args.port);
    println!();
    println!("📋 Available endpoints:");
    println!("  GET    {:<24}- Status, uptime and memory", health_path);
    println!("  HEAD   {:<24}- Lightweight liveness probe", health_path);
    println!("═══════════════════════════════════════════════════════════");
}
