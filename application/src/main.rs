use std::{io, process::ExitCode, sync::OnceLock};

use application::{entity, session, Args, Command, Config, Service, Terminal};
use common::pagination::Size;
use service::{
    infra::{http, Http},
    listing::{Inventory, Users},
    ui::Screen,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

async fn start() -> Result<(), ()> {
    let Args { config, command } = Args::parse().map_err(|e| {
        if e.use_stderr() {
            log::error!("failed to parse command line arguments: {e}");
        } else {
            _ = e.print();
        }
    })?;

    let Config {
        api,
        listing,
        ui,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let api = http::Config::try_from(api).map_err(|e| {
        log::error!("invalid `api.base_url`: {e}");
    })?;
    let http = Http::new(api).map_err(|e| {
        log::error!("failed to initialize `Http` client: {e}");
    })?;
    let service = Service::new(ui.into(), http);

    let page_size = |n: usize, name: &str| {
        Size::new(n).ok_or_else(|| {
            log::error!("`listing.{name}` must be greater than 0");
        })
    };
    let users = page_size(listing.users_page_size, "users_page_size")?;
    let inventory =
        page_size(listing.inventory_page_size, "inventory_page_size")?;

    let terminal = Terminal::new();
    let outcome = match command {
        Command::Users => {
            session::browse::<Users>(&service, &terminal, users).await;
            Ok(())
        }
        Command::Inventory => {
            session::browse::<Inventory>(&service, &terminal, inventory)
                .await;
            Ok(())
        }
        Command::User(cmd) => {
            entity::user(&service, &terminal, cmd)
                .await
                .map_err(|e| log::debug!("user command failed: {e}"))
        }
        Command::Accessory(cmd) => {
            entity::accessory(&service, &terminal, cmd)
                .await
                .map_err(|e| log::debug!("accessory command failed: {e}"))
        }
    };

    match terminal.take_redirect() {
        Some(Screen::Users) => {
            session::browse::<Users>(&service, &terminal, users).await;
        }
        Some(Screen::Inventory) => {
            session::browse::<Inventory>(&service, &terminal, inventory)
                .await;
        }
        Some(Screen::Accessories) | None => {}
    }

    outcome
}
