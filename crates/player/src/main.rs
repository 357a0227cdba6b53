//! Legends Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use legends_player::infrastructure::{create_game_search, platform::create_platform};
use legends_player::runner::{config::PlayerConfig, run, RunnerDeps};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legends_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Legends Player");

    let config = PlayerConfig::from_env();
    tracing::debug!(shell = ?config.shell, "Player configured");

    let game_search = create_game_search(&config.igdb);

    run(RunnerDeps {
        platform: create_platform(),
        game_search,
        config,
    });
}
