// Escada Bot
// A Discord companion for the church success ladder: levels, badges and rankings

mod api;
mod commands;
mod ladder;
mod models;
mod utils;

use std::env;
use std::sync::Arc;

use dashmap::DashMap;
use poise::serenity_prelude as serenity;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::supabase::SupabaseClient;
use crate::utils::config::Settings;

/// User data shared across all commands
pub struct Data {
    pub supabase: Arc<SupabaseClient>,
    pub settings: Settings,
    /// Discord user id -> member id
    pub member_links: DashMap<u64, String>,
}

// Manual Debug impl since SupabaseClient doesn't impl Debug
impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("supabase", &"SupabaseClient")
            .field("settings", &self.settings)
            .field("member_links", &self.member_links.len())
            .finish()
    }
}

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

/// Register all slash commands
fn get_commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        commands::escada::escada(),
        commands::ranking::ranking(),
        commands::insignias::insignias(),
        commands::niveis::niveis(),
        commands::help::help(),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "escada_rs=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    // Refuse to start on a broken ladder definition
    ladder::levels::validate_table(ladder::levels::levels())?;
    ladder::badges::validate_catalog()?;

    info!("Starting Escada Bot...");
    info!("Loaded {:?}", settings);

    // Build HTTP client for API calls
    let http_client = reqwest::Client::builder()
        .user_agent("Escada-Bot/1.0")
        .build()?;

    let supabase = Arc::new(SupabaseClient::new(
        http_client,
        &settings.supabase_url,
        settings.supabase_key.clone(),
    ));
    info!("Supabase client initialized");

    let token = settings.discord_token.clone();
    let prefix = settings.command_prefix.clone();

    // Setup framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: get_commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            on_error: |error| {
                Box::pin(async move {
                    match error {
                        poise::FrameworkError::Command { error, ctx, .. } => {
                            error!("Command error: {:?}", error);
                            let _ = ctx.say(format!("❌ Erro: {}", error)).await;
                        }
                        err => {
                            error!("Framework error: {:?}", err);
                        }
                    }
                })
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                info!("Bot is ready! Registering commands...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Commands registered successfully!");

                Ok(Data {
                    supabase,
                    settings,
                    member_links: DashMap::new(),
                })
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES;

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    // Run with graceful shutdown
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to register Ctrl+C handler: {:?}", e);
            return;
        }
        info!("Shutting down...");
        shard_manager.shutdown_all().await;
    });

    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }

    info!("Goodbye!");
    Ok(())
}
