use clap::Parser;
use dotenvy::dotenv;

use vibrant_chat::config;
use vibrant_chat::session::MessengerSession;
use vibrant_chat::storage::{DraftStore, MemoryDraftStore, SqliteDraftStore};
use vibrant_chat::store::ConversationStore;
use vibrant_chat::ui::ChatApp;

#[derive(Parser)]
#[command(name = "vibrant_chat", version, about = "Desktop chat client demo")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// SQLite file for unsent drafts (overrides the config)
    #[arg(long, value_name = "FILE")]
    drafts_db: Option<String>,
    /// Keep drafts in memory only
    #[arg(long)]
    memory_drafts: bool,
}

fn open_drafts(cli: &Cli, app_config: &config::AppConfig) -> Box<dyn DraftStore> {
    if cli.memory_drafts {
        return Box::new(MemoryDraftStore::new());
    }

    let path = cli
        .drafts_db
        .clone()
        .unwrap_or_else(|| app_config.drafts_db_path.clone());
    match SqliteDraftStore::with_path(&path) {
        Ok(store) => {
            log::info!("Drafts stored in {path}");
            Box::new(store)
        }
        Err(err) => {
            log::warn!("Failed to open drafts database {path} ({err}); keeping drafts in memory");
            Box::new(MemoryDraftStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);
    let drafts = open_drafts(&cli, &app_config);

    let mut store = ConversationStore::seeded();
    store.set_color_palette(app_config.color_palette);
    store.set_theme_mode(app_config.theme_mode);
    if let Some(mut user) = store.state().current_user().cloned() {
        user.role = app_config.current_user_role;
        store.set_current_user(user);
    }

    let mut session = Some(MessengerSession::new(store, drafts));
    let config_path = cli.config.clone();
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "VibrantChats",
        options,
        Box::new(move |cc| {
            let session = session
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!(
                "Client started with {} chats",
                session.store().state().chats().len()
            );

            Ok(Box::new(ChatApp::new(cc, session, config_path.clone())))
        }),
    )
}
