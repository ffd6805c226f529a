pub mod menu;

use crate::db::db::Db;
use crate::db::tasks::TaskManager;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file to use (`:memory:` for a throwaway list)
    #[arg(long = "db", value_name = "PATH")]
    pub db: Option<PathBuf>,
}

impl Cli {
    /// Parses the command line, opens the store and runs the menu.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::load(cli.db)?;

        let db = match Db::from_config(&config) {
            Ok(db) => db,
            Err(e) => {
                msg_error!(Message::DatabaseConnectionFailed(e.to_string()));
                return Err(e.into());
            }
        };
        msg_debug!(Message::DatabaseConnected(config.database_path().display().to_string()));

        menu::run(TaskManager::new(db))
    }
}
