use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Attendance;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { force } = cmd {
        let mut app = Attendance::open(cfg)?;

        if app.ledger.is_empty() {
            info("No scanned IDs to clear.");
            return Ok(());
        }

        let prompt = format!(
            "Clear all {} scanned IDs? This action is irreversible.",
            app.ledger.len()
        );
        if !*force && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        app.clear();
    }
    Ok(())
}
