use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Attendance;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { payload, name } = cmd {
        let mut app = Attendance::open(cfg)?;
        app.scan_payload(payload, name.clone())?;

        // one-shot process: let the sync worker finish before exiting
        app.sync.drain();
    }
    Ok(())
}
