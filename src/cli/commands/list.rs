use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Attendance;
use crate::errors::AppResult;
use crate::ui::list::print_list;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let app = Attendance::open(cfg)?;
        print_list(app.ledger.records());
    }
    Ok(())
}
