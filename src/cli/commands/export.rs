use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Attendance;
use crate::db::store::LedgerStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let app = Attendance::open(cfg)?;
        let records = app.ledger.export_records();

        let path = ExportLogic::export(&records, *format, file.as_deref(), *force)?;

        app.ledger.store().journal(
            "export",
            format.as_str(),
            &format!("{} records to {}", records.len(), path.display()),
        );
    }
    Ok(())
}
