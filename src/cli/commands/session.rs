use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Attendance;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::scan::{DecoderFeed, ManualEntry};
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session {
        decoder,
        decoder_cmd,
    } = cmd
    {
        let mut app = Attendance::open(cfg)?;

        if *decoder {
            let command_line = decoder_cmd.as_deref().unwrap_or(&cfg.decoder_command);
            let mut feed = DecoderFeed::spawn(command_line)?;
            SessionLogic::run(&mut app, &mut feed)?;
        } else {
            let stdin = io::stdin();
            let mut manual = ManualEntry::new(stdin.lock());
            SessionLogic::run(&mut app, &mut manual)?;
        }
    }
    Ok(())
}
