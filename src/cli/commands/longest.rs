use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyze::load_month;
use crate::core::filter::TargetMonth;
use crate::core::report::ReportLogic;
use crate::core::session::longest_session;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Longest { period } = cmd {
        let month = TargetMonth::parse(period.as_deref().unwrap_or(&cfg.period))?;

        let events = load_month(Path::new(&cfg.input_file), &month)?;
        let winner = longest_session(&events);

        ReportLogic::print_longest(&winner, &month);
    }
    Ok(())
}
