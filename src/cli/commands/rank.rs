use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyze::load_month;
use crate::core::attendance::aggregate;
use crate::core::filter::TargetMonth;
use crate::core::rank::rank_users;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rank { period } = cmd {
        let month = TargetMonth::parse(period.as_deref().unwrap_or(&cfg.period))?;

        let events = load_month(Path::new(&cfg.input_file), &month)?;
        let ranking = rank_users(&aggregate(&events));

        ReportLogic::print_rank(&ranking, &month);
    }
    Ok(())
}
