use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyze::AnalyzeLogic;
use crate::core::filter::TargetMonth;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        period,
        out_dir,
        format,
        force,
    } = cmd
    {
        let month = TargetMonth::parse(period.as_deref().unwrap_or(&cfg.period))?;

        let out_dir = out_dir.as_deref().unwrap_or(&cfg.output_dir);

        let format = match format {
            Some(f) => *f,
            None => ExportFormat::from_code(&cfg.export_format)?,
        };

        AnalyzeLogic::run(
            Path::new(&cfg.input_file),
            Path::new(out_dir),
            &month,
            format,
            *force,
        )?;
    }
    Ok(())
}
