use strata_core::enums::MeasurementMode;
use strata_measure::MeasurementSession;
use strata_store::SiteRepository;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MeasureArgs;
use crate::context::AppContext;
use crate::output::output;

/// Replay the clicked points through a fresh session.
pub fn run(
    mode: MeasurementMode,
    args: &MeasureArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = match args.site.clone().or_else(|| ctx.default_site_id()) {
        Some(site_id) => MeasurementSession::for_site(site_id),
        None => MeasurementSession::new(),
    };
    let measurement = session.measure(mode, &args.at)?;

    if args.save {
        ctx.repo.save_measurement(&measurement)?;
    }
    output(&measurement, flags.format)
}
