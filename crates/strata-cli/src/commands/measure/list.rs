use strata_core::entities::Measurement;
use strata_core::responses::MeasurementListResponse;
use strata_store::SiteRepository;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    site: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let measurements = ctx.repo.list_measurements(site)?;
    output(&newest_first(measurements, usize::try_from(limit)?), flags.format)
}

fn newest_first(mut measurements: Vec<Measurement>, limit: usize) -> MeasurementListResponse {
    let total = measurements.len();
    measurements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    measurements.truncate(limit);
    MeasurementListResponse {
        measurements,
        total,
    }
}
