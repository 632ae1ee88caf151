use strata_store::SiteRepository;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let measurement = ctx.repo.get_measurement(id)?;
    output(&measurement, flags.format)
}
