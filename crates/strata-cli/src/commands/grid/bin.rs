use strata_core::entities::FindingLocation;
use strata_core::responses::BinResponse;
use strata_grid::SpatialBinner;
use strata_store::SiteRepository;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BinArgs;
use crate::commands::shared::parse::read_json_file;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &BinArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut grid = super::load_grid(ctx, &args.geometry)?;

    let locations: Vec<FindingLocation> = match (&args.findings, &grid.site_id) {
        (Some(path), _) => read_json_file(path)?,
        (None, Some(site_id)) => ctx.repo.list_findings_by_site(site_id)?,
        (None, None) => anyhow::bail!(
            "no findings to bin: pass --findings <file.json> or configure a site id"
        ),
    };

    let report = SpatialBinner::bin(&grid, &locations);

    if args.save {
        SpatialBinner::apply(&mut grid, &report)?;
        for cell in &grid.cells {
            ctx.repo.save_grid_unit(&grid.id, cell)?;
        }
        if args.findings.is_some() {
            match &grid.site_id {
                Some(site_id) => record_findings(&mut ctx.repo, site_id, &locations)?,
                None => tracing::warn!(
                    "no site id configured; --findings locations were binned but not recorded"
                ),
            }
        }
    }

    let response = BinResponse {
        grid_id: grid.id,
        assigned: report.assigned_count(),
        unassigned: u32::try_from(report.unassigned.len())?,
        invalid_depth: u32::try_from(report.invalid_depth.len())?,
        report,
    };
    output(&response, flags.format)
}

/// Record binned locations under `site_id`. Finds with an invalid depth are
/// skipped.
fn record_findings(
    repo: &mut impl SiteRepository,
    site_id: &str,
    locations: &[FindingLocation],
) -> anyhow::Result<()> {
    let mut recorded = 0_usize;
    for location in locations {
        if location.depth.is_finite() && location.depth >= 0.0 {
            repo.save_finding_location(site_id, location)?;
            recorded += 1;
        }
    }
    tracing::debug!(site_id, recorded, "recorded finding locations");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strata_core::Coordinate;
    use strata_store::MemoryRepository;

    use super::*;

    fn find(id: &str, depth: f64) -> FindingLocation {
        FindingLocation {
            finding_id: id.to_string(),
            coordinate: Coordinate::new(-34.5, -58.25),
            depth,
        }
    }

    #[test]
    fn recorded_findings_feed_the_next_bin() {
        let mut repo = MemoryRepository::new();
        let locations = [find("fnd-sherd", 0.5), find("fnd-bad", -1.0), find("fnd-bone", 1.25)];

        record_findings(&mut repo, "site-1", &locations).unwrap();
        record_findings(&mut repo, "site-1", &locations).unwrap();

        let ids: Vec<String> = repo
            .list_findings_by_site("site-1")
            .unwrap()
            .into_iter()
            .map(|location| location.finding_id)
            .collect();
        assert_eq!(ids, ["fnd-sherd", "fnd-bone"]);
        assert!(repo.list_findings_by_site("site-2").unwrap().is_empty());
    }
}
