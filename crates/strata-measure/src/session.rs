use chrono::Utc;
use strata_core::Coordinate;
use strata_core::entities::Measurement;
use strata_core::enums::{MeasurementMode, SessionState};
use strata_core::errors::CoreError;
use strata_core::ids::{PREFIX_MEASUREMENT, generate_id};
use strata_geo::distinct_vertices;

use crate::compute::{format_label, measure_value};
use crate::error::MeasureError;

/// Click accumulator for one measurement at a time.
///
/// ```text
/// idle ──start──▶ collecting ──add_point (threshold) / finish──▶ complete ──▶ idle
///                 collecting ──cancel──▶ idle
/// ```
///
/// `complete` is transient: the measurement is emitted from the call that
/// completed the session, and the session is back to `idle` when it returns.
#[derive(Debug, Clone, Default)]
pub struct MeasurementSession {
    state: SessionState,
    mode: Option<MeasurementMode>,
    points: Vec<Coordinate>,
    site_id: Option<String>,
}

impl MeasurementSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose measurements are tagged with `site_id`.
    #[must_use]
    pub fn for_site(site_id: impl Into<String>) -> Self {
        Self {
            site_id: Some(site_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn mode(&self) -> Option<MeasurementMode> {
        self.mode
    }

    #[must_use]
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Begin collecting points for `mode`.
    ///
    /// Starting while already collecting discards the previous points, the
    /// same as switching tools mid-measurement.
    pub fn start(&mut self, mode: MeasurementMode) {
        if self.state == SessionState::Collecting {
            tracing::debug!(
                previous = ?self.mode,
                discarded = self.points.len(),
                "restarting measurement session"
            );
        }
        self.points.clear();
        self.mode = Some(mode);
        self.state = SessionState::Collecting;
        tracing::debug!(%mode, "measurement session collecting");
    }

    /// Append a point. Returns the measurement when this point completes the
    /// session (1st point for point mode, 2nd for distance and bearing).
    ///
    /// # Errors
    ///
    /// `MeasureError::NotCollecting` outside a session, or
    /// `MeasureError::Core` for an out-of-range coordinate.
    pub fn add_point(&mut self, point: Coordinate) -> Result<Option<Measurement>, MeasureError> {
        let mode = self.collecting_mode()?;
        if !point.is_valid() {
            return Err(CoreError::Validation(format!(
                "measurement point ({point}) is not a valid WGS84 coordinate"
            ))
            .into());
        }

        self.points.push(point);
        if mode.completes_at() == Some(self.points.len()) {
            return self.complete(mode).map(Some);
        }
        Ok(None)
    }

    /// Close the session with the points collected so far.
    ///
    /// This is how area measurements end; polygons have no fixed vertex count.
    ///
    /// # Errors
    ///
    /// `MeasureError::NotCollecting` outside a session, or
    /// `MeasureError::InsufficientPoints` below the mode's minimum. Area counts
    /// distinct vertices, so a repeated click does not make a polygon. The
    /// session keeps collecting after an insufficient-points failure.
    pub fn finish(&mut self) -> Result<Measurement, MeasureError> {
        let mode = self.collecting_mode()?;
        let required = mode.min_points();
        let actual = match mode {
            MeasurementMode::Area => distinct_vertices(&self.points),
            _ => self.points.len(),
        };
        if actual < required {
            return Err(MeasureError::InsufficientPoints {
                mode,
                required,
                actual,
            });
        }
        self.complete(mode)
    }

    /// Abandon the session from any state. No measurement is emitted.
    pub fn cancel(&mut self) {
        if self.state == SessionState::Collecting {
            tracing::debug!(
                mode = ?self.mode,
                discarded = self.points.len(),
                "measurement session cancelled"
            );
        }
        self.reset();
    }

    /// Run a whole session over `points`: start, add every point, then finish
    /// if the mode did not close by itself.
    ///
    /// # Errors
    ///
    /// `MeasureError::TooManyPoints` when the mode closes before all points are
    /// consumed, plus any error from [`add_point`](Self::add_point) or
    /// [`finish`](Self::finish).
    pub fn measure(
        &mut self,
        mode: MeasurementMode,
        points: &[Coordinate],
    ) -> Result<Measurement, MeasureError> {
        let result = self.run(mode, points);
        if result.is_err() {
            self.reset();
        }
        result
    }

    fn run(&mut self, mode: MeasurementMode, points: &[Coordinate]) -> Result<Measurement, MeasureError> {
        self.start(mode);
        for (index, point) in points.iter().enumerate() {
            if let Some(measurement) = self.add_point(*point)? {
                if index + 1 < points.len() {
                    return Err(MeasureError::TooManyPoints {
                        mode,
                        expected: index + 1,
                        actual: points.len(),
                    });
                }
                return Ok(measurement);
            }
        }
        self.finish()
    }

    fn collecting_mode(&self) -> Result<MeasurementMode, MeasureError> {
        match (self.state, self.mode) {
            (SessionState::Collecting, Some(mode)) => Ok(mode),
            (state, _) => Err(MeasureError::NotCollecting { state }),
        }
    }

    fn complete(&mut self, mode: MeasurementMode) -> Result<Measurement, MeasureError> {
        self.state = SessionState::Complete;
        let points = std::mem::take(&mut self.points);
        let value = measure_value(mode, &points);

        let id = match generate_id(PREFIX_MEASUREMENT) {
            Ok(id) => id,
            Err(error) => {
                self.reset();
                return Err(error.into());
            }
        };

        let measurement = Measurement {
            id,
            kind: mode,
            label: format_label(mode, value, &points),
            unit: mode.unit().to_string(),
            points,
            value,
            created_at: Utc::now(),
            site_id: self.site_id.clone(),
        };
        tracing::info!(id = %measurement.id, %mode, value, "measurement complete");

        self.reset();
        Ok(measurement)
    }

    fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.mode = None;
        self.points.clear();
    }
}
