use strata_core::entities::{BinningReport, GridSystem};

/// Anything a layer can draw from. Only its size matters to the composer.
pub trait LayerSource {
    fn feature_count(&self) -> usize;
}

impl<T> LayerSource for [T] {
    fn feature_count(&self) -> usize {
        self.len()
    }
}

impl<T> LayerSource for Vec<T> {
    fn feature_count(&self) -> usize {
        self.len()
    }
}

impl LayerSource for GridSystem {
    fn feature_count(&self) -> usize {
        self.cells.len()
    }
}

/// Counts cells holding at least one find.
impl LayerSource for BinningReport {
    fn feature_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.finding_count > 0).count()
    }
}
