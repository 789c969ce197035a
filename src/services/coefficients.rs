use crate::models::Metrics;

/// Weight of one unit of each counter in an employee's total result.
pub const COEFFICIENTS: Metrics = Metrics {
    dc_collected: 1.40,
    store_collected: 2.80,
    dc_moved: 3.45,
    placed: 1.59,
    weight_placement: 0.14,
    packing_order: 0.28,
};

impl Metrics {
    /// Multiplies each counter by the matching field of `coefficients`.
    pub fn weighted(&self, coefficients: &Metrics) -> Metrics {
        Metrics {
            dc_collected: self.dc_collected * coefficients.dc_collected,
            store_collected: self.store_collected * coefficients.store_collected,
            dc_moved: self.dc_moved * coefficients.dc_moved,
            placed: self.placed * coefficients.placed,
            weight_placement: self.weight_placement * coefficients.weight_placement,
            packing_order: self.packing_order * coefficients.packing_order,
        }
    }

    pub fn total(&self) -> f64 {
        self.dc_collected
            + self.store_collected
            + self.dc_moved
            + self.placed
            + self.weight_placement
            + self.packing_order
    }
}
