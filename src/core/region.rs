// SymptomLens - core/region.rs
//
// Body-region filter over the symptom catalog.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::Symptom;
use crate::util::constants::WHOLE_REGION;

/// Indices of catalog symptoms whose region list contains `region` exactly.
///
/// Returns indices into `catalog` rather than copies so the chip panel can
/// render straight from the catalog. Unknown tokens yield an empty list.
pub fn filter_by_region(catalog: &[Symptom], region: &str) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, s)| s.regions.iter().any(|r| r == region))
        .map(|(idx, _)| idx)
        .collect()
}

/// Distinct region tokens in the catalog, in first-seen order, excluding the
/// whole-body token (it has its own hotspot).
pub fn known_regions(catalog: &[Symptom]) -> Vec<String> {
    let mut regions: Vec<String> = Vec::new();
    for region in catalog.iter().flat_map(|s| s.regions.iter()) {
        if region != WHOLE_REGION && !regions.contains(region) {
            regions.push(region.clone());
        }
    }
    regions
}
