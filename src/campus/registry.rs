use ahash::AHashMap;
use geo::Point;

use crate::geom::CentroidMethod;
use crate::layers::Feature;
use super::campus::Campus;

/// Unique campuses built from university features, sorted by name.
#[derive(Debug, Clone, Default)]
pub struct CampusRegistry {
    campuses: Vec<Campus>,
}

impl CampusRegistry {
    /// Group features by trimmed `name` and derive one centroid per group.
    ///
    /// Unnamed features are dropped. A group whose members all lack a centroid
    /// is dropped as well, so every listed campus can be selected.
    pub fn build(features: &[Feature], method: CentroidMethod) -> Self {
        let mut order: Vec<String> = Vec::new();
        let mut groups: AHashMap<String, Vec<Feature>> = AHashMap::new();

        for feature in features {
            let Some(name) = feature.prop_str("name").map(str::trim).filter(|s| !s.is_empty()) else {
                continue;
            };
            groups.entry(name.to_string())
                .or_insert_with(|| { order.push(name.to_string()); Vec::new() })
                .push(feature.clone());
        }

        let mut campuses: Vec<Campus> = order.into_iter()
            .filter_map(|name| {
                let buildings = groups.remove(&name)?;
                let centroid = mean_centroid(&buildings, method);
                if centroid.is_none() {
                    log::debug!("campus '{}' has no computable centroid, skipping", name);
                }
                Some(Campus::new(name, buildings, centroid?))
            })
            .collect();

        campuses.sort_by(|a, b| {
            a.name().to_lowercase().cmp(&b.name().to_lowercase())
                .then_with(|| a.name().cmp(b.name()))
        });

        log::info!("built {} campuses from {} university features", campuses.len(), features.len());
        Self { campuses }
    }

    /// Get the number of campuses.
    #[inline] pub fn len(&self) -> usize { self.campuses.len() }

    /// Check if there are no campuses.
    #[inline] pub fn is_empty(&self) -> bool { self.campuses.is_empty() }

    /// Get the campuses in display order.
    #[inline] pub fn campuses(&self) -> &[Campus] { &self.campuses }

    /// Iterate over campus names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.campuses.iter().map(Campus::name)
    }

    /// Exact match on the cleaned campus name.
    pub fn find_by_name(&self, name: &str) -> Option<&Campus> {
        self.campuses.iter().find(|campus| campus.name() == name)
    }
}

/// Mean of the members' centroids, skipping members without one.
fn mean_centroid(buildings: &[Feature], method: CentroidMethod) -> Option<Point<f64>> {
    let (sx, sy, n) = buildings.iter()
        .filter_map(|building| building.centroid(method))
        .fold((0.0, 0.0, 0usize), |(sx, sy, n), c| (sx + c.x(), sy + c.y(), n + 1));

    (n > 0).then(|| Point::new(sx / n as f64, sy / n as f64))
}
