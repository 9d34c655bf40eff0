//! Absorption / destruction policy.
//!
//! Run once per render tick, after positions have been updated. Distances are
//! in meters and radii in scene units, so radii are scaled by the length
//! scale before comparing. Destruction sets the display radius to 0 and is
//! terminal until the next reset.

use tracing::info;

use crate::simulation::states::{distance, distance_to_origin, BodyId, System};

/// A body absorbed during one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Absorption {
    pub body: BodyId,
    pub absorbed_by: BodyId,
}

/// Check every active body and destroy the ones that hit something.
///
/// - a planet is absorbed by the Star once its center is within the sum of
///   both radii: `d <= (r_star + r_planet) * length_scale`
/// - the free object is absorbed once its center is within the radius of an
///   active planet or of the Star: `d <= r_other * length_scale`. Planets are
///   checked innermost first, the Star last; the first hit wins.
pub fn evaluate_absorption(sys: &mut System, length_scale: f64) -> Vec<Absorption> {
    let mut events = Vec::new();
    let star_radius = sys.star.display_radius();

    for id in BodyId::PLANETS {
        let body = sys.body_mut(id);
        if !body.is_active() {
            continue;
        }
        let d = distance_to_origin(&body.position());
        if d <= (star_radius + body.display_radius()) * length_scale {
            body.destroy();
            info!(body = %id, distance = d, "absorbed by the star");
            events.push(Absorption { body: id, absorbed_by: BodyId::Star });
        }
    }

    if sys.body(BodyId::FreeObject).is_active() {
        let at = sys.body(BodyId::FreeObject).position();

        let hit = BodyId::PLANETS
            .iter()
            .chain(std::iter::once(&BodyId::Star))
            .copied()
            .find(|&other| {
                let target = sys.body(other);
                target.is_active()
                    && distance(&at, &sys.registry.get(other)) <= target.display_radius() * length_scale
            });

        if let Some(other) = hit {
            sys.body_mut(BodyId::FreeObject).destroy();
            info!(absorbed_by = %other, "free object destroyed");
            events.push(Absorption { body: BodyId::FreeObject, absorbed_by: other });
        }
    }

    events
}
