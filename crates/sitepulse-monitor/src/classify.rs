//! Status classifier — pure mapping from observation to status.

use sitepulse_state::Status;

use crate::probe::Observation;

/// Classify one observation against the site's expected status code.
///
/// The expected code wins over conventional HTTP semantics: a site
/// configured to answer 301 is `Up` on 301 and `Degraded` on 200.
pub fn classify(observation: &Observation, expected_status: u16) -> Status {
    match observation {
        Observation::Reachable { code } if *code == expected_status => Status::Up,
        Observation::Reachable { .. } => Status::Degraded,
        Observation::Unreachable { .. } => Status::Down,
    }
}
