//! Reverse resolution: which higher-level entities reference this one.
//!
//! A depth-gated walk over the finite tier machine
//! `Function < SkillTd < Servant`. Each tier gate is `depth >= tier`; the
//! servant tier is terminal. All three payload shapes traverse identically;
//! they differ only in what is materialized per discovered neighbor. Kinds
//! with no relation for the direction are a no-op, not an error.

pub(crate) mod basic;
pub(crate) mod ids;
pub(crate) mod nice;
pub(crate) mod raw;

use tracing::warn;

use gamedata_types::ResolveError;

use crate::config::EngineConfig;

/// Reject a fan-out set that exceeds the defensive cap.
pub(crate) fn check_fanout(cfg: &EngineConfig, found: usize) -> Result<(), ResolveError> {
    if found > cfg.max_reverse_fanout {
        warn!(
            found,
            limit = cfg.max_reverse_fanout,
            "reverse fan-out over cap, rejecting"
        );
        return Err(ResolveError::ExcessiveFanout {
            found,
            limit: cfg.max_reverse_fanout,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fanout_within_cap_passes() {
        let cfg = EngineConfig {
            max_reverse_fanout: 3,
        };
        assert!(check_fanout(&cfg, 3).is_ok());
    }

    #[test]
    fn fanout_over_cap_is_rejected() {
        let cfg = EngineConfig {
            max_reverse_fanout: 3,
        };
        let err = check_fanout(&cfg, 4).unwrap_err();
        match err {
            ResolveError::ExcessiveFanout { found, limit } => {
                assert_eq!((found, limit), (4, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
