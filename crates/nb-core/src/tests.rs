//! Unit tests for nb-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(AgentId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn successor_wraps_around() {
        assert_eq!(AgentId(0).successor(4), AgentId(1));
        assert_eq!(AgentId(2).successor(4), AgentId(3));
        assert_eq!(AgentId(3).successor(4), AgentId(0));
    }

    #[test]
    fn lone_agent_pursues_itself() {
        assert_eq!(AgentId(0).successor(1), AgentId(0));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod point {
    use crate::Point;

    #[test]
    fn norm_and_distance() {
        assert_eq!(Point::new(3.0, 4.0).norm(), 5.0);
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn unit_towards_has_unit_length() {
        let u = Point::new(0.0, 0.0).unit_towards(Point::new(0.0, 20.0));
        assert_eq!(u, Point::new(0.0, 1.0));

        let u = Point::new(-2.0, 7.5).unit_towards(Point::new(13.0, -1.25));
        assert!((u.norm() - 1.0).abs() < 1e-12, "got {}", u.norm());
    }

    #[test]
    fn unit_towards_coincident_is_zero() {
        let p = Point::new(18.0, 2.0);
        assert_eq!(p.unit_towards(p), Point::ZERO);
    }

    #[test]
    fn finiteness() {
        assert!(Point::new(0.0, -1e300).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn arithmetic() {
        let p = Point::new(1.0, 2.0) + Point::new(0.5, -1.0) * 2.0;
        assert_eq!(p, Point::new(2.0, 0.0));
        assert_eq!(p - Point::new(2.0, 0.0), Point::ZERO);
        assert_eq!(Point::from((3.0, 4.0)), Point::new(3.0, 4.0));
    }
}

#[cfg(test)]
mod step {
    use crate::{AgentId, ConfigError, SimConfig, Step, DEFAULT_DT, DEFAULT_STEPS};

    #[test]
    fn step_ordering_and_display() {
        assert!(Step::ZERO < Step(1));
        assert_eq!(Step(10).min(Step(4)), Step(4));
        assert_eq!(Step(4).to_string(), "S4");
    }

    #[test]
    fn default_is_classic_four_bug_run() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.steps, DEFAULT_STEPS);
        assert_eq!(cfg.dt, DEFAULT_DT);
        assert_eq!(cfg.speeds, vec![1.0; 4]);
        assert_eq!(cfg.final_step(), Step(999));
        assert!(cfg.validate(4).is_ok());
    }

    #[test]
    fn with_stationary_zeroes_one_speed() {
        let cfg = SimConfig::uniform(4, 1.0).with_stationary(AgentId(3));
        assert_eq!(cfg.speeds, vec![1.0, 1.0, 1.0, 0.0]);
        assert!(cfg.validate(4).is_ok());
    }

    #[test]
    fn time_at_scales_by_dt() {
        let cfg = SimConfig::uniform(2, 1.0).with_dt(0.25);
        assert_eq!(cfg.time_at(Step(0)), 0.0);
        assert_eq!(cfg.time_at(Step(8)), 2.0);
    }

    #[test]
    fn rejects_zero_steps() {
        let cfg = SimConfig::uniform(4, 1.0).with_steps(0);
        assert_eq!(cfg.validate(4), Err(ConfigError::ZeroSteps));
    }

    #[test]
    fn rejects_step_counts_whose_buffer_overflows() {
        for steps in [usize::MAX, usize::MAX / 2, usize::MAX / 8] {
            let cfg = SimConfig::uniform(4, 1.0).with_steps(steps);
            assert_eq!(
                cfg.validate(4),
                Err(ConfigError::BufferTooLarge { steps, agents: 4 })
            );
        }
    }

    #[test]
    fn rejects_bad_dt() {
        for dt in [0.0, -0.05, f64::NAN, f64::INFINITY] {
            let cfg = SimConfig::uniform(4, 1.0).with_dt(dt);
            assert!(
                matches!(cfg.validate(4), Err(ConfigError::InvalidDt(_))),
                "dt {dt} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_negative_speed() {
        let mut cfg = SimConfig::uniform(4, 1.0);
        cfg.speeds[2] = -1.0;
        assert_eq!(
            cfg.validate(4),
            Err(ConfigError::InvalidSpeed { agent: AgentId(2), speed: -1.0 })
        );
    }

    #[test]
    fn rejects_speed_count_mismatch() {
        let cfg = SimConfig::uniform(3, 1.0);
        assert!(matches!(
            cfg.validate(4),
            Err(ConfigError::AgentCountMismatch { expected: 4, got: 3, .. })
        ));
    }

    #[test]
    fn rejects_empty_formation() {
        let cfg = SimConfig::uniform(0, 1.0);
        assert_eq!(cfg.validate(0), Err(ConfigError::NoAgents));
    }
}
