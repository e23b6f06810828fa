//! Unit tests for evac-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ExitId, PersonId};

    #[test]
    fn index_roundtrip() {
        let id = PersonId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PersonId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn exit_ids_reject_overflow() {
        assert!(ExitId::try_from(70_000usize).is_err());
        assert_eq!(ExitId::try_from(3usize).unwrap().index(), 3);
    }

    #[test]
    fn display() {
        assert_eq!(PersonId(7).to_string(), "PersonId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Cell, Offset};

    #[test]
    fn distances() {
        let a = Cell::new(0, 0);
        assert_eq!(a.distance_sq(Cell::new(3, 4)), 25);
        assert_eq!(a.distance(Cell::new(3, 4)), 5.0);
        assert_eq!(a.distance(Cell::new(2, 0)), 2.0);
    }

    #[test]
    fn within_is_strict() {
        let a = Cell::new(0, 0);
        assert!(a.within(Cell::new(2, 2), 3.0)); // sqrt(8) < 3
        assert!(!a.within(Cell::new(3, 0), 3.0));
    }

    #[test]
    fn toward_is_sign_quantized() {
        let from = Cell::new(5, 5);
        assert_eq!(Offset::toward(from, Cell::new(9, 1)), Offset { dx: 1, dy: -1 });
        assert_eq!(Offset::toward(from, Cell::new(5, 0)), Offset { dx: 0, dy: -1 });
        assert!(Offset::toward(from, from).is_zero());
    }

    #[test]
    fn neighborhood_covers_three_by_three() {
        let center = Cell::new(1, 1);
        let mut cells: Vec<Cell> = Offset::NEIGHBORHOOD.iter().map(|&o| center + o).collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&center));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, -1).to_string(), "(3, -1)");
    }
}

#[cfg(test)]
mod time {
    use crate::Timestep;

    #[test]
    fn arithmetic() {
        let t = Timestep(10);
        assert_eq!(t.next(), Timestep(11));
        assert!(t < t.next());
        assert_eq!(t.to_string(), "T10");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: i32 = r1.gen_range(0..1_000);
            let b: i32 = r2.gen_range(0..1_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_differ() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: Vec<u64> = (0..8).map(|_| c0.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..8).map(|_| c1.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.0), "clamped to 1");
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(3);
        let mut v: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut v);
        v.sort();
        assert_eq!(v, (0..20).collect::<Vec<_>>());
    }
}

#[cfg(test)]
mod config {
    use crate::{Cell, EvacError, EvacParams, SimConfig};

    fn base() -> SimConfig {
        SimConfig::new(20, 20, 10, 3, 5, vec![Cell::new(10, 0), Cell::new(0, 10)])
    }

    #[test]
    fn default_config_is_valid() {
        base().validate().unwrap();
    }

    #[test]
    fn default_params_match_model() {
        let p = EvacParams::default();
        assert_eq!(p.initial_health, 200.0);
        assert_eq!(p.congestion_radius, 10.0);
        assert_eq!(p.spread_probability, 0.2);
        assert_eq!(p.bottleneck_threshold, 2);
    }

    #[test]
    fn zero_dimension_rejected() {
        let mut cfg = base();
        cfg.width = 0;
        assert!(matches!(cfg.validate(), Err(EvacError::InvalidConfiguration(_))));
    }

    #[test]
    fn exit_out_of_bounds_rejected() {
        let mut cfg = base();
        cfg.exits.push(Cell::new(20, 0));
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn duplicate_exit_rejected() {
        let mut cfg = base();
        cfg.exits.push(Cell::new(10, 0));
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn too_many_obstacles_rejected() {
        let mut cfg = SimConfig::new(2, 2, 0, 0, 4, vec![Cell::new(0, 0)]);
        assert!(cfg.validate().is_err());
        cfg.obstacle_count = 3;
        cfg.validate().unwrap();
    }

    #[test]
    fn bad_params_rejected() {
        let mut cfg = base();
        cfg.params.spread_probability = 1.5;
        assert!(cfg.validate().is_err());

        let mut cfg = base();
        cfg.params.calm_below = 8;
        assert!(cfg.validate().is_err());

        let mut cfg = base();
        cfg.params.initial_health = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn error_message_names_problem() {
        let mut cfg = base();
        cfg.height = -3;
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.starts_with("invalid configuration"), "{msg}");
        assert!(msg.contains("20x-3"), "{msg}");
    }
}
