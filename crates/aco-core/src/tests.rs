//! Unit tests for aco-core primitives.

#[cfg(test)]
mod ids {
    use crate::AntId;

    #[test]
    fn index_roundtrip() {
        let id = AntId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AntId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(AntId(7).to_string(), "AntId(7)");
    }
}

#[cfg(test)]
mod matrix {
    use crate::{AcoError, SymmetricMatrix};

    #[test]
    fn set_writes_both_halves() {
        let mut m = SymmetricMatrix::filled(4, 0.0);
        m.set(1, 3, 2.5).unwrap();
        assert_eq!(m.get(1, 3).unwrap(), 2.5);
        assert_eq!(m.get(3, 1).unwrap(), 2.5);
    }

    #[test]
    fn out_of_bounds_is_index_error() {
        let mut m = SymmetricMatrix::filled(3, 1.0);
        assert_eq!(m.get(0, 3), Err(AcoError::Index { index: 3, node_count: 3 }));
        assert_eq!(m.set(5, 0, 1.0), Err(AcoError::Index { index: 5, node_count: 3 }));
        assert!(m.row(3).is_err());
    }

    #[test]
    fn update_off_diagonal_skips_diagonal() {
        let mut m = SymmetricMatrix::filled(3, 2.0);
        m.update_off_diagonal(|_, _, v| v * 0.5);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 2.0 } else { 1.0 };
                assert_eq!(m.get(i, j).unwrap(), expected);
            }
        }
    }

    #[test]
    fn update_off_diagonal_sees_upper_indices() {
        let mut m = SymmetricMatrix::filled(3, 0.0);
        m.update_off_diagonal(|i, j, _| (i * 10 + j) as f64);
        assert_eq!(m.get(0, 2).unwrap(), 2.0);
        assert_eq!(m.get(2, 0).unwrap(), 2.0);
        assert_eq!(m.get(2, 1).unwrap(), 12.0);
    }
}

#[cfg(test)]
mod problem {
    use crate::{
        AcoError, DistanceProvider, ExplicitMatrix, FnDistance, PlanarInstance, PlanarPoint,
        ProblemModel, SELF_DISTANCE,
    };

    /// Ten points on a line at the triangular numbers x = 0, 1, 3, 6, 10, …
    fn line10() -> ProblemModel {
        let points = (0..10)
            .map(|i| PlanarPoint::new((i * (i + 1) / 2) as f64, 0.0))
            .collect();
        ProblemModel::new(&PlanarInstance::new(points)).unwrap()
    }

    #[test]
    fn distances_are_symmetric() {
        let p = line10();
        for i in 0..10 {
            for j in 0..10 {
                assert_eq!(p.distance(i, j).unwrap(), p.distance(j, i).unwrap());
            }
        }
    }

    #[test]
    fn diagonal_holds_sentinel() {
        let p = line10();
        for i in 0..10 {
            assert_eq!(p.distance(i, i).unwrap(), SELF_DISTANCE);
        }
    }

    #[test]
    fn provider_read_only_above_diagonal() {
        // Lower triangle is garbage; the model must mirror the upper one.
        let f = FnDistance::new(3, |i, j| if i < j { (i + j) as f64 } else { -1.0 });
        let p = ProblemModel::new(&f).unwrap();
        assert_eq!(p.distance(2, 1).unwrap(), 3.0);
        assert_eq!(p.distance(1, 0).unwrap(), 1.0);
    }

    #[test]
    fn nearest_neighbours_sorted_permutation_of_others() {
        let p = line10();
        for i in 0..10 {
            let nn = p.nearest_neighbours(i).unwrap();
            assert_eq!(nn.len(), 9);
            assert!(!nn.contains(&i));
            let mut sorted = nn.to_vec();
            sorted.sort_unstable();
            let others: Vec<usize> = (0..10).filter(|&j| j != i).collect();
            assert_eq!(sorted, others);
            for w in nn.windows(2) {
                assert!(p.distance(i, w[0]).unwrap() <= p.distance(i, w[1]).unwrap());
            }
        }
    }

    #[test]
    fn nearest_neighbours_on_line() {
        let p = line10();
        // Node 4 sits at x = 10; nodes 3, 5, 2, 1, 0, 6 are 4, 5, 7, 9, 10, 11 away.
        assert_eq!(p.nearest_neighbours(4).unwrap(), &[3, 5, 2, 1, 0, 6, 7, 8, 9]);
        assert_eq!(p.nearest_neighbours(0).unwrap(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn equal_distances_keep_index_order() {
        let f = FnDistance::new(4, |_, _| 1.0);
        let p = ProblemModel::new(&f).unwrap();
        assert_eq!(p.nearest_neighbours(2).unwrap(), &[0, 1, 3]);
    }

    #[test]
    fn out_of_range_is_index_error() {
        let p = line10();
        assert_eq!(p.distance(0, 10), Err(AcoError::Index { index: 10, node_count: 10 }));
        assert_eq!(p.distance(11, 0), Err(AcoError::Index { index: 11, node_count: 10 }));
        assert!(matches!(p.nearest_neighbours(10), Err(AcoError::Index { .. })));
    }

    #[test]
    fn negative_or_nan_distance_rejected() {
        let neg = FnDistance::new(3, |_, _| -2.0);
        assert!(matches!(ProblemModel::new(&neg), Err(AcoError::Range(_))));
        let nan = FnDistance::new(3, |_, _| f64::NAN);
        assert!(matches!(ProblemModel::new(&nan), Err(AcoError::Range(_))));
        let inf = FnDistance::new(2, |_, _| f64::INFINITY);
        assert!(matches!(ProblemModel::new(&inf), Err(AcoError::Range(_))));
    }

    #[test]
    fn explicit_matrix_must_be_square() {
        let rows = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(matches!(ExplicitMatrix::new(rows), Err(AcoError::Range(_))));

        let ok = ExplicitMatrix::new(vec![vec![0.0, 4.0], vec![4.0, 0.0]]).unwrap();
        assert_eq!(ok.node_count(), 2);
        let p = ProblemModel::new(&ok).unwrap();
        assert_eq!(p.distance(0, 1).unwrap(), 4.0);
    }

    #[test]
    fn tour_length_includes_closing_edge() {
        let p = line10();
        // 0 → 1 → 2 → 0 : 1 + 2 + 3
        assert_eq!(p.tour_length(&[0, 1, 2]).unwrap(), 6.0);
        assert_eq!(p.tour_length(&[]).unwrap(), 0.0);
        assert_eq!(p.tour_length(&[4]).unwrap(), 0.0);
        assert!(p.tour_length(&[0, 12]).is_err());
    }
}

#[cfg(test)]
mod planar {
    use crate::{DistanceProvider, PlanarInstance, PlanarPoint};

    #[test]
    fn three_four_five() {
        let a = PlanarPoint::new(0.0, 0.0);
        let b = PlanarPoint::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn euc_2d_rounds_to_nearest_integer() {
        let points = vec![
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(1.0, 1.0),  // √2 ≈ 1.414 → 1
            PlanarPoint::new(1.5, 1.5),  // √4.5 ≈ 2.121 → 2
            PlanarPoint::new(2.5, 0.0),  // 2.5 → 3
        ];
        let rounded = PlanarInstance::euc_2d(points.clone());
        assert_eq!(rounded.distance(0, 1), 1.0);
        assert_eq!(rounded.distance(0, 2), 2.0);
        assert_eq!(rounded.distance(0, 3), 3.0);

        let exact = PlanarInstance::new(points);
        assert!((exact.distance(0, 1) - 2f64.sqrt()).abs() < 1e-12);
    }
}

#[cfg(test)]
mod config {
    use crate::{AcoError, ColonyConfig, SelectorKind};

    #[test]
    fn default_is_valid() {
        let cfg = ColonyConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.alpha, 1.0);
        assert_eq!(cfg.selector, SelectorKind::RouletteWheel);
    }

    #[test]
    fn evaporation_rate_bounds() {
        let mut cfg = ColonyConfig::default();
        cfg.evaporation_rate = 0.0;
        assert!(cfg.validate().is_ok());
        cfg.evaporation_rate = 1.0;
        assert!(matches!(cfg.validate(), Err(AcoError::Range(_))));
        cfg.evaporation_rate = -0.1;
        assert!(matches!(cfg.validate(), Err(AcoError::Range(_))));
    }

    #[test]
    fn exponents_must_be_non_negative() {
        let cfg = ColonyConfig { beta: -1.0, ..ColonyConfig::default() };
        assert!(matches!(cfg.validate(), Err(AcoError::Range(_))));
        let cfg = ColonyConfig { alpha: f64::NAN, ..ColonyConfig::default() };
        assert!(matches!(cfg.validate(), Err(AcoError::Range(_))));
    }

    #[test]
    fn zero_threads_rejected() {
        let cfg = ColonyConfig { num_threads: Some(0), ..ColonyConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn selector_tags_parse() {
        assert_eq!("random".parse::<SelectorKind>().unwrap(), SelectorKind::Random);
        assert_eq!("Roulette_Wheel".parse::<SelectorKind>().unwrap(), SelectorKind::RouletteWheel);
        assert_eq!("roulettewheel".parse::<SelectorKind>().unwrap(), SelectorKind::RouletteWheel);
        assert_eq!("nearest-neighbor".parse::<SelectorKind>().unwrap(), SelectorKind::NearestNeighbour);
    }

    #[test]
    fn display_parses_back() {
        for kind in SelectorKind::ALL {
            assert_eq!(kind.to_string().parse::<SelectorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_tag_is_range_error() {
        assert!(matches!("max-min".parse::<SelectorKind>(), Err(AcoError::Range(_))));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AntId, AntRng, AntRngs, ColonyRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AntRng::new(12345, AntId(0));
        let mut r2 = AntRng::new(12345, AntId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_ants_differ() {
        let mut r0 = AntRng::new(1, AntId(0));
        let mut r1 = AntRng::new(1, AntId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent ants should diverge");
    }

    #[test]
    fn ant_rngs_match_individually_seeded() {
        let mut rngs = AntRngs::new(4, 9);
        assert_eq!(rngs.len(), 4);
        let mut lone = AntRng::new(9, AntId(2));
        let a: u64 = rngs.get_mut(AntId(2)).random();
        let b: u64 = lone.random();
        assert_eq!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = ColonyRng::new(0);
        for _ in 0..1000 {
            let v: usize = rng.gen_range(0..7);
            assert!(v < 7);
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AntRng::new(0, AntId(0));
        let empty: [usize; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5]), Some(&5));
    }

    #[test]
    fn children_are_reproducible() {
        let mut a = ColonyRng::new(3);
        let mut b = ColonyRng::new(3);
        let x: u64 = a.child(1).random();
        let y: u64 = b.child(1).random();
        assert_eq!(x, y);
    }
}
