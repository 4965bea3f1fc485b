#[cfg(test)]
mod _tests_kspace_presets {
    use super::super::_tests_log_capture::capture_warnings;
    use super::super::kspace_attributes::Attribute;
    use super::super::kspace_component::{Component, KPoint};
    use super::super::kspace_presets::*;
    use crate::config::Defaults;

    const TOL: f64 = 1e-12;

    fn float(c: &Component) -> f64 {
        match c {
            Component::Float(f) => *f,
            other => panic!("expected a float component, got {:?}", other),
        }
    }

    // ==================== Triangular lattice ====================

    #[test]
    fn test_triangular_points_and_labels() {
        let path = triangular(Some(3), false);

        assert_eq!(
            path.points(),
            &[
                KPoint::new(0, 0, 0),
                KPoint::new(0, 0.5, 0),
                KPoint::new("(/ -3)", "(/ 3)", 0),
                KPoint::new(0, 0, 0),
            ]
        );
        assert!(path.has_labels());
        assert_eq!(path.labels(), vec!["Gamma", "M", "K", "Gamma"]);
        assert_eq!(path.point_count_after_interpolation(), 13);
    }

    #[test]
    fn test_triangular_render() {
        let path = triangular(Some(4), false);
        assert_eq!(
            path.render(),
            "(interpolate 4 (list\n\
             \x20   (vector3 0 0 0)  ;Gamma\n\
             \x20   (vector3 0 0.5 0)  ;M\n\
             \x20   (vector3 (/ -3) (/ 3) 0)  ;K\n\
             \x20   (vector3 0 0 0)  ;Gamma\n\
             ))"
        );
    }

    #[test]
    fn test_triangular_uniform_fallback() {
        let (path, warnings) = capture_warnings(|| triangular_with(Defaults::legacy(), Some(2), true));
        assert!(!path.use_uniform_interpolation());
        assert_eq!(warnings.len(), 1);
        assert!(path.render().starts_with("(interpolate 2 (list\n"));

        let path = triangular(Some(2), true);
        assert!(path.render().starts_with("(kinterpolate-uniform 2 (list\n"));
    }

    #[test]
    fn test_triangular_expands_numerically() {
        let k = triangular(Some(0), false).expand().unwrap();
        assert_eq!(k.len(), 4);
        assert!((k[2].x + 1.0 / 3.0).abs() < TOL);
        assert!((k[2].y - 1.0 / 3.0).abs() < TOL);
    }

    #[test]
    fn test_presets_take_interpolation_from_defaults() {
        let defaults = Defaults::default().with_default_k_interpolation(9);
        assert_eq!(triangular_with(defaults.clone(), None, false).interpolation_count(), 9);
        assert_eq!(rectangular_with(defaults, None, false).interpolation_count(), 9);
        assert_eq!(
            triangular(None, false).interpolation_count(),
            Defaults::default().default_k_interpolation
        );
    }

    // ==================== Rectangular lattice ====================

    #[test]
    fn test_rectangular_points_and_labels() {
        let path = rectangular(Some(0), false);

        assert_eq!(
            path.points(),
            &[
                KPoint::new(0, 0, 0),
                KPoint::new(0.5, 0, 0),
                KPoint::new(0.5, 0.5, 0),
                KPoint::new(0, 0, 0),
            ]
        );
        assert_eq!(path.labels(), vec!["Gamma", "X", "M", "Gamma"]);
        assert_eq!(
            path.render(),
            "(list\n    (vector3 0 0 0)  ;Gamma\n    (vector3 0.5 0 0)  ;X\n    (vector3 0.5 0.5 0)  ;M\n    (vector3 0 0 0)  ;Gamma\n)"
        );
    }

    #[test]
    fn test_rectangular_with_custom_defaults() {
        let path = rectangular_with(Defaults::default(), Some(7), true);
        assert_eq!(path.interpolation_count(), 7);
        assert!(path.use_uniform_interpolation());
        assert_eq!(path.point_count_after_interpolation(), 25);
    }

    // ==================== Rectangular grid ====================

    #[test]
    fn test_grid_ordering() {
        let path = rectangular_grid(3, 2);
        let points = path.points();

        assert_eq!(points.len(), 6);
        let expected_x = [-0.5, 0.0, 0.5, -0.5, 0.0, 0.5];
        let expected_y = [-0.5, -0.5, -0.5, 0.5, 0.5, 0.5];
        for (i, p) in points.iter().enumerate() {
            assert!((float(&p.x) - expected_x[i]).abs() < TOL);
            assert!((float(&p.y) - expected_y[i]).abs() < TOL);
            assert_eq!(p.z, Component::Float(0.0));
        }
    }

    #[test]
    fn test_grid_has_no_interpolation_or_labels() {
        let path = rectangular_grid(4, 5);
        assert_eq!(path.interpolation_count(), 0);
        assert!(!path.use_uniform_interpolation());
        assert!(!path.has_labels());
        assert_eq!(path.point_count_after_interpolation(), 20);
        assert!(path.render().starts_with("(list\n    (vector3 -0.5 -0.5 0.0)\n"));
    }

    #[test]
    fn test_grid_keeps_step_counts() {
        let path = rectangular_grid(3, 2);
        assert_eq!(path.extra("x_steps"), Some(&Attribute::Integer(3)));
        assert_eq!(path.extra("y_steps"), Some(&Attribute::Integer(2)));
        assert!(path.describe().contains("x_steps=3; y_steps=2"));
    }

    #[test]
    fn test_grid_degenerate_steps() {
        assert!(rectangular_grid(0, 5).points().is_empty());

        let single = rectangular_grid(1, 1);
        assert_eq!(single.points(), &[KPoint::new(-0.5, -0.5, 0.0)]);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(-0.5, 0.5, 5), vec![-0.5, -0.25, 0.0, 0.25, 0.5]);
        assert_eq!(linspace(-0.5, 0.5, 1), vec![-0.5]);
        assert!(linspace(-0.5, 0.5, 0).is_empty());
        assert_eq!(*linspace(-0.5, 0.5, 7).last().unwrap(), 0.5);
    }
}
