//! Unit tests for otto-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance_to_self() {
        let p = GeoPoint::new(60.1699, 24.9384);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(60.0, 24.0);
        let b = GeoPoint::new(61.0, 24.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(60.1699, 24.9384);
        let b = GeoPoint::new(65.0121, 25.4651);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-9);
    }

    #[test]
    fn non_negative() {
        let pts = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(60.1699, 24.9384),
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(90.0, 0.0),
            GeoPoint::new(-90.0, 180.0),
        ];
        for a in pts {
            for b in pts {
                assert!(a.distance_km(b) >= 0.0, "{a} → {b}");
            }
        }
    }

    #[test]
    fn pole_to_equator() {
        // Quarter of the Earth's circumference, ~10 007.5 km.
        let pole = GeoPoint::new(90.0, 0.0);
        let equator = GeoPoint::new(0.0, 0.0);
        let d = pole.distance_km(equator);
        assert!((d - 10_007.5).abs() < 100.0, "got {d}");
    }

    #[test]
    fn antipodal_does_not_panic_or_nan() {
        // Stresses the a ≤ 1 clamp.
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let d = a.distance_km(b);
        assert!(d.is_finite());
        assert!((d - 20_015.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn range_validation() {
        assert!(GeoPoint::new(60.0, 24.0).is_valid());
        assert!(GeoPoint::new(90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(90.1, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(60.1699, 24.9384).to_string(), "(60.169900, 24.938400)");
    }
}

#[cfg(test)]
mod terminal {
    use crate::{GeoPoint, Terminal};

    #[test]
    fn display_is_postal_address() {
        let t = Terminal::new(
            GeoPoint::new(60.1699, 24.9384),
            "Mannerheimintie 1",
            "00100",
            "Helsinki",
        );
        assert_eq!(t.to_string(), "Mannerheimintie 1, 00100 Helsinki");
    }
}
