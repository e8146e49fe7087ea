//! Cálculo geográfico y de tarifa
//!
//! Distancia de gran círculo (fórmula haversine) entre dos coordenadas
//! y conversión lineal distancia → tarifa.

/// Radio de la Tierra en kilómetros.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calcula la distancia de gran círculo entre dos coordenadas
/// `(latitud, longitud)` en grados decimales, en kilómetros.
///
/// Es simétrica: `distance_km(a, b) == distance_km(b, a)`.
pub fn distance_km(origin: (f64, f64), destination: (f64, f64)) -> f64 {
    let (lat1, lon1) = (origin.0.to_radians(), origin.1.to_radians());
    let (lat2, lon2) = (destination.0.to_radians(), destination.1.to_radians());

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Tarifa lineal en USD: `rate_per_km × distance_km`.
///
/// No se hace conversión de moneda, a pesar del nombre.
pub fn fare_usd(distance_km: f64, rate_per_km: f64) -> f64 {
    rate_per_km * distance_km
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAKARTA: (f64, f64) = (-6.1256, 106.6559);
    const SINGAPORE: (f64, f64) = (1.3644, 103.9915);

    #[test]
    fn test_distance_symmetric() {
        let ab = distance_km(JAKARTA, SINGAPORE);
        let ba = distance_km(SINGAPORE, JAKARTA);

        let relative = (ab - ba).abs() / ab;
        assert!(relative < 1e-9, "asimetría inesperada: {} vs {}", ab, ba);
    }

    #[test]
    fn test_distance_same_point_is_zero() {
        assert_eq!(distance_km(JAKARTA, JAKARTA), 0.0);
    }

    #[test]
    fn test_distance_jakarta_singapore() {
        let distance = distance_km(JAKARTA, SINGAPORE);
        assert!(
            distance > 883.0 && distance < 890.0,
            "distancia inesperada: {}",
            distance
        );
    }

    #[test]
    fn test_fare_linear() {
        let distance = distance_km(JAKARTA, SINGAPORE);
        let rate = 0.12;

        let single = fare_usd(distance, rate);
        let double = fare_usd(2.0 * distance, rate);

        assert!((double - 2.0 * single).abs() < 1e-9);
    }

    #[test]
    fn test_fare_zero_distance() {
        assert_eq!(fare_usd(0.0, 0.12), 0.0);
    }
}
