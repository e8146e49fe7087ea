//! Muestreo uniforme de fechas
//!
//! Parseo de fechas en dos formatos (`YYYY-MM-DD` y `YYYYMMDD`) y
//! muestreo uniforme de una fecha dentro de un rango inclusivo de días,
//! opcionalmente con hora/minuto/segundo también uniformes.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

use crate::utils::errors::AppError;

/// Parsea una fecha en formato `YYYY-MM-DD`, con `YYYYMMDD` como fallback.
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y%m%d"))
        .map_err(|_| AppError::DateParse(value.to_string()))
}

/// Muestrea una fecha uniforme del rango inclusivo `[start, end]`.
///
/// El offset de días se sortea uniforme en `[0, días(start, end)]`.
/// Si `include_time`, hora, minuto y segundo se sortean uniformes e
/// independientes; si no, el tiempo queda truncado a las 00:00:00.
pub fn random_date(
    start: NaiveDate,
    end: NaiveDate,
    include_time: bool,
    rng: &mut impl Rng,
) -> Result<NaiveDateTime, AppError> {
    if start > end {
        return Err(AppError::InvalidRange(format!(
            "la fecha inicial {} es posterior a la final {}",
            start, end
        )));
    }

    let span_days = (end - start).num_days();
    let day = start + Duration::days(rng.gen_range(0..=span_days));

    let time = if include_time {
        NaiveTime::from_hms_opt(
            rng.gen_range(0..24),
            rng.gen_range(0..60),
            rng.gen_range(0..60),
        )
        .unwrap_or(NaiveTime::MIN)
    } else {
        NaiveTime::MIN
    };

    Ok(day.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_date_dashed() {
        let date = parse_date("2024-03-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_date_compact_fallback() {
        let date = parse_date("20240315").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(matches!(parse_date("15/03/2024"), Err(AppError::DateParse(_))));
        assert!(matches!(parse_date("no-fecha"), Err(AppError::DateParse(_))));
    }

    #[test]
    fn test_random_date_within_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        for _ in 0..500 {
            let sampled = random_date(start, end, true, &mut rng).unwrap();
            assert!(sampled.date() >= start, "fecha fuera de rango: {}", sampled);
            assert!(sampled.date() <= end, "fecha fuera de rango: {}", sampled);
        }
    }

    #[test]
    fn test_random_date_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let sampled = random_date(day, day, false, &mut rng).unwrap();
        assert_eq!(sampled, day.and_time(NaiveTime::MIN));
    }

    #[test]
    fn test_random_date_inverted_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let result = random_date(start, end, true, &mut rng);
        assert!(matches!(result, Err(AppError::InvalidRange(_))));
    }

    #[test]
    fn test_random_date_samples_whole_range() {
        // Con suficientes sorteos, ambos extremos del rango inclusivo aparecen
        let mut rng = StdRng::seed_from_u64(99);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();

        let mut seen_start = false;
        let mut seen_end = false;
        for _ in 0..200 {
            let sampled = random_date(start, end, false, &mut rng).unwrap();
            seen_start |= sampled.date() == start;
            seen_end |= sampled.date() == end;
        }
        assert!(seen_start && seen_end);
    }
}
