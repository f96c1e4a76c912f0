//! End-to-end checks of the full pipeline against reference values.

use nadi_rs::*;

const LON_TOL: f64 = 1e-6;

struct Golden {
    date: &'static str,
    time: &'static str,
    offset: &'static str,
    jd: f64,
    sidereal: f64,
    nakshatra: Nakshatra,
    index: u8,
    pada: u8,
    nadi: Nadi,
}

const GOLDEN: [Golden; 5] = [
    Golden {
        date: "2000-01-01",
        time: "00:00",
        offset: "0",
        jd: 2_451_544.5,
        sidereal: 192.74821913697122,
        nakshatra: Nakshatra::Swati,
        index: 14,
        pada: 2,
        nadi: Nadi::Antya,
    },
    Golden {
        // UTC 2025-07-31 20:30, previous day
        date: "2025-08-01",
        time: "02:00",
        offset: "5.5",
        jd: 2_460_888.354_166_666_5,
        sidereal: 186.62080742741296,
        nakshatra: Nakshatra::Chitra,
        index: 13,
        pada: 4,
        nadi: Nadi::Madhya,
    },
    Golden {
        date: "2024-06-10",
        time: "12:00",
        offset: "+05:30",
        jd: 2_460_471.770_833_333_5,
        sidereal: 100.93066995236427,
        nakshatra: Nakshatra::Pushya,
        index: 7,
        pada: 3,
        nadi: Nadi::Madhya,
    },
    Golden {
        date: "1990-05-15",
        time: "14:30",
        offset: "5.5",
        jd: 2_448_026.875,
        sidereal: 271.1984252622631,
        nakshatra: Nakshatra::UttaraAshadha,
        index: 20,
        pada: 2,
        nadi: Nadi::Antya,
    },
    Golden {
        date: "1985-11-23",
        time: "08:45",
        offset: "-5",
        jd: 2_446_393.072_916_666_5,
        sidereal: 354.1304861597953,
        nakshatra: Nakshatra::Revati,
        index: 26,
        pada: 3,
        nadi: Nadi::Antya,
    },
];

#[test]
fn golden_births() {
    for g in &GOLDEN {
        let r = calculate_nadi(&BirthDetails::new(g.date, g.time, g.offset)).unwrap();
        let label = format!("{} {} {}", g.date, g.time, g.offset);
        assert!((r.julian_date - g.jd).abs() < 1e-8, "{label}: jd = {}", r.julian_date);
        assert!(
            (r.sidereal_longitude - g.sidereal).abs() < LON_TOL,
            "{label}: sidereal = {}",
            r.sidereal_longitude
        );
        assert_eq!(r.nakshatra, g.nakshatra, "{label}");
        assert_eq!(r.nakshatra_index, g.index, "{label}");
        assert_eq!(r.pada, g.pada, "{label}");
        assert_eq!(r.nadi, g.nadi, "{label}");
        assert_eq!(r.accuracy, ACCURACY_NOTE);
    }
}

#[test]
fn intermediate_longitudes_j2000_midnight() {
    let r = calculate_nadi(&BirthDetails::new("2000-01-01", "00:00", "0")).unwrap();
    assert!((r.tropical_longitude - 217.28304242766706).abs() < LON_TOL);
    assert!((r.ayanamsha - 24.53482329069585).abs() < LON_TOL);
}

#[test]
fn intermediate_longitudes_western_offset() {
    let r = calculate_nadi(&BirthDetails::new("1985-11-23", "08:45", "-5")).unwrap();
    assert!((r.tropical_longitude - 18.470401396554962).abs() < LON_TOL);
    assert!((r.ayanamsha - 24.339915236759644).abs() < LON_TOL);
    assert_eq!(r.utc_offset_hours, -5.0);
}

#[test]
fn offset_text_forms_agree() {
    let decimal = calculate_nadi(&BirthDetails::new("2024-06-10", "12:00", "5.5")).unwrap();
    let clock = calculate_nadi(&BirthDetails::new("2024-06-10", "12:00", "+05:30")).unwrap();
    assert_eq!(decimal, clock);
}

#[test]
fn year_rollover_matches_utc_input() {
    let local = calculate_nadi(&BirthDetails::new("2026-01-01", "03:00", "5.5")).unwrap();
    let utc = calculate_nadi(&BirthDetails::new("2025-12-31", "21:30", "0")).unwrap();
    assert_eq!(local.julian_date, utc.julian_date);
    assert_eq!(local.sidereal_longitude, utc.sidereal_longitude);
    assert_eq!(local.nakshatra, utc.nakshatra);
}

#[test]
fn malformed_date_is_reported() {
    let err = calculate_nadi(&BirthDetails::new("2000-01", "00:00", "0")).unwrap_err();
    assert!(matches!(err, NadiError::MalformedInput(TimeError::MalformedDate(_))));
}

#[test]
fn extreme_day_field_still_calculates() {
    let r = calculate_nadi(&BirthDetails::new("2025-01-2147483647", "23:00", "-5")).unwrap();
    assert!((0.0..360.0).contains(&r.sidereal_longitude));
    assert!((1..=4).contains(&r.pada));
}

#[test]
fn malformed_time_is_reported() {
    let err = calculate_nadi(&BirthDetails::new("2000-01-01", "midnight", "0")).unwrap_err();
    assert!(matches!(err, NadiError::MalformedInput(TimeError::MalformedTime(_))));
}

#[test]
fn unparseable_offset_defaults_leniently() {
    let fallback = calculate_nadi(&BirthDetails::new("2000-01-01", "00:00", "Asia/Kolkata")).unwrap();
    let zero = calculate_nadi(&BirthDetails::new("2000-01-01", "00:00", "0")).unwrap();
    assert!(fallback.offset_defaulted);
    assert_eq!(fallback.sidereal_longitude, zero.sidereal_longitude);
}

#[test]
fn strict_config_rejects_offset_and_range() {
    let calc = Calculator::new(CalculatorConfig::strict()).unwrap();
    assert!(matches!(
        calc.calculate(&BirthDetails::new("2000-01-01", "00:00", "Asia/Kolkata")),
        Err(NadiError::UnparseableOffset(_))
    ));
    assert!(matches!(
        calc.calculate(&BirthDetails::new("2000-01-01", "24:00", "0")),
        Err(NadiError::Validation(ValidationError::HourOutOfRange(24)))
    ));
    assert!(matches!(
        calc.calculate(&BirthDetails::new("2000-01-01", "00:00", "0").with_location(95.0, 0.0)),
        Err(NadiError::Validation(ValidationError::LatitudeOutOfRange(_)))
    ));
    assert!(matches!(
        calc.calculate(&BirthDetails::new("2000-01-01", "00:00", "0").with_place("X")),
        Err(NadiError::Validation(ValidationError::PlaceTooShort))
    ));
    assert!(calc.calculate(&BirthDetails::new("2000-01-01", "00:00", "0")).is_ok());
}

#[test]
fn record_json() {
    let r = calculate_nadi(&BirthDetails::new("2000-01-01", "00:00", "0")).unwrap();
    let json = serde_json::to_value(r.to_record()).unwrap();
    assert_eq!(json["nakshatra"], "Swati");
    assert_eq!(json["nakshatraIndex"], 14);
    assert_eq!(json["nadi"], "Antya");
    assert_eq!(json["siderealLongitude"], 192.748219);
    assert_eq!(json["tropicalLongitude"], 217.283042);
}

fn person(name: &str, date: &str, time: &str, offset: &str) -> Person {
    Person {
        name: Some(name.to_string()),
        details: BirthDetails::new(date, time, offset),
    }
}

#[test]
fn compare_two_madhya_is_dosha() {
    let calc = Calculator::default();
    let a = person("A", "2025-08-01", "02:00", "5.5");
    let b = person("B", "2024-06-10", "12:00", "5.5");
    let m = calc.compare(&a, Some(&b)).unwrap();
    assert!(m.has_dosha);
    assert!(!m.compatible);
    assert_eq!(m.dosha_type, Some(Nadi::Madhya));
    assert_eq!(m.person1.record.nakshatra, Nakshatra::Chitra);
    assert_eq!(m.person2.as_ref().map(|p| p.record.nakshatra), Some(Nakshatra::Pushya));
}

#[test]
fn compare_antya_and_madhya_is_compatible() {
    let calc = Calculator::default();
    let a = person("A", "2000-01-01", "00:00", "0");
    let b = person("B", "2024-06-10", "12:00", "5.5");
    let m = calc.compare(&a, Some(&b)).unwrap();
    assert!(!m.has_dosha);
    assert_eq!(m.message, "No Nadi Dosha. Antya and Madhya Nadis are compatible.");
}

#[test]
fn compare_single_person() {
    let calc = Calculator::default();
    let a = person("Ravi", "1990-05-15", "14:30", "5.5");
    let m = calc.compare(&a, None).unwrap();
    assert!(m.compatible);
    assert_eq!(m.message, "Ravi has Antya Nadi (Uttara Ashadha Nakshatra, Pada 2).");
}

#[test]
fn compare_propagates_errors() {
    let calc = Calculator::default();
    let a = person("A", "2000-01-01", "00:00", "0");
    let bad = person("B", "not-a-date", "00:00", "0");
    assert!(calc.compare(&a, Some(&bad)).is_err());
}
