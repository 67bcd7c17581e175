use jalali_calendar::{LeapRule, days_in_month, is_leap_year, is_leap_year_with};

const LEAP_YEARS: [i32; 49] = [
    1300, 1304, 1309, 1313, 1317, 1321, 1325, 1329, 1333, 1337, 1342, 1346, 1350, 1354, 1358, 1362,
    1366, 1370, 1375, 1379, 1383, 1387, 1391, 1395, 1399, 1403, 1408, 1412, 1416, 1420, 1424, 1428,
    1432, 1436, 1441, 1445, 1449, 1453, 1457, 1461, 1465, 1469, 1474, 1478, 1482, 1486, 1490, 1494,
    1498,
];

const COMMON_YEARS: [i32; 12] = [
    1400, 1401, 1402, 1404, 1405, 1406, 1407, 1411, 1413, 1419, 1437, 1470,
];

#[test]
fn known_leap_years() {
    for year in LEAP_YEARS {
        assert!(is_leap_year(year), "{year} should be leap");
    }
}

#[test]
fn known_common_years() {
    for year in COMMON_YEARS {
        assert!(!is_leap_year(year), "{year} should be common");
    }
}

#[test]
fn table_rule_without_overrides() {
    for year in [1403, 1436, 1469] {
        assert!(!is_leap_year_with(year, LeapRule::Khayyam), "{year}");
    }
    for year in [1404, 1437, 1470] {
        assert!(is_leap_year_with(year, LeapRule::Khayyam), "{year}");
    }
}

#[test]
fn esfand_length_tracks_leap_years() {
    for year in 1300..=1500 {
        let expected = if is_leap_year(year) { 30 } else { 29 };
        assert_eq!(
            days_in_month(year, 12, LeapRule::default()).unwrap(),
            expected,
            "Esfand {year}"
        );
    }
}

#[test]
fn pure_and_repeatable() {
    let first: Vec<bool> = (1200..1600).map(is_leap_year).collect();
    let second: Vec<bool> = (1200..1600).map(is_leap_year).collect();
    assert_eq!(first, second);
}
