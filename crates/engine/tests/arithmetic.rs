//! Integration tests for set, add, roll and clear.

use jalali_engine::{
    AM, CalendarConfig, EngineError, Field, JalaliCalendar, JalaliDate, PM, TimeZoneId,
};

fn calendar(date: JalaliDate) -> JalaliCalendar {
    JalaliCalendar::from_jalali_date(&date, None)
}

fn ymd(calendar: &JalaliCalendar) -> (i32, i32, i32) {
    (
        calendar.get(Field::Year).unwrap(),
        calendar.get(Field::Month).unwrap() + 1,
        calendar.get(Field::DayOfMonth).unwrap(),
    )
}

#[test]
fn current_date_is_after_1388() {
    let now = JalaliCalendar::now(TimeZoneId::utc()).jalali_date().unwrap();
    let then = JalaliDate::new(1388, 8, 4).with_hms(14, 18, 0);
    assert_eq!(now.try_cmp(&then).unwrap(), std::cmp::Ordering::Greater);
}

#[test]
fn setters_and_clear() {
    let zone: TimeZoneId = "GMT+3:30".parse().unwrap();
    let mut cal = JalaliCalendar::now(zone);
    cal.set(Field::Year, 1388).unwrap();
    cal.set(Field::Month, 7).unwrap();
    cal.set(Field::DayOfMonth, 30).unwrap();
    cal.set(Field::HourOfDay, 16).unwrap();
    cal.set(Field::Minute, 34).unwrap();
    cal.set(Field::Second, 23).unwrap();

    assert_eq!(cal.get(Field::Hour).unwrap(), 4);
    assert_eq!(cal.get(Field::HourOfDay).unwrap(), 16);
    assert_eq!(cal.get(Field::Month).unwrap(), 7);
    assert_eq!(cal.get(Field::DayOfMonth).unwrap(), 30);

    cal.clear(Field::DayOfMonth).unwrap();
    assert_eq!(cal.get(Field::DayOfMonth).unwrap(), 1);
    assert_eq!(cal.get(Field::Year).unwrap(), 1388);
}

#[test]
fn add_months_then_subtract() {
    let zone: TimeZoneId = "Asia/Tehran".parse().unwrap();
    let date = JalaliDate::new(1387, 12, 29)
        .with_hms(9, 55, 0)
        .with_time_zone(zone);
    let mut cal = calendar(date);
    cal.add(Field::Year, 0).unwrap();
    cal.add(Field::Month, 3).unwrap();
    cal.add(Field::DayOfMonth, 0).unwrap();
    assert_eq!(
        cal.jalali_date().unwrap(),
        JalaliDate::new(1388, 3, 29).with_hms(9, 55, 0).with_time_zone(zone)
    );

    cal.add(Field::Year, -3).unwrap();
    cal.add(Field::Month, -2).unwrap();
    cal.add(Field::DayOfMonth, -5).unwrap();
    assert_eq!(
        cal.jalali_date().unwrap(),
        JalaliDate::new(1385, 1, 24).with_hms(9, 55, 0).with_time_zone(zone)
    );
}

#[test]
fn add_with_time_fields() {
    let mut cal = calendar(JalaliDate::new(1387, 12, 29).with_hms(9, 55, 0));
    cal.add(Field::Year, 0).unwrap();
    cal.add(Field::Month, 3).unwrap();
    cal.add(Field::DayOfMonth, 0).unwrap();
    cal.add(Field::Second, 23).unwrap();

    assert_eq!(ymd(&cal), (1388, 3, 29));
    assert_eq!(cal.get(Field::Month).unwrap(), 2);
    assert_eq!(cal.get(Field::HourOfDay).unwrap(), 9);
    assert_eq!(cal.get(Field::Minute).unwrap(), 55);
    assert_eq!(cal.get(Field::Second).unwrap(), 23);
    assert_eq!(cal.get(Field::AmPm).unwrap(), AM);

    cal.add(Field::Year, -3).unwrap();
    cal.add(Field::Month, -2).unwrap();
    cal.add(Field::DayOfMonth, -5).unwrap();
    cal.add(Field::HourOfDay, -10).unwrap();

    assert_eq!(ymd(&cal), (1385, 1, 23));
    assert_eq!(cal.get(Field::HourOfDay).unwrap(), 23);
    assert_eq!(cal.get(Field::Hour).unwrap(), 11);
    assert_eq!(cal.get(Field::Minute).unwrap(), 55);
    assert_eq!(cal.get(Field::Second).unwrap(), 23);
    assert_eq!(cal.get(Field::AmPm).unwrap(), PM);
}

#[test]
fn add_days_across_year_boundary() {
    let mut cal = calendar(JalaliDate::new(1387, 12, 25));
    cal.add(Field::DayOfMonth, 10).unwrap();
    assert_eq!(ymd(&cal), (1388, 1, 5));
    cal.add(Field::DayOfMonth, -10).unwrap();
    assert_eq!(ymd(&cal), (1387, 12, 25));
}

#[test]
fn add_year_clamps_esfand_30() {
    let mut cal = calendar(JalaliDate::new(1387, 12, 30));
    cal.add(Field::Year, 1).unwrap();
    assert_eq!(ymd(&cal), (1388, 12, 29));

    let config = CalendarConfig::new().with_preserve_overflow(true);
    let mut cal = JalaliCalendar::from_jalali_date_with(&JalaliDate::new(1387, 12, 30), None, config);
    cal.add(Field::Year, 1).unwrap();
    assert_eq!(ymd(&cal), (1389, 1, 1));
}

#[test]
fn roll_several_fields() {
    let mut cal = calendar(JalaliDate::new(1388, 8, 11).with_hms(23, 35, 45));
    cal.roll_by(Field::Year, 3).unwrap();
    cal.roll(Field::Month, true).unwrap();
    cal.roll_by(Field::DayOfMonth, 20).unwrap();
    cal.roll_by(Field::Second, 69).unwrap();

    assert_eq!(ymd(&cal), (1391, 9, 1));
    assert_eq!(cal.get(Field::Hour).unwrap(), 11);
    assert_eq!(cal.get(Field::Minute).unwrap(), 35);
    assert_eq!(cal.get(Field::Second).unwrap(), 54);
    assert_eq!(cal.get(Field::AmPm).unwrap(), PM);
}

#[test]
fn roll_year_in_esfand() {
    let mut cal = calendar(JalaliDate::new(1387, 12, 30).with_hms(23, 35, 45));
    cal.roll(Field::Year, true).unwrap();
    assert_eq!(ymd(&cal), (1388, 12, 29));

    let mut cal = calendar(JalaliDate::new(1386, 12, 29).with_hms(6, 39, 45));
    cal.roll(Field::Year, true).unwrap();
    assert_eq!(ymd(&cal), (1387, 12, 29));
}

#[test]
fn roll_month_wraps_within_year() {
    let mut cal = calendar(JalaliDate::new(1386, 11, 30).with_hms(6, 39, 45));
    cal.roll_by(Field::Month, 2).unwrap();
    assert_eq!(ymd(&cal), (1386, 1, 29));
}

#[test]
fn roll_sequence() {
    let mut cal = calendar(JalaliDate::new(1386, 11, 30).with_hms(6, 39, 45));
    cal.roll_by(Field::Month, -12).unwrap();
    cal.roll(Field::Year, true).unwrap();
    cal.roll_by(Field::Month, 11).unwrap();
    cal.roll_by(Field::Month, -6).unwrap();
    cal.roll_by(Field::DayOfMonth, 2).unwrap();
    cal.roll(Field::Month, true).unwrap();
    cal.roll(Field::Year, false).unwrap();
    assert_eq!(ymd(&cal), (1386, 5, 31));
}

#[test]
fn roll_time_fields() {
    let mut cal = calendar(JalaliDate::new(1383, 3, 18).with_hms(6, 39, 45));
    cal.roll_by(Field::Hour, -12).unwrap();
    cal.roll_by(Field::Minute, 15).unwrap();
    cal.roll_by(Field::Second, 15).unwrap();
    cal.roll_by(Field::Minute, -6).unwrap();
    cal.roll_by(Field::HourOfDay, 23).unwrap();

    assert_eq!(cal.get(Field::Hour).unwrap(), 5);
    assert_eq!(cal.get(Field::Minute).unwrap(), 48);
    assert_eq!(cal.get(Field::Second).unwrap(), 0);
    assert_eq!(ymd(&cal), (1383, 3, 18));
}

#[test]
fn twelve_month_rolls_return_to_start() {
    for (year, month, day) in [(1388, 1, 15), (1387, 12, 30), (1390, 7, 30), (1399, 6, 31)] {
        let mut cal = calendar(JalaliDate::new(year, month, day));
        for _ in 0..12 {
            cal.roll(Field::Month, true).unwrap();
        }
        let (y, m, _) = ymd(&cal);
        assert_eq!((y, m), (year, month));
    }
}

#[test]
fn set_then_add_on_instant_value() {
    let zone: TimeZoneId = "GMT+3:30".parse().unwrap();
    let mut cal = JalaliCalendar::now(zone);
    cal.set(Field::Year, 1400).unwrap();
    cal.set(Field::Month, 0).unwrap();
    cal.set(Field::DayOfMonth, 1).unwrap();
    cal.add(Field::DayOfMonth, -1).unwrap();
    assert_eq!(ymd(&cal), (1399, 12, 30));
}

#[test]
fn arithmetic_without_overrides_keeps_esfand_30_of_1404() {
    let config = CalendarConfig::new().with_historical_overrides(false);
    let date = JalaliDate::new(1404, 12, 29);

    let mut cal = JalaliCalendar::from_jalali_date_with(&date, None, config);
    cal.add(Field::DayOfMonth, 1).unwrap();
    assert_eq!(ymd(&cal), (1404, 12, 30));
    cal.add(Field::DayOfMonth, 1).unwrap();
    assert_eq!(ymd(&cal), (1405, 1, 1));

    let mut cal = JalaliCalendar::from_jalali_date_with(&date, None, config);
    cal.roll(Field::DayOfMonth, true).unwrap();
    assert_eq!(ymd(&cal), (1404, 12, 30));
    cal.roll(Field::DayOfMonth, true).unwrap();
    assert_eq!(ymd(&cal), (1404, 12, 1));
}

#[test]
fn arithmetic_with_overrides_moves_esfand_30_to_1403() {
    let mut cal = calendar(JalaliDate::new(1404, 12, 29));
    cal.add(Field::DayOfMonth, 1).unwrap();
    assert_eq!(ymd(&cal), (1405, 1, 1));

    let mut cal = calendar(JalaliDate::new(1403, 12, 29));
    cal.roll(Field::DayOfMonth, true).unwrap();
    assert_eq!(ymd(&cal), (1403, 12, 30));
}

#[test]
fn huge_add_is_out_of_range() {
    let mut cal = calendar(JalaliDate::new(1388, 1, 1));
    let err = cal.add(Field::Month, i32::MAX).unwrap_err();
    assert!(matches!(err, EngineError::OutOfRange { .. }));
    let err = cal.add(Field::Year, i32::MAX).unwrap_err();
    assert!(matches!(err, EngineError::OutOfRange { .. }));
    // A failed add leaves the value alone.
    assert_eq!(ymd(&cal), (1388, 1, 1));
}
