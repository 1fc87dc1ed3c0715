use chrono::{Datelike, NaiveDate};
use pasture_calendar::{CalendarMode, DayKey, Doy, reconstruct_date, to_doy, to_month_day};

#[test]
fn every_doy_round_trips_through_month_day() {
    for d in 1..=365u16 {
        let doy = Doy::new(d).unwrap();
        let (month, day) = to_month_day(doy);
        assert_eq!(to_doy(month, day).unwrap().get(), d);
    }
}

#[test]
fn every_non_leap_date_round_trips_through_doy() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    for date in start.iter_days().take(365) {
        let (m, d) = (date.month() as u8, date.day() as u8);
        let doy = to_doy(m, d).unwrap();
        assert_eq!(u32::from(doy.get()), date.ordinal());
        assert_eq!(to_month_day(doy), (m, d));
    }
}

#[test]
fn noleap_dates_shift_by_one_after_february_in_leap_years() {
    for doy in 1..=365u16 {
        let date = reconstruct_date(DayKey::new(2024, doy), CalendarMode::NoLeap).unwrap();
        let expected_shift = if doy >= 60 { 1 } else { 0 };
        assert_eq!(
            date.ordinal() - u32::from(doy),
            expected_shift,
            "doy {doy} -> {date}"
        );
    }
}

#[test]
fn modes_agree_outside_leap_years() {
    for doy in 1..=365u16 {
        let key = DayKey::new(2023, doy);
        assert_eq!(
            reconstruct_date(key, CalendarMode::Gregorian).unwrap(),
            reconstruct_date(key, CalendarMode::NoLeap).unwrap()
        );
    }
}
