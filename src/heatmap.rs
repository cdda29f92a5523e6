// src/heatmap.rs
//
// Mapa de actividad del año. Los datos son sintéticos (aleatorios):
// todavía no hay ninguna fuente real de actividad diaria.

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;

pub const FIRST_YEAR: i32 = 2020;
pub const DAY_LABELS: [&str; 7] = ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sáb"];
const MONTHS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub value: u32,
}

/// Una columna por semana, domingo primero.
pub type Week = [Option<DayCell>; 7];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthSpan {
    pub label: &'static str,
    pub start: usize,
    pub end: usize,
}

#[derive(Clone, Debug)]
pub struct YearActivity {
    pub year: i32,
    days: Vec<DayCell>,
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> usize {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Años seleccionables, del actual hacia atrás
pub fn selectable_years(current: i32) -> Vec<i32> {
    (FIRST_YEAR..=current.max(FIRST_YEAR)).rev().collect()
}

/// Cubo de color 0..=5
pub fn level(value: u32) -> u8 {
    match value {
        0 => 0,
        1..=19 => 1,
        20..=39 => 2,
        40..=59 => 3,
        60..=79 => 4,
        _ => 5,
    }
}

impl YearActivity {
    pub fn generate<R: Rng + ?Sized>(year: i32, rng: &mut R) -> Self {
        let days = match NaiveDate::from_ymd_opt(year, 1, 1) {
            Some(first) => (0..days_in_year(year))
                .map(|i| DayCell {
                    date: first + Duration::days(i as i64),
                    value: rng.random_range(0..100),
                })
                .collect(),
            None => Vec::new(),
        };
        Self { year, days }
    }

    pub fn days(&self) -> &[DayCell] {
        &self.days
    }

    pub fn total(&self) -> u64 {
        self.days.iter().map(|d| d.value as u64).sum()
    }

    pub fn weeks(&self) -> Vec<Week> {
        let mut weeks = Vec::new();
        let Some(first) = self.days.first() else {
            return weeks;
        };

        let mut current: Week = [None; 7];
        let mut slot = first.date.weekday().num_days_from_sunday() as usize;
        for day in &self.days {
            current[slot] = Some(*day);
            slot += 1;
            if slot == 7 {
                weeks.push(current);
                current = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(current);
        }
        weeks
    }

    /// Rangos de semanas por mes, según el mes del primer día de cada columna.
    pub fn month_spans(&self) -> Vec<MonthSpan> {
        let weeks = self.weeks();
        let mut spans = Vec::new();
        let mut last_month: Option<u32> = None;
        let mut start = 0;

        for (i, week) in weeks.iter().enumerate() {
            let Some(day) = week.iter().flatten().next() else {
                continue;
            };
            let month = day.date.month0();
            if last_month != Some(month) {
                if let Some(prev) = last_month {
                    spans.push(MonthSpan {
                        label: MONTHS[prev as usize],
                        start,
                        end: i,
                    });
                    start = i;
                }
                last_month = Some(month);
            }
        }
        if let Some(prev) = last_month {
            spans.push(MonthSpan {
                label: MONTHS[prev as usize],
                start,
                end: weeks.len(),
            });
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn one_value_per_day() {
        let mut rng = StdRng::seed_from_u64(0);
        let leap = YearActivity::generate(2024, &mut rng);
        let plain = YearActivity::generate(2023, &mut rng);
        assert_eq!(leap.days().len(), 366);
        assert_eq!(plain.days().len(), 365);
        assert!(leap.days().iter().all(|d| d.value < 100));
        assert_eq!(
            leap.total(),
            leap.days().iter().map(|d| d.value as u64).sum::<u64>()
        );
    }

    #[test]
    fn weeks_are_padded_to_seven() {
        let activity = YearActivity::generate(2024, &mut StdRng::seed_from_u64(1));
        let weeks = activity.weeks();

        // 1 de enero de 2024 fue lunes: el domingo queda vacío
        assert!(weeks[0][0].is_none());
        assert_eq!(weeks[0][1].unwrap().date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let cells: usize = weeks.iter().map(|w| w.iter().flatten().count()).sum();
        assert_eq!(cells, 366);
        // 31 de diciembre de 2024 fue martes
        let last = weeks.last().unwrap();
        assert!(last[2].is_some());
        assert!(last[3].is_none());
    }

    #[test]
    fn month_spans_cover_all_weeks() {
        let activity = YearActivity::generate(2023, &mut StdRng::seed_from_u64(2));
        let spans = activity.month_spans();
        assert_eq!(spans.len(), 12);
        assert_eq!(spans[0].label, "Ene");
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans.last().unwrap().end, activity.weeks().len());
        for pair in spans.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn color_levels() {
        assert_eq!(level(0), 0);
        assert_eq!(level(19), 1);
        assert_eq!(level(20), 2);
        assert_eq!(level(79), 4);
        assert_eq!(level(99), 5);
    }

    #[test]
    fn years_go_back_to_2020() {
        assert_eq!(selectable_years(2022), vec![2022, 2021, 2020]);
        assert_eq!(selectable_years(2010), vec![2020]);
    }
}
