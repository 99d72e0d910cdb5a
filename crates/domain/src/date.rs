pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1 => 31,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 => 31,
        4 => 30,
        5 => 31,
        6 => 30,
        7 => 31,
        8 => 31,
        9 => 30,
        10 => 31,
        11 => 30,
        12 => 31,
        _ => panic!("Invalid month"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_knows_leap_years() {
        for year in [2000, 2020, 2024, 2400] {
            assert!(is_leap_year(year));
        }
        for year in [1900, 2021, 2023, 2100] {
            assert!(!is_leap_year(year));
        }
    }

    #[test]
    fn it_computes_month_lengths() {
        assert_eq!(month_length(2023, 2), 28);
        assert_eq!(month_length(2024, 2), 29);
        assert_eq!(month_length(2024, 1), 31);
        assert_eq!(month_length(2024, 4), 30);
        assert_eq!(month_length(2024, 12), 31);
    }
}
