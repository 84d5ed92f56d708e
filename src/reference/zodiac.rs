use chrono::{Datelike, NaiveDate};

const SIGNS: [&str; 13] = [
    "摩羯座", "水瓶座", "双鱼座", "白羊座", "金牛座", "双子座", "巨蟹座",
    "狮子座", "处女座", "天秤座", "天蝎座", "射手座", "摩羯座",
];

/// Last day of each month that still belongs to the sign starting the
/// previous month.
const CUTOFFS: [u32; 12] = [19, 18, 20, 19, 20, 21, 22, 22, 22, 23, 22, 21];

/// Western zodiac sign for a birth date.
pub fn zodiac_sign(date: NaiveDate) -> &'static str {
    let idx = date.month0() as usize;
    if date.day() <= CUTOFFS[idx] {
        SIGNS[idx]
    } else {
        SIGNS[idx + 1]
    }
}
