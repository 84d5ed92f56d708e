use crate::model::{FriendRecord, Id};
use crate::reference::ReferenceData;

use chrono::NaiveDate;

// (name, gender, type, birth date, age, province, city, education, group)
const DEMO: &[(&str, &str, &str, (i32, u32, u32), u32, &str, &str, &str, &str)] = &[
    ("小王", "男", "INTJ", (2000, 1, 15), 25, "北京", "朝阳区", "本科", "公司"),
    ("小赵", "女", "ENFP", (2002, 3, 10), 23, "北京", "海淀区", "本科", "大学同学"),
    ("小钱", "女", "ESFJ", (1999, 5, 18), 26, "北京", "东城区", "硕士", "高中同学"),
    ("小李", "女", "INFJ", (2001, 5, 20), 24, "上海", "浦东新区", "硕士", "大学同学"),
    ("小孙", "男", "ENTP", (2000, 8, 12), 25, "上海", "黄浦区", "本科", "公司"),
    ("小周", "男", "ESTP", (1998, 11, 25), 27, "上海", "徐汇区", "大专", "高中同学"),
    ("小张", "男", "ISTJ", (1997, 8, 10), 28, "广东", "广州", "本科", "家人"),
    ("小吴", "女", "ESFP", (2003, 6, 30), 22, "广东", "深圳", "本科", "大学同学"),
    ("小郑", "女", "ENFP", (2001, 9, 15), 24, "广东", "广州", "硕士", "公司"),
    ("小陈", "男", "ISTP", (1999, 3, 25), 26, "浙江", "杭州", "大专", "公司"),
    ("小冯", "女", "ESTJ", (1996, 12, 8), 29, "浙江", "宁波", "本科", "家人"),
    ("小沈", "女", "INFP", (2002, 7, 22), 23, "浙江", "杭州", "本科", "大学同学"),
];

/// The sample roster shown on first launch. Ids are "1".."12"; later entries
/// are newer.
pub fn demo_roster(reference: &ReferenceData, now_ms: i64) -> Vec<FriendRecord> {
    let count = DEMO.len() as i64;
    DEMO.iter()
        .enumerate()
        .map(|(i, &(name, gender, mbti, (y, m, d), age, province, city, education, group))| {
            let mut f = FriendRecord::create(name.into(), gender.into(), mbti.into());
            f.id = Id::new((i + 1).to_string());
            f.birth_date = NaiveDate::from_ymd_opt(y, m, d);
            f.age = Some(age);
            f.nationality = Some("中国".into());
            f.province = Some(province.into());
            f.city = Some(city.into());
            f.education = Some(education.into());
            f.groups = vec![group.into()];
            f.tags = reference.tags_for(mbti);
            f.created_at = Some(now_ms - (count - i as i64) * 1_000_000);
            f
        })
        .collect()
}
