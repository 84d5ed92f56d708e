//! Built-in personality tables.

/// Display name and descriptive tags per type code.
pub(crate) const TYPES: &[(&str, &str, [&str; 2])] = &[
    ("INTJ", "建筑师", ["战略性", "独立"]),
    ("INTP", "逻辑学家", ["分析", "好奇"]),
    ("ENTJ", "指挥官", ["果断", "领导"]),
    ("ENTP", "辩论家", ["创新", "挑战"]),
    ("INFJ", "提倡者", ["理想主义", "深刻"]),
    ("INFP", "调停者", ["和谐", "创意"]),
    ("ENFJ", "主人公", ["鼓舞", "合作"]),
    ("ENFP", "竞选者", ["热情", "自由"]),
    ("ISTJ", "物流师", ["负责", "务实"]),
    ("ISFJ", "守卫者", ["忠诚", "细致"]),
    ("ESTJ", "总经理", ["高效", "组织"]),
    ("ESFJ", "执政官", ["关怀", "合作"]),
    ("ISTP", "鉴赏家", ["灵活", "动手"]),
    ("ISFP", "探险家", ["艺术", "敏感"]),
    ("ESTP", "企业家", ["活力", "冒险"]),
    ("ESFP", "表演者", ["娱乐", "自发"]),
];

/// The four temperaments in display order, with their member types.
pub(crate) const TEMPERAMENTS: &[(&str, [&str; 4])] = &[
    ("分析家", ["INTJ", "INTP", "ENTJ", "ENTP"]),
    ("外交家", ["INFJ", "INFP", "ENFJ", "ENFP"]),
    ("守护者", ["ISTJ", "ISFJ", "ESTJ", "ESFJ"]),
    ("探险家", ["ISTP", "ISFP", "ESTP", "ESFP"]),
];

/// Bucket for codes missing from `TEMPERAMENTS`.
pub(crate) const DEFAULT_TEMPERAMENT: &str = "守护者";

/// Tag given to records whose type has no entry in `TYPES`.
pub(crate) const UNKNOWN_TAG: &str = "未知";

/// (type, best matches, challenging pairings)
pub(crate) const COMPATIBILITY: &[(&str, &[&str], &[&str])] = &[
    ("INTJ", &["ENFP", "ENTP"], &["ESFP", "ESTP", "ESFJ"]),
    ("INTP", &["ENTJ", "ESTJ"], &["ESFJ", "ISFJ"]),
    ("ENTJ", &["INTP", "INFP"], &["ISFP", "ESFP"]),
    ("ENTP", &["INFJ", "INTJ"], &["ISFJ", "ISTJ"]),
    ("INFJ", &["ENFP", "ENTP"], &["ESTP", "ESTJ"]),
    ("INFP", &["ENFJ", "ENTJ"], &["ESTJ", "ISTJ"]),
    ("ENFJ", &["INFP", "ISFP"], &["ISTP", "ESTP"]),
    ("ENFP", &["INFJ", "INTJ"], &["ISTJ", "ESTJ"]),
    ("ISTJ", &["ESFP", "ESTP"], &["ENFP", "INFP"]),
    ("ISFJ", &["ESFP", "ESTP"], &["ENTP", "INTP"]),
    ("ESTJ", &["ISTP", "ISFP"], &["INFP", "ENFP"]),
    ("ESFJ", &["ISFP", "ISTP"], &["INTP", "INTJ"]),
    ("ISTP", &["ESTJ", "ESFJ"], &["ENFJ", "INFJ"]),
    ("ISFP", &["ENFJ", "ESFJ", "ESTJ"], &["ENTJ", "INTJ"]),
    ("ESTP", &["ISFJ", "ISTJ"], &["INFJ", "INTJ"]),
    ("ESFP", &["ISFJ", "ISTJ"], &["INTJ", "INTP"]),
];

pub(crate) const GENDERS: &[&str] = &["男", "女"];
