//! Words whose characters read differently from their default pinyin.
//!
//! Mostly place names built on heteronyms (重, 长, 厦, 都, 乐, 六 ...).
//! Entries are matched before per-character lookup, longest first.

/// `(word, syllables)`, sorted by character count, longest first.
pub(super) const WORD_READINGS: &[(&str, &[&str])] = &[
    ("都江堰", &["du", "jiang", "yan"]),
    ("调兵山", &["diao", "bing", "shan"]),
    ("重庆", &["chong", "qing"]),
    ("长沙", &["chang", "sha"]),
    ("长春", &["chang", "chun"]),
    ("长治", &["chang", "zhi"]),
    ("长白", &["chang", "bai"]),
    ("长安", &["chang", "an"]),
    ("长江", &["chang", "jiang"]),
    ("长兴", &["chang", "xing"]),
    ("长汀", &["chang", "ting"]),
    ("长阳", &["chang", "yang"]),
    ("长葛", &["chang", "ge"]),
    ("长垣", &["chang", "yuan"]),
    ("长乐", &["chang", "le"]),
    ("长寿", &["chang", "shou"]),
    ("长武", &["chang", "wu"]),
    ("长岭", &["chang", "ling"]),
    ("长丰", &["chang", "feng"]),
    ("长泰", &["chang", "tai"]),
    ("长宁", &["chang", "ning"]),
    ("长清", &["chang", "qing"]),
    ("长子", &["zhang", "zi"]),
    ("厦门", &["xia", "men"]),
    ("成都", &["cheng", "du"]),
    ("首都", &["shou", "du"]),
    ("都匀", &["du", "yun"]),
    ("乐山", &["le", "shan"]),
    ("乐清", &["yue", "qing"]),
    ("六安", &["lu", "an"]),
    ("六合", &["lu", "he"]),
    ("蚌埠", &["beng", "bu"]),
    ("朝阳", &["chao", "yang"]),
    ("东莞", &["dong", "guan"]),
    ("番禺", &["pan", "yu"]),
    ("丽水", &["li", "shui"]),
    ("单县", &["shan", "xian"]),
    ("莘县", &["shen", "xian"]),
    ("茌平", &["chi", "ping"]),
    ("台州", &["tai", "zhou"]),
    ("天台", &["tian", "tai"]),
    ("铅山", &["yan", "shan"]),
    ("蔚县", &["yu", "xian"]),
    ("尉犁", &["yu", "li"]),
    ("曲阜", &["qu", "fu"]),
    ("行唐", &["xing", "tang"]),
    ("西藏", &["xi", "zang"]),
];

/// Longest word starting `text`, with its readings.
pub(super) fn match_word(text: &str) -> Option<(&'static str, &'static [&'static str])> {
    WORD_READINGS
        .iter()
        .find(|(word, _)| text.starts_with(word))
        .copied()
}
