use crate::domain::audio::Entry;
use crate::domain::voice::Language;

/// Technique names read as written by the Japanese voices
const JAPANESE_TECHNIQUES: &[&str] = &[
    "Omote",
    "Ura",
    "Ikkyo",
    "Nikyo",
    "Sankyo",
    "Yonkyo",
    "Gokyo",
    "Irimi nage",
    "Shiho nage",
    "Kote gaeshi",
    "Tenchi nage",
    "Uchi kaiten nage",
    "Soto kaiten nage",
    "Koshi nage",
    "Kokyu Nage",
    "Sokumen irimi nage",
    "Sumi otoshi",
    "Aiki otoshi",
    "Kubi nage",
    "Hiji kime osae",
    "Ude garami",
    "Ai hanmi katate dori",
    "Katate dori",
    "Katate ryote dori",
    "Ryote dori",
    "Muna dori",
    "Kata dori",
    "Kata dori men uchi",
    "Mae ryo kata dori",
    "Ushiro ryote dori",
    "Ushiro katate dori kubishime",
    "Ushiro eri dori",
    "Ushiro ryo kata dori",
    "Shomen uchi",
    "Yokomen uchi",
    "Chudan tsuki",
    "Jodan tsuki",
    "Tanto dori",
    "Ken taï ken",
    "Jo taï jo",
    "Jo dori",
    "Jo nage",
    "Tachi waza",
    "Suwari waza",
    "Hanmi handachi waza",
    "Kumijo",
    "Gyaku hanmi katate dori",
    "Naname kokyu nage",
    "Morote dori",
    "Tachi dori",
    "Jiyu waza",
    "Randori",
    "Gyaku Yokomen",
];

/// (canonical label, French respelling) pairs. The respelling steers a French
/// voice towards the Japanese pronunciation; the label names the file.
const FRENCH_TECHNIQUES: &[(&str, &str)] = &[
    ("Omote", "Omotè"),
    ("Ura", "Oura"),
    ("Ikkyo", "Ikkyo"),
    ("Nikyo", "Nikkyo"),
    ("Sankyo", "Sankyo"),
    ("Yonkyo", "Yonkyo"),
    ("Gokyo", "Gokyo"),
    ("Irimi nage", "Irimi nagué"),
    ("Shiho nage", "Shiho nagué"),
    ("Kote gaeshi", "Koté gaéshi"),
    ("Tenchi nage", "Tentchi nagué"),
    ("Uchi kaiten nage", "Utchi kaïtèn nagué"),
    ("Soto kaiten nage", "Soto kaïtèn nagué"),
    ("Koshi nage", "Koshi nagué"),
    ("Kokyu nage", "Kokyou nagué"),
    ("Sokumen irimi nage", "Sokoumen irimi nagué"),
    ("Sumi otoshi", "Soumi otoshi"),
    ("Aiki otoshi", "Aïki otoshi"),
    ("Kubi nage", "Koubi nagué"),
    ("Hiji kime osae", "Hiji kimé ossaé"),
    ("Ude garami", "Oudé garami"),
    ("Ai hanmi katate dori", "Aï hanmi kataté dori"),
    ("Katate dori", "Kataté dori"),
    ("Katate ryote dori", "Kataté ryoté dori"),
    ("Ryote dori", "Ryoté dori"),
    ("Muna dori", "Mouna dori"),
    ("Kata dori", "Kata dori"),
    ("Kata dori men uchi", "Kata dori men utchi"),
    ("Mae ryo kata dori", "Maé ryo kata dori"),
    ("Ushiro ryote dori", "Oushiro ryoté dori"),
    ("Ushiro katate dori kubishime", "Oushiro kataté dori koubishimé"),
    ("Ushiro eri dori", "Oushiro éri dori"),
    ("Ushiro ryo kata dori", "Oushiro ryo kata dori"),
    ("Shomen uchi", "Shomèn utchi"),
    ("Yokomen uchi", "Yokomèn utchi"),
    ("Chudan tsuki", "Tchoudan tsuki"),
    ("Jodan tsuki", "Yodan tsuki"),
    ("Tanto dori", "Tanto dori"),
    ("Ken tai ken", "Ken taï ken"),
    ("Jo tai jo", "Djo taï Djo"),
    ("Jo dori", "Djo dori"),
    ("Jo nage", "Djo nagué"),
    ("Tachi waza", "Tatchi waza"),
    ("Suwari waza", "Souwari waza"),
    ("Hanmi handachi waza", "Hanmi handatchi waza"),
    ("Kumijo", "KoumiDjo"),
    ("Gyaku hanmi katate dori", "Gyakou hanmi kataté dori"),
    ("Naname kokyu nage", "Nanamé kokyou nagué"),
    ("Morote dori", "Moroté dori"),
    ("Tachi dori", "Tatchi dori"),
    ("Jiyu waza", "Djiyou waza"),
    ("Randori", "Randori"),
    ("Gyaku Yokomen", "Gyakou yokomèn"),
];

pub fn japanese() -> Vec<Entry> {
    JAPANESE_TECHNIQUES
        .iter()
        .map(|name| Entry::verbatim(*name))
        .collect()
}

pub fn french() -> Vec<Entry> {
    FRENCH_TECHNIQUES
        .iter()
        .map(|(label, spoken)| Entry::plain(*label, *spoken))
        .collect()
}

/// Entries a voice of the given language should record
pub fn for_language(language: Language) -> Vec<Entry> {
    match language {
        Language::Japanese => japanese(),
        Language::French => french(),
    }
}
