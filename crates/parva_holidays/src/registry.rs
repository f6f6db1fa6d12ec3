//! The static holiday registry: every definition the matcher consults.

use parva_calendars::{CalendarError, chinese, hebrew, hindu, islamic};
use parva_time::GregorianDate;

use crate::types::{Holiday, HolidayRule};

// Calendar calculators with no failure mode are adapted to the common
// fallible festival signature.

fn lunar_new_year(year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    Ok(chinese::lunar_new_year(year))
}

fn mid_autumn(year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    Ok(chinese::mid_autumn_festival(year))
}

fn dragon_boat(year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    Ok(chinese::dragon_boat_festival(year))
}

fn qingming(year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    Ok(chinese::qingming(year))
}

fn eid_al_adha(year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    Ok(islamic::eid_al_adha(year))
}

fn diwali(year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    Ok(hindu::diwali(year))
}

fn holi(year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    Ok(hindu::holi(year))
}

fn janmashtami(year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    Ok(hindu::janmashtami(year))
}

fn navaratri(year: i32) -> Result<Vec<GregorianDate>, CalendarError> {
    Ok(hindu::navaratri(year))
}

/// All holiday definitions, read-only for the life of the process.
pub static HOLIDAYS: &[Holiday] = &[
    // Christian
    Holiday {
        name: "Christmas",
        greeting: "Merry Christmas",
        emoji: "🎅",
        rule: HolidayRule::MonthDay { month: 12, day: 25 },
    },
    Holiday {
        name: "Christmas Eve",
        greeting: "Merry Christmas Eve",
        emoji: "🎄",
        rule: HolidayRule::MonthDay { month: 12, day: 24 },
    },
    Holiday {
        name: "Easter",
        greeting: "Happy Easter",
        emoji: "🐰",
        rule: HolidayRule::EasterOffset(0),
    },
    Holiday {
        name: "Good Friday",
        greeting: "Blessed Good Friday",
        emoji: "✝",
        rule: HolidayRule::EasterOffset(-2),
    },
    // Islamic
    Holiday {
        name: "Eid al-Fitr",
        greeting: "Eid Mubarak",
        emoji: "☪",
        rule: HolidayRule::Predicate(islamic::is_eid_al_fitr),
    },
    Holiday {
        name: "Eid al-Adha",
        greeting: "Eid Mubarak",
        emoji: "🕌",
        rule: HolidayRule::Festival(eid_al_adha),
    },
    // Jewish
    Holiday {
        name: "Rosh Hashanah",
        greeting: "Shana Tova",
        emoji: "🍎",
        rule: HolidayRule::Festival(hebrew::rosh_hashanah),
    },
    Holiday {
        name: "Yom Kippur",
        greeting: "G'mar Chatima Tova",
        emoji: "✡",
        rule: HolidayRule::Festival(hebrew::yom_kippur),
    },
    Holiday {
        name: "Hanukkah",
        greeting: "Happy Hanukkah",
        emoji: "🕎",
        rule: HolidayRule::Festival(hebrew::hanukkah),
    },
    Holiday {
        name: "Passover",
        greeting: "Chag Pesach Sameach",
        emoji: "🍷",
        rule: HolidayRule::Festival(hebrew::passover),
    },
    Holiday {
        name: "Shavuot",
        greeting: "Chag Sameach",
        emoji: "📜",
        rule: HolidayRule::Festival(hebrew::shavuot),
    },
    Holiday {
        name: "Sukkot",
        greeting: "Chag Sameach",
        emoji: "🌿",
        rule: HolidayRule::Festival(hebrew::sukkot),
    },
    // Hindu
    Holiday {
        name: "Diwali",
        greeting: "Happy Diwali",
        emoji: "🪔",
        rule: HolidayRule::Festival(diwali),
    },
    Holiday {
        name: "Holi",
        greeting: "Happy Holi",
        emoji: "🎨",
        rule: HolidayRule::Festival(holi),
    },
    Holiday {
        name: "Krishna Janmashtami",
        greeting: "Happy Janmashtami",
        emoji: "🙏",
        rule: HolidayRule::Festival(janmashtami),
    },
    Holiday {
        name: "Navaratri",
        greeting: "Happy Navaratri",
        emoji: "🪷",
        rule: HolidayRule::Festival(navaratri),
    },
    // Chinese
    Holiday {
        name: "Lunar New Year",
        greeting: "新年快乐 / 새해 복 많이 받으세요",
        emoji: "🧧",
        rule: HolidayRule::Festival(lunar_new_year),
    },
    Holiday {
        name: "Mid-Autumn Festival",
        greeting: "中秋节快乐 / 추석 잘 보내세요",
        emoji: "🥮",
        rule: HolidayRule::Festival(mid_autumn),
    },
    Holiday {
        name: "Dragon Boat Festival",
        greeting: "端午节快乐",
        emoji: "🛶",
        rule: HolidayRule::Festival(dragon_boat),
    },
    Holiday {
        name: "Qingming Festival",
        greeting: "清明节安康",
        emoji: "🌿",
        rule: HolidayRule::Festival(qingming),
    },
    // Fixed-date and rule-based observances
    Holiday {
        name: "New Year",
        greeting: "Happy New Year",
        emoji: "🎆",
        rule: HolidayRule::MonthDay { month: 1, day: 1 },
    },
    Holiday {
        name: "Valentine's Day",
        greeting: "Happy Valentine's Day",
        emoji: "❤",
        rule: HolidayRule::MonthDay { month: 2, day: 14 },
    },
    Holiday {
        name: "Halloween",
        greeting: "Happy Halloween",
        emoji: "🎃",
        rule: HolidayRule::MonthDay { month: 10, day: 31 },
    },
    Holiday {
        name: "Mother's Day",
        greeting: "Happy Mother's Day",
        emoji: "💐",
        rule: HolidayRule::NthWeekday { month: 5, n: 2, weekday: 0 },
    },
    Holiday {
        name: "Father's Day",
        greeting: "Happy Father's Day",
        emoji: "👔",
        rule: HolidayRule::NthWeekday { month: 6, n: 3, weekday: 0 },
    },
    Holiday {
        name: "International Women's Day",
        greeting: "Happy International Women's Day",
        emoji: "👩",
        rule: HolidayRule::MonthDay { month: 3, day: 8 },
    },
    Holiday {
        name: "World Pride Day",
        greeting: "Happy Pride",
        emoji: "🏳",
        rule: HolidayRule::MonthDay { month: 6, day: 28 },
    },
    Holiday {
        name: "Earth Day",
        greeting: "Happy Earth Day",
        emoji: "🌍",
        rule: HolidayRule::MonthDay { month: 4, day: 22 },
    },
    Holiday {
        name: "International Labor Day",
        greeting: "Happy Labor Day",
        emoji: "👷",
        rule: HolidayRule::MonthDay { month: 5, day: 1 },
    },
    Holiday {
        name: "United Nations Day",
        greeting: "Happy UN Day",
        emoji: "🌐",
        rule: HolidayRule::MonthDay { month: 10, day: 24 },
    },
    Holiday {
        name: "Human Rights Day",
        greeting: "Happy Human Rights Day",
        emoji: "✊",
        rule: HolidayRule::MonthDay { month: 12, day: 10 },
    },
    // North American
    Holiday {
        name: "US Independence Day",
        greeting: "Happy Fourth of July",
        emoji: "🇺🇸",
        rule: HolidayRule::MonthDay { month: 7, day: 4 },
    },
    Holiday {
        name: "US Thanksgiving",
        greeting: "Happy Thanksgiving",
        emoji: "🦃",
        rule: HolidayRule::NthWeekday { month: 11, n: 4, weekday: 4 },
    },
    Holiday {
        name: "Canadian Thanksgiving",
        greeting: "Happy Thanksgiving",
        emoji: "🍁",
        rule: HolidayRule::NthWeekday { month: 10, n: 2, weekday: 1 },
    },
    Holiday {
        name: "Cinco de Mayo",
        greeting: "¡Feliz Cinco de Mayo!",
        emoji: "🇲🇽",
        rule: HolidayRule::MonthDay { month: 5, day: 5 },
    },
    // European
    Holiday {
        name: "Oktoberfest",
        greeting: "Prost!",
        emoji: "🍺",
        rule: HolidayRule::DateRange { start: (9, 16), end: (10, 7) },
    },
    Holiday {
        name: "Bastille Day",
        greeting: "Joyeux 14 Juillet",
        emoji: "🇫🇷",
        rule: HolidayRule::MonthDay { month: 7, day: 14 },
    },
    Holiday {
        name: "St. Patrick's Day",
        greeting: "Happy St. Patrick's Day",
        emoji: "☘",
        rule: HolidayRule::MonthDay { month: 3, day: 17 },
    },
    Holiday {
        name: "Guy Fawkes Night",
        greeting: "Happy Bonfire Night",
        emoji: "🎆",
        rule: HolidayRule::MonthDay { month: 11, day: 5 },
    },
    // Asian
    Holiday {
        name: "Korean Seollal",
        greeting: "새해 복 많이 받으세요",
        emoji: "🇰🇷",
        rule: HolidayRule::DateRange { start: (1, 21), end: (2, 20) },
    },
    Holiday {
        name: "Vesak",
        greeting: "Happy Vesak Day",
        emoji: "🙏",
        rule: HolidayRule::DateRange { start: (5, 5), end: (5, 15) },
    },
    // Middle Eastern
    Holiday {
        name: "Nowruz",
        greeting: "Nowruz Mobrook!",
        emoji: "🌱",
        rule: HolidayRule::DateRange { start: (3, 19), end: (3, 21) },
    },
    // African
    Holiday {
        name: "Africa Day",
        greeting: "Happy Africa Day",
        emoji: "🌍",
        rule: HolidayRule::MonthDay { month: 5, day: 25 },
    },
    Holiday {
        name: "South African Heritage Day",
        greeting: "Happy Heritage Day",
        emoji: "🇿🇦",
        rule: HolidayRule::MonthDay { month: 9, day: 24 },
    },
    // Latin American
    Holiday {
        name: "Día de los Muertos",
        greeting: "¡Feliz Día de los Muertos!",
        emoji: "💀",
        rule: HolidayRule::MonthDaySet(&[(11, 1), (11, 2)]),
    },
    Holiday {
        name: "Brazilian Carnival",
        greeting: "Feliz Carnaval",
        emoji: "🎭",
        rule: HolidayRule::EasterRange { start: -47, end: -42 },
    },
    // Caribbean
    Holiday {
        name: "Junkanoo",
        greeting: "Happy Junkanoo",
        emoji: "🎊",
        rule: HolidayRule::MonthDaySet(&[(12, 26), (1, 1)]),
    },
];
