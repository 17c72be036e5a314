//! Finnish and English UI strings.
//!
//! Every string the app shows is named by a `TranslationKey` variant and each
//! language table is an exhaustive `match`, so adding a key without wording
//! for both languages does not compile. Lookups that still come in as raw
//! strings (route params, persisted label keys) go through `translate_raw`,
//! which hands an unknown key back verbatim so the screen shows something.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fi,
    #[default]
    En,
}

impl Language {
    /// Two-letter code used for persistence and config.
    pub fn code(self) -> &'static str {
        match self {
            Language::Fi => "fi",
            Language::En => "en",
        }
    }

    /// Parse a stored language code. Only exact `fi` / `en` are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fi" => Some(Language::Fi),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Long date the way the device locale renders it:
    /// `lauantai 18. lokakuuta 2026` / `Saturday, October 18, 2026`.
    pub fn format_long_date(self, date: NaiveDate) -> String {
        let month = date.month0() as usize;
        match self {
            Language::Fi => format!(
                "{} {}. {} {}",
                finnish_weekday(date.weekday()),
                date.day(),
                FINNISH_MONTHS[month],
                date.year()
            ),
            Language::En => format!(
                "{}, {} {}, {}",
                english_weekday(date.weekday()),
                ENGLISH_MONTHS[month],
                date.day(),
                date.year()
            ),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

const FINNISH_MONTHS: [&str; 12] = [
    "tammikuuta",
    "helmikuuta",
    "maaliskuuta",
    "huhtikuuta",
    "toukokuuta",
    "kesäkuuta",
    "heinäkuuta",
    "elokuuta",
    "syyskuuta",
    "lokakuuta",
    "marraskuuta",
    "joulukuuta",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn finnish_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "maanantai",
        Weekday::Tue => "tiistai",
        Weekday::Wed => "keskiviikko",
        Weekday::Thu => "torstai",
        Weekday::Fri => "perjantai",
        Weekday::Sat => "lauantai",
        Weekday::Sun => "sunnuntai",
    }
}

fn english_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

macro_rules! translation_keys {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Name of a UI string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TranslationKey {
            $($variant),+
        }

        impl TranslationKey {
            pub const ALL: &'static [TranslationKey] = &[$(TranslationKey::$variant),+];

            /// The camelCase key name, also the fallback text.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(TranslationKey::$variant => $name),+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(TranslationKey::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

translation_keys! {
    // Navigation
    Hq => "hq",
    Challenge => "challenge",
    SetAlarm => "setAlarm",
    MyGarden => "myGarden",
    MyAccount => "myAccount",
    // HQ
    Welcome => "welcome",
    EkokumppanitServices => "ekokumppanitServices",
    EnvironmentalAwareness => "environmentalAwareness",
    WeatherForecast => "weatherForecast",
    // Account
    HelloNotSignedIn => "helloNotSignedIn",
    SignInWithApple => "signInWithApple",
    SignInWithGoogle => "signInWithGoogle",
    SignInWithEmail => "signInWithEmail",
    // Environmental awareness
    EnvironmentalAwarenessTitle => "environmentalAwarenessTitle",
    EnvSection1Title => "envSection1Title",
    EnvSection1Body1 => "envSection1Body1",
    EnvSection1Body2 => "envSection1Body2",
    EnvSection2Title => "envSection2Title",
    EnvSection2Body1 => "envSection2Body1",
    EnvSection2Body2 => "envSection2Body2",
    EnvNext => "envNext",
    // Weather forecast
    WeatherTitle => "weatherTitle",
    Sunrise => "sunrise",
    Sunset => "sunset",
    WeatherMorningTitle => "weatherMorningTitle",
    WeatherNoonTitle => "weatherNoonTitle",
    WeatherEveningTitle => "weatherEveningTitle",
    WeatherNightTitle => "weatherNightTitle",
    WeatherLocation => "weatherLocation",
    WeatherLoading => "weatherLoading",
    WeatherError => "weatherError",
    WeatherClear => "weatherClear",
    WeatherMostlyClear => "weatherMostlyClear",
    WeatherOvercast => "weatherOvercast",
    WeatherFog => "weatherFog",
    WeatherDrizzle => "weatherDrizzle",
    WeatherRain => "weatherRain",
    WeatherSnow => "weatherSnow",
    WeatherShowers => "weatherShowers",
    WeatherThunder => "weatherThunder",
    WeatherUnknown => "weatherUnknown",
}

/// Look up the text for `key`. Empty table entries fall back to the key name.
pub fn translate(language: Language, key: TranslationKey) -> &'static str {
    let text = match language {
        Language::Fi => finnish(key),
        Language::En => english(key),
    };
    if text.is_empty() {
        key.as_str()
    } else {
        text
    }
}

/// Look up a key that arrives as a string. Unknown keys come back verbatim.
pub fn translate_raw<'a>(language: Language, raw: &'a str) -> &'a str {
    match TranslationKey::from_name(raw) {
        Some(key) => translate(language, key),
        None => {
            tracing::debug!(key = raw, "Missing translation key");
            raw
        }
    }
}

fn finnish(key: TranslationKey) -> &'static str {
    use TranslationKey::*;
    match key {
        Hq => "HQ",
        Challenge => "Haaste",
        SetAlarm => "Aseta Hälytys",
        MyGarden => "Minun Puutarha",
        MyAccount => "Tilini",
        Welcome => "Tervetuloa Ulkohälytiniin",
        EkokumppanitServices => "Ekokumppanit Oy palvelut",
        EnvironmentalAwareness => "Ympäristötietoisuus",
        WeatherForecast => "Sääennuste",
        HelloNotSignedIn => "Hei rakas, et ole kirjautunut sisään.",
        SignInWithApple => "Kirjaudu sisään Applen avulla",
        SignInWithGoogle => "Kirjaudu sisään Googlen avulla",
        SignInWithEmail => "Kirjaudu sisään sähköpostilla",
        EnvironmentalAwarenessTitle => "YMPÄRISTÖTIETOISUUS",
        EnvSection1Title => "Älä lähesty villieläimiä",
        EnvSection1Body1 => "Vaikka joidenkin hyönteisten, sienten ja kasvien käsittely voi olla turvallista, useimpia villieläimiä on parasta tarkkailla etäältä. Kaikista muista do's and don'ts -ohjeista tämä voi olla yksi tärkeimmistä oman turvallisuutesi kannalta.",
        EnvSection1Body2 => "Kaikki, jolla on suu, voi purra, ja jopa pienet eläimet kuten oravat tai hiiret voivat aiheuttaa ikävän haavan, jos niitä käsitellään.",
        EnvSection2Title => "Älä käytä toistoja lintujen tai muun villieläimistön houkuttelemiseen",
        EnvSection2Body1 => "Monissa lintuihin liittyvissä verkkosivuissa ja sovelluksissa on toimintoja, jotka soittavat lintujen laulua tai kutsuja oppimisen tueksi. Kuten jotkut ovat huomanneet, nämä toistot voivat myös houkutella tai ärsyttää lintuja ja tehdä ne helpommin nähtäviksi.",
        EnvSection2Body2 => "Vaikka tämä saattaa kuulostaa hyvältä idealta, se voi olla pitkällä aikavälillä hyvin haitallista. Lintujen laulun toisto simuloi tunkeutujaa lintujen reviirillä, mikä voi aiheuttaa niille paljon stressiä. Se olisi samanlaista kuin joku kävelisi kotiisi ja soittaisi ääntä, jossa sanotaan haluttavan ryöstää sinut!",
        EnvNext => "seuraava",
        WeatherTitle => "Sääennuste",
        Sunrise => "Auringonnousu",
        Sunset => "Auringonlasku",
        WeatherMorningTitle => "Aamu",
        WeatherNoonTitle => "Päivä",
        WeatherEveningTitle => "Ilta",
        WeatherNightTitle => "Yö",
        WeatherLocation => "Tampere, Finland",
        WeatherLoading => "Haetaan säätietoja...",
        WeatherError => "Säätietoja ei voitu hakea.",
        WeatherClear => "Selkeää",
        WeatherMostlyClear => "Melko selkeää",
        WeatherOvercast => "Pilvistä",
        WeatherFog => "Sumua",
        WeatherDrizzle => "Tihkusadetta",
        WeatherRain => "Sadetta",
        WeatherSnow => "Lunta",
        WeatherShowers => "Sadekuuroja",
        WeatherThunder => "Ukkosta",
        WeatherUnknown => "Sää tuntematon",
    }
}

fn english(key: TranslationKey) -> &'static str {
    use TranslationKey::*;
    match key {
        Hq => "HQ",
        Challenge => "Challenge",
        SetAlarm => "Set Alarm",
        MyGarden => "My Garden",
        MyAccount => "My Account",
        Welcome => "Welcome to Ulkohälytin",
        EkokumppanitServices => "Ekokumppanit Oy Services",
        EnvironmentalAwareness => "Environmental Awareness",
        WeatherForecast => "Weather Forecast",
        HelloNotSignedIn => "Hello dear, you are not signed in.",
        SignInWithApple => "Sign in with Apple",
        SignInWithGoogle => "Sign in with Google",
        SignInWithEmail => "Sign in with email",
        EnvironmentalAwarenessTitle => "ENVIRONMENTAL AWARENESS",
        EnvSection1Title => "Don’t approach wildlife",
        EnvSection1Body1 => "While handling some insects, fungi, and plants can be safe, most wildlife are best observed from a distance. Among all the other do’s and don’ts, this may be one of the most important for your own personal safety.",
        EnvSection1Body2 => "Anything with a mouth can bite, and even small animals like squirrels or mice can inflict a nasty wound if handled.",
        EnvSection2Title => "Don’t use playback to attract birds or other wildlife",
        EnvSection2Body1 => "Many bird-related websites and apps have features that will play back bird songs or calls to help you learn. However, as some people have learned, these playbacks can also attract or agitate birds, making them easier to see.",
        EnvSection2Body2 => "While this might sound like a great idea, it can be very harmful in the long run. Song playback simulates an intruder on a birds’ territory, which can cause them a lot of stress. That would be similar to someone walking into your home and playing audio of a voice saying they wanted to rob you!",
        EnvNext => "next",
        WeatherTitle => "Weather Forecast",
        Sunrise => "Sunrise",
        Sunset => "Sunset",
        WeatherMorningTitle => "Morning",
        WeatherNoonTitle => "Noon",
        WeatherEveningTitle => "Evening",
        WeatherNightTitle => "Night",
        WeatherLocation => "Tampere, Finland",
        WeatherLoading => "Loading weather...",
        WeatherError => "Unable to load weather data.",
        WeatherClear => "Clear",
        WeatherMostlyClear => "Mostly clear",
        WeatherOvercast => "Overcast",
        WeatherFog => "Fog",
        WeatherDrizzle => "Drizzle",
        WeatherRain => "Rain",
        WeatherSnow => "Snow",
        WeatherShowers => "Showers",
        WeatherThunder => "Thunderstorm",
        WeatherUnknown => "Unknown",
    }
}

/// Partner services shown on the HQ screen, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceId {
    Ekokumppanit,
    Outdoor,
    Jarvienreitit,
}

impl ServiceId {
    pub const ORDER: [ServiceId; 3] = [
        ServiceId::Ekokumppanit,
        ServiceId::Outdoor,
        ServiceId::Jarvienreitit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceId::Ekokumppanit => "ekokumppanit",
            ServiceId::Outdoor => "outdoor",
            ServiceId::Jarvienreitit => "jarvienreitit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|s| s.as_str() == id)
    }

    /// The service after this one, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|s| *s == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }
}

/// Localized description of a partner service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartnerService {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

/// Look up a partner service by its string id. Unknown ids yield an empty service.
pub fn partner_service(language: Language, id: &str) -> PartnerService {
    ServiceId::from_id(id)
        .map(|service| service_text(language, service))
        .unwrap_or_default()
}

pub fn service_text(language: Language, service: ServiceId) -> PartnerService {
    match (language, service) {
        (Language::Fi, ServiceId::Ekokumppanit) => PartnerService {
            title: "Neuvoo.fi",
            subtitle: "ILMAINEN JA PUOLUEETON ENERGIA-NEUVONTA",
            description: "Tarjoaa puolueetonta neuvontaa energiatehokkaasta asumisesta, remontoinnista ja rakentamisesta sekä ajankohtaisia tietoja muun muassa eri energiamuodoista ja lämmityksestä.",
            details: "Neuvonnan rahoittavat Energiavirasto, Tampereen Energia ja Tampereen kaupunki. Neuvoo.fi – Energianeuvonta, Ekokumppanit Oy:n tytäryhtiö, Tampereen kaupunkiryhmän osa, on osa Motivan koordinoimaa maakunnallista energianeuvontaverkostoa.",
        },
        (Language::Fi, ServiceId::Outdoor) => PartnerService {
            title: "Outdoorstampere.fi",
            subtitle: "Tampere urban region outdoor and hiking map service",
            description: "Palvelu esittelee Tampereen kaupunkiseudun retkeilyreittejä, uimarantoja, nuotiopaikkoja ja muita ulkoiluun liittyviä palveluja ja kohteita kuntarajojen yli.",
            details: "Palvelun lähtökohtana on ollut koota kaikki Tampereen, Kangasalan, Lempäälän, Nokian, Oriveden, Pirkkalan, Vesilahden ja Ylöjärven retkeilypalvelut ja kohteet yhteen paikkaan, jota kuka tahansa voi käyttää vapaasti ja ilmaiseksi.",
        },
        (Language::Fi, ServiceId::Jarvienreitit) => PartnerService {
            title: "Jarvienreitit.fi",
            subtitle: "Löydä Suomen järviseutujen parhaat pyöräretket",
            description: "Nauti suunnitelluista reiteistä kokonaan polkupyörällä tai yhdistä ne juna- ja laivayhteyksiin seikkailuasi varten, valinta on sinun. Voit myös suunnitella ja räätälöidä matkasi reittisuunnittelijan avulla.",
            details: "Kulje rapsakkaa sorapolkua maatilalle, missä viihtyisä majoitus ja järvenrantasaunan kutsu odottavat sinua.",
        },
        (Language::En, ServiceId::Ekokumppanit) => PartnerService {
            title: "Neuvoo.fi",
            subtitle: "FREE AND IMPARTIAL ENERGY ADVICE",
            description: "Offers unbiased advice regarding energy-efficient living, renovation and construction, as well as the latest information on, among other things, different forms of energy and heating.",
            details: "The consultation is funded by Energiavirasto, Tampereen Energia and City of Tampere. Neuvoo.fi – Energianeuvonta, a subsidiary of Ekokumppanit Oy, part of the Tampere city group, is part of the provincial energy advisory network coordinated by Motiva.",
        },
        (Language::En, ServiceId::Outdoor) => PartnerService {
            title: "Outdoorstampere.fi",
            subtitle: "Tampere urban region outdoor and hiking map service",
            description: "The service presents the Tampere urban region's hiking trails, beaches, campfire sites, and other outdoor-related services and destinations, across municipal borders.",
            details: "The starting point of the service has been to gather all the hiking services and destinations in Tampere, Kangasala, Lempäälä, Nokia, Orivesi, Pirkkala, Vesilahti, and Ylöjärvi into one place, which anyone can use freely and without charge.",
        },
        (Language::En, ServiceId::Jarvienreitit) => PartnerService {
            title: "Jarvienreitit.fi",
            subtitle: "Discover the best of Finnish countryside travel by bike along the Lake Trails",
            description: "Enjoy the planned routes entirely on your bicycle or combine them with train and boat connections for your adventure, the choice is yours. You can also plan and customize your trip using our route planner.",
            details: "Follow a crunchy gravel path leading to a farmstead, where cozy accommodation and the call of a lakeside sauna await you.",
        },
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_every_key_has_text_in_both_languages() {
        for key in TranslationKey::ALL {
            assert!(!finnish(*key).is_empty(), "fi missing {}", key.as_str());
            assert!(!english(*key).is_empty(), "en missing {}", key.as_str());
        }
    }

    #[test]
    fn test_key_names_roundtrip() {
        for key in TranslationKey::ALL {
            assert_eq!(TranslationKey::from_name(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_translate_by_language() {
        assert_eq!(translate(Language::Fi, TranslationKey::WeatherClear), "Selkeää");
        assert_eq!(translate(Language::En, TranslationKey::WeatherClear), "Clear");
        assert_eq!(translate(Language::En, TranslationKey::WeatherThunder), "Thunderstorm");
    }

    #[test]
    fn test_unknown_raw_key_is_returned_verbatim() {
        assert_eq!(translate_raw(Language::Fi, "noSuchKey"), "noSuchKey");
        assert_eq!(translate_raw(Language::En, "weatherError"), "Unable to load weather data.");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("fi"), Some(Language::Fi));
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("FI"), None);
        assert_eq!(Language::from_code("sv"), None);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_long_date_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(Language::Fi.format_long_date(date), "lauantai 17. lokakuuta 2026");
        assert_eq!(Language::En.format_long_date(date), "Saturday, October 17, 2026");
    }

    #[test]
    fn test_partner_services() {
        assert_eq!(partner_service(Language::En, "outdoor").title, "Outdoorstampere.fi");
        assert_eq!(
            partner_service(Language::Fi, "ekokumppanit").subtitle,
            "ILMAINEN JA PUOLUEETON ENERGIA-NEUVONTA"
        );
        assert_eq!(partner_service(Language::En, "missing"), PartnerService::default());
        assert_eq!(ServiceId::Jarvienreitit.next(), ServiceId::Ekokumppanit);
    }
}
