use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::quantity::PhysicalQuantity;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_CONVERTER_CATALOG: &str = "main_menu.converter_catalog";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const CATALOG_HEADING: &str = "catalog.heading";
    pub const CATALOG_PROMPT_QUANTITY: &str = "catalog.prompt_quantity";
    pub const CATALOG_AVAILABLE: &str = "catalog.available";
    pub const CATALOG_EMPTY: &str = "catalog.empty";
    pub const CATALOG_PROMPT_CONVERTER: &str = "catalog.prompt_converter";
    pub const CATALOG_PROMPT_LEFT_VALUE: &str = "catalog.prompt_left_value";
    pub const CATALOG_PROMPT_LEFT_UNIT: &str = "catalog.prompt_left_unit";
    pub const CATALOG_PROMPT_RIGHT_VALUE: &str = "catalog.prompt_right_value";
    pub const CATALOG_PROMPT_RIGHT_UNIT: &str = "catalog.prompt_right_unit";
    pub const CATALOG_RESULT: &str = "catalog.result";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_CONVERTER_CATALOG: &str = "help.converter_catalog";
    pub const HELP_SETTINGS: &str = "help.settings";

    pub const QUANTITY_LENGTH: &str = "quantity.length";
    pub const QUANTITY_AREA: &str = "quantity.area";
    pub const QUANTITY_VOLUME: &str = "quantity.volume";
    pub const QUANTITY_TIME: &str = "quantity.time";
    pub const QUANTITY_FREQUENCY: &str = "quantity.frequency";
    pub const QUANTITY_MASS: &str = "quantity.mass";
    pub const QUANTITY_DENSITY: &str = "quantity.density";
    pub const QUANTITY_SPECIFIC_VOLUME: &str = "quantity.specific_volume";
    pub const QUANTITY_SPEED: &str = "quantity.speed";
    pub const QUANTITY_ACCELERATION: &str = "quantity.acceleration";
    pub const QUANTITY_MOMENTUM: &str = "quantity.momentum";
    pub const QUANTITY_FORCE: &str = "quantity.force";
    pub const QUANTITY_PRESSURE: &str = "quantity.pressure";
    pub const QUANTITY_ENERGY: &str = "quantity.energy";
    pub const QUANTITY_POWER: &str = "quantity.power";
    pub const QUANTITY_ELECTRIC_CURRENT: &str = "quantity.electric_current";
    pub const QUANTITY_ELECTRIC_CHARGE: &str = "quantity.electric_charge";
    pub const QUANTITY_VOLTAGE: &str = "quantity.voltage";
    pub const QUANTITY_ELECTRIC_RESISTANCE: &str = "quantity.electric_resistance";
    pub const QUANTITY_TEMPERATURE: &str = "quantity.temperature";
}

/// 물리량의 표시 이름을 찾는 i18n 키.
pub fn quantity_key(quantity: PhysicalQuantity) -> &'static str {
    use keys::*;
    match quantity {
        PhysicalQuantity::Length => QUANTITY_LENGTH,
        PhysicalQuantity::Area => QUANTITY_AREA,
        PhysicalQuantity::Volume => QUANTITY_VOLUME,
        PhysicalQuantity::Time => QUANTITY_TIME,
        PhysicalQuantity::Frequency => QUANTITY_FREQUENCY,
        PhysicalQuantity::Mass => QUANTITY_MASS,
        PhysicalQuantity::Density => QUANTITY_DENSITY,
        PhysicalQuantity::SpecificVolume => QUANTITY_SPECIFIC_VOLUME,
        PhysicalQuantity::Speed => QUANTITY_SPEED,
        PhysicalQuantity::Acceleration => QUANTITY_ACCELERATION,
        PhysicalQuantity::Momentum => QUANTITY_MOMENTUM,
        PhysicalQuantity::Force => QUANTITY_FORCE,
        PhysicalQuantity::Pressure => QUANTITY_PRESSURE,
        PhysicalQuantity::Energy => QUANTITY_ENERGY,
        PhysicalQuantity::Power => QUANTITY_POWER,
        PhysicalQuantity::ElectricCurrent => QUANTITY_ELECTRIC_CURRENT,
        PhysicalQuantity::ElectricCharge => QUANTITY_ELECTRIC_CHARGE,
        PhysicalQuantity::Voltage => QUANTITY_VOLTAGE,
        PhysicalQuantity::ElectricResistance => QUANTITY_ELECTRIC_RESISTANCE,
        PhysicalQuantity::Temperature => QUANTITY_TEMPERATURE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
///
/// 언어팩 맵은 생성 시점에 한 번 누수시켜 `'static` 수명으로 만든다.
/// 번역기는 시작 시와 설정 저장 시에만 만들어지므로 조회마다 복사본이
/// 쌓이지 않는다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<&'static HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code))
            .map(|m| &*Box::leak(Box::new(m)));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(map) = self.overrides {
            if let Some(v) = map.get(key) {
                return v.as_str();
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Quantity Converter Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) 단위 변환기",
        MAIN_MENU_CONVERTER_CATALOG => "2) 물리량 변환 카탈로그",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_PROMPT_KIND => "물리량 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: m, kg, psi): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: ft, lb, bar): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        CATALOG_HEADING => "\n-- 물리량 변환 카탈로그 --",
        CATALOG_PROMPT_QUANTITY => "출발 물리량 번호를 입력: ",
        CATALOG_AVAILABLE => "사용 가능한 변환:",
        CATALOG_EMPTY => "이 물리량에서 출발하는 변환이 없습니다.",
        CATALOG_PROMPT_CONVERTER => "변환 번호를 입력: ",
        CATALOG_PROMPT_LEFT_VALUE => "값 입력: ",
        CATALOG_PROMPT_LEFT_UNIT => "단위: ",
        CATALOG_PROMPT_RIGHT_VALUE => "우변 값 입력: ",
        CATALOG_PROMPT_RIGHT_UNIT => "우변 단위: ",
        CATALOG_RESULT => "결과:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다:",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        HELP_UNIT_CONVERSION => "도움말: 물리량 번호 → 값 → 입력/변환 단위 순으로 입력 (예: m/ft/in, kg/lb, Pa/psi).",
        HELP_CONVERTER_CATALOG => "도움말: 출발 물리량을 고르면 적용 가능한 변환 목록이 나옵니다. 이항 변환은 우변 값도 입력합니다.",
        HELP_SETTINGS => "도움말: 단위 시스템 프리셋을 선택하면 기본 단위 세트가 바뀝니다 (SI/Imperial).",
        QUANTITY_LENGTH => "길이",
        QUANTITY_AREA => "면적",
        QUANTITY_VOLUME => "체적",
        QUANTITY_TIME => "시간",
        QUANTITY_FREQUENCY => "주파수",
        QUANTITY_MASS => "질량",
        QUANTITY_DENSITY => "밀도",
        QUANTITY_SPECIFIC_VOLUME => "비체적",
        QUANTITY_SPEED => "속도",
        QUANTITY_ACCELERATION => "가속도",
        QUANTITY_MOMENTUM => "운동량",
        QUANTITY_FORCE => "힘",
        QUANTITY_PRESSURE => "압력",
        QUANTITY_ENERGY => "에너지",
        QUANTITY_POWER => "동력",
        QUANTITY_ELECTRIC_CURRENT => "전류",
        QUANTITY_ELECTRIC_CHARGE => "전하",
        QUANTITY_VOLTAGE => "전압",
        QUANTITY_ELECTRIC_RESISTANCE => "전기 저항",
        QUANTITY_TEMPERATURE => "온도",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Quantity Converter Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) Unit Converter",
        MAIN_MENU_CONVERTER_CATALOG => "2) Quantity Converter Catalog",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_PROMPT_KIND => "Enter quantity number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: m, kg, psi): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: ft, lb, bar): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        CATALOG_HEADING => "\n-- Quantity Converter Catalog --",
        CATALOG_PROMPT_QUANTITY => "Enter source quantity number: ",
        CATALOG_AVAILABLE => "Available conversions:",
        CATALOG_EMPTY => "No conversions start from this quantity.",
        CATALOG_PROMPT_CONVERTER => "Enter conversion number: ",
        CATALOG_PROMPT_LEFT_VALUE => "Value: ",
        CATALOG_PROMPT_LEFT_UNIT => "Unit: ",
        CATALOG_PROMPT_RIGHT_VALUE => "Right-hand value: ",
        CATALOG_PROMPT_RIGHT_UNIT => "Right-hand unit: ",
        CATALOG_RESULT => "Result:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) SI  2) Imperial",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HELP_UNIT_CONVERSION => "Help: choose quantity → enter value → from/to units (m/ft/in, kg/lb, Pa/psi, etc).",
        HELP_CONVERTER_CATALOG => "Help: pick a source quantity to list applicable conversions. Binary conversions also ask for the right-hand value.",
        HELP_SETTINGS => "Help: unit-system preset changes default units (SI/Imperial).",
        QUANTITY_LENGTH => "Length",
        QUANTITY_AREA => "Area",
        QUANTITY_VOLUME => "Volume",
        QUANTITY_TIME => "Time",
        QUANTITY_FREQUENCY => "Frequency",
        QUANTITY_MASS => "Mass",
        QUANTITY_DENSITY => "Density",
        QUANTITY_SPECIFIC_VOLUME => "Specific Volume",
        QUANTITY_SPEED => "Speed",
        QUANTITY_ACCELERATION => "Acceleration",
        QUANTITY_MOMENTUM => "Momentum",
        QUANTITY_FORCE => "Force",
        QUANTITY_PRESSURE => "Pressure",
        QUANTITY_ENERGY => "Energy",
        QUANTITY_POWER => "Power",
        QUANTITY_ELECTRIC_CURRENT => "Electric Current",
        QUANTITY_ELECTRIC_CHARGE => "Electric Charge",
        QUANTITY_VOLTAGE => "Voltage",
        QUANTITY_ELECTRIC_RESISTANCE => "Electric Resistance",
        QUANTITY_TEMPERATURE => "Temperature",
        _ => return None,
    })
}
