use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::converters;
use crate::i18n::{keys, quantity_key, Translator};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    ConverterCatalog,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERTER_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::ConverterCatalog),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn print_quantity_list(tr: &Translator) {
    for (i, q) in PhysicalQuantity::ALL.iter().enumerate() {
        print!("{:>2}) {}  ", i + 1, tr.t(quantity_key(*q)));
        if (i + 1) % 5 == 0 {
            println!();
        }
    }
}

fn read_quantity(tr: &Translator, prompt: &str) -> Result<PhysicalQuantity, AppError> {
    loop {
        let sel = read_line(prompt)?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if n >= 1 && n <= PhysicalQuantity::ALL.len() {
                return Ok(PhysicalQuantity::ALL[n - 1]);
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    print_quantity_list(tr);
    let quantity = read_quantity(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(quantity, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

/// 물리량 변환 카탈로그 메뉴를 처리한다.
pub fn handle_converter_catalog(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CATALOG_HEADING));
    print_quantity_list(tr);
    let quantity = read_quantity(tr, tr.t(keys::CATALOG_PROMPT_QUANTITY))?;
    let list = converters::converters_for(quantity);
    if list.is_empty() {
        println!("{}", tr.t(keys::CATALOG_EMPTY));
        return Ok(());
    }
    println!("{}", tr.t(keys::CATALOG_AVAILABLE));
    for (i, c) in list.iter().enumerate() {
        println!("{:>2}) {}", i + 1, c.name());
    }
    let converter = loop {
        let sel = read_line(tr.t(keys::CATALOG_PROMPT_CONVERTER))?;
        if let Ok(n) = sel.trim().parse::<usize>() {
            if n >= 1 && n <= list.len() {
                break &list[n - 1];
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY))
    };

    let left_value = read_f64(tr, tr.t(keys::CATALOG_PROMPT_LEFT_VALUE))?;
    let left_unit = read_unit(
        tr,
        tr.t(keys::CATALOG_PROMPT_LEFT_UNIT),
        converter.source(),
        cfg.default_units.unit_for(converter.source()),
    )?;
    let left = QuantityValue::new(left_value, left_unit);

    let result = match converter.operand() {
        Some((_, right_quantity)) => {
            let right_value = read_f64(tr, tr.t(keys::CATALOG_PROMPT_RIGHT_VALUE))?;
            let right_unit = read_unit(
                tr,
                tr.t(keys::CATALOG_PROMPT_RIGHT_UNIT),
                right_quantity,
                cfg.default_units.unit_for(right_quantity),
            )?;
            let right = QuantityValue::new(right_value, right_unit);
            converter.convert_with(&left, &right)?
        }
        None => converter.convert(&left)?,
    };
    println!("{} {result}", tr.t(keys::CATALOG_RESULT));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.apply_unit_system(UnitSystem::SI),
        "2" => cfg.apply_unit_system(UnitSystem::Imperial),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 단위 기호를 읽는다. 빈 입력이면 설정의 기본 단위를 사용한다.
fn read_unit(
    tr: &Translator,
    prompt: &str,
    quantity: PhysicalQuantity,
    default: AnyUnit,
) -> Result<AnyUnit, AppError> {
    let symbols: Vec<&str> = quantity.units().iter().map(|u| u.symbol()).collect();
    println!("({})", symbols.join(", "));
    loop {
        let s = read_line(prompt)?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match conversion::parse_unit(quantity, trimmed) {
            Ok(unit) => return Ok(unit),
            Err(e) => println!("{} {e}", tr.t(keys::ERROR_PREFIX)),
        }
    }
}
