//! 번역기 동작 회귀 테스트.
use quantity_converter_toolbox::i18n::{keys, resolve_language, Translator};

#[test]
fn built_in_strings_resolve_without_pack() {
    let tr = Translator::new("en");
    assert!(!tr.t(keys::MAIN_MENU_TITLE).is_empty());
    assert!(!tr.t(keys::APP_EXIT).is_empty());
}

#[test]
fn pack_lookup_returns_stable_references() {
    let tr = Translator::new_with_pack("en-us", None);
    let first = tr.t(keys::MAIN_MENU_TITLE);
    let second = tr.t(keys::MAIN_MENU_TITLE);
    // 언어팩 문자열은 생성 시 한 번만 적재되므로 같은 참조가 나와야 한다
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, second);
}

#[test]
fn cli_flag_beats_config_language() {
    assert_eq!(resolve_language("ko", Some("en-us")), "ko");
    assert_eq!(resolve_language("auto", Some("en-us")), "en-us");
}
