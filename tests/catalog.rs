//! 변환기 카탈로그 메타데이터 일관성 테스트.
use quantity_converter_toolbox::conversion;
use quantity_converter_toolbox::converters;
use quantity_converter_toolbox::quantity::PhysicalQuantity;

#[test]
fn every_quantity_except_temperature_has_converters() {
    for q in PhysicalQuantity::ALL {
        let list = converters::converters_for(q);
        if q == PhysicalQuantity::Temperature {
            assert!(list.is_empty());
        } else {
            assert!(!list.is_empty(), "no converters for {}", q.name());
        }
    }
}

#[test]
fn converter_source_matches_its_quantity() {
    for q in PhysicalQuantity::ALL {
        for c in converters::converters_for(q) {
            assert_eq!(c.source(), q, "converter {} listed under {}", c.name(), q.name());
        }
    }
}

#[test]
fn converter_names_mention_the_target() {
    for q in PhysicalQuantity::ALL {
        for c in converters::converters_for(q) {
            assert!(
                c.name().contains(c.target().name()),
                "name '{}' does not mention target {}",
                c.name(),
                c.target().name()
            );
        }
    }
}

#[test]
fn binary_converter_names_carry_operator_symbol() {
    for q in PhysicalQuantity::ALL {
        for c in converters::converters_for(q) {
            if let Some((op, _)) = c.operand() {
                assert!(
                    c.name().contains(op.symbol()),
                    "name '{}' missing operator {}",
                    c.name(),
                    op.symbol()
                );
            }
        }
    }
}

#[test]
fn every_unit_symbol_parses_back() {
    for q in PhysicalQuantity::ALL {
        for unit in q.units() {
            let parsed = conversion::parse_unit(q, unit.symbol())
                .unwrap_or_else(|e| panic!("symbol {} failed to parse: {e}", unit.symbol()));
            assert_eq!(parsed, unit);
        }
    }
}
