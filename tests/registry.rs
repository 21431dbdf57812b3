//! 레지스트리 불변식 테스트.
use convertly::quantity::CategoryKind;
use convertly::units::{Category, Registry, RegistryIssue, UnitDefinition};

#[test]
fn builtin_registry_is_valid() {
    let registry = Registry::global();
    assert_eq!(registry.validate(), Vec::<RegistryIssue>::new());
    assert_eq!(registry.len(), CategoryKind::ALL.len());
    for kind in CategoryKind::ALL {
        let cat = registry.category(kind.name()).expect("category registered");
        assert_eq!(cat.kind, kind);
        if !cat.is_temperature() {
            assert!(cat.base_unit().is_some(), "{kind} base unit");
        }
    }
}

#[test]
fn temperature_has_no_linear_units() {
    let temp = Registry::global().category("Temperature").expect("temperature");
    assert!(temp.is_temperature());
    assert!(temp.units().is_empty());
    assert_eq!(temp.display_units().len(), 3);
}

#[test]
fn base_units() {
    let registry = Registry::default();
    let base = |name: &str| registry.category(name).and_then(Category::base_unit);
    assert_eq!(base("Length").map(|u| u.abbreviation), Some("m"));
    assert_eq!(base("Data").map(|u| u.abbreviation), Some("B"));
    assert_eq!(base("Volume").map(|u| u.abbreviation), Some("L"));
}

#[test]
fn validate_reports_each_violation() {
    const DUP: &[UnitDefinition] = &[
        UnitDefinition::new("Meters", "m", 1.0),
        UnitDefinition::new("Metres", "m", 1.0),
    ];
    const BAD: &[UnitDefinition] = &[
        UnitDefinition::new("Grams", "g", 0.001),
        UnitDefinition::new("Nothing", "z", 0.0),
    ];
    let registry = Registry::new(vec![
        Category::linear(CategoryKind::Length, DUP),
        Category::linear(CategoryKind::Weight, BAD),
        Category::linear(CategoryKind::Length, DUP),
    ]);
    let issues = registry.validate();
    assert!(issues.contains(&RegistryIssue::DuplicateAbbreviation {
        category: "Length",
        abbreviation: "m",
    }));
    assert!(issues.contains(&RegistryIssue::InvalidScale {
        category: "Weight",
        abbreviation: "z",
        scale: 0.0,
    }));
    assert!(issues.contains(&RegistryIssue::MissingBaseUnit("Weight")));
    assert!(issues.contains(&RegistryIssue::DuplicateCategory("Length")));
    // 이름이 겹치면 먼저 등록된 범주가 조회된다.
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.category("Length").map(|c| c.units().len()), Some(2));
}

#[test]
fn category_names_round_trip() {
    for kind in CategoryKind::ALL {
        assert_eq!(CategoryKind::from_name(kind.name()), Some(kind));
        assert_eq!(kind.to_string(), kind.name());
    }
    assert_eq!(CategoryKind::from_name("Nope"), None);
}
