//! 내장 단위 표와 전역 레지스트리.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Category, CategoryScale, UnitDefinition};
use crate::quantity::CategoryKind;

const LENGTH: &[UnitDefinition] = &[
    UnitDefinition::new("Meters", "m", 1.0),
    UnitDefinition::new("Feet", "ft", 0.3048),
    UnitDefinition::new("Inches", "in", 0.0254),
    UnitDefinition::new("Kilometers", "km", 1000.0),
    UnitDefinition::new("Miles", "mi", 1609.34),
];

const WEIGHT: &[UnitDefinition] = &[
    UnitDefinition::new("Kilograms", "kg", 1.0),
    UnitDefinition::new("Pounds", "lb", 0.453592),
    UnitDefinition::new("Grams", "g", 0.001),
    UnitDefinition::new("Ounces", "oz", 0.0283495),
];

const AREA: &[UnitDefinition] = &[
    UnitDefinition::new("Square Meters", "m²", 1.0),
    UnitDefinition::new("Square Kilometers", "km²", 1_000_000.0),
    UnitDefinition::new("Square Feet", "ft²", 0.092903),
    UnitDefinition::new("Acres", "ac", 4046.86),
    UnitDefinition::new("Hectares", "ha", 10_000.0),
];

const VOLUME: &[UnitDefinition] = &[
    UnitDefinition::new("Liters", "L", 1.0),
    UnitDefinition::new("Milliliters", "mL", 0.001),
    UnitDefinition::new("Cubic Meters", "m³", 1000.0),
    UnitDefinition::new("Cubic Inches", "in³", 0.0163871),
    UnitDefinition::new("Gallons", "gal", 3.78541),
];

const SPEED: &[UnitDefinition] = &[
    UnitDefinition::new("Meters/Second", "m/s", 1.0),
    UnitDefinition::new("Kilometers/Hour", "km/h", 0.277778),
    UnitDefinition::new("Miles/Hour", "mph", 0.44704),
    UnitDefinition::new("Feet/Second", "ft/s", 0.3048),
    // 표시 문자열과의 호환을 위해 약어에 쉼표가 들어간다.
    UnitDefinition::new("Knots", "kn, kt", 0.514444),
];

const TIME: &[UnitDefinition] = &[
    UnitDefinition::new("Seconds", "s", 1.0),
    UnitDefinition::new("Minutes", "min", 60.0),
    UnitDefinition::new("Hours", "h", 3600.0),
    UnitDefinition::new("Days", "d", 86400.0),
];

const PRESSURE: &[UnitDefinition] = &[
    UnitDefinition::new("Pascals", "Pa", 1.0),
    UnitDefinition::new("Bar", "bar", 100_000.0),
    UnitDefinition::new("PSI", "psi", 6894.76),
    UnitDefinition::new("Atmospheres", "atm", 101_325.0),
];

const ENERGY: &[UnitDefinition] = &[
    UnitDefinition::new("Joules", "J", 1.0),
    UnitDefinition::new("Kilojoules", "kJ", 1000.0),
    UnitDefinition::new("Calories", "cal", 4.184),
    UnitDefinition::new("Kilocalories", "kcal", 4184.0),
];

const POWER: &[UnitDefinition] = &[
    UnitDefinition::new("Watts", "W", 1.0),
    UnitDefinition::new("Kilowatts", "kW", 1000.0),
    UnitDefinition::new("Horsepower", "hp", 745.7),
];

const DATA: &[UnitDefinition] = &[
    UnitDefinition::new("Bytes", "B", 1.0),
    UnitDefinition::new("Kilobytes", "KB", 1024.0),
    UnitDefinition::new("Megabytes", "MB", 1_048_576.0),
    UnitDefinition::new("Gigabytes", "GB", 1_073_741_824.0),
    UnitDefinition::new("Terabytes", "TB", 1.0995e12),
];

const FORCE: &[UnitDefinition] = &[
    UnitDefinition::new("Newtons", "N", 1.0),
    UnitDefinition::new("Kilonewtons", "kN", 1000.0),
    UnitDefinition::new("Pound-force", "lbf", 4.44822),
];

const DENSITY: &[UnitDefinition] = &[
    UnitDefinition::new("kg/m³", "kg/m³", 1.0),
    UnitDefinition::new("g/cm³", "g/cm³", 1000.0),
    UnitDefinition::new("lb/ft³", "lb/ft³", 16.0185),
];

const FREQUENCY: &[UnitDefinition] = &[
    UnitDefinition::new("Hertz", "Hz", 1.0),
    UnitDefinition::new("Kilohertz", "kHz", 1000.0),
    UnitDefinition::new("Megahertz", "MHz", 1_000_000.0),
    UnitDefinition::new("Gigahertz", "GHz", 1_000_000_000.0),
];

/// 내장 범주 목록. 등록 순서를 유지한다.
pub const BUILTIN_CATEGORIES: [Category; 14] = [
    Category::linear(CategoryKind::Length, LENGTH),
    Category::linear(CategoryKind::Weight, WEIGHT),
    Category::linear(CategoryKind::Area, AREA),
    Category::linear(CategoryKind::Volume, VOLUME),
    Category::linear(CategoryKind::Speed, SPEED),
    Category::linear(CategoryKind::Time, TIME),
    Category::linear(CategoryKind::Pressure, PRESSURE),
    Category::linear(CategoryKind::Energy, ENERGY),
    Category::linear(CategoryKind::Power, POWER),
    Category::linear(CategoryKind::Data, DATA),
    Category::linear(CategoryKind::Force, FORCE),
    Category::linear(CategoryKind::Density, DENSITY),
    Category::linear(CategoryKind::Frequency, FREQUENCY),
    Category::temperature(),
];

static GLOBAL: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new(BUILTIN_CATEGORIES.to_vec());
    let issues = registry.validate();
    if issues.is_empty() {
        tracing::debug!(categories = registry.len(), "unit registry initialised");
    } else {
        for issue in &issues {
            tracing::warn!("unit registry: {issue}");
        }
    }
    registry
});

/// 레지스트리 불변식 위반 항목.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryIssue {
    DuplicateCategory(&'static str),
    DuplicateAbbreviation {
        category: &'static str,
        abbreviation: &'static str,
    },
    InvalidScale {
        category: &'static str,
        abbreviation: &'static str,
        scale: f64,
    },
    MissingBaseUnit(&'static str),
}

impl std::fmt::Display for RegistryIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryIssue::DuplicateCategory(name) => write!(f, "duplicate category {name}"),
            RegistryIssue::DuplicateAbbreviation {
                category,
                abbreviation,
            } => write!(f, "duplicate abbreviation {abbreviation} in {category}"),
            RegistryIssue::InvalidScale {
                category,
                abbreviation,
                scale,
            } => write!(f, "invalid scale {scale} for {abbreviation} in {category}"),
            RegistryIssue::MissingBaseUnit(name) => write!(f, "{name} has no base unit"),
        }
    }
}

/// 범주 이름으로 조회하는 읽기 전용 레지스트리.
#[derive(Debug, Clone)]
pub struct Registry {
    categories: Vec<Category>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// 범주 목록으로 레지스트리를 만든다. 이름이 겹치면 먼저 온 범주가 조회된다.
    pub fn new(categories: Vec<Category>) -> Self {
        let mut index = HashMap::with_capacity(categories.len());
        for (i, cat) in categories.iter().enumerate() {
            index.entry(cat.name()).or_insert(i);
        }
        Self { categories, index }
    }

    /// 프로세스 전역 내장 레지스트리. 첫 접근 시 한 번 생성된다.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.index.get(name).map(|&i| &self.categories[i])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// 불변식 위반을 모두 모아 반환한다. 비어 있으면 정상이다.
    pub fn validate(&self) -> Vec<RegistryIssue> {
        let mut issues = Vec::new();
        let mut seen_names = Vec::new();
        for cat in &self.categories {
            let name = cat.name();
            if seen_names.contains(&name) {
                issues.push(RegistryIssue::DuplicateCategory(name));
            }
            seen_names.push(name);

            let CategoryScale::Linear(units) = cat.scale else {
                continue;
            };
            let mut seen_abbr = Vec::new();
            for unit in units {
                if seen_abbr.contains(&unit.abbreviation) {
                    issues.push(RegistryIssue::DuplicateAbbreviation {
                        category: name,
                        abbreviation: unit.abbreviation,
                    });
                }
                seen_abbr.push(unit.abbreviation);
                if !(unit.scale_to_base.is_finite() && unit.scale_to_base > 0.0) {
                    issues.push(RegistryIssue::InvalidScale {
                        category: name,
                        abbreviation: unit.abbreviation,
                        scale: unit.scale_to_base,
                    });
                }
            }
            if cat.base_unit().is_none() {
                issues.push(RegistryIssue::MissingBaseUnit(name));
            }
        }
        issues
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(BUILTIN_CATEGORIES.to_vec())
    }
}
