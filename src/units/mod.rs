//! 단위 정의와 범주 레지스트리.

pub mod registry;
pub mod temperature;

use crate::quantity::CategoryKind;

pub use registry::{Registry, RegistryIssue};
pub use temperature::{convert_temperature, convert_temperature_tokens, TemperatureUnit};

/// 선형 단위 하나의 정의.
///
/// `scale_to_base`를 곱하면 범주 기준 단위의 값이 된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDefinition {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub scale_to_base: f64,
}

impl UnitDefinition {
    pub const fn new(name: &'static str, abbreviation: &'static str, scale_to_base: f64) -> Self {
        Self {
            name,
            abbreviation,
            scale_to_base,
        }
    }

    /// `"<name> (<abbreviation>)"` 형태의 표시 문자열.
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.abbreviation)
    }
}

/// 범주의 변환 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryScale {
    /// 공통 기준 단위를 거치는 선형 변환.
    Linear(&'static [UnitDefinition]),
    /// 섭씨를 거치는 구간별 변환.
    Temperature,
}

/// 같은 기준 단위를 공유하는 단위 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub kind: CategoryKind,
    pub scale: CategoryScale,
}

impl Category {
    pub const fn linear(kind: CategoryKind, units: &'static [UnitDefinition]) -> Self {
        Self {
            kind,
            scale: CategoryScale::Linear(units),
        }
    }

    pub const fn temperature() -> Self {
        Self {
            kind: CategoryKind::Temperature,
            scale: CategoryScale::Temperature,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_temperature(&self) -> bool {
        matches!(self.scale, CategoryScale::Temperature)
    }

    /// 등록 순서대로의 선형 단위 목록. 온도 범주는 비어 있다.
    pub fn units(&self) -> &'static [UnitDefinition] {
        match self.scale {
            CategoryScale::Linear(units) => units,
            CategoryScale::Temperature => &[],
        }
    }

    /// 약어로 단위를 찾는다. 같은 약어가 여럿이면 먼저 등록된 것을 쓴다.
    pub fn unit(&self, abbreviation: &str) -> Option<&'static UnitDefinition> {
        self.units().iter().find(|u| u.abbreviation == abbreviation)
    }

    /// 배율이 1.0인 기준 단위.
    pub fn base_unit(&self) -> Option<&'static UnitDefinition> {
        self.units().iter().find(|u| u.scale_to_base == 1.0)
    }

    /// 선택 목록에 표시할 문자열들.
    pub fn display_units(&self) -> Vec<String> {
        match self.scale {
            CategoryScale::Linear(units) => units.iter().map(UnitDefinition::display).collect(),
            CategoryScale::Temperature => TemperatureUnit::ALL
                .into_iter()
                .map(TemperatureUnit::display)
                .collect(),
        }
    }
}
