/// 온도 눈금. 선형 배율이 없으므로 섭씨를 거쳐 변환한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

const KELVIN_OFFSET: f64 = 273.15;

impl TemperatureUnit {
    /// 선택 목록 표시 순서.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// `°C`, `°F`, `K` 토큰만 인식한다.
    pub fn from_abbreviation(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.abbreviation() == token)
    }

    pub fn display(self) -> String {
        format!("{} ({})", self.name(), self.abbreviation())
    }
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
    }
}

/// 섭씨 값을 원하는 눈금으로 변환한다.
pub fn from_celsius(celsius: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
    }
}

/// 온도를 서로 다른 눈금으로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_celsius(to_celsius(value, from), to)
}

/// 약어 토큰으로 온도를 변환한다.
///
/// 모르는 입력 토큰은 섭씨로 간주하고, 모르는 출력 토큰이면 섭씨 값을 그대로 돌려준다.
pub fn convert_temperature_tokens(value: f64, from: &str, to: &str) -> f64 {
    if from == to {
        return value;
    }
    let celsius = match TemperatureUnit::from_abbreviation(from) {
        Some(unit) => to_celsius(value, unit),
        None => {
            tracing::debug!(token = from, "unknown temperature source, treating as °C");
            value
        }
    };
    match TemperatureUnit::from_abbreviation(to) {
        Some(unit) => from_celsius(celsius, unit),
        None => {
            tracing::debug!(token = to, "unknown temperature target, returning °C");
            celsius
        }
    }
}
