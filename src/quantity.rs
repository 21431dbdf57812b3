/// 지원하는 변환 범주를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Area,
    Data,
    Density,
    Energy,
    Force,
    Frequency,
    Length,
    Power,
    Pressure,
    Speed,
    Temperature,
    Time,
    Volume,
    Weight,
}

impl CategoryKind {
    /// 홈 화면 표시 순서(알파벳순).
    pub const ALL: [CategoryKind; 14] = [
        CategoryKind::Area,
        CategoryKind::Data,
        CategoryKind::Density,
        CategoryKind::Energy,
        CategoryKind::Force,
        CategoryKind::Frequency,
        CategoryKind::Length,
        CategoryKind::Power,
        CategoryKind::Pressure,
        CategoryKind::Speed,
        CategoryKind::Temperature,
        CategoryKind::Time,
        CategoryKind::Volume,
        CategoryKind::Weight,
    ];

    /// 레지스트리 조회 키로 쓰이는 범주 이름.
    pub fn name(self) -> &'static str {
        match self {
            CategoryKind::Area => "Area",
            CategoryKind::Data => "Data",
            CategoryKind::Density => "Density",
            CategoryKind::Energy => "Energy",
            CategoryKind::Force => "Force",
            CategoryKind::Frequency => "Frequency",
            CategoryKind::Length => "Length",
            CategoryKind::Power => "Power",
            CategoryKind::Pressure => "Pressure",
            CategoryKind::Speed => "Speed",
            CategoryKind::Temperature => "Temperature",
            CategoryKind::Time => "Time",
            CategoryKind::Volume => "Volume",
            CategoryKind::Weight => "Weight",
        }
    }

    /// 이름으로 범주를 찾는다. 대소문자를 구분한다.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
