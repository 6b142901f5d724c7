/// A formatted quantity ready for display: a numeric string plus a unit label.
///
/// This is the terminal artifact of the measurement formatter; presentation
/// combines it with the localized ingredient name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayAmount {
    pub value: String,
    pub unit: String,
}

impl DisplayAmount {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }
}

impl std::fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
