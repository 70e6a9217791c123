#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    /// Lenient form parsing: anything but `night` is the day theme.
    pub fn from_form_value(raw: &str) -> Self {
        if raw == "night" { Self::Night } else { Self::Day }
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            other => anyhow::bail!("unsupported theme: {other}"),
        }
    }

    pub fn preferred(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Night } else { Self::Day }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    /// CSS custom properties as `(name, "r, g, b")`.
    pub fn variables(self) -> [(&'static str, &'static str); 2] {
        match self {
            Self::Day => [("--color-dark", "10, 10, 20"), ("--color-light", "255, 255, 255")],
            Self::Night => [("--color-dark", "255, 255, 255"), ("--color-light", "10, 10, 20")],
        }
    }
}
