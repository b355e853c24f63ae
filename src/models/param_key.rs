use std::fmt;

/// Parameter names recognized in a registration command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamKey {
    Kite, // кайт
    From, // from
    To,   // to
}

impl ParamKey {
    /// Keys a registration must carry, in the order they are reported.
    pub const REQUIRED: [ParamKey; 3] = [ParamKey::Kite, ParamKey::From, ParamKey::To];

    /// Canonical (lowercase) key as typed by users
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKey::Kite => "кайт",
            ParamKey::From => "from",
            ParamKey::To => "to",
        }
    }

    /// Case-insensitive lookup of a key as it appears in free text
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "кайт" => Some(ParamKey::Kite),
            "from" => Some(ParamKey::From),
            "to" => Some(ParamKey::To),
            _ => None,
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
