/// Gender code attached to a name in the dataset.
///
/// The first three columns of every data line carry one of these codes.
/// `=` is not a gender: it marks a short/long name equivalence line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// `M`
    Male,
    /// `1M`: male if first part of name, otherwise mostly male
    MostlyMale,
    /// `?M`
    SomewhatMale,
    /// `F`
    Female,
    /// `1F`: female if first part of name, otherwise mostly female
    MostlyFemale,
    /// `?F`
    SomewhatFemale,
    /// `?`
    Unisex,
    /// `=`: the name field holds an equivalent short and long name
    Equivalence,
}

static ALL_GENDERS: &[Gender] = &[
    Gender::Male,
    Gender::MostlyMale,
    Gender::SomewhatMale,
    Gender::Female,
    Gender::MostlyFemale,
    Gender::SomewhatFemale,
    Gender::Unisex,
    Gender::Equivalence,
];

impl Gender {
    /// The code as it appears in the dataset and in origin entries.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::MostlyMale => "1M",
            Self::SomewhatMale => "?M",
            Self::Female => "F",
            Self::MostlyFemale => "1F",
            Self::SomewhatFemale => "?F",
            Self::Unisex => "?",
            Self::Equivalence => "=",
        }
    }

    /// True for the `=` sentinel, which never reaches the name aggregate.
    pub fn is_equivalence(&self) -> bool {
        matches!(self, Self::Equivalence)
    }

    pub fn all() -> &'static [Gender] {
        ALL_GENDERS
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not one of the dataset's gender codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderParseError(pub String);

impl std::fmt::Display for GenderParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown gender code: '{}'", self.0)
    }
}

impl std::error::Error for GenderParseError {}

impl std::str::FromStr for Gender {
    type Err = GenderParseError;

    /// Parse an exact gender code. Codes are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_GENDERS
            .iter()
            .copied()
            .find(|gender| gender.code() == s)
            .ok_or_else(|| GenderParseError(s.to_string()))
    }
}
