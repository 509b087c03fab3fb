use crate::gender::{Gender, GenderParseError};

/// Frequency band of a name within one country and gender.
///
/// Encoded in the dataset as a single hex digit. Value `r` means an absolute
/// frequency between `16 * 2^(r - 13)` percent and the next band up, so `D`
/// (13) is the most common band and `1` the rarest documented one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rarity(u8);

impl Rarity {
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    /// Interpret a dataset column character as a base-16 digit.
    ///
    /// Any hex digit is accepted, including values outside the documented
    /// `1..=13` range.
    pub fn from_hex_digit(c: char) -> Option<Self> {
        c.to_digit(16).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Lower bound of the band, in percent.
    pub fn frequency_percent(self) -> f64 {
        16.0 * 2f64.powi(i32::from(self.0) - 13)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
enum Countries {
    /// The column label is the country label.
    Verbatim,
    /// One country, emitted under a different label.
    Renamed(&'static str),
    /// A group column that stands for several countries.
    Group(&'static [&'static str]),
}

/// One of the fixed origin columns of a data line.
#[derive(Debug)]
pub struct OriginColumn {
    label: &'static str,
    countries: Countries,
}

impl OriginColumn {
    const fn verbatim(label: &'static str) -> Self {
        Self {
            label,
            countries: Countries::Verbatim,
        }
    }

    const fn renamed(label: &'static str, country: &'static str) -> Self {
        Self {
            label,
            countries: Countries::Renamed(country),
        }
    }

    const fn group(label: &'static str, countries: &'static [&'static str]) -> Self {
        Self {
            label,
            countries: Countries::Group(countries),
        }
    }

    /// Column heading as documented by the dataset.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Country labels an entry in this column expands to, in output order.
    pub fn countries(&self) -> &[&'static str] {
        match &self.countries {
            Countries::Verbatim => std::slice::from_ref(&self.label),
            Countries::Renamed(country) => std::slice::from_ref(country),
            Countries::Group(countries) => countries,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.countries, Countries::Group(_))
    }
}

/// Origin columns in dataset order. Column `i` sits at character offset
/// `30 + i` of a data line.
pub static ORIGIN_COLUMNS: [OriginColumn; 55] = [
    OriginColumn::verbatim("Great Britain"),
    OriginColumn::verbatim("Ireland"),
    OriginColumn::verbatim("U.S.A."),
    OriginColumn::verbatim("Italy"),
    OriginColumn::verbatim("Malta"),
    OriginColumn::verbatim("Portugal"),
    OriginColumn::verbatim("Spain"),
    OriginColumn::verbatim("France"),
    OriginColumn::verbatim("Belgium"),
    OriginColumn::verbatim("Luxembourg"),
    OriginColumn::verbatim("the Netherlands"),
    OriginColumn::verbatim("East Frisia"),
    OriginColumn::verbatim("Germany"),
    OriginColumn::verbatim("Austria"),
    OriginColumn::verbatim("Swiss"),
    OriginColumn::verbatim("Iceland"),
    OriginColumn::verbatim("Denmark"),
    OriginColumn::verbatim("Norway"),
    OriginColumn::verbatim("Sweden"),
    OriginColumn::verbatim("Finland"),
    OriginColumn::verbatim("Estonia"),
    OriginColumn::verbatim("Latvia"),
    OriginColumn::verbatim("Lithuania"),
    OriginColumn::verbatim("Poland"),
    OriginColumn::verbatim("Czech Republic"),
    OriginColumn::verbatim("Slovakia"),
    OriginColumn::verbatim("Hungary"),
    OriginColumn::verbatim("Romania"),
    OriginColumn::verbatim("Bulgaria"),
    OriginColumn::verbatim("Bosnia and Herzegovina"),
    OriginColumn::verbatim("Croatia"),
    OriginColumn::verbatim("Kosovo"),
    OriginColumn::verbatim("Macedonia"),
    OriginColumn::verbatim("Montenegro"),
    OriginColumn::verbatim("Serbia"),
    OriginColumn::verbatim("Slovenia"),
    OriginColumn::verbatim("Albania"),
    OriginColumn::verbatim("Greece"),
    OriginColumn::verbatim("Russia"),
    OriginColumn::verbatim("Belarus"),
    OriginColumn::verbatim("Moldova"),
    OriginColumn::verbatim("Ukraine"),
    OriginColumn::verbatim("Armenia"),
    OriginColumn::verbatim("Azerbaijan"),
    OriginColumn::verbatim("Georgia"),
    OriginColumn::group(
        "Kazakhstan/Uzbekistan,etc.",
        &[
            "Kazakhstan",
            "Kyrgyzstan",
            "Tajikistan",
            "Turkmenistan",
            "Uzbekistan",
        ],
    ),
    OriginColumn::verbatim("Turkey"),
    OriginColumn::verbatim("Arabia/Persia"),
    OriginColumn::verbatim("Israel"),
    OriginColumn::verbatim("China"),
    OriginColumn::group("India/Sri Lanka", &["India", "Sri Lanka"]),
    OriginColumn::verbatim("Japan"),
    OriginColumn::verbatim("Korea"),
    OriginColumn::verbatim("Vietnam"),
    OriginColumn::renamed("other countries", "other"),
];

/// One `(country, gender, rarity)` fact about a name, written as
/// `country:gender:rarity`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OriginEntry {
    pub country: String,
    pub gender: Gender,
    pub rarity: Rarity,
}

impl OriginEntry {
    pub fn new(country: impl Into<String>, gender: Gender, rarity: Rarity) -> Self {
        Self {
            country: country.into(),
            gender,
            rarity,
        }
    }

    /// The `(country, gender)` pair, ignoring rarity.
    pub fn origin_key(&self) -> (&str, Gender) {
        (self.country.as_str(), self.gender)
    }
}

impl std::fmt::Display for OriginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.country, self.gender, self.rarity)
    }
}

/// Error returned when a `country:gender:rarity` string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OriginParseError {
    #[error("expected country:gender:rarity, got '{0}'")]
    Shape(String),

    #[error("empty or padded country in '{0}'")]
    Country(String),

    #[error(transparent)]
    Gender(#[from] GenderParseError),

    #[error("invalid rarity '{0}'")]
    Rarity(String),
}

impl std::str::FromStr for OriginEntry {
    type Err = OriginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(':').collect();
        let [country, gender, rarity] = tokens.as_slice() else {
            return Err(OriginParseError::Shape(s.to_string()));
        };

        if country.is_empty() || *country != country.trim() {
            return Err(OriginParseError::Country(s.to_string()));
        }
        let gender: Gender = gender.parse()?;
        let rarity = rarity
            .parse::<u8>()
            .map_err(|_| OriginParseError::Rarity(rarity.to_string()))?;

        Ok(Self::new(*country, gender, Rarity::new(rarity)))
    }
}

#[cfg(test)]
#[path = "tests/origin_tests.rs"]
mod tests;
