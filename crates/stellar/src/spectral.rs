use std::fmt;

use serde::{Deserialize, Serialize};

/// Class index used for anything that does not parse as `<letter><digit> <luminosity>`
///
/// Bare white dwarfs (`"D"`), brown dwarfs (`"BD"`) and garbage all land here.
pub const DEGENERATE_INDEX: i32 = 699;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralType {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'O' => Some(Self::O),
            'B' => Some(Self::B),
            'A' => Some(Self::A),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'K' => Some(Self::K),
            'M' => Some(Self::M),
            _ => None,
        }
    }

    /// Contribution of the class letter to the class index
    pub fn base_index(&self) -> i32 {
        match self {
            Self::O => 0,
            Self::B => 10,
            Self::A => 20,
            Self::F => 30,
            Self::G => 40,
            Self::K => 50,
            Self::M => 60,
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuminosityClass {
    IA,  // Bright supergiants
    IB,  // Supergiants
    II,  // Bright giants
    III, // Normal giants
    IV,  // Subgiants
    V,   // Main sequence
    VI,  // Subdwarfs
    D,   // White dwarf
}

impl LuminosityClass {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "Ia" => Some(Self::IA),
            "Ib" => Some(Self::IB),
            "II" => Some(Self::II),
            "III" => Some(Self::III),
            "IV" => Some(Self::IV),
            "V" => Some(Self::V),
            "VI" => Some(Self::VI),
            "D" => Some(Self::D),
            _ => None,
        }
    }

    /// Contribution of the luminosity class to the class index
    ///
    /// Subdwarfs share the main-sequence band; the index space has no room
    /// for a separate VI band below the white dwarfs.
    pub fn offset(&self) -> i32 {
        match self {
            Self::IA => 0,
            Self::IB => 100,
            Self::II => 200,
            Self::III => 300,
            Self::IV => 400,
            Self::V | Self::VI => 500,
            Self::D => 600,
        }
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            LuminosityClass::IA => "Ia",
            LuminosityClass::IB => "Ib",
            LuminosityClass::II => "II",
            LuminosityClass::III => "III",
            LuminosityClass::IV => "IV",
            LuminosityClass::V => "V",
            LuminosityClass::VI => "VI",
            LuminosityClass::D => "D",
        };
        write!(f, "{}", str)
    }
}

/// A parsed stellar classification such as `G2 V`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarClassification {
    pub spectral_type: SpectralType,
    /// Spectral subtype (0-9)
    pub subtype: u8,
    pub luminosity_class: LuminosityClass,
}

impl StellarClassification {
    /// Parse `"<letter><digit> <luminosity>"`
    ///
    /// An unknown luminosity token is read as main sequence. A missing or
    /// non-digit subtype is clamped into 0-9. Returns `None` when there is no
    /// luminosity token at all or the class letter is not one of OBAFGKM.
    pub fn parse(star: &str) -> Option<Self> {
        let (class, luminosity) = star.trim().split_once(' ')?;
        let mut chars = class.chars();
        let spectral_type = SpectralType::from_letter(chars.next()?)?;
        let subtype = chars
            .next()
            .map(|c| (c as i32 - '0' as i32).clamp(0, 9) as u8)
            .unwrap_or(0);
        let luminosity_class = LuminosityClass::parse(luminosity.trim()).unwrap_or(LuminosityClass::V);

        Some(Self {
            spectral_type,
            subtype,
            luminosity_class,
        })
    }

    /// Combined class index: letter base + subtype + luminosity offset
    pub fn index(&self) -> i32 {
        self.spectral_type.base_index() + self.subtype as i32 + self.luminosity_class.offset()
    }
}

impl fmt::Display for StellarClassification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{} {}",
            self.spectral_type, self.subtype, self.luminosity_class
        )
    }
}

/// Class index for a spectral string; unparseable input is degenerate
///
/// # Example
/// ```
/// use stellar::{star_class_index, DEGENERATE_INDEX};
///
/// assert_eq!(star_class_index("G2 V"), 542);
/// assert_eq!(star_class_index("M0 Ia"), 60);
/// assert_eq!(star_class_index("D"), DEGENERATE_INDEX);
/// ```
pub fn star_class_index(star: &str) -> i32 {
    StellarClassification::parse(star)
        .map(|class| class.index())
        .unwrap_or(DEGENERATE_INDEX)
}

/// Split a stellar data field into individual stars
///
/// `"G2 V M3 V D"` becomes `["G2 V", "M3 V", "D"]`. A class token is joined
/// with the following token when that token is a luminosity class.
pub fn parse_stars(stellar: &str) -> Vec<String> {
    let tokens: Vec<&str> = stellar.split_whitespace().collect();
    let mut stars = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() {
        let token = tokens[idx];
        let is_class = {
            let mut chars = token.chars();
            matches!(
                (chars.next().and_then(SpectralType::from_letter), chars.next()),
                (Some(_), Some(c)) if c.is_ascii_digit()
            )
        };
        match tokens.get(idx + 1) {
            Some(next) if is_class && LuminosityClass::parse(next).is_some() => {
                stars.push(format!("{} {}", token, next));
                idx += 2;
            }
            _ => {
                stars.push(token.to_string());
                idx += 1;
            }
        }
    }

    stars
}
