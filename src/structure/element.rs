//! Element property table: bonding radius, van der Waals radius and display
//! color for the elements found in biological structures.

use crate::color::hex_color;

/// Chemical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Element {
    H,
    C,
    N,
    O,
    F,
    Na,
    Mg,
    P,
    S,
    Cl,
    K,
    Ca,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Se,
    Br,
    I,
}

impl Element {
    /// Look up an element by symbol, case-insensitively. Returns `None` for
    /// symbols outside the table.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let s = symbol.trim();
        let e = match s.to_ascii_uppercase().as_str() {
            "H" => Self::H,
            "C" => Self::C,
            "N" => Self::N,
            "O" => Self::O,
            "F" => Self::F,
            "NA" => Self::Na,
            "MG" => Self::Mg,
            "P" => Self::P,
            "S" => Self::S,
            "CL" => Self::Cl,
            "K" => Self::K,
            "CA" => Self::Ca,
            "MN" => Self::Mn,
            "FE" => Self::Fe,
            "CO" => Self::Co,
            "NI" => Self::Ni,
            "CU" => Self::Cu,
            "ZN" => Self::Zn,
            "SE" => Self::Se,
            "BR" => Self::Br,
            "I" => Self::I,
            _ => return None,
        };
        Some(e)
    }

    /// Canonical symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::H => "H",
            Self::C => "C",
            Self::N => "N",
            Self::O => "O",
            Self::F => "F",
            Self::Na => "Na",
            Self::Mg => "Mg",
            Self::P => "P",
            Self::S => "S",
            Self::Cl => "Cl",
            Self::K => "K",
            Self::Ca => "Ca",
            Self::Mn => "Mn",
            Self::Fe => "Fe",
            Self::Co => "Co",
            Self::Ni => "Ni",
            Self::Cu => "Cu",
            Self::Zn => "Zn",
            Self::Se => "Se",
            Self::Br => "Br",
            Self::I => "I",
        }
    }

    /// Empirical atomic radius in angstroms. Drives ball size and bond
    /// inset in ball-and-stick geometry.
    #[must_use]
    pub fn radius(self) -> f32 {
        match self {
            Self::H => 0.25,
            Self::C => 0.70,
            Self::N => 0.65,
            Self::O => 0.60,
            Self::F => 0.50,
            Self::Na | Self::Ca => 1.80,
            Self::Mg => 1.50,
            Self::P | Self::S | Self::Cl => 1.00,
            Self::K => 2.20,
            Self::Mn | Self::Fe => 1.40,
            Self::Co | Self::Ni | Self::Cu | Self::Zn => 1.35,
            Self::Se | Self::Br => 1.15,
            Self::I => 1.40,
        }
    }

    /// Van der Waals radius in angstroms.
    #[must_use]
    pub fn vdw_radius(self) -> f32 {
        match self {
            Self::H => 1.20,
            Self::C => 1.70,
            Self::N => 1.55,
            Self::O => 1.52,
            Self::F => 1.47,
            Self::Na => 2.27,
            Self::Mg => 1.73,
            Self::P | Self::S => 1.80,
            Self::Cl => 1.75,
            Self::K => 2.75,
            Self::Ca => 2.31,
            Self::Mn | Self::Fe | Self::Co => 2.00,
            Self::Ni => 1.63,
            Self::Cu => 1.40,
            Self::Zn => 1.39,
            Self::Se => 1.90,
            Self::Br => 1.85,
            Self::I => 1.98,
        }
    }

    /// Packed `0xRRGGBB` CPK color (Jmol palette).
    #[must_use]
    pub fn hex(self) -> u32 {
        match self {
            Self::H => 0xff_ffff,
            Self::C => 0x90_9090,
            Self::N => 0x30_50f8,
            Self::O => 0xff_0d0d,
            Self::F => 0x90_e050,
            Self::Na => 0xab_5cf2,
            Self::Mg => 0x8a_ff00,
            Self::P => 0xff_8000,
            Self::S => 0xff_ff30,
            Self::Cl => 0x1f_f01f,
            Self::K => 0x8f_40d4,
            Self::Ca => 0x3d_ff00,
            Self::Mn => 0x9c_7ac7,
            Self::Fe => 0xe0_6633,
            Self::Co => 0xf0_90a0,
            Self::Ni => 0x50_d050,
            Self::Cu => 0xc8_8033,
            Self::Zn => 0x7d_80b0,
            Self::Se => 0xff_a100,
            Self::Br => 0xa6_2929,
            Self::I => 0x94_0094,
        }
    }

    /// CPK color as RGB in 0..1.
    #[must_use]
    pub fn color(self) -> [f32; 3] {
        hex_color(self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_case_insensitive() {
        assert_eq!(Element::from_symbol("FE"), Some(Element::Fe));
        assert_eq!(Element::from_symbol("fe"), Some(Element::Fe));
        assert_eq!(Element::from_symbol(" C "), Some(Element::C));
        assert_eq!(Element::from_symbol("Xx"), None);
        assert_eq!(Element::from_symbol(""), None);
    }

    #[test]
    fn symbol_round_trips() {
        for e in [Element::H, Element::Cl, Element::Zn, Element::I] {
            assert_eq!(Element::from_symbol(e.symbol()), Some(e));
        }
    }

    #[test]
    fn carbon_properties() {
        let c = Element::C;
        assert_eq!(c.radius(), 0.70);
        assert_eq!(c.vdw_radius(), 1.70);
        let gray = 0x90 as f32 / 255.0;
        assert_eq!(c.color(), [gray, gray, gray]);
    }
}
