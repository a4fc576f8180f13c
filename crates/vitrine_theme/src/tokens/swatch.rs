//! Utility-class color vocabulary
//!
//! Components style themselves with utility classes (`text-cyan-400`,
//! `from-purple-500/20`, ...). Instead of concatenating those strings by hand,
//! every class is built from a typed [`Swatch`] so a malformed role/color
//! combination cannot be expressed.

use std::fmt;

/// Hue families used by the site palettes
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hue {
    White,
    Slate,
    Gray,
    Red,
    Orange,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl Hue {
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Slate => "slate",
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Fuchsia => "fuchsia",
            Self::Pink => "pink",
            Self::Rose => "rose",
        }
    }

    /// Shorthand for `Swatch::new(self, shade)`
    pub const fn shade(self, shade: u16) -> Swatch {
        Swatch::new(self, shade)
    }
}

/// A palette entry: hue, optional shade, optional opacity percentage
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Swatch {
    pub hue: Hue,
    pub shade: Option<u16>,
    pub alpha: Option<u8>,
}

impl Swatch {
    pub const fn new(hue: Hue, shade: u16) -> Self {
        Self {
            hue,
            shade: Some(shade),
            alpha: None,
        }
    }

    pub const fn white() -> Self {
        Self {
            hue: Hue::White,
            shade: None,
            alpha: None,
        }
    }

    /// Same swatch at `percent` opacity
    pub const fn alpha(mut self, percent: u8) -> Self {
        self.alpha = Some(percent);
        self
    }

    pub fn text(&self) -> String {
        format!("text-{self}")
    }

    pub fn bg(&self) -> String {
        format!("bg-{self}")
    }

    pub fn border(&self) -> String {
        format!("border-{self}")
    }

    pub fn shadow(&self) -> String {
        format!("shadow-{self}")
    }

    pub fn hover_text(&self) -> String {
        format!("hover:text-{self}")
    }

    pub fn hover_bg(&self) -> String {
        format!("hover:bg-{self}")
    }

    pub fn hover_border(&self) -> String {
        format!("hover:border-{self}")
    }

    pub fn hover_shadow(&self) -> String {
        format!("hover:shadow-{self}")
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hue.name())?;
        if let Some(shade) = self.shade {
            write!(f, "-{shade}")?;
        }
        if let Some(alpha) = self.alpha {
            write!(f, "/{alpha}")?;
        }
        Ok(())
    }
}

impl serde::Serialize for Swatch {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Two- or three-stop gradient expressed as `from-*`/`via-*`/`to-*` classes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Gradient {
    pub from: Swatch,
    pub via: Option<Swatch>,
    pub to: Swatch,
}

impl Gradient {
    pub const fn two(from: Swatch, to: Swatch) -> Self {
        Self {
            from,
            via: None,
            to,
        }
    }

    pub const fn three(from: Swatch, via: Swatch, to: Swatch) -> Self {
        Self {
            from,
            via: Some(via),
            to,
        }
    }

    /// Stop classes, e.g. `from-cyan-400 via-teal-400 to-emerald-400`
    pub fn classes(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from-{}", self.from)?;
        if let Some(via) = self.via {
            write!(f, " via-{via}")?;
        }
        write!(f, " to-{}", self.to)
    }
}

impl serde::Serialize for Gradient {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_formats_shade_and_alpha() {
        assert_eq!(Hue::Cyan.shade(400).text(), "text-cyan-400");
        assert_eq!(Hue::Slate.shade(900).alpha(30).bg(), "bg-slate-900/30");
        assert_eq!(Swatch::white().alpha(60).bg(), "bg-white/60");
        assert_eq!(Hue::Green.shade(500).alpha(10).hover_bg(), "hover:bg-green-500/10");
    }

    #[test]
    fn gradient_formats_optional_via() {
        let three = Gradient::three(
            Hue::Purple.shade(400),
            Hue::Pink.shade(400),
            Hue::Fuchsia.shade(400),
        );
        assert_eq!(three.classes(), "from-purple-400 via-pink-400 to-fuchsia-400");

        let two = Gradient::two(Hue::Blue.shade(600), Hue::Indigo.shade(600));
        assert_eq!(two.classes(), "from-blue-600 to-indigo-600");
    }
}
