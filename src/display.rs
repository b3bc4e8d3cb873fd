//! Text rendering of phasors.
//!
//! Whether the output target can show the `∠` glyph is the caller's call: pass
//! an [`AngleGlyph`] (directly or through [`DisplayConfig`]), or use the
//! alternate flag (`{:#}`) for the ASCII form.

use std::fmt::{self, Write};

use crate::Phasor;

/// Symbol placed between magnitude and angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleGlyph {
    /// `∠`
    #[default]
    Unicode,
    /// `/_`, for targets that cannot render `∠`.
    Ascii,
}

impl AngleGlyph {
    pub fn symbol(self) -> &'static str {
        match self {
            AngleGlyph::Unicode => "∠",
            AngleGlyph::Ascii => "/_",
        }
    }

    /// Pick a glyph from the name of the output encoding.
    ///
    /// Only UTF-8 targets get the Unicode glyph.
    ///
    /// # Example
    /// ```
    /// use phasor::AngleGlyph;
    ///
    /// assert_eq!(AngleGlyph::for_encoding("UTF-8"), AngleGlyph::Unicode);
    /// assert_eq!(AngleGlyph::for_encoding("cp1252"), AngleGlyph::Ascii);
    /// ```
    pub fn for_encoding(encoding: &str) -> Self {
        let normalized: String = encoding
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        if normalized == "utf8" {
            AngleGlyph::Unicode
        } else {
            AngleGlyph::Ascii
        }
    }
}

/// Formatting options for [`Phasor::display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    pub glyph: AngleGlyph,
    /// Fixed number of decimals for magnitude and angle; `None` prints the
    /// shortest representation that round-trips.
    pub precision: Option<usize>,
}

impl DisplayConfig {
    pub fn ascii() -> Self {
        Self {
            glyph: AngleGlyph::Ascii,
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}

/// Adapter returned by [`Phasor::display`].
#[derive(Debug, Clone, Copy)]
pub struct PhasorDisplay<'a> {
    phasor: &'a Phasor,
    config: DisplayConfig,
}

impl Phasor {
    /// Render with explicit formatting options.
    ///
    /// # Example
    /// ```
    /// use phasor::{DisplayConfig, Phasor};
    ///
    /// let v = Phasor::new(67.0, 120.0);
    /// let cfg = DisplayConfig::ascii().with_precision(1);
    /// assert_eq!(v.display(&cfg).to_string(), "67.0 /_ 120.0°");
    /// ```
    pub fn display(&self, config: &DisplayConfig) -> PhasorDisplay<'_> {
        PhasorDisplay {
            phasor: self,
            config: *config,
        }
    }
}

fn write_polar(
    f: &mut fmt::Formatter<'_>,
    phasor: &Phasor,
    glyph: AngleGlyph,
    precision: Option<usize>,
) -> fmt::Result {
    let (mag, ang, sym) = (phasor.mag(), phasor.ang(), glyph.symbol());
    let text = match precision {
        Some(p) => format!("{mag:.p$} {sym} {ang:.p$}°"),
        None => format!("{mag} {sym} {ang}°"),
    };
    pad(f, &text)
}

/// Apply the formatter's width, fill and alignment (left by default).
///
/// `Formatter::pad` would also truncate to the precision, which here means
/// decimal places, so the padding is done by hand.
fn pad(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let len = text.chars().count();
    let padding = match f.width() {
        Some(width) if width > len => width - len,
        _ => return f.write_str(text),
    };
    let (before, after) = match f.align() {
        Some(fmt::Alignment::Right) => (padding, 0),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(fmt::Alignment::Left) | None => (0, padding),
    };
    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(text)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

impl fmt::Display for PhasorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_polar(f, self.phasor, self.config.glyph, self.config.precision)
    }
}

impl fmt::Display for Phasor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = if f.alternate() {
            AngleGlyph::Ascii
        } else {
            AngleGlyph::Unicode
        };
        let precision = f.precision();
        write_polar(f, self, glyph, precision)
    }
}

impl fmt::Debug for Phasor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phasor(magnitude={}, angle={})", self.mag(), self.ang())
    }
}
