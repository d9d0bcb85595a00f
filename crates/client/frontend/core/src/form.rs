//! Form-field adapter implementing [`StatStore`].
//!
//! Fields hold text exactly as an input element would. Reads parse the
//! leading integer of the text; writes store the decimal representation.
use std::collections::BTreeMap;

use clicker_core::{PlayerStats, StatKind, StatStore, StoreError};
use strum::{EnumCount, IntoEnumIterator};

/// Text-valued input fields keyed by element id (`id_hp`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: BTreeMap<String, String>,
}

impl FormFields {
    /// Form with no fields bound.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Form with one field per stat, pre-filled from `stats`.
    pub fn from_stats(stats: PlayerStats) -> Self {
        let mut form = Self::empty();
        for stat in StatKind::iter() {
            form.bind(stat, stats.get(stat).to_string());
        }
        form
    }

    /// Binds (or replaces) the field for `stat`.
    pub fn bind(&mut self, stat: StatKind, text: impl Into<String>) {
        self.fields.insert(stat.field_id().to_owned(), text.into());
    }

    /// Removes the field for `stat`, returning its text.
    pub fn unbind(&mut self, stat: StatKind) -> Option<String> {
        self.fields.remove(stat.field_id())
    }

    /// Raw text of the field for `stat`.
    pub fn text(&self, stat: StatKind) -> Option<&str> {
        self.fields.get(stat.field_id()).map(String::as_str)
    }

    /// Parsed value of every stat, `None` where unreadable.
    pub fn values(&self) -> [(StatKind, Option<i64>); StatKind::COUNT] {
        let mut out = [(StatKind::Hp, None); StatKind::COUNT];
        for (slot, stat) in out.iter_mut().zip(StatKind::iter()) {
            *slot = (stat, self.read(stat).ok());
        }
        out
    }

    /// Snapshot as [`PlayerStats`] when every field is readable.
    pub fn snapshot(&self) -> Result<PlayerStats, StoreError> {
        Ok(PlayerStats::new(
            self.read(StatKind::Hp)?,
            self.read(StatKind::Iq)?,
            self.read(StatKind::Happiness)?,
        ))
    }
}

impl StatStore for FormFields {
    fn read(&self, stat: StatKind) -> Result<i64, StoreError> {
        let text = self.text(stat).ok_or(StoreError::Missing(stat))?;
        parse_leading_int(text).ok_or_else(|| StoreError::NotNumeric {
            stat,
            raw: text.to_owned(),
        })
    }

    fn write(&mut self, stat: StatKind, value: i64) -> Result<(), StoreError> {
        let field = self
            .fields
            .get_mut(stat.field_id())
            .ok_or(StoreError::Missing(stat))?;
        *field = value.to_string();
        Ok(())
    }
}

/// Parses a base-10 integer prefix, ignoring leading whitespace.
///
/// `" 42px"` reads as 42 and `"-7.5"` as -7; text without leading digits
/// yields `None`. Values beyond the `i64` range saturate, so every value
/// [`FormFields`] writes (including `i64::MIN`) reads back unchanged.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    // Accumulate towards the sign so the negative limit is reachable.
    let value = digits[..len].bytes().fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        let shifted = acc.saturating_mul(10);
        if negative {
            shifted.saturating_sub(digit)
        } else {
            shifted.saturating_add(digit)
        }
    });

    Some(value)
}
