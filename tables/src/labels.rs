//! Labels for the eight derived values and the seven angel sources.

use wifq::Field;

/// Display labels for one derived-value field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValueLabel {
    /// Arabic label (e.g. `"المفتاح"`).
    pub arabic: &'static str,
    /// Latin transliteration (e.g. `"Al-Miftah"`).
    pub transliteration: &'static str,
    /// English meaning (e.g. `"The Key"`).
    pub meaning: &'static str,
}

/// Labels for the eight fields, indexed in [`Field::ALL`] order.
pub static VALUE_LABELS: [ValueLabel; 8] = [
    ValueLabel {
        arabic: "المفتاح",
        transliteration: "Al-Miftah",
        meaning: "The Key",
    },
    ValueLabel {
        arabic: "المغلاق",
        transliteration: "Al-Maghlaq",
        meaning: "The Lock",
    },
    ValueLabel {
        arabic: "العدل",
        transliteration: "Al-Adl",
        meaning: "Justice",
    },
    ValueLabel {
        arabic: "الطرح",
        transliteration: "Al-Tarh",
        meaning: "Subtraction",
    },
    ValueLabel {
        arabic: "الوفق",
        transliteration: "Al-Wafaq",
        meaning: "Concord",
    },
    ValueLabel {
        arabic: "المساحة",
        transliteration: "Al-Masaha",
        meaning: "Area",
    },
    ValueLabel {
        arabic: "الضابط",
        transliteration: "Al-Dabit",
        meaning: "Controller",
    },
    ValueLabel {
        arabic: "الغاية",
        transliteration: "Al-Ghayah",
        meaning: "Goal",
    },
];

/// Returns the display labels for a field.
///
/// # Example
///
/// ```
/// use wifq::Field;
/// use wifq_tables::value_label;
///
/// assert_eq!(value_label(Field::Key).transliteration, "Al-Miftah");
/// assert_eq!(value_label(Field::Goal).arabic, "الغاية");
/// ```
#[inline]
#[must_use]
pub fn value_label(field: Field) -> &'static ValueLabel {
    &VALUE_LABELS[field as usize]
}

/// One of the seven angels and the derived value it is named from.
///
/// The subtraction field has no angel; the other seven fields each feed
/// one, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngelSource {
    /// Ordinal Arabic title (e.g. `"الملاك الأول"`).
    pub ordinal: &'static str,
    /// The derived-value field the angel name is encoded from.
    pub field: Field,
}

/// The seven angel sources in display order.
pub static ANGEL_SOURCES: [AngelSource; 7] = [
    AngelSource {
        ordinal: "الملاك الأول",
        field: Field::Key,
    },
    AngelSource {
        ordinal: "الملاك الثاني",
        field: Field::Lock,
    },
    AngelSource {
        ordinal: "الملاك الثالث",
        field: Field::Justice,
    },
    AngelSource {
        ordinal: "الملاك الرابع",
        field: Field::Concord,
    },
    AngelSource {
        ordinal: "الملاك الخامس",
        field: Field::Area,
    },
    AngelSource {
        ordinal: "الملاك السادس",
        field: Field::Controller,
    },
    AngelSource {
        ordinal: "الملاك السابع",
        field: Field::Goal,
    },
];
