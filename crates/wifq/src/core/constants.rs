//! Constants of the abjad weight system and the angel-name index space.
//!
//! Every constant here is fixed by the Hisab al-Jummal tradition as the
//! source material documents it. None is tunable.

/// Number of weights in the canonical abjad progression.
///
/// The progression runs 1..9, 10..90 by tens, 100..900 by hundreds, 1000:
/// nine units, nine tens, nine hundreds, and one thousand.
pub const WEIGHT_COUNT: usize = 28;

/// Largest weight in the progression (غ).
pub const MAX_WEIGHT: u16 = 1000;

/// Number of recognized letter glyphs, including synonym variants.
///
/// All alef forms share weight 1, hā'/tā' marbūṭa share weight 5, and the
/// three yā' forms share weight 10, so 35 glyphs cover 28 weights.
pub const GLYPH_COUNT: usize = 35;

/// Number of square types (orders 3 through 9).
pub const SQUARE_COUNT: usize = 7;

/// Smallest square order (mutsalas, 3×3).
pub const MIN_ORDER: u8 = 3;

/// Largest square order (mutassa, 9×9).
pub const MAX_ORDER: u8 = 9;

/// Size of the cyclic angel-name index space.
///
/// Values below this threshold wrap around (by a variant-specific constant)
/// before the threshold is subtracted to obtain the decomposition magnitude.
pub const ANGEL_INDEX_SPAN: u64 = 51;

/// Wraparound constant for the benevolent angel-name variant.
pub const BENEVOLENT_WRAP: u64 = 360;

/// Wraparound constant for the sufliyyah angel-name variant.
pub const SUFLIYYAH_WRAP: u64 = 319;

/// Fixed suffix appended to benevolent angel names.
pub const BENEVOLENT_SUFFIX: &str = "اييل";

/// Fixed suffix appended to sufliyyah angel names.
pub const SUFLIYYAH_SUFFIX: &str = "طيش";

/// Arabic-Indic digits, indexed by their Western value.
///
/// `ARABIC_INDIC_DIGITS[3]` is '٣'.
pub const ARABIC_INDIC_DIGITS: [char; 10] =
    ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Display string for a value that failed a derivation gate.
pub const INVALID_DISPLAY: &str = "-";
