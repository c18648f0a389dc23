//! Planetary-hour tables.
//!
//! Twelve night rows and twelve day rows; each row names the ruling planet
//! for that hour under each of the seven weekday columns, plus the hour
//! label in Arabic-Indic digits. The tables are reproduced literally from
//! the source tradition, orthography included ('الزحرة', 'المشترى'); they
//! are authoritative lookup data, not values derived from the Chaldean
//! sequence at runtime.

/// One planetary-hour row: the hour label and the seven weekday rulers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HourRow {
    /// Hour span label in Arabic-Indic digits (e.g. `"٦-٧"`).
    pub hour: &'static str,
    /// Ruling planet per weekday column, in [`DAY_COLUMNS`] order.
    pub rulers: [&'static str; 7],
}

/// Weekday column headers, right-to-left display order.
pub static DAY_COLUMNS: [&str; 7] = [
    "السبت",
    "الجمعة",
    "الخميس",
    "الربعاء",
    "الثلاثاء",
    "الاثنين",
    "الأحد",
];

/// Returns the column index of a weekday label, or `None`.
///
/// # Example
///
/// ```
/// use wifq_tables::day_column;
///
/// assert_eq!(day_column("السبت"), Some(0));
/// assert_eq!(day_column("الأحد"), Some(6));
/// assert_eq!(day_column("يوم"), None);
/// ```
#[must_use]
pub fn day_column(day: &str) -> Option<usize> {
    DAY_COLUMNS.iter().position(|&d| d == day)
}

/// The twelve night hours.
pub static NIGHT_HOURS: [HourRow; 12] = [
    HourRow {
        hour: "٦-٧",
        rulers: ["المريخ", "القمر", "الشمس", "الزحل", "الزحرة", "المشترى", "العطارد"],
    },
    HourRow {
        hour: "٧-٨",
        rulers: ["الشمس", "الزحل", "الزحرة", "المشترى", "العطارد", "المريخ", "القمر"],
    },
    HourRow {
        hour: "٨-٩",
        rulers: ["الزحرة", "المشترى", "العطارد", "المريخ", "القمر", "الشمس", "الزحل"],
    },
    HourRow {
        hour: "٩-١٠",
        rulers: ["العطارد", "المريخ", "القمر", "الشمس", "الزحل", "الزحرة", "المشترى"],
    },
    HourRow {
        hour: "١٠-١١",
        rulers: ["القمر", "الشمس", "الزحل", "الزحرة", "المشترى", "العطارد", "المريخ"],
    },
    HourRow {
        hour: "١١-١٢",
        rulers: ["الزحل", "الزحرة", "المشترى", "العطارد", "المريخ", "القمر", "الشمس"],
    },
    HourRow {
        hour: "١٢-١",
        rulers: ["المشترى", "العطارد", "المريخ", "القمر", "الشمس", "الزحل", "الزحرة"],
    },
    HourRow {
        hour: "١-٢",
        rulers: ["المريخ", "القمر", "الشمس", "الزحل", "الزحرة", "المشترى", "العطارد"],
    },
    HourRow {
        hour: "٢-٣",
        rulers: ["الشمس", "الزحل", "الزحرة", "المشترى", "العطارد", "المريخ", "القمر"],
    },
    HourRow {
        hour: "٣-٤",
        rulers: ["الزحرة", "المشترى", "العطارد", "المريخ", "القمر", "الشمس", "الزحل"],
    },
    HourRow {
        hour: "٤-٥",
        rulers: ["العطارد", "المريخ", "القمر", "الشمس", "الزحل", "الزحرة", "المشترى"],
    },
    HourRow {
        hour: "٥-٦",
        rulers: ["القمر", "الشمس", "الزحل", "الزحرة", "المشترى", "العطارد", "المريخ"],
    },
];

/// The twelve day hours.
pub static DAY_HOURS: [HourRow; 12] = [
    HourRow {
        hour: "٦-٧",
        rulers: ["الزحل", "الزحرة", "القمر", "العطارد", "المريخ", "القمر", "الشمس"],
    },
    HourRow {
        hour: "٧-٨",
        rulers: ["المشترى", "العطارد", "الزحل", "القمر", "الشمس", "الزحل", "الزحرة"],
    },
    HourRow {
        hour: "٨-٩",
        rulers: ["المريخ", "القمر", "الشمس", "الزحل", "الزحرة", "المشترى", "العطارد"],
    },
    HourRow {
        hour: "٩-١٠",
        rulers: ["الشمس", "الزحل", "الزحرة", "المشترى", "العطارد", "المريخ", "القمر"],
    },
    HourRow {
        hour: "١٠-١١",
        rulers: ["الزحرة", "المشترى", "العطارد", "المريخ", "القمر", "الشمس", "الزحل"],
    },
    HourRow {
        hour: "١١-١٢",
        rulers: ["العطارد", "المريخ", "القمر", "الشمس", "الزحل", "الزحرة", "المشترى"],
    },
    HourRow {
        hour: "١٢-١",
        rulers: ["القمر", "الشمس", "الزحل", "الزحرة", "المشترى", "العطارد", "المريخ"],
    },
    HourRow {
        hour: "١-٢",
        rulers: ["الزحل", "الزحرة", "المشترى", "العطارد", "المريخ", "القمر", "الشمس"],
    },
    HourRow {
        hour: "٢-٣",
        rulers: ["المشترى", "العطارد", "المريخ", "القمر", "الشمس", "الزحل", "الزحرة"],
    },
    HourRow {
        hour: "٣-٤",
        rulers: ["المريخ", "القمر", "الشمس", "الزحل", "الزحرة", "المشترى", "العطارد"],
    },
    HourRow {
        hour: "٤-٥",
        rulers: ["الشمس", "الزحل", "الزحرة", "المشترى", "العطارد", "المريخ", "القمر"],
    },
    HourRow {
        hour: "٥-٦",
        rulers: ["الزحرة", "المشترى", "العطارد", "المريخ", "القمر", "الشمس", "الزحل"],
    },
];
