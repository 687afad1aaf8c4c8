//! Default reference data loaded into a freshly created store.

use crate::db::models::Units;

type SeedCategory = (&'static str, &'static [(&'static str, Units)]);

/// The stock taxonomy of categories and their exercises. Seeded exactly once,
/// when the repository is opened against a store with no tables.
pub(crate) const DEFAULT_TAXONOMY: &[SeedCategory] = &[
    (
        "Push",
        &[
            ("Push-ups", Units::Quantity),
            ("Declined push-ups", Units::Quantity),
            ("Elevated pike push-ups", Units::Quantity),
            ("One arm inclined push-ups", Units::Quantity),
        ],
    ),
    (
        "Pull",
        &[
            ("Chin-ups", Units::Quantity),
            ("Pull-ups", Units::Quantity),
            ("One arm hold", Units::Seconds),
        ],
    ),
    (
        "Legs",
        &[
            ("Squats", Units::Quantity),
            ("Bulgarian squats", Units::Quantity),
            ("One leg squats", Units::Quantity),
        ],
    ),
    (
        "Core",
        &[
            ("Plank", Units::Seconds),
            ("Dragon-flag", Units::Seconds),
            ("Hollow body hold", Units::Seconds),
        ],
    ),
    (
        "Dips",
        &[
            ("Dips", Units::Quantity),
            ("Single bar dips", Units::Quantity),
        ],
    ),
    (
        "Inversions",
        &[
            ("Headstand", Units::Seconds),
            ("Headstand advanced", Units::Seconds),
        ],
    ),
    (
        "Handstand",
        &[
            ("Handstand", Units::Seconds),
            ("Handstand push-ups", Units::Quantity),
            ("Tuck handstand", Units::Seconds),
            ("Straddle handstand", Units::Seconds),
            ("One arm handstand", Units::Seconds),
            ("Wall handstand shoulder taps", Units::Quantity),
        ],
    ),
    (
        "Lever",
        &[
            ("Tuck front lever rises", Units::Quantity),
            ("Advance tuck front lever rises", Units::Quantity),
            ("Straddle lever rises", Units::Quantity),
            ("Frond lever rises", Units::Quantity),
            ("Tuck front lever hold", Units::Seconds),
            ("Advance tuck front lever hold", Units::Seconds),
            ("Straddle front lever hold", Units::Seconds),
            ("Front lever hold", Units::Seconds),
        ],
    ),
];
