//! Static source tables for the built-in ledger.
//!
//! Two flat tables of `(month, category, sub_category, amount)` rows. The
//! ledger concatenates them historical-first; see [crate::SpendLedger].
//! Rows with an empty sub-category collapse to `"General"` at construction.

/// One source row: month token, department, cost label, amount in GBP.
pub(crate) type SourceRow = (&'static str, &'static str, &'static str, f64);

/// Spend booked before the current financial year.
pub(crate) const HISTORICAL: &[SourceRow] = &[
    ("Jul-24", "IT", "Software Licences", 14250.0),
    ("Jul-24", "IT", "Cloud Hosting", 8900.0),
    ("Jul-24", "Facilities", "Utilities", 6100.0),
    ("Jul-24", "Facilities", "Cleaning", 2300.0),
    ("Jul-24", "Marketing", "Advertising", 9800.0),
    ("Jul-24", "Operations", "Fleet", 4470.0),
    ("Jul-24", "HR", "Recruitment", 5200.0),
    ("Aug-24", "IT", "Software Licences", 14250.0),
    ("Aug-24", "IT", "Hardware", 21300.0),
    ("Aug-24", "Facilities", "Utilities", 5880.0),
    ("Aug-24", "Marketing", "Events", 12400.0),
    ("Aug-24", "Operations", "Logistics", 7650.0),
    ("Aug-24", "HR", "Training", 3100.0),
    ("Aug-24", "Finance", "Audit Fees", 8000.0),
    ("Sep-24", "IT", "Cloud Hosting", 9150.0),
    ("Sep-24", "IT", "", 1240.0),
    ("Sep-24", "Facilities", "Maintenance", 4725.0),
    ("Sep-24", "Marketing", "Advertising", 10150.0),
    ("Sep-24", "Operations", "Fleet", 4470.0),
    ("Sep-24", "HR", "Recruitment", 6800.0),
    ("Oct-24", "IT", "Software Licences", 14990.0),
    ("Oct-24", "Facilities", "Utilities", 6840.0),
    ("Oct-24", "Facilities", "", 980.0),
    ("Oct-24", "Marketing", "Market Research", 5500.0),
    ("Oct-24", "Operations", "Logistics", 8210.0),
    ("Oct-24", "Finance", "Software Licences", 2150.0),
    ("Nov-24", "IT", "Hardware", 17600.0),
    ("Nov-24", "IT", "Cloud Hosting", 9150.0),
    ("Nov-24", "Facilities", "Maintenance", 3900.0),
    ("Nov-24", "Marketing", "Advertising", 11600.0),
    ("Nov-24", "Operations", "Fleet", 4470.0),
    ("Nov-24", "HR", "Training", 2750.0),
    ("Dec-24", "IT", "Software Licences", 14990.0),
    ("Dec-24", "Facilities", "Utilities", 7420.0),
    ("Dec-24", "Marketing", "Events", 15300.0),
    ("Dec-24", "Operations", "Logistics", 9940.0),
    ("Dec-24", "HR", "Catering", 4200.0),
    ("Dec-24", "Finance", "Audit Fees", 8000.0),
];

/// Spend booked in the current financial year.
pub(crate) const CURRENT_YEAR: &[SourceRow] = &[
    ("Jan-25", "IT", "Software Licences", 15210.0),
    ("Jan-25", "IT", "Cloud Hosting", 9430.0),
    ("Jan-25", "Facilities", "Utilities", 7980.0),
    ("Jan-25", "Facilities", "Cleaning", 2450.0),
    ("Jan-25", "Marketing", "Advertising", 8750.0),
    ("Jan-25", "Operations", "Fleet", 4585.0),
    ("Jan-25", "HR", "Recruitment", 7300.0),
    ("Jan-25", "Finance", "", 1120.0),
    ("Feb-25", "IT", "Hardware", 19850.0),
    ("Feb-25", "IT", "Cloud Hosting", 9430.0),
    ("Feb-25", "Facilities", "Utilities", 7310.0),
    ("Feb-25", "Facilities", "Maintenance", 5260.0),
    ("Feb-25", "Marketing", "Market Research", 6200.0),
    ("Feb-25", "Operations", "Logistics", 8870.0),
    ("Feb-25", "HR", "Training", 3400.0),
    ("Feb-25", "IT", "", 860.0),
    ("Apr-25", "IT", "Software Licences", 15210.0),
    ("Apr-25", "Facilities", "Utilities", 6540.0),
    ("Apr-25", "Marketing", "Advertising", 9900.0),
    ("Apr-25", "Marketing", "Events", 7150.0),
    ("Apr-25", "Operations", "Fleet", 4585.0),
    ("Apr-25", "HR", "Recruitment", 5100.0),
    ("Apr-25", "Finance", "Audit Fees", 8400.0),
    ("May-25", "IT", "Cloud Hosting", 9680.0),
    ("May-25", "IT", "Hardware", 12700.0),
    ("May-25", "Facilities", "Cleaning", 2450.0),
    ("May-25", "Marketing", "Advertising", 10300.0),
    ("May-25", "Operations", "Logistics", 9120.0),
    ("May-25", "HR", "Training", 2900.0),
    ("Jun-25", "IT", "Software Licences", 15210.0),
    ("Jun-25", "Facilities", "Utilities", 6120.0),
    ("Jun-25", "Facilities", "Maintenance", 4100.0),
    ("Jun-25", "Marketing", "Market Research", 5750.0),
    ("Jun-25", "Operations", "Fleet", 4585.0),
    ("Jun-25", "HR", "Catering", 1850.0),
    ("Jun-25", "Finance", "Software Licences", 2310.0),
];
