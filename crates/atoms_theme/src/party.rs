//! Party tokens
//!
//! Electoral feeds name parties inconsistently: ballot codes ("ALP"),
//! official registered names ("Pauline Hanson's One Nation"), and assorted
//! display spellings. [`Party`] is the normalized token the atoms style
//! against - every alias the feeds carry maps onto one token, and each token
//! knows its short CSS class and chart colour.

/// Normalized party token
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Party {
    Labor,
    Coalition,
    Liberal,
    /// Merged Liberal National Party (Queensland)
    LiberalNational,
    Nationals,
    Greens,
    Independent,
    OneNation,
    UnitedAustralia,
    Katter,
    /// Centre Alliance, including its Nick Xenophon Team lineage
    CentreAlliance,
    #[default]
    Other,
}

impl Party {
    /// Normalize any feed label onto a token
    ///
    /// Unrecognized labels map to [`Party::Other`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "ALP" | "Australian Labor Party" | "Labor" => Party::Labor,
            "Coalition" => Party::Coalition,
            "LIB" | "Liberal" | "Liberal Party of Australia" => Party::Liberal,
            "LNP" | "Liberal Nationals" | "Liberal National" => Party::LiberalNational,
            "NAT" | "The Nationals" | "Nationals" | "National Party of Australia"
            | "Nationals WA" | "Country" | "National Country" | "National Country Party"
            | "Australian Country Party" => Party::Nationals,
            "GRN" | "Greens" | "Australian Greens" => Party::Greens,
            "IND" | "Independent" => Party::Independent,
            "ON" | "One Nation" => Party::OneNation,
            "UAP" | "United Australia" => Party::UnitedAustralia,
            "KAP" | "Katter's Australian" | "Katter's Australian Party" => Party::Katter,
            "CA" | "XEN" | "Centre Alliance" | "Nick Xenophon Team" => Party::CentreAlliance,
            _ => Party::Other,
        }
    }

    /// Short class token used by the atom stylesheets
    pub fn css_class(&self) -> &'static str {
        match self {
            Party::Labor => "alp",
            Party::Coalition => "coal",
            Party::Liberal => "lib",
            Party::LiberalNational => "np",
            Party::Nationals => "nat",
            Party::Greens => "grn",
            Party::Independent => "ind",
            Party::OneNation => "on",
            Party::UnitedAustralia => "uap",
            Party::Katter => "kap",
            Party::CentreAlliance => "ca",
            Party::Other => "others",
        }
    }

    /// Chart colour for this party
    pub fn hex(&self) -> &'static str {
        match self {
            Party::Labor => "#d40000",
            Party::Coalition | Party::Liberal => "#005689",
            Party::LiberalNational => "#197caa",
            Party::Nationals => "#197caa",
            Party::Greens => "#008800",
            Party::Independent => "#982ea6",
            Party::OneNation => "#ec17ea",
            Party::UnitedAustralia => "#d9d337",
            Party::Katter => "#ff9b0b",
            Party::CentreAlliance => "#e6711b",
            Party::Other => "#000000",
        }
    }
}

/// Display name for a full registered party name
///
/// The ticker shows short names; anything not in the table passes through
/// unchanged.
pub fn short_name(full: &str) -> &str {
    match full {
        "Australian Labor Party" => "Labor",
        "Liberal National Party of Queensland" => "LNP",
        "The Nationals" => "National",
        "The Greens (VIC)" => "Greens",
        "Pauline Hanson's One Nation" => "One Nation",
        "United Australia Party" => "UAP",
        "Katter's Australian Party (KAP)" => "Katter Party",
        other => other,
    }
}
