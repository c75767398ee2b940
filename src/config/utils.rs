use crate::DEFAULT_MAX_FEATURES;

// functions serialized_type, max_features, and stemmer_language are used to provide defaults in
// the event that a lib-ml-config.toml is found but one or more of the values below aren't listed
// in the config.  This way, we get the correct defaults upon Deserialization

/// default Configuration type for use in json output
pub(super) fn serialized_type() -> String {
    String::from("configuration")
}

/// default vocabulary cap
pub(super) fn max_features() -> usize {
    DEFAULT_MAX_FEATURES
}

/// default stemmer language
pub(super) fn stemmer_language() -> String {
    String::from("english")
}

/// map a verbosity level onto a RUST_LOG filter string; `None` leaves logging untouched
pub fn verbosity_filter(verbosity: u8) -> Option<&'static str> {
    match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("lib_ml=debug,info"),
        _ => Some("lib_ml=trace,info"),
    }
}
