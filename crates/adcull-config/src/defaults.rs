//! Default value functions for serde deserialization.
//!
//! These functions forward to constants defined in `adcull_core::defaults`.

use adcull_core::defaults;

/// Generate default value functions that forward to adcull_core::defaults
/// constants (Copy types).
macro_rules! default_fns {
    ($($fn_name:ident => $const_name:ident : $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> $ty {
                defaults::$const_name
            }
        )*
    };
}

/// Generate default value functions that return String from &str constants.
macro_rules! default_string_fns {
    ($($fn_name:ident => $const_name:ident),* $(,)?) => {
        $(
            pub(crate) fn $fn_name() -> String {
                defaults::$const_name.to_string()
            }
        )*
    };
}

default_fns! {
    default_target_rules => DEFAULT_TARGET_RULES: usize,
    default_min_rules    => DEFAULT_MIN_RULES: usize,
    default_max_rules    => DEFAULT_MAX_RULES: usize,
}

default_string_fns! {
    default_title       => DEFAULT_TITLE,
    default_description => DEFAULT_DESCRIPTION,
    default_homepage    => DEFAULT_HOMEPAGE,
}
