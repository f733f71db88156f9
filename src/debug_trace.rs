use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "debug_trace")] {
        macro_rules! trace {
            ( @dedup $($args:tt)+ ) => {
                log::trace!(target: "atomic_markup::dedup", $($args)+)
            };

            ( @substitution $($args:tt)+ ) => {
                log::trace!(target: "atomic_markup::substitution", $($args)+)
            };
        }
    } else {
        // NOTE: arguments are still type checked, so toggling the
        // feature can't break the build.
        macro_rules! trace {
            ( @dedup $($args:tt)+ ) => {
                if false {
                    let _ = format_args!($($args)+);
                }
            };

            ( @substitution $($args:tt)+ ) => {
                if false {
                    let _ = format_args!($($args)+);
                }
            };
        }
    }
}
