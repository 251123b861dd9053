// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

macro_rules! lpm_log {
    ($log:expr, $module:expr, $level:ident, $msg:expr; $($key:expr => $value:expr),*) => {
        slog::$level!($log,
            $msg;
            "component" => crate::COMPONENT_LPM,
            "module" => $module,
            $($key => $value),*
        )
    };
    ($log:expr, $module:expr, $level:ident, $msg:expr, $($args:expr),*; $($key:expr => $value:expr),*) => {
        slog::$level!($log,
            $msg, $($args),*;
            "component" => crate::COMPONENT_LPM,
            "module" => $module,
            $($key => $value),*
        )
    };
    ($log:expr, $module:expr, $level:ident, $msg:expr) => {
        slog::$level!($log,
            $msg;
            "component" => crate::COMPONENT_LPM,
            "module" => $module,
        )
    };
    ($log:expr, $module:expr, $level:ident, $msg:expr, $($args:expr),*) => {
        slog::$level!($log,
            $msg, $($args),*;
            "component" => crate::COMPONENT_LPM,
            "module" => $module,
        )
    };
}

macro_rules! fib_log {
    ($self:expr, $level:ident, $($rest:tt)+) => {
        crate::log::lpm_log!($self.log, crate::MOD_FIB, $level, $($rest)+)
    };
}

macro_rules! config_log {
    ($log:expr, $level:ident, $($rest:tt)+) => {
        crate::log::lpm_log!($log, crate::MOD_CONFIG, $level, $($rest)+)
    };
}

pub(crate) use config_log;
pub(crate) use fib_log;
pub(crate) use lpm_log;
