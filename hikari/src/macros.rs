// Library logging goes through these so everything shares the crate's target

#[macro_export]
macro_rules! hikari_error {
    ($($arg:tt)+) => {
        ::log::error!(target: "hikari", $($arg)+)
    };
}

#[macro_export]
macro_rules! hikari_warn {
    ($($arg:tt)+) => {
        ::log::warn!(target: "hikari", $($arg)+)
    };
}

#[macro_export]
macro_rules! hikari_info {
    ($($arg:tt)+) => {
        ::log::info!(target: "hikari", $($arg)+)
    };
}

#[macro_export]
macro_rules! hikari_debug {
    ($($arg:tt)+) => {
        ::log::debug!(target: "hikari", $($arg)+)
    };
}

#[macro_export]
macro_rules! expect {
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(t) => t,
            Err(why) => {
                $crate::hikari_error!("{}: {}", $msg, why);
                panic!("{}: {:?}", $msg, why);
            }
        }
    };
}
