/// My ternary expression handler.  While it may seem redundant, it's
/// surprisingly useful for the border-clamping tables that show up in
/// every stage of the carving pipeline, where `cargo fmt` would
/// otherwise scatter a one-line decision over five.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
