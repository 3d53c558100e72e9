/// Runs `$block`, logs its wall-clock duration at debug level and returns its
/// result.
#[macro_export]
macro_rules! timer_debug {
    ($msg:expr, $block:expr) => {{
        let now = jiff::Timestamp::now();
        let result = $block;
        let elapsed = jiff::Timestamp::now().duration_since(now);

        tracing::debug!("{}: took {:?}", $msg, elapsed);

        result
    }};
}
