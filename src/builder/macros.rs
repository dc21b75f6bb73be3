//! Macros for ergonomic configuration construction.

/// Declare a configuration inline.
///
/// Identifiers are used verbatim as state and event names. Expands to
/// `Result<Configuration, BuildError>` built through
/// [`ConfigBuilder`](crate::builder::ConfigBuilder).
///
/// # Example
///
/// ```
/// use waypoint::fsm_config;
///
/// let config = fsm_config! {
///     initial: idle,
///     states: {
///         idle: { start => running },
///         running: { pause => idle, finish => done },
///         done: {},
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.transition("running", "finish"), Some("done"));
/// assert_eq!(config.state_ids(None), vec!["idle", "running", "done"]);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident : {
                    $( $event:ident => $target:ident ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {{
        let builder = $crate::builder::ConfigBuilder::new().initial(stringify!($initial));
        $(
            let builder = builder.state(stringify!($state));
            $(
                let builder = builder.transition(
                    stringify!($state),
                    stringify!($event),
                    stringify!($target),
                );
            )*
        )*
        builder.build()
    }};
}
