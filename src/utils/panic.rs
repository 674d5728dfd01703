use std::panic;

/// Routes panic messages through tracing before the default hook runs, so
/// they end up in the same place as the rest of the logs.
pub fn set_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        error!("{info}");
        default_hook(info);
    }));
}
