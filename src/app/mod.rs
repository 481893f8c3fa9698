pub mod action;
pub mod allocator;
pub mod area;
pub mod effect;
pub mod effect_runner;
pub mod fixed_columns;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod render_schedule;
pub mod resize;
pub mod state;
pub mod throttle;
pub mod watchdog;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
