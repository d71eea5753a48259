//! Adapters — concrete implementations of the controller's port traits.
//!
//! | Adapter    | Implements             | Connects to                    |
//! |------------|------------------------|--------------------------------|
//! | `hardware` | LightPort, SensorPort  | `embedded-hal` GPIO pins       |
//! |            | DelayPort              | `embedded-hal` `DelayNs`       |
//! | `log_sink` | EventSink              | `log` facade / serial console  |

pub mod hardware;
pub mod log_sink;
