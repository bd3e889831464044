//! Disk scheduling domain models.
//!
//! Provides the core data types for describing a seek simulation and
//! its outcome. All values are plain integers; nothing here touches a
//! real device.
//!
//! # Domain Mappings
//!
//! | u-diskseek | Disk | Elevator | Tape |
//! |------------|------|----------|------|
//! | Track | Cylinder | Floor | Block offset |
//! | Head | Arm position | Car position | Read head |
//! | Direction | Sweep direction | Travel direction | Wind direction |
//! | ScheduleResult | Seek trace | Stop order | Access trace |

mod algorithm;
mod direction;
mod result;
mod track;

pub use algorithm::Algorithm;
pub use direction::Direction;
pub use result::ScheduleResult;
pub use track::{seek_distance, Track};
