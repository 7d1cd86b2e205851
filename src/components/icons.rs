//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap icons so components never name an
//! icon set directly.

use icondata::Icon;

pub const WALLET: Icon = icondata::BsWallet2;
pub const DISCONNECT: Icon = icondata::BsPower;
pub const HOME: Icon = icondata::BsHouseFill;
pub const COLLECTION: Icon = icondata::BsGrid;
pub const CREATE: Icon = icondata::BsPlusLg;
pub const BACK: Icon = icondata::BsArrowLeft;
pub const CLOSE: Icon = icondata::BsXLg;
pub const SOULBOUND: Icon = icondata::BsShieldLock;
pub const EXTERNAL_LINK: Icon = icondata::BsBoxArrowUpRight;
pub const WARNING: Icon = icondata::BsExclamationTriangleFill;
pub const SUCCESS: Icon = icondata::BsCheckCircleFill;
pub const PENDING: Icon = icondata::BsHourglassSplit;
pub const NETWORK: Icon = icondata::BsGlobe;
pub const RELOAD: Icon = icondata::BsArrowClockwise;
