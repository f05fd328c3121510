//! CLI output formatting
//!
//! Terminal display for the portfolio page and the live typewriter line.

pub mod display;

pub use display::animate;
pub use display::print_page;
pub use display::status;
pub use display::LiveLine;
