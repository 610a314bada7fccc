mod banner;
mod console;
mod error;
mod progress;

pub use banner::{banner_for_help, print_banner};
pub use console::Console;
pub use error::print_error;
pub use progress::Progress;

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self { interactive: false }
        } else {
            self
        }
    }
}
