//! rollcall main entrypoint.

use rollcall::run;
use rollcall::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
