mod context;
mod flags;
mod parse;
mod prompts;
mod quiet;

pub use context::{Context, Stop};
pub use flags::CliFlags;
pub use parse::parse;

/// Non-interactive entry point. Exits 1 on any failure.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            prompts::error("Try --help for usage.");
            std::process::exit(1);
        }
    };

    match ctx.run() {
        Ok(()) | Err(Stop::Done) => {}
        Err(Stop::Failed(msg)) => {
            prompts::error(&msg);
            std::process::exit(1);
        }
    }
}
