//! Boot sequence and filesystem (re)loading.
//!
//! The basic tree is mounted first so the shell is usable offline; the
//! GitHub listing then replaces it when it arrives.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::{
    APP_NAME, APP_TAGLINE, APP_VERSION, ASCII_BANNER, BOOT_MESSAGES, GITHUB_USER, boot_delays,
};
use crate::core::{Interpreter, VirtualFs, build_basic_file_system, build_file_system};
use crate::models::{OutputLine, ScreenMode};
use crate::utils::dom::now_secs;
use crate::utils::format::format_elapsed;

/// Fetch repositories and build the matching tree.
///
/// Falls back to the basic tree when nothing could be fetched; the second
/// value is the number of repositories mounted.
async fn load_file_system(ctx: AppContext) -> (VirtualFs, usize) {
    let listings = ctx.github.fetch_all().await;
    let now = now_secs();
    if listings.is_empty() {
        (build_basic_file_system(now), 0)
    } else {
        (build_file_system(&listings, now), listings.len())
    }
}

/// Run the boot sequence once, ending in terminal mode.
pub fn run(ctx: AppContext) {
    spawn_local(async move {
        let start = js_sys::Date::now();
        let elapsed = || format_elapsed(js_sys::Date::now() - start);

        ctx.terminal.push_output(OutputLine::notice(format!(
            "{} Booting {} v{}",
            elapsed(),
            APP_NAME,
            APP_VERSION
        )));
        TimeoutFuture::new(boot_delays::KERNEL_INIT).await;

        for message in BOOT_MESSAGES {
            ctx.terminal
                .push_output(OutputLine::stdout(format!("{} {}", elapsed(), message)));
            TimeoutFuture::new(boot_delays::SUBSYSTEM).await;
        }

        ctx.set_shell(Interpreter::new(build_basic_file_system(now_secs())));

        ctx.terminal.push_output(OutputLine::stdout(format!(
            "{} Fetching repositories for {}...",
            elapsed(),
            GITHUB_USER
        )));
        let (fs, repos) = load_file_system(ctx).await;
        if repos > 0 {
            ctx.set_shell(Interpreter::new(fs));
            ctx.terminal.push_output(OutputLine::status(format!(
                "{} Mounted {} repositories",
                elapsed(),
                repos
            )));
        } else {
            ctx.terminal.push_output(OutputLine::stderr(format!(
                "{} GitHub unavailable, running with local profile only",
                elapsed()
            )));
            ctx.terminal
                .push_output(OutputLine::notice("Try the reload command to retry"));
        }

        ctx.terminal.push_output(OutputLine::status(format!(
            "{} Boot complete. Welcome to {}",
            elapsed(),
            APP_NAME
        )));
        TimeoutFuture::new(boot_delays::BOOT_COMPLETE).await;

        ctx.terminal.push_lines(vec![
            OutputLine::blank(),
            OutputLine::banner(ASCII_BANNER),
            OutputLine::blank(),
            OutputLine::notice(APP_TAGLINE),
            OutputLine::blank(),
            OutputLine::stdout("Type 'help' for available commands."),
            OutputLine::blank(),
        ]);

        ctx.terminal.screen_mode.set(ScreenMode::Terminal);
    });
}

/// Rebuild the tree from GitHub, bypassing the session cache.
///
/// The interpreter is re-created on the new tree, so the current directory
/// returns home and command history starts over.
pub fn reload(ctx: AppContext) {
    ctx.terminal.screen_mode.set(ScreenMode::Busy);
    spawn_local(async move {
        ctx.github.clear_cache();
        let (fs, repos) = load_file_system(ctx).await;
        ctx.set_shell(Interpreter::new(fs));

        if repos > 0 {
            ctx.terminal.push_output(OutputLine::status(format!(
                "Filesystem reloaded: {} repositories",
                repos
            )));
        } else {
            ctx.terminal.push_output(OutputLine::stderr(
                "GitHub unavailable, running with local profile only",
            ));
        }
        ctx.terminal.screen_mode.set(ScreenMode::Terminal);
    });
}
