// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use tree_lens::app::{self, paths, Flags};

const USAGE: &str = "\
Usage: tree_lens [OPTIONS] [PATH]

PATH is a folder to browse, or an image to open inside its folder.

Options:
  --lang <LANG>         UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("Ignoring --config-dir: {err}");
            None
        });
    let path = args.finish().into_iter().next().map(PathBuf::from);

    paths::init_cli_overrides(config_dir);
    app::run(Flags { lang, path })
}
