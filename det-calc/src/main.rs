// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use det_calc::DetCalcApp;
use log::LevelFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    // stdout carries the prompts, so diagnostics stay on stderr.
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("DET_CALC_LOG", "warn"))
        .init();

    let app = DetCalcApp::parse();
    app.exec()
}
