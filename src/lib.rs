pub mod cards;
pub mod simulate;
pub mod strategy;
pub mod tree;

pub type Chips = i16;
pub type Utility = f64;
pub type Probability = f64;

/// Terminal logger for the binaries. Call once at startup.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
