use color_eyre::Result;
use tracing::debug;
use vk_triangle::{
    app::App, config::BootstrapConfig, renderer::instance::AshGraphicsApi, window::WinitPlatform,
};

fn main() -> Result<()> {
    setup_logging()?;

    let config = BootstrapConfig::from_build();
    debug!(
        validation = config.validation.enabled,
        report_mode = ?config.report_mode,
        "Loaded configuration"
    );

    let platform = WinitPlatform::new(&config.window)?;
    let api = AshGraphicsApi::load()?;

    App::run(platform, api, &config)?;

    Ok(())
}

fn setup_logging() -> Result<()> {
    use tracing_subscriber::{prelude::*, EnvFilter};
    use tracing_tree::HierarchicalLayer;

    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(HierarchicalLayer::new(4).with_bracketed_fields(true))
        .with(EnvFilter::from_default_env())
        .try_init()?;

    Ok(())
}
