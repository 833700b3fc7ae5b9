#[cfg(target_arch = "wasm32")]
fn main() {
    // Initialize logging; tracing events are forwarded through `log`
    wasm_logger::init(wasm_logger::Config::default());

    dioxus::launch(storefront::ui_dioxus::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use storefront::config::StorefrontConfig;

    tracing_subscriber::fmt::init();

    // Validate configuration so a broken file fails here rather than in the browser
    let config = StorefrontConfig::load()?;
    tracing::info!(
        api_base_url = %config.api_base_url,
        "The storefront UI runs in the browser; serve it with `dx serve --platform web`"
    );

    Ok(())
}
