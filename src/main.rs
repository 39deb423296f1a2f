#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use portfolio_site::config::SiteConfig;
    use portfolio_site::telemetry::Logger;
    use serde_json::json;

    let config = SiteConfig::from_build_env();
    Logger::new(config.log_level).info(
        "build_config",
        json!({
            "contact_endpoint": config.contact_endpoint.as_str(),
            "log_level": config.log_level.as_str(),
            "motion_scale_percent": config.motion_scale_percent,
        }),
    );
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
