use vendorscope_core::cascade::Cascade;
use vendorscope_core::config::ScanConfig;
use vendorscope_core::git::{GitCli, GitInspector};
use vendorscope_core::identify::OsvClient;

/// Assemble the production cascade: the `git` executable on `PATH` and the
/// HTTP identification client configured by `config`.
pub fn build_default_cascade(config: ScanConfig) -> vendorscope_core::Result<Cascade> {
    config.validate()?;
    let client = OsvClient::new(&config)?;
    tracing::debug!("Using identification endpoint {}", client.endpoint());

    Ok(Cascade::new(
        config,
        GitInspector::new(Box::new(GitCli::new())),
        Box::new(client),
    ))
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, level: Option<&str>) -> Option<impl Drop + use<>> {
    Some(vendorscope_core::logging::init_logging(component, level, true))
}
