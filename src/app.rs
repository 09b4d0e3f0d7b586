use crate::{
    config::BootstrapConfig,
    error::BootstrapError,
    matcher::{verify_all_present, Listing, MatchResult, MatchStatus, ReportMode},
    renderer::{
        extensions::DEBUG_EXTENSION,
        instance::{GraphicsApi, InstanceRequest},
    },
    util::{join_names, VkExtensionName},
    window::Platform,
};
use ash::vk;
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// Where the app is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// No window yet. An [`App`] never reports this: it only exists once a
    /// [`Platform`] has opened its window, so this names the time before
    /// [`App::new()`] (e.g. while `WinitPlatform::new` runs).
    Uninitialized,
    WindowReady,
    InstanceReady,
    Running,
    Terminated,
}

/// Our Vulkan app: a window, and (once created) an instance.
///
/// Owns both exclusively. [`App::shutdown()`] releases them in reverse order
/// of acquisition.
pub struct App<'c, P, G: GraphicsApi> {
    platform: P,
    api: G,
    config: &'c BootstrapConfig,
    instance: Option<G::Instance>,
    stage: Stage,
}

impl<'c, P: Platform, G: GraphicsApi> App<'c, P, G> {
    /// Wrap a platform whose window already exists.
    pub fn new(platform: P, api: G, config: &'c BootstrapConfig) -> Self {
        Self {
            platform,
            api,
            config,
            instance: None,
            stage: Stage::WindowReady,
        }
    }

    /// Run the app from a ready window to a clean shutdown.
    #[tracing::instrument(level = "DEBUG", name = "App::run", skip_all)]
    pub fn run(platform: P, api: G, config: &'c BootstrapConfig) -> Result<(), BootstrapError> {
        let mut app = Self::new(platform, api, config);

        info!("Initializing app");
        app.create_instance()?;

        info!("Running event loop");
        app.run_loop();

        info!("Destroying app");
        app.shutdown();

        info!("Goodbye.");
        Ok(())
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn instance(&self) -> Option<&G::Instance> {
        self.instance.as_ref()
    }

    /// Check the required extensions (and layers, if validation is enabled)
    /// against what the host offers, then create the instance.
    ///
    /// Nothing is created unless every check passes.
    #[tracing::instrument(level = "DEBUG", name = "App::create_instance", skip_all)]
    pub fn create_instance(&mut self) -> Result<(), BootstrapError> {
        debug_assert_eq!(self.stage, Stage::WindowReady);

        let config = self.config;
        let validation = &config.validation;
        let report_mode = config.report_mode;

        let extensions = self.required_extensions()?;
        let available_extensions =
            self.api
                .available_extensions()
                .map_err(|source| BootstrapError::Query {
                    what: "available instance extensions",
                    source,
                })?;

        let result = verify_all_present(&extensions, &available_extensions, report_mode);
        print_report("Enabled Extensions:", &result, report_mode);
        if !result.all_present() {
            return Err(BootstrapError::ExtensionUnavailable {
                missing: join_names(result.missing().iter().copied()),
            });
        }

        let layers = if validation.enabled {
            let available_layers =
                self.api
                    .available_layers()
                    .map_err(|source| BootstrapError::Query {
                        what: "available instance layers",
                        source,
                    })?;

            let result = verify_all_present(&validation.layers, &available_layers, report_mode);
            print_report("\nEnabled Validation Layers:", &result, report_mode);
            if !result.all_present() {
                return Err(BootstrapError::ValidationLayerUnavailable {
                    missing: join_names(result.missing().iter().copied()),
                });
            }

            for layer in &validation.layers {
                debug!(%layer, "Enabling validation layer");
            }
            validation.layers.as_slice()
        } else {
            &[]
        };

        let request = InstanceRequest {
            application_name: &config.application_name,
            application_version: vk::make_api_version(0, 1, 0, 0),
            engine_name: &config.engine_name,
            engine_version: vk::make_api_version(0, 1, 0, 0),
            api_version: vk::API_VERSION_1_0,
            extensions: &extensions,
            layers,
            debug_messenger: validation.enabled,
        };

        let instance = self
            .api
            .create_instance(&request)
            .map_err(BootstrapError::InstanceCreationFailed)?;

        self.instance = Some(instance);
        self.stage = Stage::InstanceReady;
        Ok(())
    }

    /// Poll for events until the window is asked to close.
    #[tracing::instrument(level = "DEBUG", name = "App::run_loop", skip_all)]
    pub fn run_loop(&mut self) {
        debug_assert_eq!(self.stage, Stage::InstanceReady);
        self.stage = Stage::Running;

        while !self.platform.close_requested() {
            self.platform.poll_events();
        }
    }

    /// Release the instance, then the window, then the windowing system.
    ///
    /// Consumes the app, so the [`Stage::Terminated`] it ends in is returned
    /// rather than stored.
    #[tracing::instrument(level = "DEBUG", name = "App::shutdown", skip_all)]
    pub fn shutdown(mut self) -> Stage {
        if let Some(instance) = self.instance.take() {
            self.api.destroy_instance(instance);
        }

        self.platform.destroy_window();
        self.platform.terminate();

        Stage::Terminated
    }

    /// The windowing extensions, followed by the debug-utils extension when
    /// validation is enabled.
    fn required_extensions(&self) -> Result<Vec<VkExtensionName>, BootstrapError> {
        let mut extensions =
            self.platform
                .required_extensions()
                .map_err(|source| BootstrapError::Query {
                    what: "required window extensions",
                    source,
                })?;

        if self.config.validation.enabled {
            let debug_extension = *DEBUG_EXTENSION;
            debug!(extension = %debug_extension, "Enabling extension");
            extensions.push(debug_extension);
        }

        Ok(extensions)
    }
}

/// Print a verbose match listing to stdout. Does nothing in silent mode.
fn print_report(title: &str, result: &MatchResult<'_, VkExtensionName>, mode: ReportMode) {
    if mode == ReportMode::Silent {
        return;
    }

    if let Err(e) = write_report(&mut io::stdout().lock(), title, result) {
        warn!(error = %e, "Failed to print {}", title);
    }
}

/// Write a match listing under `title`, `[x]` marking required entries.
fn write_report<W: Write>(
    out: &mut W,
    title: &str,
    result: &MatchResult<'_, VkExtensionName>,
) -> io::Result<()> {
    writeln!(out, "{title}")?;
    for Listing { name, status } in result.listing() {
        let mark = match status {
            MatchStatus::Matched => 'x',
            MatchStatus::NotRequired => ' ',
        };
        writeln!(out, "\t [{mark}] {name}")?;
    }
    out.flush()
}
