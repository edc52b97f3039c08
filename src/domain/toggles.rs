//! Optional annotator flags.

use serde::Deserialize;

/// An optional annotator flag that is off unless enabled in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotatorToggle {
    /// Show build output and errors.
    RedirectBuildOutput,
    /// Incremental root injection.
    ChainedInjection,
    /// Disable the annotator cache.
    DisableCache,
    /// Disable the outer loop.
    DisableOuterLoop,
    /// Disable parallel processing.
    DisableParallelProcessing,
}

impl AnnotatorToggle {
    /// All toggles, in the order their flags are appended.
    pub const ALL: [AnnotatorToggle; 5] = [
        AnnotatorToggle::RedirectBuildOutput,
        AnnotatorToggle::ChainedInjection,
        AnnotatorToggle::DisableCache,
        AnnotatorToggle::DisableOuterLoop,
        AnnotatorToggle::DisableParallelProcessing,
    ];

    pub fn flag(self) -> &'static str {
        match self {
            AnnotatorToggle::RedirectBuildOutput => "-rboserr",
            AnnotatorToggle::ChainedInjection => "-ch",
            AnnotatorToggle::DisableCache => "-dc",
            AnnotatorToggle::DisableOuterLoop => "-dol",
            AnnotatorToggle::DisableParallelProcessing => "--disable-parallel-processing",
        }
    }
}

/// Switches for the optional flags. Everything defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotatorToggles {
    pub redirect_build_output: bool,
    pub chained_injection: bool,
    pub disable_cache: bool,
    pub disable_outer_loop: bool,
    pub disable_parallel_processing: bool,
}

impl AnnotatorToggles {
    pub fn is_enabled(&self, toggle: AnnotatorToggle) -> bool {
        match toggle {
            AnnotatorToggle::RedirectBuildOutput => self.redirect_build_output,
            AnnotatorToggle::ChainedInjection => self.chained_injection,
            AnnotatorToggle::DisableCache => self.disable_cache,
            AnnotatorToggle::DisableOuterLoop => self.disable_outer_loop,
            AnnotatorToggle::DisableParallelProcessing => self.disable_parallel_processing,
        }
    }

    pub fn set(&mut self, toggle: AnnotatorToggle, enabled: bool) {
        let slot = match toggle {
            AnnotatorToggle::RedirectBuildOutput => &mut self.redirect_build_output,
            AnnotatorToggle::ChainedInjection => &mut self.chained_injection,
            AnnotatorToggle::DisableCache => &mut self.disable_cache,
            AnnotatorToggle::DisableOuterLoop => &mut self.disable_outer_loop,
            AnnotatorToggle::DisableParallelProcessing => &mut self.disable_parallel_processing,
        };
        *slot = enabled;
    }

    /// Enabled toggles in flag order.
    pub fn enabled(&self) -> impl Iterator<Item = AnnotatorToggle> + '_ {
        AnnotatorToggle::ALL.into_iter().filter(|toggle| self.is_enabled(*toggle))
    }
}
